#![allow(non_snake_case)]
use crate::algebra::*;

// Native triple loop products.  β == 0 overwrites the destination
// without reading it, so uninitialized or non-finite contents do not
// propagate, as in BLAS.

impl<S, T> MultiplyGEMM for DenseStorageMatrix<S, T>
where
    S: AsRef<[T]> + AsMut<[T]>,
    T: FloatT,
{
    type T = T;
    fn mul<MATA, MATB>(&mut self, A: &MATA, B: &MATB, α: T, β: T) -> &Self
    where
        MATA: DenseMatrix<T>,
        MATB: DenseMatrix<T>,
    {
        assert!(A.ncols() == B.nrows() && self.nrows() == A.nrows() && self.ncols() == B.ncols());

        let (m, n) = self.size();
        let k = A.ncols();

        for c in 0..n {
            for r in 0..m {
                let mut s = T::zero();
                for i in 0..k {
                    s += A[(r, i)] * B[(i, c)];
                }
                self[(r, c)] = if β == T::zero() {
                    α * s
                } else {
                    α * s + β * self[(r, c)]
                };
            }
        }
        self
    }
}

fn _gemv<M, T>(A: &M, y: &mut [T], x: &[T], α: T, β: T)
where
    M: DenseMatrix<T>,
    T: FloatT,
{
    let (m, n) = A.size();
    assert!(n == x.len() && m == y.len());

    for (r, yr) in y.iter_mut().enumerate() {
        let mut s = T::zero();
        for (c, &xc) in x.iter().enumerate() {
            s += A[(r, c)] * xc;
        }
        *yr = if β == T::zero() { α * s } else { α * s + β * *yr };
    }
}

impl<S, T> MultiplyGEMV for DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
    T: FloatT,
{
    type T = T;
    fn gemv(&self, y: &mut [T], x: &[T], α: T, β: T) {
        _gemv(self, y, x, α, β);
    }
}

impl<S, T> MultiplyGEMV for Adjoint<'_, DenseStorageMatrix<S, T>>
where
    S: AsRef<[T]>,
    T: FloatT,
{
    type T = T;
    fn gemv(&self, y: &mut [T], x: &[T], α: T, β: T) {
        _gemv(self, y, x, α, β);
    }
}
