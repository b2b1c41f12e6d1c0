#![allow(non_snake_case)]
use crate::algebra::*;

impl<S, T> MatrixMath for DenseStorageMatrix<S, T>
where
    S: AsRef<[T]> + AsMut<[T]>,
    T: FloatT,
{
    type T = T;

    fn scale(&mut self, c: T) {
        self.data_mut().scale(c);
    }

    fn norm_fro(&self) -> T {
        self.data().norm()
    }

    fn norm_inf(&self) -> T {
        let mut out = T::zero();
        for r in 0..self.nrows() {
            let mut s = T::zero();
            for c in 0..self.ncols() {
                s += T::abs(self[(r, c)]);
            }
            out = T::max(out, s);
        }
        out
    }

    fn norm_one(&self) -> T {
        (0..self.ncols())
            .map(|c| self.col_slice(c).norm_one())
            .fold(T::zero(), T::max)
    }

    fn trace(&self) -> T {
        assert!(self.is_square());
        (0..self.nrows()).fold(T::zero(), |acc, i| acc + self[(i, i)])
    }

    fn symmetrize(&mut self) {
        assert!(self.is_square());
        let half: T = (0.5).as_T();
        for c in 1..self.ncols() {
            for r in 0..c {
                let v = (self[(r, c)] + self[(c, r)]) * half;
                self[(r, c)] = v;
                self[(c, r)] = v;
            }
        }
    }

    fn minimum(&self) -> T {
        self.data().minimum()
    }

    fn maximum(&self) -> T {
        self.data().maximum()
    }

    fn col_minimums(&self, mins: &mut [T]) {
        assert_eq!(mins.len(), self.ncols());
        for (c, m) in mins.iter_mut().enumerate() {
            *m = self.col_slice(c).minimum();
        }
    }

    fn col_maximums(&self, maxs: &mut [T]) {
        assert_eq!(maxs.len(), self.ncols());
        for (c, m) in maxs.iter_mut().enumerate() {
            *m = self.col_slice(c).maximum();
        }
    }

    fn row_minimums(&self, mins: &mut [T]) {
        assert_eq!(mins.len(), self.nrows());
        mins.set(T::infinity());
        for c in 0..self.ncols() {
            for (m, &v) in mins.iter_mut().zip(self.col_slice(c)) {
                *m = T::min(*m, v);
            }
        }
    }

    fn row_maximums(&self, maxs: &mut [T]) {
        assert_eq!(maxs.len(), self.nrows());
        maxs.set(-T::infinity());
        for c in 0..self.ncols() {
            for (m, &v) in maxs.iter_mut().zip(self.col_slice(c)) {
                *m = T::max(*m, v);
            }
        }
    }

    fn is_finite(&self) -> bool {
        self.data().is_finite()
    }
}

// cap on Taylor terms.  Only reached for non-finite input,
// since the scaled matrix has norm at most 1.
const EXP_MAX_TERMS: usize = 64;

impl<S, T> DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
    T: FloatT,
{
    /// Matrix exponential by scaling and squaring.
    ///
    /// The matrix is scaled by `2^-s` so that its ∞-norm is at most one,
    /// exponentiated by Taylor series until a further term no longer
    /// changes the sum, and then squared `s` times.
    ///
    /// # Panics
    /// Panics if the matrix is not square.
    pub fn exp(&self) -> Matrix<T> {
        assert!(self.is_square());
        let n = self.nrows();

        let mut M = Matrix::from_dense(self);
        let l = M.norm_inf().log2().ceil();
        let s = if l > T::zero() {
            l.to_i32().unwrap_or(0)
        } else {
            0
        };
        M.scale(T::powi((2.0).as_T(), -s));

        // Taylor series
        let mut result = Matrix::<T>::zeros((n, n));
        let mut f = Matrix::<T>::identity(n);
        let mut next = Matrix::<T>::zeros((n, n));
        let mut k = T::one();
        for _ in 0..EXP_MAX_TERMS {
            let changed = result
                .data()
                .iter()
                .zip(f.data())
                .any(|(&r, &fi)| (r + fi) - r != T::zero());
            if !changed {
                break;
            }
            result.data_mut().axpby(T::one(), f.data(), T::one());
            next.mul(&M, &f, k.recip(), T::zero());
            std::mem::swap(&mut f, &mut next);
            k += T::one();
        }

        // squaring
        for _ in 0..s {
            next.mul(&result, &result, T::one(), T::zero());
            std::mem::swap(&mut result, &mut next);
        }
        result
    }
}

/// Skew symmetric matrix `M` such that `M*w = v × w` for every 3-vector `w`
///
/// # Panics
/// Panics if `v` does not have length 3.
pub fn cross_product_matrix<T: FloatT>(v: &[T]) -> Matrix<T> {
    assert_eq!(v.len(), 3);
    let z = T::zero();
    Matrix::from(&[
        [z, -v[2], v[1]], //
        [v[2], z, -v[0]],
        [-v[1], v[0], z],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_matrix() -> Matrix<f64> {
        Matrix::from(&[
            [1., -2., 3.], //
            [-4., 5., 0.],
            [2., 1., -7.],
        ])
    }

    #[test]
    fn test_norms() {
        let A = test_matrix();
        assert_eq!(A.norm_inf(), 10.0);
        assert_eq!(A.norm_one(), 10.0);
        assert!((A.norm_fro() - f64::sqrt(109.0)).abs() < 1e-12);
        assert_eq!(A.trace(), -1.0);
        assert_eq!(A.minimum(), -7.0);
        assert_eq!(A.maximum(), 5.0);
        assert!(MatrixMath::is_finite(&A));
    }

    #[test]
    fn test_row_col_extrema() {
        let A = test_matrix();
        let mut v = [0.0; 3];
        A.col_minimums(&mut v);
        assert_eq!(v, [-4., -2., -7.]);
        A.col_maximums(&mut v);
        assert_eq!(v, [2., 5., 3.]);
        A.row_minimums(&mut v);
        assert_eq!(v, [-2., -4., -7.]);
        A.row_maximums(&mut v);
        assert_eq!(v, [3., 5., 2.]);
    }

    #[test]
    fn test_symmetrize() {
        let mut A = test_matrix();
        A.symmetrize();
        assert_eq!(A[(0, 1)], -3.0);
        assert_eq!(A[(1, 0)], -3.0);
        assert_eq!(A[(0, 2)], 2.5);
        assert_eq!(A[(2, 1)], 0.5);
        assert_eq!(A.trace(), -1.0);
    }

    #[test]
    fn test_exp() {
        // diagonal
        let mut A = Matrix::<f64>::zeros((2, 2));
        A[(0, 0)] = 1.0;
        A[(1, 1)] = -3.0;
        let E = A.exp();
        assert!((E[(0, 0)] - 1f64.exp()).abs() < 1e-12);
        assert!((E[(1, 1)] - (-3f64).exp()).abs() < 1e-12);
        assert!(E[(0, 1)].abs() < 1e-15);

        // plane rotation
        let θ: f64 = 2.5;
        let R = Matrix::from(&[[0., -θ], [θ, 0.]]).exp();
        let expected = Matrix::from(&[[θ.cos(), -θ.sin()], [θ.sin(), θ.cos()]]);
        assert!(R.data().norm_inf_diff(expected.data()) < 1e-12);

        // zero matrix
        let Z = Matrix::<f64>::zeros((3, 3)).exp();
        assert_eq!(Z, Matrix::identity(3));
    }

    #[test]
    fn test_cross_product_matrix() {
        let v = [1.0, 2.0, 3.0];
        let w = [-1.0, 0.5, 4.0];
        let M = cross_product_matrix(&v);

        let mut y = [0.0; 3];
        M.gemv(&mut y, &w, 1.0, 0.0);
        let cross = [
            v[1] * w[2] - v[2] * w[1],
            v[2] * w[0] - v[0] * w[2],
            v[0] * w[1] - v[1] * w[0],
        ];
        assert!(y.norm_inf_diff(&cross) < 1e-15);
    }
}
