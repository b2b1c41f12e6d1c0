#![allow(non_snake_case)]
// Triangular substitution kernels shared by the LDLᵀ engines.
// `L` holds a unit lower triangular factor below its diagonal.
// The diagonal and upper triangle of `L` are never read.

use crate::algebra::{DenseMatrix, FloatT};
use itertools::izip;

/// Solves `L*y = x` in place, with `L` unit lower triangular
pub(crate) fn forward_substitute_unit<M, T>(L: &M, x: &mut [T])
where
    M: DenseMatrix<T>,
    T: FloatT,
{
    let n = x.len();
    debug_assert_eq!(L.nrows(), n);
    for i in 1..n {
        let mut val = x[i];
        for j in 0..i {
            val -= L[(i, j)] * x[j];
        }
        x[i] = val;
    }
}

/// Solves `Lᵀ*y = x` in place, with `L` unit lower triangular
pub(crate) fn back_substitute_unit_transpose<M, T>(L: &M, x: &mut [T])
where
    M: DenseMatrix<T>,
    T: FloatT,
{
    let n = x.len();
    debug_assert_eq!(L.nrows(), n);
    for i in (0..n).rev() {
        let mut val = x[i];
        for k in (i + 1)..n {
            val -= L[(k, i)] * x[k];
        }
        x[i] = val;
    }
}

/// `Σ a[i]*b[i]*c[i]`
#[inline]
pub(crate) fn dot3<T: FloatT>(a: &[T], b: &[T], c: &[T]) -> T {
    izip!(a, b, c).fold(T::zero(), |acc, (&a, &b, &c)| acc + a * b * c)
}
