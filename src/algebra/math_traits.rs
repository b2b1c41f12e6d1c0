#![allow(non_snake_case)]
use super::{DenseMatrix, FloatT};

// All internal math for the factorizations should go
// through these core traits, which are implemented generically
// for floats of type FloatT.

/// Vector operations on slices of [`FloatT`](crate::algebra::FloatT)

pub trait VectorMath {
    type T;

    /// Copy values from `src` to `self`
    fn copy_from(&mut self, src: &Self) -> &mut Self;

    /// Apply an elementwise operation on a vector.
    fn scalarop(&mut self, op: impl Fn(Self::T) -> Self::T) -> &mut Self;

    /// set all elements to the same value
    fn set(&mut self, c: Self::T) -> &mut Self;

    /// Elementwise scaling.
    fn scale(&mut self, c: Self::T) -> &mut Self;

    /// Elementwise reciprocal.
    fn recip(&mut self) -> &mut Self;

    /// Elementwise scaling by another vector. Produces `self[i] = self[i] * y[i]`
    fn hadamard(&mut self, y: &Self) -> &mut Self;

    /// Normalize, returning the norm.  Do nothing if norm == 0.
    fn normalize(&mut self) -> Self::T;

    /// Unit vector in the direction of `self`, as a new vector.
    fn unit(&self) -> Vec<Self::T>;

    /// Dot product
    fn dot(&self, y: &Self) -> Self::T;

    /// Sum of elements.
    fn sum(&self) -> Self::T;

    /// Sum of squares of the elements, i.e. the squared 2-norm
    fn sumsq(&self) -> Self::T;

    /// 2-norm
    fn norm(&self) -> Self::T;

    /// Infinity norm
    fn norm_inf(&self) -> Self::T;

    /// One norm
    fn norm_one(&self) -> Self::T;

    /// Infinity norm of the difference `self - b`
    fn norm_inf_diff(&self, b: &Self) -> Self::T;

    /// Minimum value in vector
    fn minimum(&self) -> Self::T;

    /// Maximum value in vector
    fn maximum(&self) -> Self::T;

    /// Checks if all elements are finite, i.e. no Infs or NaNs
    fn is_finite(&self) -> bool;

    /// Checks if any element is NaN
    fn has_nan(&self) -> bool;

    //blas-like vector ops
    //--------------------

    /// BLAS-like shift and scale in place.  Produces `self = a*x+b*self`
    fn axpby(&mut self, a: Self::T, x: &Self, b: Self::T) -> &mut Self;
}

/// Operations on dense matrices of [`FloatT`](crate::algebra::FloatT)

pub trait MatrixMath {
    type T: FloatT;

    /// Elementwise scaling
    fn scale(&mut self, c: Self::T);

    /// Frobenius norm, i.e. the root of the sum of squares
    fn norm_fro(&self) -> Self::T;

    /// Infinity norm, i.e. the maximum over rows of the absolute row sums
    fn norm_inf(&self) -> Self::T;

    /// One norm, i.e. the maximum over columns of the absolute column sums
    fn norm_one(&self) -> Self::T;

    /// Sum of the diagonal entries.
    ///
    /// # Panics
    /// Panics if the matrix is not square.
    fn trace(&self) -> Self::T;

    /// Replace `self` with `(self + self^T)/2`.
    ///
    /// # Panics
    /// Panics if the matrix is not square.
    fn symmetrize(&mut self);

    /// Minimum over all entries
    fn minimum(&self) -> Self::T;

    /// Maximum over all entries
    fn maximum(&self) -> Self::T;

    /// Columnwise minimum, assigned into `mins`
    fn col_minimums(&self, mins: &mut [Self::T]);

    /// Columnwise maximum, assigned into `maxs`
    fn col_maximums(&self, maxs: &mut [Self::T]);

    /// Rowwise minimum, assigned into `mins`
    fn row_minimums(&self, mins: &mut [Self::T]);

    /// Rowwise maximum, assigned into `maxs`
    fn row_maximums(&self, maxs: &mut [Self::T]);

    /// Checks if all entries are finite
    fn is_finite(&self) -> bool;
}

/// General matrix-matrix multiply.  Produces `self = α*A*B + β*self`
pub trait MultiplyGEMM {
    type T;
    fn mul<MATA, MATB>(&mut self, A: &MATA, B: &MATB, α: Self::T, β: Self::T) -> &Self
    where
        MATA: DenseMatrix<Self::T>,
        MATB: DenseMatrix<Self::T>;
}

/// General matrix-vector multiply.  Produces `y = α*self*x + β*y`
pub trait MultiplyGEMV {
    type T;
    fn gemv(&self, y: &mut [Self::T], x: &[Self::T], α: Self::T, β: Self::T);
}
