//! Dense symmetric factorization engines.
//!
//! Three strategies share the [`FactorSymmetric`] capability:
//!
//! * [`LDLEngine`] : `A = L·D·Lᵀ` with no pivot check
//! * [`RankRevealingEngine`] : `L·D·Lᵀ` that stops at the first non-positive
//!   pivot and supports rank-one updates
//! * [`CholeskyEngine`] : classical `A = L·Lᵀ` delegated to a [`CholeskyBackend`]
//!
//! [`SymmetricFactorization`] selects between them at run time from
//! [`FactorSettings`].

#![allow(non_snake_case)]

use crate::algebra::*;
use enum_dispatch::*;

mod backend;
mod cholesky;
mod combine;
mod kernels;
mod ldl;
mod rankldl;
mod settings;
mod status;
mod supported;
mod update;

pub use backend::*;
pub use cholesky::*;
pub use combine::*;
pub use ldl::*;
pub use rankldl::*;
pub use settings::*;
pub use status::*;
pub use supported::*;

/// Common capability of the dense symmetric factorization engines.
///
/// Engines are created unfactored.  Reads on an engine that was never
/// factored operate on zeroed buffers and give defined but meaningless
/// results.  A later call to `factor` discards all previous state.
#[enum_dispatch]
pub trait FactorSymmetric<T: FloatT> {
    /// dimension of the matrices accepted by `factor`
    fn dim(&self) -> usize;

    /// Factors the symmetric matrix `A`.  Only the lower triangle
    /// of `A` is read.
    ///
    /// Numerical degeneracy is reported through the returned
    /// status, not as an error.
    fn factor<M: DenseMatrix<T>>(&mut self, A: &M) -> Result<FactorStatus, DenseFactorizationError>;

    /// status of the most recent factorization (or update)
    fn status(&self) -> FactorStatus;

    /// Solves `A*x = b` in place.
    ///
    /// # Panics
    /// Panics if `b.len() != self.dim()`.
    fn solve(&self, b: &mut [T]) -> Result<(), DenseFactorizationError>;

    /// Writes `A⁻¹` into `X`.
    ///
    /// # Panics
    /// Panics if `X` is not `dim×dim`.
    fn inverse<M: DenseMatrixMut<T>>(&self, X: &mut M) -> Result<(), DenseFactorizationError>;

    /// determinant of the factored matrix
    fn determinant(&self) -> T;
}

// dimension checks on inputs to `factor`.  A mismatch is returned as
// an error before anything is written.
pub(crate) fn check_factor_input<M, T>(A: &M, n: usize) -> Result<(), DenseFactorizationError>
where
    M: DenseMatrix<T>,
    T: FloatT,
{
    if A.size() != (n, n) {
        return Err(DenseFactorizationError::IncompatibleDimension);
    }
    Ok(())
}
