use thiserror::Error;

/// Error type returned by dense factorization routines.
///
/// Numerical degeneracy (a non-positive pivot or a leading minor
/// that is not positive definite) is not an error.  It is reported
/// through [`FactorStatus`](crate::factor::FactorStatus) instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DenseFactorizationError {
    /// Input and factorization dimensions disagree
    #[error("Matrix dimension fields and/or array lengths are incompatible")]
    IncompatibleDimension,
    /// Leading minor of the given (1-based) order is not positive definite
    #[error("Cholesky error: leading minor {0} is not positive definite")]
    Cholesky(i32),
    /// A backend primitive reported a failure code
    #[error("{routine} returned info = {info}")]
    Backend {
        /// name of the failing primitive
        routine: &'static str,
        /// backend status code
        info: i32,
    },
}
