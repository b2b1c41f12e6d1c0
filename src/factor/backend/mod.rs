use crate::algebra::{FloatT, MatrixTriangle};
use std::fmt::Debug;

mod native;
pub use native::*;

cfg_if::cfg_if! {
    if #[cfg(feature="lapack")] {
        mod lapack;
        pub use self::lapack::*;
    }
}

/// Primitives required by [`CholeskyEngine`](crate::factor::CholeskyEngine).
///
/// Matrices are column major `n×n` with leading dimension `n`.  The
/// `info` codes follow LAPACK: `0` on success, `-i` if argument `i` was
/// illegal, and a positive value for a numerical failure.  Any provider
/// of the classical `potrf`/`potrs`/`potri` trio can implement this.
pub trait CholeskyBackend<T: FloatT>: Debug + Clone + Send + Sync {
    /// In place factorization `A = L·Lᵀ` of the triangle `uplo` of `a`.
    /// `info = k > 0` means the leading minor of order `k` is not
    /// positive definite.
    fn potrf(&self, uplo: MatrixTriangle, n: usize, a: &mut [T], info: &mut i32);

    /// Solves `A·X = B` for `nrhs` columns of `b`, in place, given
    /// the factor from `potrf`.
    fn potrs(&self, uplo: MatrixTriangle, n: usize, nrhs: usize, a: &[T], b: &mut [T], info: &mut i32);

    /// Replaces the factor from `potrf` with the same triangle of `A⁻¹`.
    /// `info = k > 0` means the diagonal entry `k` of the factor is zero.
    fn potri(&self, uplo: MatrixTriangle, n: usize, a: &mut [T], info: &mut i32);
}

/// Run time choice of primitives.  Lets a single engine type serve
/// every [`BackendKind`](crate::factor::BackendKind).
impl<T: FloatT> CholeskyBackend<T> for crate::factor::BackendKind {
    fn potrf(&self, uplo: MatrixTriangle, n: usize, a: &mut [T], info: &mut i32) {
        match self {
            Self::Native => NativeBackend.potrf(uplo, n, a, info),
            #[cfg(feature = "lapack")]
            Self::Lapack => LapackBackend.potrf(uplo, n, a, info),
            #[cfg(not(feature = "lapack"))]
            Self::Lapack => *info = LAPACK_UNAVAILABLE,
        }
    }

    fn potrs(&self, uplo: MatrixTriangle, n: usize, nrhs: usize, a: &[T], b: &mut [T], info: &mut i32) {
        match self {
            Self::Native => NativeBackend.potrs(uplo, n, nrhs, a, b, info),
            #[cfg(feature = "lapack")]
            Self::Lapack => LapackBackend.potrs(uplo, n, nrhs, a, b, info),
            #[cfg(not(feature = "lapack"))]
            Self::Lapack => *info = LAPACK_UNAVAILABLE,
        }
    }

    fn potri(&self, uplo: MatrixTriangle, n: usize, a: &mut [T], info: &mut i32) {
        match self {
            Self::Native => NativeBackend.potri(uplo, n, a, info),
            #[cfg(feature = "lapack")]
            Self::Lapack => LapackBackend.potri(uplo, n, a, info),
            #[cfg(not(feature = "lapack"))]
            Self::Lapack => *info = LAPACK_UNAVAILABLE,
        }
    }
}

// reported as an illegal first argument
#[cfg(not(feature = "lapack"))]
const LAPACK_UNAVAILABLE: i32 = -1;
