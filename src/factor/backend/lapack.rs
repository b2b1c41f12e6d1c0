use super::CholeskyBackend;
use crate::algebra::{FloatT, MatrixTriangle, XpotrfScalar, XpotriScalar, XpotrsScalar};

/// Delegates to LAPACK `?potrf`/`?potrs`/`?potri` through the
/// [`XpotrfScalar`](crate::algebra::XpotrfScalar) family of traits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LapackBackend;

// LAPACK takes i32 dimensions
fn as_blas_int(n: usize, info: &mut i32) -> Option<i32> {
    match i32::try_from(n) {
        Ok(n) => Some(n),
        Err(_) => {
            *info = -2;
            None
        }
    }
}

impl<T: FloatT> CholeskyBackend<T> for LapackBackend {
    fn potrf(&self, uplo: MatrixTriangle, n: usize, a: &mut [T], info: &mut i32) {
        let Some(An) = as_blas_int(n, info) else {
            return;
        };
        let lda = An.max(1);
        T::xpotrf(uplo.as_blas_char(), An, a, lda, info);
    }

    fn potrs(&self, uplo: MatrixTriangle, n: usize, nrhs: usize, a: &[T], b: &mut [T], info: &mut i32) {
        let Some(An) = as_blas_int(n, info) else {
            return;
        };
        let Some(nrhs) = as_blas_int(nrhs, info) else {
            return;
        };
        let lda = An.max(1);
        let ldb = An.max(1);
        T::xpotrs(uplo.as_blas_char(), An, nrhs, a, lda, b, ldb, info);
    }

    fn potri(&self, uplo: MatrixTriangle, n: usize, a: &mut [T], info: &mut i32) {
        let Some(An) = as_blas_int(n, info) else {
            return;
        };
        let lda = An.max(1);
        T::xpotri(uplo.as_blas_char(), An, a, lda, info);
    }
}
