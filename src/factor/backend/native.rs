#![allow(non_snake_case)]
use super::CholeskyBackend;
use crate::algebra::{FloatT, MatrixTriangle};

/// Pure Rust implementation of the Cholesky primitives.
///
/// Follows the unblocked LAPACK algorithms column by column, so the
/// factors agree with LAPACK up to rounding.  Both `uplo` layouts are
/// accepted, as LAPACK does, so the backend can stand in for it on
/// caller supplied storage.  [`CholeskyEngine`](crate::factor::CholeskyEngine)
/// itself always uses the lower triangle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NativeBackend;

// Linear index of the entry `L[i,k]` of the lower factor.  With Triu
// storage the factor is held as `U = Lᵀ`.
#[inline]
fn lidx(uplo: MatrixTriangle, n: usize, i: usize, k: usize) -> usize {
    match uplo {
        MatrixTriangle::Tril => i + k * n,
        MatrixTriangle::Triu => k + i * n,
    }
}

fn check_args<T>(n: usize, a: &[T], info: &mut i32) -> bool {
    if a.len() < n * n {
        *info = -4;
        return false;
    }
    *info = 0;
    true
}

impl<T: FloatT> CholeskyBackend<T> for NativeBackend {
    fn potrf(&self, uplo: MatrixTriangle, n: usize, a: &mut [T], info: &mut i32) {
        if !check_args(n, a, info) {
            return;
        }

        for j in 0..n {
            let mut d = a[lidx(uplo, n, j, j)];
            for k in 0..j {
                let l = a[lidx(uplo, n, j, k)];
                d -= l * l;
            }
            // also catches NaN
            if !(d > T::zero()) {
                a[lidx(uplo, n, j, j)] = d;
                *info = (j + 1) as i32;
                return;
            }
            let ljj = d.sqrt();
            a[lidx(uplo, n, j, j)] = ljj;

            for i in (j + 1)..n {
                let mut v = a[lidx(uplo, n, i, j)];
                for k in 0..j {
                    v -= a[lidx(uplo, n, i, k)] * a[lidx(uplo, n, j, k)];
                }
                a[lidx(uplo, n, i, j)] = v / ljj;
            }
        }
    }

    fn potrs(&self, uplo: MatrixTriangle, n: usize, nrhs: usize, a: &[T], b: &mut [T], info: &mut i32) {
        if !check_args(n, a, info) {
            return;
        }
        if b.len() < n * nrhs {
            *info = -6;
            return;
        }

        for x in b.chunks_exact_mut(n.max(1)).take(nrhs) {
            // L*y = b
            for i in 0..n {
                let mut v = x[i];
                for k in 0..i {
                    v -= a[lidx(uplo, n, i, k)] * x[k];
                }
                x[i] = v / a[lidx(uplo, n, i, i)];
            }
            // Lᵀ*x = y
            for i in (0..n).rev() {
                let mut v = x[i];
                for k in (i + 1)..n {
                    v -= a[lidx(uplo, n, k, i)] * x[k];
                }
                x[i] = v / a[lidx(uplo, n, i, i)];
            }
        }
    }

    fn potri(&self, uplo: MatrixTriangle, n: usize, a: &mut [T], info: &mut i32) {
        if !check_args(n, a, info) {
            return;
        }

        // invert the factor in place, X = L⁻¹, one column at a time
        let mut col = vec![T::zero(); n];
        for j in 0..n {
            let ljj = a[lidx(uplo, n, j, j)];
            if ljj == T::zero() {
                *info = (j + 1) as i32;
                return;
            }
            col[j] = ljj.recip();
            for i in (j + 1)..n {
                let mut v = T::zero();
                for k in j..i {
                    v += a[lidx(uplo, n, i, k)] * col[k];
                }
                col[i] = -v / a[lidx(uplo, n, i, i)];
            }
            // column j of L is not read again, since later columns
            // only need entries L[i,k] with k > j
            for i in j..n {
                a[lidx(uplo, n, i, j)] = col[i];
            }
        }

        // A⁻¹ = Xᵀ*X, lower triangle
        for j in 0..n {
            for i in j..n {
                let mut v = T::zero();
                for k in i..n {
                    v += a[lidx(uplo, n, k, i)] * a[lidx(uplo, n, k, j)];
                }
                col[i] = v;
            }
            for i in j..n {
                a[lidx(uplo, n, i, j)] = col[i];
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::*;

    // lower triangle only, junk above
    #[rustfmt::skip]
    fn spd_3x3() -> Vec<f64> {
        vec![
            4., 12., -16.,
            99., 37., -43.,
            99., 99., 98.,
        ]
    }

    #[test]
    fn test_native_potrf() {
        for uplo in [MatrixTriangle::Tril, MatrixTriangle::Triu] {
            let mut a = spd_3x3();
            if uplo == MatrixTriangle::Triu {
                // transpose so the valid triangle is on top
                let t = Matrix::new_from_slice((3, 3), &a);
                a = Matrix::from_dense(&t.t()).data;
            }
            let mut info = 0;
            NativeBackend.potrf(uplo, 3, &mut a, &mut info);
            assert_eq!(info, 0);

            // textbook example: L = [2 0 0; 6 1 0; -8 5 3]
            let expected = [(0, 0, 2.), (1, 0, 6.), (2, 0, -8.), (1, 1, 1.), (2, 1, 5.), (2, 2, 3.)];
            for (i, k, v) in expected {
                assert!((a[lidx(uplo, 3, i, k)] - v).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_native_potrf_not_pd() {
        #[rustfmt::skip]
        let mut a = vec![
            1., 2., 0.,
            0., 1., 0.,
            0., 0., 1.,
        ];
        let mut info = 0;
        NativeBackend.potrf(MatrixTriangle::Tril, 3, &mut a, &mut info);
        assert_eq!(info, 2);
    }

    #[test]
    fn test_native_potrs_potri() {
        let mut a = spd_3x3();
        let mut info = 0;
        NativeBackend.potrf(MatrixTriangle::Tril, 3, &mut a, &mut info);
        assert_eq!(info, 0);

        // A*[1,2,3] with A = [4 12 -16; 12 37 -43; -16 -43 98]
        let mut b = vec![-20., -43., 192., 4., 12., -16.];
        NativeBackend.potrs(MatrixTriangle::Tril, 3, 2, &a, &mut b, &mut info);
        assert_eq!(info, 0);
        assert!(b[0..3].norm_inf_diff(&[1., 2., 3.]) < 1e-10);
        assert!(b[3..6].norm_inf_diff(&[1., 0., 0.]) < 1e-10);

        NativeBackend.potri(MatrixTriangle::Tril, 3, &mut a, &mut info);
        assert_eq!(info, 0);
        let mut Ainv = Matrix::new_from_slice((3, 3), &a);
        Ainv.mirror_lower();

        #[rustfmt::skip]
        let A = Matrix::<f64>::from(
            &[[  4.,  12., -16.],
              [ 12.,  37., -43.],
              [-16., -43.,  98.]]);
        let mut I = Matrix::<f64>::zeros((3, 3));
        I.mul(&A, &Ainv, 1.0, 0.0);
        assert!(I.data().norm_inf_diff(Matrix::<f64>::identity(3).data()) < 1e-10);
    }

    #[test]
    fn test_native_upper_storage() {
        let lower = spd_3x3();
        let t = Matrix::new_from_slice((3, 3), &lower);
        let upper = Matrix::from_dense(&t.t()).data;

        let mut results = Vec::new();
        for (uplo, mut a) in [(MatrixTriangle::Tril, lower), (MatrixTriangle::Triu, upper)] {
            let mut info = 0;
            NativeBackend.potrf(uplo, 3, &mut a, &mut info);
            assert_eq!(info, 0);

            let mut b = vec![-20., -43., 192.];
            NativeBackend.potrs(uplo, 3, 1, &a, &mut b, &mut info);
            assert_eq!(info, 0);
            assert!(b.norm_inf_diff(&[1., 2., 3.]) < 1e-10);

            NativeBackend.potri(uplo, 3, &mut a, &mut info);
            assert_eq!(info, 0);

            // the stored triangle of the inverse, read as lower
            let mut inv = Vec::new();
            for k in 0..3 {
                for i in k..3 {
                    inv.push(a[lidx(uplo, 3, i, k)]);
                }
            }
            results.push(inv);
        }
        assert!(results[0].norm_inf_diff(&results[1]) < 1e-12);
    }

    #[test]
    fn test_native_short_buffer() {
        let mut a = vec![1.0; 3];
        let mut info = 0;
        NativeBackend.potrf(MatrixTriangle::Tril, 2, &mut a, &mut info);
        assert!(info < 0);
    }
}
