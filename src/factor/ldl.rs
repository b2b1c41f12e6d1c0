#![allow(non_snake_case)]
use super::kernels::*;
use super::*;

/// `A = L·D·Lᵀ` factorization with no pivot check.
///
/// `L` is unit lower triangular and is stored below the diagonal of a
/// single matrix, with `D` on its diagonal.  There is no positivity
/// requirement, so indefinite matrices factor normally.  A zero pivot
/// produces `inf`/`NaN` in every later entry.  It is also reported
/// through [`FactorStatus::rank`], which counts the leading pivots that
/// are finite and non-zero.
#[derive(Debug, Clone)]
pub struct LDLEngine<D, T>
where
    D: Dimension,
    T: FloatT,
{
    dim: D,
    LD: SquareMatrix<D, T>,
    status: FactorStatus,
}

impl<D, T> LDLEngine<D, T>
where
    D: Dimension,
    T: FloatT,
{
    /// an unfactored engine
    pub fn new(dim: D) -> Self {
        Self {
            dim,
            LD: dim.zeros_matrix(),
            status: FactorStatus::new(dim.value(), 0),
        }
    }

    /// a new engine holding the factors of `A`
    pub fn with_matrix<M>(dim: D, A: &M) -> Result<Self, DenseFactorizationError>
    where
        M: DenseMatrix<T>,
    {
        let mut engine = Self::new(dim);
        engine.compute(A)?;
        Ok(engine)
    }

    pub fn compute<M>(&mut self, A: &M) -> Result<FactorStatus, DenseFactorizationError>
    where
        M: DenseMatrix<T>,
    {
        let n = self.dim.value();
        check_factor_input(A, n)?;

        let LD = &mut self.LD;
        LD.copy_lower_from(A);
        LD.zero_upper();

        let mut rank = n;

        for col in 0..n {
            // diagonal pivot, corrected for the factored columns
            let mut pivot = LD[(col, col)];
            for k in 0..col {
                let l = LD[(col, k)];
                pivot -= l * l * LD[(k, k)];
            }
            LD[(col, col)] = pivot;

            if rank == n && (pivot == T::zero() || !pivot.is_finite()) {
                rank = col;
                log::warn!(
                    target: "symfact",
                    "LDL: pivot {} of {} is {}, later entries are not finite",
                    col,
                    n,
                    pivot
                );
            }

            let inv_pivot = T::recip(pivot);
            for row in (col + 1)..n {
                let mut val = LD[(row, col)];
                for k in 0..col {
                    val -= LD[(col, k)] * LD[(row, k)] * LD[(k, k)];
                }
                LD[(row, col)] = val * inv_pivot;
            }
        }

        self.status = FactorStatus::new(n, rank);
        log::debug!(target: "symfact", "LDL: factored dimension {}, rank {}", n, rank);
        Ok(self.status)
    }

    /// `A⁻¹*v` as a new vector
    ///
    /// # Panics
    /// Panics if `v.len() != self.dim()`.
    pub fn backsub(&self, v: &[T]) -> DimVector<D, T> {
        assert_eq!(v.len(), self.dim.value());
        let mut x = self.dim.vector_from_slice(v);
        self.backsub_in_place(x.as_mut());
        x
    }

    fn backsub_in_place(&self, x: &mut [T]) {
        forward_substitute_unit(&self.LD, x);
        for (i, xi) in x.iter_mut().enumerate() {
            *xi /= self.LD[(i, i)];
        }
        back_substitute_unit_transpose(&self.LD, x);
    }

    /// unit lower `L` below the diagonal with `D` on the diagonal.
    /// The upper triangle is zero.
    pub fn get_L_D(&self) -> &SquareMatrix<D, T> {
        &self.LD
    }
}

impl<D, T> FactorSymmetric<T> for LDLEngine<D, T>
where
    D: Dimension,
    T: FloatT,
{
    fn dim(&self) -> usize {
        self.dim.value()
    }

    fn factor<M: DenseMatrix<T>>(&mut self, A: &M) -> Result<FactorStatus, DenseFactorizationError> {
        self.compute(A)
    }

    fn status(&self) -> FactorStatus {
        self.status
    }

    fn solve(&self, b: &mut [T]) -> Result<(), DenseFactorizationError> {
        assert_eq!(b.len(), self.dim.value());
        self.backsub_in_place(b);
        Ok(())
    }

    fn inverse<M: DenseMatrixMut<T>>(&self, X: &mut M) -> Result<(), DenseFactorizationError> {
        let n = self.dim.value();
        assert_eq!(X.size(), (n, n));

        let mut e = self.dim.zeros_vector::<T>();
        for col in 0..n {
            let e = e.as_mut();
            e.set(T::zero());
            e[col] = T::one();
            self.backsub_in_place(e);
            for (row, &v) in e.iter().enumerate() {
                X[(row, col)] = v;
            }
        }
        Ok(())
    }

    fn determinant(&self) -> T {
        let n = self.dim.value();
        (0..n).fold(T::one(), |det, i| det * self.LD[(i, i)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! generate_test_ldl {
        ($fxx:ty, $test_name:ident, $tolfn:ident) => {
            #[test]
            fn $test_name() {
                #[rustfmt::skip]
                let A = Matrix::<$fxx>::from(
                &[[ 8., -2., 4.],
                  [-2., 12., 2.],
                  [ 4.,  2., 6.]]);

                let eng = LDLEngine::with_matrix(Const::<3>, &A).unwrap();
                assert!(eng.status().is_full_rank());

                let LD = eng.get_L_D();
                assert_eq!(LD[(0, 0)], 8.);
                assert_eq!(LD[(1, 0)], -0.25);
                assert_eq!(LD[(2, 0)], 0.5);
                assert_eq!(LD[(1, 1)], 11.5);
                assert!(LD.is_tril());

                let tol = (1e-8 as $fxx).$tolfn();
                assert!((eng.determinant() - 296.).abs() < 296. * tol);

                // A*[1,3,5] = [22,44,40]
                let x = eng.backsub(&[22., 44., 40.]);
                assert!(x.norm_inf_diff(&[1., 3., 5.]) < tol);

                let mut Ainv = Matrix::<$fxx>::zeros((3, 3));
                eng.inverse(&mut Ainv).unwrap();
                let mut I = Matrix::<$fxx>::zeros((3, 3));
                I.mul(&A, &Ainv, 1.0, 0.0);
                assert!(I.data().norm_inf_diff(Matrix::<$fxx>::identity(3).data()) < tol);
            }
        };
    }

    generate_test_ldl!(f32, test_ldl_f32, sqrt);
    generate_test_ldl!(f64, test_ldl_f64, abs);

    #[test]
    fn test_ldl_indefinite() {
        // indefinite matrices are fine without pivoting
        let A = Matrix::<f64>::from(&[[1., 2.], [2., 1.]]);
        let mut eng = LDLEngine::new(Dyn(2));
        let status = eng.factor(&A).unwrap();
        assert!(status.is_full_rank());
        assert_eq!(eng.get_L_D()[(1, 1)], -3.);
        assert_eq!(eng.determinant(), -3.);

        let mut b = vec![3., 3.];
        eng.solve(&mut b).unwrap();
        assert!(b.norm_inf_diff(&[1., 1.]) < 1e-15);
    }

    #[test]
    fn test_ldl_zero_pivot() {
        let A = Matrix::<f64>::from(&[[0., 1.], [1., 0.]]);
        let mut eng = LDLEngine::new(Dyn(2));
        let status = eng.factor(&A).unwrap();
        assert_eq!(status.rank, 0);
        assert_eq!(status.info(), 1);
        assert!(!eng.get_L_D()[(1, 0)].is_finite());
    }

    #[test]
    fn test_ldl_reads_lower_triangle() {
        // junk in the upper triangle is ignored
        let A = Matrix::<f64>::from(&[[4., 100.], [2., 2.]]);
        let mut eng = LDLEngine::new(Const::<2>);
        eng.factor(&A).unwrap();
        assert_eq!(eng.determinant(), 4.);
        assert_eq!(eng.get_L_D()[(0, 1)], 0.);
    }

    #[test]
    fn test_ldl_bad_dimension() {
        let A = Matrix::<f64>::identity(3);
        let mut eng = LDLEngine::new(Dyn(2));
        assert_eq!(
            eng.factor(&A),
            Err(DenseFactorizationError::IncompatibleDimension)
        );
    }
}
