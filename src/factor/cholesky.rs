#![allow(non_snake_case)]
use super::*;

/// Classical `A = L·Lᵀ` factorization through a [`CholeskyBackend`].
///
/// Only the lower triangle is used.  The factor is kept with zeros above
/// the diagonal.  Every read operation works on a copy of its input, so
/// a factored engine can be shared between threads, and backend failures
/// come back as [`DenseFactorizationError::Backend`].
#[derive(Debug, Clone)]
pub struct CholeskyEngine<D, T, B = NativeBackend>
where
    D: Dimension,
    T: FloatT,
    B: CholeskyBackend<T>,
{
    dim: D,
    L: SquareMatrix<D, T>,
    status: FactorStatus,
    backend: B,
}

impl<D, T, B> CholeskyEngine<D, T, B>
where
    D: Dimension,
    T: FloatT,
    B: CholeskyBackend<T> + Default,
{
    /// an unfactored engine using the default backend
    pub fn new(dim: D) -> Self {
        Self::with_backend(dim, B::default())
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
}

impl<D, T, B> CholeskyEngine<D, T, B>
where
    D: Dimension,
    T: FloatT,
    B: CholeskyBackend<T>,
{
    /// an unfactored engine using `backend`
    pub fn with_backend(dim: D, backend: B) -> Self {
        Self {
            dim,
            L: dim.zeros_matrix(),
            status: FactorStatus::new(dim.value(), 0),
            backend,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Factors the lower triangle of `A`.  A leading minor that is not
    /// positive definite is reported in the returned status.
    pub fn compute<M>(&mut self, A: &M) -> Result<FactorStatus, DenseFactorizationError>
    where
        M: DenseMatrix<T>,
    {
        let n = self.dim.value();
        check_factor_input(A, n)?;

        self.L.fill(T::zero());
        self.L.copy_lower_from(A);

        let mut info = 0_i32;
        self.backend
            .potrf(MatrixTriangle::Tril, n, self.L.data_mut(), &mut info);

        if info < 0 {
            self.status = FactorStatus::new(n, 0);
            return Err(DenseFactorizationError::Backend {
                routine: "potrf",
                info,
            });
        }
        self.L.zero_upper();

        self.status = FactorStatus::from_info(n, info);
        if info > 0 {
            log::warn!(
                target: "symfact",
                "Cholesky: leading minor {} of {} is not positive definite",
                info,
                n
            );
        }
        log::debug!(target: "symfact", "Cholesky: factored dimension {}, info {}", n, info);
        Ok(self.status)
    }

    /// LAPACK style status code of the last factorization, see
    /// [`FactorStatus::info`]
    pub fn get_info(&self) -> i32 {
        self.status.info()
    }

    /// lower triangular factor, zero above the diagonal
    pub fn get_L(&self) -> &SquareMatrix<D, T> {
        &self.L
    }

    /// `2·Σ ln Lᵢᵢ`
    pub fn logdet(&self) -> T {
        let n = self.dim.value();
        let two: T = (2.0).as_T();
        two * (0..n).fold(T::zero(), |ld, i| ld + T::ln(self.L[(i, i)]))
    }

    /// `A⁻¹*v` as a new vector
    ///
    /// # Panics
    /// Panics if `v.len() != self.dim()`.
    pub fn backsub(&self, v: &[T]) -> Result<DimVector<D, T>, DenseFactorizationError> {
        assert_eq!(v.len(), self.dim.value());
        let mut x = self.dim.vector_from_slice(v);
        self.potrs(x.as_mut(), 1)?;
        Ok(x)
    }

    /// same as [`backsub`](Self::backsub)
    pub fn inverse_times(&self, v: &[T]) -> Result<DimVector<D, T>, DenseFactorizationError> {
        self.backsub(v)
    }

    /// `A⁻¹*B` for an `n×k` matrix `B`, with all columns passed to the
    /// backend at once
    ///
    /// # Panics
    /// Panics if `B` does not have `dim` rows.
    pub fn inverse_times_matrix<MB>(&self, B: &MB) -> Result<Matrix<T>, DenseFactorizationError>
    where
        MB: DenseMatrix<T>,
    {
        assert_eq!(B.nrows(), self.dim.value());
        let mut X = Matrix::from_dense(B);
        let nrhs = X.ncols();
        self.potrs(X.data_mut(), nrhs)?;
        Ok(X)
    }

    /// `vᵀ·A⁻¹·v`
    ///
    /// # Panics
    /// Panics if `v.len() != self.dim()`.
    pub fn mahalanobis(&self, v: &[T]) -> Result<T, DenseFactorizationError> {
        let x = self.backsub(v)?;
        Ok(v.dot(x.as_ref()))
    }

    /// Explicit `A⁻¹`, filling both triangles.
    ///
    /// A factor with a zero diagonal entry, e.g. from a failed or
    /// missing factorization, is singular and is reported as
    /// [`DenseFactorizationError::Backend`] from `potri`.
    pub fn get_inverse(&self) -> Result<SquareMatrix<D, T>, DenseFactorizationError> {
        let n = self.dim.value();
        let mut Inv = self.L.clone();
        let mut info = 0_i32;
        self.backend
            .potri(MatrixTriangle::Tril, n, Inv.data_mut(), &mut info);
        if info != 0 {
            return Err(DenseFactorizationError::Backend {
                routine: "potri",
                info,
            });
        }
        Inv.mirror_lower();
        Ok(Inv)
    }

    fn potrs(&self, b: &mut [T], nrhs: usize) -> Result<(), DenseFactorizationError> {
        let mut info = 0_i32;
        self.backend.potrs(
            MatrixTriangle::Tril,
            self.dim.value(),
            nrhs,
            self.L.data(),
            b,
            &mut info,
        );
        match info {
            0 => Ok(()),
            _ => Err(DenseFactorizationError::Backend {
                routine: "potrs",
                info,
            }),
        }
    }
}

impl<D, T, B> FactorSymmetric<T> for CholeskyEngine<D, T, B>
where
    D: Dimension,
    T: FloatT,
    B: CholeskyBackend<T>,
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
        self.potrs(b, 1)
    }

    fn inverse<M: DenseMatrixMut<T>>(&self, X: &mut M) -> Result<(), DenseFactorizationError> {
        let n = self.dim.value();
        assert_eq!(X.size(), (n, n));
        let Inv = self.get_inverse()?;
        for col in 0..n {
            for row in 0..n {
                X[(row, col)] = Inv[(row, col)];
            }
        }
        Ok(())
    }

    /// squared product of the diagonal of `L`
    fn determinant(&self) -> T {
        let n = self.dim.value();
        let d = (0..n).fold(T::one(), |det, i| det * self.L[(i, i)]);
        d * d
    }
}
