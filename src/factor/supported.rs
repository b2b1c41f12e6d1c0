#![allow(non_snake_case)]
use super::*;
use enum_dispatch::*;

/// Any of the three factorization strategies, chosen at run time.
///
/// Implements [`FactorSymmetric`] by dispatching to the wrapped engine.
/// The concrete engines can still be reached by matching, for operations
/// that only one of them supports (e.g. rank-one updates).
#[enum_dispatch(FactorSymmetric<T>)]
#[derive(Debug, Clone)]
pub enum SymmetricFactorization<D, T>
where
    D: Dimension,
    T: FloatT,
{
    Ldl(LDLEngine<D, T>),
    RankRevealing(RankRevealingEngine<D, T>),
    Cholesky(CholeskyEngine<D, T, BackendKind>),
}

impl<D, T> SymmetricFactorization<D, T>
where
    D: Dimension,
    T: FloatT,
{
    /// An unfactored engine of the kind selected by `settings`.
    ///
    /// Fails if the settings do not validate, e.g. when the LAPACK
    /// backend is requested without the "lapack" feature.
    pub fn new(dim: D, settings: &FactorSettings<T>) -> Result<Self, SettingsError> {
        settings.validate()?;

        let engine: Self = match settings.method {
            FactorizationMethod::Ldl => LDLEngine::new(dim).into(),
            FactorizationMethod::RankRevealing => RankRevealingEngine::new(dim)
                .with_pivot_tolerance(settings.pivot_tolerance)
                .into(),
            FactorizationMethod::Cholesky => {
                CholeskyEngine::with_backend(dim, settings.backend).into()
            }
        };
        log::debug!(
            target: "symfact",
            "new {} factorization of dimension {}",
            settings.method,
            dim.value()
        );
        Ok(engine)
    }

    pub fn method(&self) -> FactorizationMethod {
        match self {
            SymmetricFactorization::Ldl(_) => FactorizationMethod::Ldl,
            SymmetricFactorization::RankRevealing(_) => FactorizationMethod::RankRevealing,
            SymmetricFactorization::Cholesky(_) => FactorizationMethod::Cholesky,
        }
    }

    /// Same as [`factor`](FactorSymmetric::factor), but a rank deficient
    /// result is returned as [`DenseFactorizationError::Cholesky`]
    /// carrying the status code.
    pub fn factor_strict<M>(&mut self, A: &M) -> Result<(), DenseFactorizationError>
    where
        M: DenseMatrix<T>,
    {
        let status = self.factor(A)?;
        if status.is_full_rank() {
            Ok(())
        } else {
            Err(DenseFactorizationError::Cholesky(status.info()))
        }
    }
}
