use crate::algebra::*;
use derive_builder::Builder;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Error type returned by settings validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// An error attributable to one of the fields
    #[error("Bad value for field \"{0}\"")]
    BadFieldValue(&'static str),
    /// An unrecognized option name
    #[error("Unknown option \"{0}\"")]
    UnknownOption(String),
    /// A backend that was requested but cannot be used
    #[error("Problem with {backend} backend ({problem})")]
    BackendProblem {
        backend: &'static str,
        problem: &'static str,
    },
}

/// Choice of factorization strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FactorizationMethod {
    /// `L·D·Lᵀ` with no pivot check
    Ldl,
    /// `L·D·Lᵀ` stopping at the first non-positive pivot, with rank-one updates
    #[default]
    RankRevealing,
    /// classical `L·Lᵀ` through a [`CholeskyBackend`](crate::factor::CholeskyBackend)
    Cholesky,
}

/// Choice of primitives for the classical Cholesky strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BackendKind {
    /// pure Rust primitives
    #[default]
    Native,
    /// LAPACK `?potrf`/`?potrs`/`?potri`.  Requires the "lapack" feature.
    Lapack,
}

impl fmt::Display for FactorizationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FactorizationMethod::Ldl => "ldl",
            FactorizationMethod::RankRevealing => "rank_revealing",
            FactorizationMethod::Cholesky => "cholesky",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for FactorizationMethod {
    type Err = SettingsError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ldl" => Ok(FactorizationMethod::Ldl),
            "rank_revealing" => Ok(FactorizationMethod::RankRevealing),
            "cholesky" => Ok(FactorizationMethod::Cholesky),
            _ => Err(SettingsError::UnknownOption(s.to_string())),
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BackendKind::Native => "native",
            BackendKind::Lapack => "lapack",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for BackendKind {
    type Err = SettingsError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "native" => Ok(BackendKind::Native),
            "lapack" => Ok(BackendKind::Lapack),
            _ => Err(SettingsError::UnknownOption(s.to_string())),
        }
    }
}

/// Settings for constructing a [`SymmetricFactorization`](crate::factor::SymmetricFactorization)
#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FactorSettings<T: FloatT> {
    /// factorization strategy
    #[builder(default = "FactorizationMethod::RankRevealing")]
    pub method: FactorizationMethod,

    /// primitives used by the classical Cholesky strategy.
    /// Ignored by the other strategies.
    #[builder(default = "BackendKind::Native")]
    pub backend: BackendKind,

    /// pivots `<= pivot_tolerance` are rejected by the rank-revealing strategy
    #[builder(default = "T::zero()")]
    pub pivot_tolerance: T,
}

impl<T> Default for FactorSettings<T>
where
    T: FloatT,
{
    fn default() -> FactorSettings<T> {
        FactorSettings {
            method: FactorizationMethod::default(),
            backend: BackendKind::default(),
            pivot_tolerance: T::zero(),
        }
    }
}

impl<T> FactorSettings<T>
where
    T: FloatT,
{
    /// Checks that the settings are valid.  Does the same checks as
    /// the builder, for settings that were constructed directly.
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_backend(&self.backend)?;
        validate_pivot_tolerance(self.pivot_tolerance)?;
        Ok(())
    }
}

// pre build checker (for auto-validation when using the builder)

impl From<SettingsError> for FactorSettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        FactorSettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl<T> FactorSettingsBuilder<T>
where
    T: FloatT,
{
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(ref backend) = self.backend {
            validate_backend(backend)?;
        }
        if let Some(tol) = self.pivot_tolerance {
            validate_pivot_tolerance(tol)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------
// individual validation functions go here
// ---------------------------------------------------------

fn validate_backend(backend: &BackendKind) -> Result<(), SettingsError> {
    match backend {
        BackendKind::Native => Ok(()),
        #[cfg(feature = "lapack")]
        BackendKind::Lapack => Ok(()),
        #[cfg(not(feature = "lapack"))]
        BackendKind::Lapack => Err(SettingsError::BackendProblem {
            backend: "lapack",
            problem: "not compiled with the \"lapack\" feature",
        }),
    }
}

fn validate_pivot_tolerance<T: FloatT>(tol: T) -> Result<(), SettingsError> {
    if tol.is_finite() && tol >= T::zero() {
        Ok(())
    } else {
        Err(SettingsError::BadFieldValue("pivot_tolerance"))
    }
}

#[test]
fn test_settings_validate() {
    // all standard settings
    let settings = FactorSettingsBuilder::<f64>::default().build().unwrap();
    assert_eq!(settings, FactorSettings::default());
    assert_eq!(settings.method, FactorizationMethod::RankRevealing);

    // fail on bad tolerances
    assert!(FactorSettingsBuilder::<f64>::default()
        .pivot_tolerance(-1.0)
        .build()
        .is_err());
    assert!(FactorSettingsBuilder::<f64>::default()
        .pivot_tolerance(f64::NAN)
        .build()
        .is_err());

    // lapack backend only with the feature
    let builder = FactorSettingsBuilder::<f64>::default()
        .method(FactorizationMethod::Cholesky)
        .backend(BackendKind::Lapack)
        .build();
    cfg_if::cfg_if! {
        if #[cfg(feature = "lapack")] {
            assert!(builder.is_ok());
        }
        else {
            assert!(builder.is_err());
        }
    }

    // directly construct a bad FactorSettings and manually check
    let settings = FactorSettings::<f64> {
        pivot_tolerance: f64::INFINITY,
        ..FactorSettings::default()
    };
    assert!(settings.validate().is_err());
}

#[test]
fn test_option_names() {
    for m in [
        FactorizationMethod::Ldl,
        FactorizationMethod::RankRevealing,
        FactorizationMethod::Cholesky,
    ] {
        assert_eq!(m.to_string().parse::<FactorizationMethod>(), Ok(m));
    }
    for b in [BackendKind::Native, BackendKind::Lapack] {
        assert_eq!(b.to_string().parse::<BackendKind>(), Ok(b));
    }
    assert_eq!(
        "qr".parse::<FactorizationMethod>(),
        Err(SettingsError::UnknownOption("qr".to_string()))
    );
}
