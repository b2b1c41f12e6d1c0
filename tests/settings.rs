#![allow(non_snake_case)]
use symfact::{algebra::*, factor::*};

#[test]
fn test_settings_builder() {
    let settings = FactorSettingsBuilder::<f64>::default()
        .method(FactorizationMethod::Cholesky)
        .build()
        .unwrap();
    assert_eq!(settings.backend, BackendKind::Native);

    let mut eng = SymmetricFactorization::new(Const::<2>, &settings).unwrap();
    assert_eq!(eng.method(), FactorizationMethod::Cholesky);
    eng.factor_strict(&Matrix::from(&[[4., 2.], [2., 3.]])).unwrap();
    assert!((eng.determinant() - 8.).abs() < 1e-14);
}

#[test]
fn test_settings_from_str() {
    let method: FactorizationMethod = "ldl".parse().unwrap();
    assert_eq!(method, FactorizationMethod::Ldl);
    assert!("lu".parse::<FactorizationMethod>().is_err());
    assert!("blas".parse::<BackendKind>().is_err());
}

#[cfg(not(feature = "lapack"))]
#[test]
fn test_lapack_unavailable() {
    let settings = FactorSettings::<f64> {
        method: FactorizationMethod::Cholesky,
        backend: BackendKind::Lapack,
        ..FactorSettings::default()
    };
    assert!(matches!(
        SymmetricFactorization::new(Dyn(3), &settings),
        Err(SettingsError::BackendProblem { .. })
    ));
}

#[cfg(feature = "lapack")]
#[test]
fn test_lapack_backend() {
    let settings = FactorSettingsBuilder::<f64>::default()
        .method(FactorizationMethod::Cholesky)
        .backend(BackendKind::Lapack)
        .build()
        .unwrap();
    let mut eng = SymmetricFactorization::new(Dyn(2), &settings).unwrap();
    eng.factor_strict(&Matrix::from(&[[4., 2.], [2., 3.]])).unwrap();

    let mut x = vec![6., 5.];
    eng.solve(&mut x).unwrap();
    assert!(x.norm_inf_diff(&[1., 1.]) < 1e-14);
}

#[cfg(feature = "serde")]
#[test]
fn test_settings_json() {
    let settings = FactorSettingsBuilder::<f64>::default()
        .method(FactorizationMethod::RankRevealing)
        .pivot_tolerance(1e-10)
        .build()
        .unwrap();

    let json = serde_json::to_string(&settings).unwrap();
    assert!(json.contains("\"rank_revealing\""));
    let back: FactorSettings<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, settings);

    // missing fields take their defaults
    let partial: FactorSettings<f64> = serde_json::from_str(r#"{"method": "ldl"}"#).unwrap();
    assert_eq!(partial.method, FactorizationMethod::Ldl);
    assert_eq!(partial.backend, BackendKind::Native);
    assert_eq!(partial.pivot_tolerance, 0.);
}

#[cfg(feature = "serde")]
#[test]
fn test_status_json() {
    let A = Matrix::from(&[[1., 0.], [0., -1.]]);
    let mut eng = RankRevealingEngine::new(Dyn(2));
    let status = eng.factor(&A).unwrap();

    let json = serde_json::to_string(&status).unwrap();
    assert_eq!(json, r#"{"dim":2,"rank":1}"#);
    let back: FactorStatus = serde_json::from_str(&json).unwrap();
    assert_eq!(back.info(), 2);
}
