#![allow(non_snake_case)]
use symfact::{algebra::*, factor::*};

mod common;
use common::*;

#[test]
fn test_mahalanobis() {
    let mut rng = rng();

    for n in [1, 3, 10] {
        let A = random_spd(&mut rng, n);
        let v = random_vector(&mut rng, n);

        let rr = RankRevealingEngine::with_matrix(Dyn(n), &A).unwrap();
        let chol = CholeskyEngine::<_, _, NativeBackend>::with_matrix(Dyn(n), &A).unwrap();

        // vᵀ·A⁻¹·v through the explicit inverse
        let mut w = vec![0.; n];
        rr.get_inverse().gemv(&mut w, &v, 1.0, 0.0);
        let expected = v.dot(&w);

        assert!((rr.mahalanobis(&v) - expected).abs() < 1e-12);
        assert!((chol.mahalanobis(&v).unwrap() - expected).abs() < 1e-12);
    }
}

#[test]
fn test_transform_inverse() {
    let mut rng = rng();
    let (m, n) = (4, 7);

    let A = random_spd(&mut rng, n);
    let J = random_matrix(&mut rng, m, n);
    let rr = RankRevealingEngine::with_matrix(Dyn(n), &A).unwrap();

    // J·A⁻¹·Jᵀ the long way
    let Ainv = rr.get_inverse();
    let mut JAinv = Matrix::<f64>::zeros((m, n));
    JAinv.mul(&J, &Ainv, 1.0, 0.0);
    let mut expected = Matrix::<f64>::zeros((m, m));
    expected.mul(&JAinv, &J.t(), 1.0, 0.0);

    let JiJ = rr.transform_inverse(&J);
    assert_eq!(JiJ.size(), (m, m));
    assert!(JiJ.data().norm_inf_diff(expected.data()) < 1e-12);

    // accumulate onto an existing matrix
    let mut acc = Matrix::<f64>::identity(m);
    rr.transform_inverse_into::<Accumulate, _, _>(&J, &mut acc);
    rr.transform_inverse_into::<Accumulate, _, _>(&J, &mut acc);
    for c in 0..m {
        for r in 0..m {
            let e = (if r == c { 1. } else { 0. }) + 2. * expected[(r, c)];
            assert!((acc[(r, c)] - e).abs() < 1e-12);
        }
    }

    // assign ignores existing contents
    let mut out = Matrix::<f64>::identity(m);
    out.fill(f64::NAN);
    rr.transform_inverse_into::<Assign, _, _>(&J, &mut out);
    assert_eq!(out.data(), JiJ.data());
}

#[test]
fn test_inverse_times_matrix() {
    let mut rng = rng();
    let n = 9;
    let A = random_spd(&mut rng, n);
    let B = random_matrix(&mut rng, n, 4);

    let rr = RankRevealingEngine::with_matrix(Dyn(n), &A).unwrap();
    let chol = CholeskyEngine::<_, _, NativeBackend>::with_matrix(Dyn(n), &A).unwrap();

    let X1 = rr.inverse_times_matrix(&B);
    let X2 = chol.inverse_times_matrix(&B).unwrap();
    assert!(X1.data().norm_inf_diff(X2.data()) < 1e-12);

    let mut AX = Matrix::<f64>::zeros((n, 4));
    AX.mul(&A, &X1, 1.0, 0.0);
    assert!(AX.data().norm_inf_diff(B.data()) < 1e-10);
}
