#![allow(non_snake_case)]
#![allow(dead_code)]
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use symfact::algebra::*;

pub fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5f3759df)
}

pub fn random_matrix(rng: &mut StdRng, m: usize, n: usize) -> Matrix<f64> {
    Matrix::from_fn((m, n), |_, _| rng.gen_range(-1.0..1.0))
}

pub fn random_vector(rng: &mut StdRng, n: usize) -> Vec<f64> {
    (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

// B*Bᵀ + n*I, well conditioned
pub fn random_spd(rng: &mut StdRng, n: usize) -> Matrix<f64> {
    let B = random_matrix(rng, n, n);
    let mut A = Matrix::<f64>::zeros((n, n));
    A.mul(&B, &B.t(), 1.0, 0.0);
    for i in 0..n {
        A[(i, i)] += n as f64;
    }
    A
}

// Gaussian elimination with partial pivoting
pub fn det_gauss(A: &Matrix<f64>) -> f64 {
    let n = A.nrows();
    let mut U = A.clone();
    let mut det = 1.0;
    for k in 0..n {
        let p = (k..n)
            .max_by(|&i, &j| U[(i, k)].abs().total_cmp(&U[(j, k)].abs()))
            .unwrap();
        if U[(p, k)] == 0.0 {
            return 0.0;
        }
        if p != k {
            for c in 0..n {
                let tmp = U[(k, c)];
                U[(k, c)] = U[(p, c)];
                U[(p, c)] = tmp;
            }
            det = -det;
        }
        det *= U[(k, k)];
        for i in (k + 1)..n {
            let f = U[(i, k)] / U[(k, k)];
            for c in k..n {
                let u = U[(k, c)];
                U[(i, c)] -= f * u;
            }
        }
    }
    det
}

pub fn identity_error<M: DenseMatrix<f64>>(A: &Matrix<f64>, Ainv: &M) -> f64 {
    let n = A.nrows();
    let mut I = Matrix::<f64>::zeros((n, n));
    I.mul(A, Ainv, 1.0, 0.0);
    I.data().norm_inf_diff(Matrix::<f64>::identity(n).data())
}
