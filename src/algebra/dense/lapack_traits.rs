#![cfg_attr(rustfmt, rustfmt_skip)]

// standard imports via blas-lapack-rs crates
extern crate lapack_src;
use lapack::*;

/// Floating point types with LAPACK Cholesky support (f32 and f64)
pub trait LapackFloatT:
    private::LapackFloatSealed
    + XpotrfScalar
    + XpotrsScalar
    + XpotriScalar
{}

impl LapackFloatT for f32 {}
impl LapackFloatT for f64 {}

mod private {
    pub trait LapackFloatSealed {}
    impl LapackFloatSealed for f32 {}
    impl LapackFloatSealed for f64 {}
}

// --------------------------------------
// ?potrf : Cholesky decomposition
// --------------------------------------

pub trait XpotrfScalar: Sized {
    fn xpotrf(
        uplo: u8, n: i32, a: &mut [Self], lda: i32, info: &mut i32
    );
}

macro_rules! impl_lapack_xpotrf {
    ($T:ty, $XPOTRF:path) => {
        impl XpotrfScalar for $T {
            fn xpotrf(
                uplo: u8, n: i32, a: &mut [Self], lda: i32, info: &mut i32
            ) {
                unsafe {
                    $XPOTRF(
                        uplo, n, a, lda, info
                    );
                }
            }
        }
    };
}
impl_lapack_xpotrf!(f32, spotrf);
impl_lapack_xpotrf!(f64, dpotrf);

// --------------------------------------
// ?potrs : solve from a Cholesky factor
// --------------------------------------

pub trait XpotrsScalar: Sized {
    fn xpotrs(
        uplo: u8, n: i32, nrhs: i32, a: &[Self], lda: i32, b: &mut [Self], ldb: i32, info: &mut i32
    );
}

macro_rules! impl_lapack_xpotrs {
    ($T:ty, $XPOTRS:path) => {
        impl XpotrsScalar for $T {
            fn xpotrs(
                uplo: u8, n: i32, nrhs: i32, a: &[Self], lda: i32, b: &mut [Self], ldb: i32, info: &mut i32
            ) {
                unsafe {
                    $XPOTRS(
                        uplo, n, nrhs, a, lda, b, ldb, info
                    );
                }
            }
        }
    };
}
impl_lapack_xpotrs!(f32, spotrs);
impl_lapack_xpotrs!(f64, dpotrs);

// --------------------------------------
// ?potri : inverse from a Cholesky factor
// --------------------------------------

pub trait XpotriScalar: Sized {
    fn xpotri(
        uplo: u8, n: i32, a: &mut [Self], lda: i32, info: &mut i32
    );
}

macro_rules! impl_lapack_xpotri {
    ($T:ty, $XPOTRI:path) => {
        impl XpotriScalar for $T {
            fn xpotri(
                uplo: u8, n: i32, a: &mut [Self], lda: i32, info: &mut i32
            ) {
                unsafe {
                    $XPOTRI(
                        uplo, n, a, lda, info
                    );
                }
            }
        }
    };
}
impl_lapack_xpotri!(f32, spotri);
impl_lapack_xpotri!(f64, dpotri);
