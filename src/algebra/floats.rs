#![allow(non_snake_case)]
use num_traits::{Float, FloatConst, FromPrimitive, NumAssign};
use std::fmt::{Debug, Display, LowerExp};

#[cfg(feature = "lapack")]
use crate::algebra::dense::LapackFloatT;

/// Core traits for internal floating point values.
///
/// This trait defines a subset of bounds for `FloatT`, which is preferred
/// throughout for use in the factorizations.  When the "lapack" feature is
/// enabled, `FloatT` is additionally restricted to f32/f64 types supported
/// by LAPACK.
pub trait CoreFloatT:
    'static
    + Send
    + Sync
    + Float
    + FloatConst
    + NumAssign
    + Default
    + FromPrimitive
    + Display
    + LowerExp
    + Debug
    + Sized
{
}

impl<T> CoreFloatT for T where
    T: 'static
        + Send
        + Sync
        + Float
        + FloatConst
        + NumAssign
        + Default
        + FromPrimitive
        + Display
        + LowerExp
        + Debug
        + Sized
{
}

// if "lapack" is enabled, we must add an additional trait
// bound to restrict compilation to f32/f64 types since
// there is no LAPACK support otherwise

cfg_if::cfg_if! {
    if #[cfg(not(feature="lapack"))] {
    /// Main trait for floating point types used in the factorizations.
    ///
    /// All floating point calculations are represented internally on values
    /// implementing the `FloatT` trait.  When compiled with LAPACK support,
    /// implementations are provided only for the f32 and f64 native types.
    /// Otherwise any type satisfying the bounds of `CoreFloatT` will do.
    ///
    /// `FloatT` relies on [`num_traits`](num_traits) for most of its constituent trait bounds.
        pub trait FloatT: CoreFloatT {}
    } else{
        pub trait FloatT: CoreFloatT + LapackFloatT {}
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature="lapack")] {
        impl<T> FloatT for T where T: CoreFloatT + LapackFloatT {}
    } else{
        impl<T> FloatT for T where T: CoreFloatT {}
    }
}

/// Trait for converting Rust primitives to [`FloatT`](crate::algebra::FloatT)
///
/// Implemented on f32/64, u32/64 and usize so that constants and
/// dimensions can be written as `(1e-9).as_T()` or `n.as_T()`
/// rather than `T::from_f64(1e-9).unwrap()` everywhere.
pub trait AsFloatT<T>: 'static {
    fn as_T(&self) -> T;
}

macro_rules! impl_as_FloatT {
    ($ty:ty, $ident:ident) => {
        impl<T> AsFloatT<T> for $ty
        where
            T: std::ops::Mul<T, Output = T> + FromPrimitive + 'static,
        {
            #[inline]
            fn as_T(&self) -> T {
                T::$ident(*self).unwrap()
            }
        }
    };
}
impl_as_FloatT!(u32, from_u32);
impl_as_FloatT!(u64, from_u64);
impl_as_FloatT!(usize, from_usize);
impl_as_FloatT!(f32, from_f32);
impl_as_FloatT!(f64, from_f64);
