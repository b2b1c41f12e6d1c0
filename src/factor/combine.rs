use crate::algebra::FloatT;

/// Strategy for writing a computed value into a destination entry.
///
/// Used by [`transform_inverse_into`](crate::factor::RankRevealingEngine::transform_inverse_into)
/// so that several contributions can be summed into one matrix
/// without a temporary.
pub trait Combine<T: FloatT> {
    fn combine(dst: &mut T, x: T);
}

/// Overwrites the destination
#[derive(Debug, Clone, Copy, Default)]
pub struct Assign;

/// Adds into the destination
#[derive(Debug, Clone, Copy, Default)]
pub struct Accumulate;

impl<T: FloatT> Combine<T> for Assign {
    #[inline]
    fn combine(dst: &mut T, x: T) {
        *dst = x;
    }
}

impl<T: FloatT> Combine<T> for Accumulate {
    #[inline]
    fn combine(dst: &mut T, x: T) {
        *dst += x;
    }
}
