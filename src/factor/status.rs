#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of a factorization, returned by value from
/// [`factor`](crate::factor::FactorSymmetric::factor).
///
/// Numerical degeneracy is reported here rather than as an error.
/// `rank` is the number of leading pivots accepted before the first
/// one that failed, so `rank == dim` on success.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FactorStatus {
    /// dimension of the factored matrix
    pub dim: usize,
    /// number of accepted leading pivots
    pub rank: usize,
}

impl FactorStatus {
    pub fn new(dim: usize, rank: usize) -> Self {
        debug_assert!(rank <= dim);
        Self { dim, rank }
    }

    /// status of a factorization with no failed pivot
    pub fn full_rank(dim: usize) -> Self {
        Self { dim, rank: dim }
    }

    /// Status from a LAPACK style `info` code, where `info = k > 0`
    /// means the leading minor of order `k` failed.
    pub(crate) fn from_info(dim: usize, info: i32) -> Self {
        if info > 0 {
            Self::new(dim, info as usize - 1)
        } else {
            Self::full_rank(dim)
        }
    }

    pub fn is_full_rank(&self) -> bool {
        self.rank == self.dim
    }

    /// LAPACK style status code: `0` when full rank, otherwise the
    /// 1-based order of the first failing leading minor.
    pub fn info(&self) -> i32 {
        if self.is_full_rank() {
            0
        } else {
            (self.rank + 1) as i32
        }
    }
}

#[test]
fn test_status_info() {
    let s = FactorStatus::full_rank(4);
    assert!(s.is_full_rank());
    assert_eq!(s.info(), 0);

    let s = FactorStatus::new(4, 2);
    assert!(!s.is_full_rank());
    assert_eq!(s.info(), 3);
    assert_eq!(FactorStatus::from_info(4, 3), s);
    assert_eq!(FactorStatus::from_info(4, 0), FactorStatus::full_rank(4));
}
