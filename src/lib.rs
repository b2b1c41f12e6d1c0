//! __symfact__ provides dense factorizations of small and medium sized
//! symmetric matrices, with storage sized either at compile time or at
//! run time.
//!
//! Three strategies are available:
//!
//! * [`LDLEngine`](factor::LDLEngine) : `A = L·D·Lᵀ` with no pivot check.
//!   Indefinite matrices are accepted.
//!
//! * [`RankRevealingEngine`](factor::RankRevealingEngine) : `A = L·D·Lᵀ` that
//!   stops at the first non-positive pivot and reports the rank.  Supports
//!   rank-one updates `A ← A + v·vᵀ`, Mahalanobis distances, square roots and
//!   congruence transforms `J·A⁻¹·Jᵀ`.
//!
//! * [`CholeskyEngine`](factor::CholeskyEngine) : classical `A = L·Lᵀ`, with
//!   the `potrf`/`potrs`/`potri` primitives delegated to a
//!   [`CholeskyBackend`](factor::CholeskyBackend).  A pure Rust backend is
//!   always available.  A LAPACK backend is enabled with the "lapack" feature.
//!
//! All three implement [`FactorSymmetric`](factor::FactorSymmetric), and
//! [`SymmetricFactorization`](factor::SymmetricFactorization) selects one at
//! run time from [`FactorSettings`](factor::FactorSettings).
//!
//! ```
//! use symfact::algebra::*;
//! use symfact::factor::*;
//!
//! let A = Matrix::from(&[[4., 2.], [2., 3.]]);
//! let mut eng = RankRevealingEngine::new(Const::<2>);
//! let status = eng.factor(&A).unwrap();
//! assert!(status.is_full_rank());
//!
//! let x = eng.inverse_times(&[6., 5.]);
//! assert!(x.norm_inf_diff(&[1., 1.]) < 1e-12);
//! ```
//!
//! Only the lower triangle of a factored matrix is ever read.
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

//Rust hates greek characters
#![allow(confusable_idents)]

pub mod algebra;
pub mod factor;

/// crate version, as set in Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
