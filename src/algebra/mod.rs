//! Dense linear algebra building blocks.
//!
//! Column-major dense matrices with storage that is either inline
//! (compile time dimensions) or heap allocated (run time dimensions),
//! together with the vector and matrix arithmetic used by the
//! factorization engines in [`factor`](crate::factor).

// first import floats and error types
mod error_types;
mod floats;
pub use error_types::*;
pub use floats::*;

mod adjoint;
mod math_traits;
mod matrix_traits;
mod vecmath;
pub use math_traits::*;
pub use matrix_traits::*;
pub use vecmath::{project, project_matrix, unproject, unproject_matrix};

mod dense;
pub use dense::*;
