mod core;
mod dimension;
mod gemm;
mod matrix_math;
mod types;
pub use self::dimension::*;
pub use self::matrix_math::cross_product_matrix;
pub use self::types::*;

cfg_if::cfg_if! {
    if #[cfg(feature="lapack")] {
        mod lapack_traits;
        pub use self::lapack_traits::*;
    }
}
