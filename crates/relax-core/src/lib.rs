//! Core matrix types and system builders for relax.
//!
//! Every system handled by relax has the compile-time dimension [`N`]. The
//! coefficient matrix is tridiagonal, parameterized by a scalar `gamma`, and
//! the right-hand side follows a fixed pyramid pattern.
//!
//! # Example
//!
//! ```
//! use relax_core::{LinearSystem, N};
//!
//! let system = LinearSystem::pyramid(3.0);
//! assert_eq!(system.a()[(0, 0)], 3.0);
//! assert_eq!(system.a()[(0, 1)], -1.0);
//! assert_eq!(system.b()[0], 2.0);
//! assert_eq!(system.b()[N / 2], 1.0);
//! ```

pub mod matrix;
pub mod system;

pub use matrix::{
    Matrix, N, Vector, build_rhs, build_system_matrix, fill_diagonal, fill_diagonal_siblings,
    fill_pyramid, keep_diagonal, keep_lower, keep_upper,
};
pub use system::LinearSystem;
