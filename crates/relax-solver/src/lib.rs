//! Stationary iterative solvers for relax.
//!
//! A splitting A = Q - P turns A·x = b into the fixed-point iteration
//! x_{k+1} = Q^(-1)·P·x_k + Q^(-1)·b. Jacobi takes Q = D, Gauss-Seidel takes
//! Q = L + D. Before iterating, the spectral radius of I - Q^(-1)·A is checked;
//! the iteration itself stops on the relative residual.
//!
//! # Usage
//!
//! ```
//! use relax_core::LinearSystem;
//! use relax_solver::{Method, SolverConfig, solve};
//!
//! let system = LinearSystem::pyramid(3.0);
//! let result = solve(&Method::GaussSeidel, &system, &SolverConfig::default()).unwrap();
//!
//! assert!(result.outcome.is_converged());
//! assert!(system.relative_residual(&result.x) < 1e-6);
//! ```

pub mod error;
pub mod iterative;
pub mod method;
pub mod parallel;
pub mod spectral;
pub mod sweep;

pub use error::{Error, Result};
pub use iterative::{SolveOutcome, SolveResult, SolverConfig, solve};
pub use method::{GaussSeidel, Jacobi, Method, Splitting, SplittingMethod};
pub use spectral::{eigenvalues, spectral_radius, spectral_radius_below_one};
pub use sweep::{DEFAULT_GAMMAS, SweepCase, SweepRun, cases, default_cases, run_case, run_sweep};
