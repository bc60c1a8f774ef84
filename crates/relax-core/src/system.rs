//! Linear system A·x = b.

use crate::matrix::{Matrix, Vector, build_rhs, build_system_matrix};

/// Right-hand sides with a smaller norm are treated as zero.
const ZERO_RHS_NORM: f64 = 1e-30;

/// An immutable linear system A·x = b.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSystem {
    a: Matrix,
    b: Vector,
}

impl LinearSystem {
    /// Create a system from its coefficient matrix and right-hand side.
    pub fn new(a: Matrix, b: Vector) -> Self {
        Self { a, b }
    }

    /// The tridiagonal system with the pyramid right-hand side for `gamma`.
    pub fn pyramid(gamma: f64) -> Self {
        Self::new(build_system_matrix(gamma), build_rhs(gamma))
    }

    /// Coefficient matrix.
    pub fn a(&self) -> &Matrix {
        &self.a
    }

    /// Right-hand side.
    pub fn b(&self) -> &Vector {
        &self.b
    }

    /// Residual r = A·x - b.
    pub fn residual(&self, x: &Vector) -> Vector {
        &self.a * x - self.b
    }

    /// Relative residual ‖A·x - b‖ / ‖b‖.
    ///
    /// Falls back to the absolute residual when b is zero.
    pub fn relative_residual(&self, x: &Vector) -> f64 {
        let r_norm = self.residual(x).norm();
        let b_norm = self.b.norm();
        if b_norm < ZERO_RHS_NORM {
            r_norm
        } else {
            r_norm / b_norm
        }
    }
}
