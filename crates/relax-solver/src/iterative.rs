//! Fixed-point iteration shared by all splitting methods.
//!
//! ```text
//! x_0 = 0
//! for k in 0..K:
//!     if ||A x_k - b|| / ||b|| < eps: return Converged(k)
//!     x_{k+1} = P x_k + R
//! return BudgetExhausted(K)
//! ```
//!
//! The iterate produced by the K-th update is returned but never tested, so
//! reaching the cap always reports [`SolveOutcome::BudgetExhausted`].
//!
//! The spectral radius check runs first. A splitting whose iteration matrix
//! has spectral radius >= 1 is reported as [`SolveOutcome::Diverged`] without
//! touching the iteration budget.

use relax_core::{LinearSystem, Vector};

use crate::error::Result;
use crate::method::{Splitting, SplittingMethod};

/// Iterative solver configuration.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Maximum number of fixed-point updates (K).
    pub max_iter: usize,
    /// Convergence tolerance (relative residual).
    pub tol: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iter: 1200,
            tol: 1e-6,
        }
    }
}

impl SolverConfig {
    /// Set the iteration cap.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Set the relative residual tolerance.
    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }
}

/// How an iterative solve ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveOutcome {
    /// Spectral radius >= 1; no iterations were run.
    Diverged,
    /// Relative residual dropped below the tolerance after `iterations` updates.
    Converged { iterations: usize },
    /// The iteration cap was reached without meeting the tolerance.
    BudgetExhausted { iterations: usize },
}

impl SolveOutcome {
    /// Number of fixed-point updates performed.
    pub fn iterations(&self) -> usize {
        match self {
            SolveOutcome::Diverged => 0,
            SolveOutcome::Converged { iterations } | SolveOutcome::BudgetExhausted { iterations } => {
                *iterations
            }
        }
    }

    /// Returns true if the tolerance was met.
    #[inline]
    pub fn is_converged(&self) -> bool {
        matches!(self, SolveOutcome::Converged { .. })
    }

    /// Returns true if the spectral check rejected the splitting.
    #[inline]
    pub fn is_diverged(&self) -> bool {
        matches!(self, SolveOutcome::Diverged)
    }
}

/// Result of an iterative solve.
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// Last iterate (zero when diverged).
    pub x: Vector,
    /// How the solve ended.
    pub outcome: SolveOutcome,
    /// Relative residual of `x` (NaN when diverged).
    pub residual: f64,
    /// Spectral radius of the iteration matrix.
    pub spectral_radius: f64,
}

/// Solve A·x = b with the given splitting method.
///
/// Returns an error only if the splitting itself cannot be built (singular Q,
/// failed eigenvalue computation). Divergence and an exhausted budget are
/// reported through [`SolveResult::outcome`].
pub fn solve(
    method: &dyn SplittingMethod,
    system: &LinearSystem,
    config: &SolverConfig,
) -> Result<SolveResult> {
    let Splitting {
        p,
        r,
        spectral_radius,
        converges,
    } = method.splitting(system)?;

    let mut x = Vector::zeros();

    if !converges {
        log::warn!(
            "{}: spectral radius {:.6} >= 1, iteration diverges",
            method.name(),
            spectral_radius
        );
        return Ok(SolveResult {
            x,
            outcome: SolveOutcome::Diverged,
            residual: f64::NAN,
            spectral_radius,
        });
    }

    log::debug!(
        "{}: spectral radius {:.6}, max_iter = {}, tol = {:e}",
        method.name(),
        spectral_radius,
        config.max_iter,
        config.tol
    );

    for k in 0..config.max_iter {
        let residual = system.relative_residual(&x);
        log::trace!("{}: k = {}, residual = {:e}", method.name(), k, residual);

        if residual < config.tol {
            log::debug!("{}: converged in {} iterations", method.name(), k);
            return Ok(SolveResult {
                x,
                outcome: SolveOutcome::Converged { iterations: k },
                residual,
                spectral_radius,
            });
        }

        x = p * x + r;
    }

    let residual = system.relative_residual(&x);
    log::warn!(
        "{}: no convergence after {} iterations (residual = {:e})",
        method.name(),
        config.max_iter,
        residual
    );

    Ok(SolveResult {
        x,
        outcome: SolveOutcome::BudgetExhausted {
            iterations: config.max_iter,
        },
        residual,
        spectral_radius,
    })
}
