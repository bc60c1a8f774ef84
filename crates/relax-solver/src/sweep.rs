//! Sweeps over (method, gamma) combinations.
//!
//! Every case builds its own [`LinearSystem`] and solves it independently, so
//! a failing case never affects the others. Results are returned in case
//! order whether or not the `parallel` feature is enabled.

use relax_core::LinearSystem;

use crate::error::Result;
use crate::iterative::{SolveResult, SolverConfig, solve};
use crate::method::Method;
use crate::parallel::parallel_map;

/// Gamma values of the default sweep, in reporting order.
pub const DEFAULT_GAMMAS: [f64; 3] = [3.0, 2.0, 1.0];

/// A single (method, gamma) combination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepCase {
    pub method: Method,
    pub gamma: f64,
}

/// Outcome of one sweep case.
#[derive(Debug)]
pub struct SweepRun {
    pub case: SweepCase,
    pub result: Result<SolveResult>,
}

/// Cross product of methods and gammas, methods outer.
pub fn cases(methods: &[Method], gammas: &[f64]) -> Vec<SweepCase> {
    methods
        .iter()
        .flat_map(|&method| gammas.iter().map(move |&gamma| SweepCase { method, gamma }))
        .collect()
}

/// Jacobi and Gauss-Seidel over gamma = 3, 2, 1.
pub fn default_cases() -> Vec<SweepCase> {
    cases(&Method::ALL, &DEFAULT_GAMMAS)
}

/// Build the pyramid system for `case` and solve it.
pub fn run_case(case: SweepCase, config: &SolverConfig) -> SweepRun {
    let system = LinearSystem::pyramid(case.gamma);
    let result = solve(&case.method, &system, config);

    if let Err(e) = &result {
        log::warn!("{} at gamma = {}: {}", case.method, case.gamma, e);
    }

    SweepRun { case, result }
}

/// Run every case.
pub fn run_sweep(cases: &[SweepCase], config: &SolverConfig) -> Vec<SweepRun> {
    log::debug!(
        "Running {} sweep cases ({})",
        cases.len(),
        if cfg!(feature = "parallel") {
            "parallel"
        } else {
            "sequential"
        }
    );

    parallel_map(cases, |&case| run_case(case, config))
}
