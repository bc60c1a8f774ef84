//! relax: Jacobi and Gauss-Seidel on the tridiagonal pyramid system.
//!
//! With no arguments, runs both methods over gamma = 3, 2, 1 and prints one
//! report block per run.

mod output;

use std::io::{self, Write};

use anyhow::{Result, bail};
use clap::Parser;
use relax_solver::{DEFAULT_GAMMAS, Method, SolverConfig, cases, run_sweep};

use crate::output::write_run;

#[derive(Parser)]
#[command(name = "relax")]
#[command(about = "Jacobi and Gauss-Seidel sweep over a tridiagonal linear system")]
#[command(version)]
struct Cli {
    /// Splitting method to run: jacobi or gs (repeatable, default: both)
    #[arg(short, long = "method")]
    methods: Vec<Method>,

    /// Diagonal value gamma (repeatable, default: 3, 2, 1)
    #[arg(short, long = "gamma", allow_negative_numbers = true)]
    gammas: Vec<f64>,

    /// Maximum number of iterations per run
    #[arg(long, default_value_t = 1200)]
    max_iter: usize,

    /// Relative residual tolerance
    #[arg(long, default_value_t = 1e-6)]
    tol: f64,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.tol.is_nan() || cli.tol <= 0.0 {
        bail!("tolerance must be positive, got {}", cli.tol);
    }

    let methods = if cli.methods.is_empty() {
        Method::ALL.to_vec()
    } else {
        cli.methods
    };
    let gammas = if cli.gammas.is_empty() {
        DEFAULT_GAMMAS.to_vec()
    } else {
        cli.gammas
    };

    let config = SolverConfig::default()
        .with_max_iter(cli.max_iter)
        .with_tol(cli.tol);
    let runs = run_sweep(&cases(&methods, &gammas), &config);
    log::debug!(
        "{} of {} runs converged",
        runs.iter()
            .filter(|run| matches!(&run.result, Ok(r) if r.outcome.is_converged()))
            .count(),
        runs.len()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for run in &runs {
        write_run(&mut out, run)?;
    }
    out.flush()?;

    Ok(())
}
