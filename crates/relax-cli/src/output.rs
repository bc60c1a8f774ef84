//! Console report for sweep runs.

use std::io::{self, Write};

use relax_core::Vector;
use relax_solver::{SolveOutcome, SweepRun};

/// Format a solution vector as one space-separated row.
pub fn format_row(x: &Vector) -> String {
    x.iter()
        .map(|v| format!("{:.6}", v))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Write the report block for one run, followed by a blank line.
pub fn write_run<W: Write>(out: &mut W, run: &SweepRun) -> io::Result<()> {
    writeln!(out, "method: {}", run.case.method)?;
    writeln!(out, "gamma: {}", run.case.gamma)?;

    match &run.result {
        Ok(result) => match result.outcome {
            SolveOutcome::Converged { iterations } => {
                writeln!(out, "Result (done in {} iterations):", iterations)?;
                writeln!(out, "{}", format_row(&result.x))?;
            }
            SolveOutcome::Diverged => {
                writeln!(out, "Diverges")?;
                writeln!(out, "No result (done in 0 iterations)")?;
            }
            SolveOutcome::BudgetExhausted { iterations } => {
                writeln!(out, "No result (done in {} iterations)", iterations)?;
            }
        },
        Err(e) => writeln!(out, "Error: {}", e)?,
    }

    writeln!(out)
}
