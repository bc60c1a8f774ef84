//! Error types for splitting and solving.

use thiserror::Error;

/// Errors that can occur while building a splitting or solving a system.
#[derive(Debug, Error)]
pub enum Error {
    /// The splitting matrix Q has a zero pivot and cannot be inverted.
    #[error("Singular splitting matrix: zero pivot in row {row}")]
    SingularSplitting { row: usize },

    /// The eigenvalue solver failed.
    #[error("Eigenvalue computation failed: {0}")]
    EigenDecomposition(String),

    /// A method name could not be recognized.
    #[error("Unknown method '{0}' (expected 'jacobi' or 'gs')")]
    UnknownMethod(String),
}

/// Result type for solver operations.
pub type Result<T> = std::result::Result<T, Error>;
