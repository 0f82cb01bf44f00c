//! Eigensolver abstraction and implementations.
//!
//! The [`EigenSolver`] trait defines the interface both execution modes
//! implement: the single-sequence solver ([`power::PowerSolver`]) and the
//! four-role distributed solver ([`quadrant::QuadSolver`]). The iteration
//! count is a fixed budget supplied by the caller; there is no convergence
//! test and no early exit in either mode.

pub mod power;
pub mod quadrant;

use ndarray::Array2;
use specrad_compute::link::LinkError;
use thiserror::Error;

/// Errors that can occur during an eigenvalue estimation run.
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Role link failed: {0}")]
    Link(#[from] LinkError),

    #[error("Protocol violation: {0}")]
    Protocol(String),

    #[error("Failed to start a worker role: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("A worker role terminated abnormally")]
    WorkerPanic,
}

/// A dominant-eigenvalue estimator over a dense square matrix.
///
/// Numeric degeneracy (a zero iterate norm) is propagated, not trapped: the
/// estimate may be NaN or infinite, matching floating-point division
/// semantics, and it is the caller's job to inspect it.
pub trait EigenSolver {
    /// Estimate the dominant eigenvalue magnitude by running exactly
    /// `iterations` power-iteration steps over `matrix`.
    fn dominant_eigenvalue(
        &self,
        matrix: &Array2<f64>,
        iterations: usize,
    ) -> Result<f64, SolverError>;

    /// Human-readable name of the execution mode.
    fn method_name(&self) -> &str;
}
