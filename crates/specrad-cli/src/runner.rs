//! Job runner: loads the matrix, selects a solver, times the estimate.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;

use specrad_core::solver::power::PowerSolver;
use specrad_core::solver::quadrant::QuadSolver;
use specrad_core::solver::EigenSolver;

use crate::config::{JobConfig, SolverMode};

/// Results from one solver run.
#[derive(Debug, Serialize)]
pub struct RunReport {
    /// Execution mode name, as reported by the solver.
    pub method: String,
    /// Matrix dimension after any loader padding.
    pub dimension: usize,
    /// Fixed iteration budget used for the run.
    pub iterations: usize,
    /// Dominant-eigenvalue estimate (may be non-finite for degenerate input).
    pub eigenvalue: f64,
    /// Wall-clock solve time in seconds, excluding file loading.
    pub elapsed_seconds: f64,
}

/// Run a full job from a parsed configuration.
pub fn run_job(job: &JobConfig) -> Result<RunReport> {
    let matrix_path = Path::new(&job.input.matrix);
    let matrix = specrad_io::reader::load_matrix(matrix_path)
        .with_context(|| format!("Cannot read matrix file {}", matrix_path.display()))?;

    let dimension = matrix.nrows();
    println!("Matrix: {} ({}x{})", matrix_path.display(), dimension, dimension);

    let solver: Box<dyn EigenSolver> = match job.solver.mode {
        SolverMode::Single => Box::new(PowerSolver),
        SolverMode::Quad => Box::new(QuadSolver),
    };
    println!("Mode: {}", solver.method_name());
    println!("Iterations: {}", job.solver.iterations);

    let start = Instant::now();
    let eigenvalue = solver
        .dominant_eigenvalue(&matrix, job.solver.iterations)
        .map_err(|e| anyhow::anyhow!("Solver error: {}", e))?;
    let elapsed = start.elapsed();

    Ok(RunReport {
        method: solver.method_name().to_string(),
        dimension,
        iterations: job.solver.iterations,
        eigenvalue,
        elapsed_seconds: elapsed.as_secs_f64(),
    })
}

/// Write the run report to a JSON file.
pub fn write_report_json(report: &RunReport, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(report)
        .map_err(|e| anyhow::anyhow!("JSON serialisation error: {}", e))?;
    std::fs::write(path, json)?;

    println!("Report written to: {}", path.display());
    Ok(())
}
