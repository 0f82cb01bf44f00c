//! Single-sequence power iteration over the full matrix.
//!
//! Starting from a vector of ones, each step applies the matrix, measures
//! the Euclidean norm of the image, and rescales by it. After the fixed
//! iteration budget the last norm is the dominant-eigenvalue estimate.

use ndarray::{Array1, Array2};

use super::{EigenSolver, SolverError};
use crate::vector;

/// Power-iteration solver running the full recurrence in one control flow.
#[derive(Debug, Default)]
pub struct PowerSolver;

impl EigenSolver for PowerSolver {
    fn dominant_eigenvalue(
        &self,
        matrix: &Array2<f64>,
        iterations: usize,
    ) -> Result<f64, SolverError> {
        if !matrix.is_square() {
            return Err(SolverError::InvalidInput(format!(
                "Matrix must be square, got {}x{}",
                matrix.nrows(),
                matrix.ncols()
            )));
        }
        let n = matrix.nrows();
        if n == 0 {
            return Err(SolverError::InvalidInput("Empty matrix".into()));
        }
        if iterations == 0 {
            return Err(SolverError::InvalidInput(
                "Iteration count must be positive".into(),
            ));
        }

        let mut iterate = Array1::<f64>::ones(n);
        let mut lambda = 0.0;

        for _ in 0..iterations {
            iterate = Array1::from_shape_fn(n, |i| vector::dot(matrix.row(i), iterate.view()));
            lambda = vector::norm(iterate.view());
            // A zero lambda divides through to non-finite components, which
            // then flow to the returned estimate.
            iterate.mapv_inplace(|x| x / lambda);
        }

        Ok(lambda)
    }

    fn method_name(&self) -> &str {
        "Power iteration (single sequence)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_diagonal_converges_to_dominant_eigenvalue() {
        let matrix = array![[2.0, 0.0], [0.0, 1.0]];
        let lambda = PowerSolver.dominant_eigenvalue(&matrix, 10).unwrap();
        assert!((lambda - 2.0).abs() < 1e-2, "lambda = {}", lambda);

        let lambda = PowerSolver.dominant_eigenvalue(&matrix, 60).unwrap();
        assert!((lambda - 2.0).abs() < 1e-12, "lambda = {}", lambda);
    }

    #[test]
    fn test_single_step_norm_arithmetic() {
        // [[0,1],[1,0]] applied to ones is [1,1]; its norm is sqrt(2).
        let matrix = array![[0.0, 1.0], [1.0, 0.0]];
        let lambda = PowerSolver.dominant_eigenvalue(&matrix, 1).unwrap();
        assert!((lambda - std::f64::consts::SQRT_2).abs() < 1e-15);
    }

    #[test]
    fn test_zero_matrix_yields_non_finite_without_panicking() {
        let matrix = Array2::<f64>::zeros((4, 4));
        // The first step produces a zero iterate; normalising by its zero
        // norm makes every later estimate non-finite.
        let lambda = PowerSolver.dominant_eigenvalue(&matrix, 3).unwrap();
        assert!(!lambda.is_finite(), "lambda = {}", lambda);
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let matrix = array![[1.0]];
        assert!(matches!(
            PowerSolver.dominant_eigenvalue(&matrix, 0),
            Err(SolverError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_non_square_rejected() {
        let matrix = Array2::<f64>::zeros((2, 3));
        assert!(matches!(
            PowerSolver.dominant_eigenvalue(&matrix, 1),
            Err(SolverError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_symmetric_matrix_estimate_is_positive_and_finite() {
        let matrix = array![
            [4.0, 1.0, 0.0, 0.0],
            [1.0, 3.0, 1.0, 0.0],
            [0.0, 1.0, 2.0, 1.0],
            [0.0, 0.0, 1.0, 1.0],
        ];
        let lambda = PowerSolver.dominant_eigenvalue(&matrix, 50).unwrap();
        assert!(lambda.is_finite() && lambda > 0.0);
        // Dominant eigenvalue must be bounded by the max absolute row sum.
        assert!(lambda <= 5.0 + 1e-12);
    }
}
