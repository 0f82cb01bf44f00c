//! Compare the sequential and four-role distributed modes.
//!
//! The two modes share one recurrence only when the top and bottom output
//! segments evolve identically, so exact parity is checked on matrices with
//! that symmetry; on general matrices the distributed mode is checked
//! against a single-threaded reference of its own combination scheme.

use ndarray::{array, Array1, Array2};

use specrad_core::partition::{partition, Quadrant};
use specrad_core::solver::power::PowerSolver;
use specrad_core::solver::quadrant::QuadSolver;
use specrad_core::solver::EigenSolver;
use specrad_core::vector;

/// Single-threaded replay of the quadrant combination scheme: four local
/// half-iterates, worker 1 folded into the coordinator's top segment,
/// worker 3 into worker 2's bottom segment, one joint normalisation.
fn reference_quadrant_scheme(matrix: &Array2<f64>, iterations: usize) -> f64 {
    let blocks = partition(matrix);
    let h = blocks.half();
    let owned: Vec<Array2<f64>> = Quadrant::ALL
        .iter()
        .map(|&q| blocks.block(q).clone())
        .collect();

    let mut iterates = vec![Array1::<f64>::ones(h); 4];
    let mut scale = 0.0;

    for _ in 0..iterations {
        let updates: Vec<Array1<f64>> = owned
            .iter()
            .zip(iterates.iter())
            .map(|(block, v)| {
                Array1::from_shape_fn(h, |i| vector::dot(block.row(i), v.view()))
            })
            .collect();

        let mut top = &updates[0] + &updates[1];
        let mut bottom = &updates[2] + &updates[3];

        scale = (vector::sum_of_squares(bottom.view()) + vector::sum_of_squares(top.view()))
            .sqrt();
        top.mapv_inplace(|x| x / scale);
        bottom.mapv_inplace(|x| x / scale);

        iterates = vec![top.clone(), top, bottom.clone(), bottom];
    }

    scale
}

#[test]
fn test_parity_on_uniform_matrix() {
    // Every entry equal: both segments evolve identically, so the two
    // modes must agree to rounding. Dominant eigenvalue of c * ones(n) is
    // c * n.
    let n = 6;
    let matrix = Array2::<f64>::from_elem((n, n), 0.5);

    let sequential = PowerSolver.dominant_eigenvalue(&matrix, 8).unwrap();
    let distributed = QuadSolver.dominant_eigenvalue(&matrix, 8).unwrap();

    assert!((sequential - 3.0).abs() < 1e-12, "sequential = {}", sequential);
    assert!(
        (sequential - distributed).abs() < 1e-12,
        "sequential = {}, distributed = {}",
        sequential,
        distributed
    );
}

#[test]
fn test_distributed_matches_reference_scheme_exactly() {
    let matrix = array![
        [4.0, 1.0, -2.0, 0.5],
        [1.0, 3.0, 0.0, -1.0],
        [-2.0, 0.0, 5.0, 2.0],
        [0.5, -1.0, 2.0, 1.0],
    ];

    for iterations in [1, 2, 7, 25] {
        let threaded = QuadSolver.dominant_eigenvalue(&matrix, iterations).unwrap();
        let reference = reference_quadrant_scheme(&matrix, iterations);
        assert!(
            (threaded - reference).abs() < 1e-12,
            "K = {}: threaded = {}, reference = {}",
            iterations,
            threaded,
            reference
        );
    }
}

#[test]
fn test_distributed_estimate_finite_on_positive_matrix() {
    let n = 8;
    let matrix = Array2::<f64>::from_shape_fn((n, n), |(i, j)| {
        1.0 / (1.0 + (i as f64 - j as f64).abs())
    });

    let estimate = QuadSolver.dominant_eigenvalue(&matrix, 30).unwrap();
    assert!(estimate.is_finite() && estimate > 0.0, "estimate = {}", estimate);
}

#[test]
fn test_sequential_estimate_bounded_by_row_sums() {
    // For all square matrices the normalised estimate cannot exceed the
    // maximum absolute row sum (induced infinity norm).
    let matrix = array![
        [2.0, -1.0, 0.0, 0.0],
        [-1.0, 2.0, -1.0, 0.0],
        [0.0, -1.0, 2.0, -1.0],
        [0.0, 0.0, -1.0, 2.0],
    ];
    let estimate = PowerSolver.dominant_eigenvalue(&matrix, 100).unwrap();
    assert!(estimate.is_finite());
    assert!(estimate > 0.0);
    assert!(estimate <= 4.0 + 1e-12, "estimate = {}", estimate);
}
