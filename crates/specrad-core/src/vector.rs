//! Vector kernels shared by every eigensolver.
//!
//! These are the only numeric primitives the power iteration needs. The sum
//! of squares is exposed separately from the norm because the quadrant
//! coordinator combines the squared magnitudes of two half-vectors before
//! taking a single square root.

use ndarray::ArrayView1;

/// Dot product of two equal-length vectors.
///
/// The caller guarantees matching lengths; this is not checked.
pub fn dot(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Euclidean norm of a vector.
pub fn norm(v: ArrayView1<'_, f64>) -> f64 {
    dot(v, v).sqrt()
}

/// Sum of squared components, i.e. the squared Euclidean norm.
pub fn sum_of_squares(v: ArrayView1<'_, f64>) -> f64 {
    dot(v, v)
}
