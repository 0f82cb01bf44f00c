//! # Specrad Core
//!
//! The numerical backbone of the specrad toolkit. This crate estimates the
//! dominant eigenvalue magnitude of a dense square matrix with the
//! power-iteration method, in two execution modes that share one recurrence.
//!
//! ## Architecture
//!
//! Both solvers implement the [`solver::EigenSolver`] trait, which provides
//! a uniform interface for running a fixed-budget iteration. The sequential
//! mode ([`solver::power::PowerSolver`]) runs the full recurrence in one
//! control flow; the distributed mode ([`solver::quadrant::QuadSolver`])
//! coordinates it across one coordinator and three workers, each owning one
//! quadrant block of the matrix.
//!
//! ## Modules
//!
//! - [`vector`]: dot product, norm, and sum-of-squares kernels.
//! - [`partition`]: quadrant partitioning of an even-dimensioned matrix.
//! - [`solver`]: eigensolver trait and both implementations.

pub mod partition;
pub mod solver;
pub mod vector;
