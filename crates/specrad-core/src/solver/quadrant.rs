//! Four-role distributed power iteration over quadrant blocks.
//!
//! One coordinator and three workers each own one quadrant block of the
//! parent matrix and keep a local half-length iterate. Every iteration each
//! role applies its block to its iterate, the workers ship the unnormalised
//! updates to the coordinator, and the coordinator folds them into two
//! output segments, normalises both with one combined scale, and ships the
//! replacement vectors back. Because every exchange is a blocking
//! rendezvous, the per-iteration round trip doubles as the barrier; no
//! explicit barrier primitive exists.
//!
//! ## Topology
//!
//! The group has exactly four roles; a fifth role or fewer than four is out
//! of contract. The assignment of blocks and output segments is a wiring
//! table ([`TOPOLOGY`]), so a finer partitioning would be a data change
//! rather than a protocol rewrite:
//!
//! | Role        | Block        | Feeds segment |
//! |-------------|--------------|---------------|
//! | Coordinator | top-left     | top           |
//! | Worker 1    | top-right    | top           |
//! | Worker 2    | bottom-left  | bottom        |
//! | Worker 3    | bottom-right | bottom        |
//!
//! ## Combination scheme
//!
//! Each role iterates its own block against its own independently evolving
//! half-vector, so the folded update is not the block-partitioned form of
//! the full matrix-vector product. The distributed recurrence agrees with
//! the sequential one exactly when the top and bottom segments evolve
//! identically (for instance on a uniform matrix); elsewhere the two modes
//! are distinct estimators by construction.

use std::thread;

use ndarray::{Array1, Array2};
use specrad_compute::channel::ChannelLink;
use specrad_compute::link::{Message, RoleLink};

use super::{EigenSolver, SolverError};
use crate::partition::{self, Quadrant};
use crate::vector;

/// A role in the fixed four-way group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Coordinator,
    Worker(u8),
}

/// Output segment of the combined iterate that a role's update feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Top,
    Bottom,
}

/// One row of the wiring table: which block a role owns and which output
/// segment its update is folded into.
#[derive(Debug, Clone, Copy)]
pub struct RoleAssignment {
    pub role: Role,
    pub quadrant: Quadrant,
    pub segment: Segment,
}

/// Wiring table for the four-way topology. Entry 0 is the coordinator;
/// entries 1–3 are the workers in link order.
pub const TOPOLOGY: [RoleAssignment; 4] = [
    RoleAssignment {
        role: Role::Coordinator,
        quadrant: Quadrant::TopLeft,
        segment: Segment::Top,
    },
    RoleAssignment {
        role: Role::Worker(1),
        quadrant: Quadrant::TopRight,
        segment: Segment::Top,
    },
    RoleAssignment {
        role: Role::Worker(2),
        quadrant: Quadrant::BottomLeft,
        segment: Segment::Bottom,
    },
    RoleAssignment {
        role: Role::Worker(3),
        quadrant: Quadrant::BottomRight,
        segment: Segment::Bottom,
    },
];

/// Apply one quadrant block to a half-length iterate, row by row.
fn apply_block(block: &Array2<f64>, iterate: &Array1<f64>) -> Array1<f64> {
    Array1::from_shape_fn(block.nrows(), |i| vector::dot(block.row(i), iterate.view()))
}

/// Ship a quadrant block to a worker: the dimension first, then every row.
pub fn send_block<L: RoleLink>(link: &L, block: &Array2<f64>) -> Result<(), SolverError> {
    link.send(Message::Dimension(block.nrows()))?;
    for row in block.rows() {
        link.send(Message::Row(row.to_vec()))?;
    }
    Ok(())
}

/// Receive a quadrant block shipped by the coordinator during setup.
///
/// The worker allocates its own block from the received rows; after this
/// call it shares no storage with the coordinator.
pub fn receive_block<L: RoleLink>(link: &L) -> Result<Array2<f64>, SolverError> {
    let half = link.recv_dimension()?;
    let mut data = Vec::with_capacity(half * half);
    for index in 0..half {
        let row = link.recv_row()?;
        if row.len() != half {
            return Err(SolverError::Protocol(format!(
                "Block row {} has length {}, expected {}",
                index,
                row.len(),
                half
            )));
        }
        data.extend_from_slice(&row);
    }
    Array2::from_shape_vec((half, half), data)
        .map_err(|e| SolverError::Protocol(format!("Malformed block transfer: {}", e)))
}

/// Worker half of the per-iteration protocol (identical for roles 1–3).
///
/// Each iteration: apply the local block to the local iterate, send the
/// unnormalised update to the coordinator, then block until the normalised
/// replacement arrives and overwrite the iterate with it. Terminates without
/// a return value once the final receive completes.
pub fn worker_search<L: RoleLink>(
    block: &Array2<f64>,
    iterations: usize,
    link: &L,
) -> Result<(), SolverError> {
    let half = block.nrows();
    let mut iterate = Array1::<f64>::ones(half);

    for _ in 0..iterations {
        let update = apply_block(block, &iterate);
        link.send(Message::Vector(update.to_vec()))?;
        iterate = Array1::from_vec(link.recv_vector()?);
    }
    Ok(())
}

/// Coordinator half of the per-iteration protocol.
///
/// The coordinator owns the top-left block and the three links to the
/// workers, in [`TOPOLOGY`] order. Each iteration it seeds the top segment
/// with its own update, folds every worker's update into that worker's
/// output segment, normalises both segments with one combined scale, ships
/// the replacements back, and records the scale as the current estimate.
/// After the final iteration the last recorded scale is returned.
pub fn coordinator_search<L: RoleLink>(
    block: &Array2<f64>,
    iterations: usize,
    links: &[L; 3],
) -> Result<f64, SolverError> {
    let half = block.nrows();
    let mut iterate = Array1::<f64>::ones(half);
    let mut scale = 0.0;

    for _ in 0..iterations {
        let mut top = apply_block(block, &iterate);
        let mut bottom = Array1::<f64>::zeros(half);

        // Receive in link order: worker 1, then 2, then 3. Each update is
        // folded elementwise into the segment its role feeds.
        for (link, assignment) in links.iter().zip(TOPOLOGY.iter().skip(1)) {
            let update = Array1::from_vec(link.recv_vector()?);
            if update.len() != half {
                return Err(SolverError::Protocol(format!(
                    "Update from {:?} has length {}, expected {}",
                    assignment.role,
                    update.len(),
                    half
                )));
            }
            match assignment.segment {
                Segment::Top => top += &update,
                Segment::Bottom => bottom += &update,
            }
        }

        // One joint normalisation across both segments. A zero scale divides
        // through to non-finite components, which keep flowing through the
        // remaining iterations untrapped.
        scale = (vector::sum_of_squares(bottom.view()) + vector::sum_of_squares(top.view()))
            .sqrt();
        top.mapv_inplace(|x| x / scale);
        bottom.mapv_inplace(|x| x / scale);

        for (link, assignment) in links.iter().zip(TOPOLOGY.iter().skip(1)) {
            let replacement = match assignment.segment {
                Segment::Top => &top,
                Segment::Bottom => &bottom,
            };
            link.send(Message::Vector(replacement.to_vec()))?;
        }

        // The coordinator's own iterate is the normalised top segment.
        iterate = top;
    }

    Ok(scale)
}

/// Distributed dominant-eigenvalue solver over the fixed four-role group.
///
/// The calling thread takes the coordinator role; the three workers run on
/// spawned threads connected by in-process rendezvous links. Blocks are
/// transferred once at setup; each role then owns its block and iterate
/// exclusively for the run's duration, and all cross-role coupling happens
/// by value through the link messages.
#[derive(Debug, Default)]
pub struct QuadSolver;

type WorkerHandle = thread::JoinHandle<Result<(), SolverError>>;

/// Spawn one worker role and ship its block over a fresh link.
///
/// The worker is spawned before the transfer because sends are rendezvous
/// operations: the first `send_block` message would otherwise wait forever.
fn spawn_worker(
    index: usize,
    block: &Array2<f64>,
    iterations: usize,
) -> Result<(ChannelLink, WorkerHandle), SolverError> {
    let (coordinator_end, worker_end) = ChannelLink::pair();

    let handle = thread::Builder::new()
        .name(format!("quad-worker-{}", index))
        .spawn(move || -> Result<(), SolverError> {
            let block = receive_block(&worker_end)?;
            worker_search(&block, iterations, &worker_end)
        })?;

    send_block(&coordinator_end, block)?;
    Ok((coordinator_end, handle))
}

impl EigenSolver for QuadSolver {
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
        if n % 2 != 0 {
            return Err(SolverError::InvalidInput(format!(
                "Quadrant partitioning requires an even dimension, got {}",
                n
            )));
        }
        if iterations == 0 {
            return Err(SolverError::InvalidInput(
                "Iteration count must be positive".into(),
            ));
        }

        let blocks = partition::partition(matrix);

        let (link_1, worker_1) =
            spawn_worker(1, blocks.block(TOPOLOGY[1].quadrant), iterations)?;
        let (link_2, worker_2) =
            spawn_worker(2, blocks.block(TOPOLOGY[2].quadrant), iterations)?;
        let (link_3, worker_3) =
            spawn_worker(3, blocks.block(TOPOLOGY[3].quadrant), iterations)?;

        let estimate = coordinator_search(
            blocks.block(TOPOLOGY[0].quadrant),
            iterations,
            &[link_1, link_2, link_3],
        )?;

        for handle in [worker_1, worker_2, worker_3] {
            handle.join().map_err(|_| SolverError::WorkerPanic)??;
        }

        Ok(estimate)
    }

    fn method_name(&self) -> &str {
        "Power iteration (four-role quadrant protocol)"
    }
}
