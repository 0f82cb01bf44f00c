//! Quadrant partitioning of an even-dimensioned square matrix.
//!
//! An `n × n` matrix (`n` even) is sliced into four `(n/2) × (n/2)` blocks
//! with a fixed index mapping:
//!
//! ```text
//! ┌───────────┬───────────┐
//! │ 0 top-left│1 top-right│
//! ├───────────┼───────────┤
//! │2 bot-left │3 bot-right│
//! └───────────┴───────────┘
//! ```
//!
//! The mapping is structural, not a configuration choice: the distributed
//! protocol's wiring table assigns each block to exactly one role.

use ndarray::{s, Array2};

/// Index of one quadrant block within a [`BlockSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Quadrant {
    /// All quadrants in block-index order (0–3).
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    /// Block index of this quadrant (0–3).
    pub fn index(self) -> usize {
        match self {
            Quadrant::TopLeft => 0,
            Quadrant::TopRight => 1,
            Quadrant::BottomLeft => 2,
            Quadrant::BottomRight => 3,
        }
    }
}

/// The four quadrant blocks of a parent matrix.
///
/// Each block is an independently owned copy, never a view: mutating one
/// block cannot affect the parent matrix or a sibling block. Each block
/// becomes the lifetime-owned working state of exactly one role in the
/// distributed protocol.
#[derive(Debug, Clone)]
pub struct BlockSet {
    half: usize,
    blocks: [Array2<f64>; 4],
}

impl BlockSet {
    /// Block dimension `h = n/2`.
    pub fn half(&self) -> usize {
        self.half
    }

    /// Borrow one quadrant block.
    pub fn block(&self, quadrant: Quadrant) -> &Array2<f64> {
        &self.blocks[quadrant.index()]
    }

    /// Consume the set, yielding the blocks in index order.
    pub fn into_blocks(self) -> [Array2<f64>; 4] {
        self.blocks
    }

    /// Rebuild the parent matrix by placing every block at its quadrant.
    pub fn reassemble(&self) -> Array2<f64> {
        let h = self.half;
        let n = 2 * h;
        let mut full = Array2::<f64>::zeros((n, n));
        full.slice_mut(s![..h, ..h]).assign(&self.blocks[0]);
        full.slice_mut(s![..h, h..]).assign(&self.blocks[1]);
        full.slice_mut(s![h.., ..h]).assign(&self.blocks[2]);
        full.slice_mut(s![h.., h..]).assign(&self.blocks[3]);
        full
    }
}

/// Slice a square matrix into its four quadrant blocks.
///
/// Pure: allocates four fresh blocks and performs no validation of the
/// matrix contents. The even-dimension precondition is owned by the loader
/// and only asserted in debug builds here.
pub fn partition(matrix: &Array2<f64>) -> BlockSet {
    debug_assert!(matrix.is_square());
    debug_assert_eq!(
        matrix.nrows() % 2,
        0,
        "quadrant partitioning requires an even dimension"
    );

    let h = matrix.nrows() / 2;
    let blocks = [
        matrix.slice(s![..h, ..h]).to_owned(),
        matrix.slice(s![..h, h..]).to_owned(),
        matrix.slice(s![h.., ..h]).to_owned(),
        matrix.slice(s![h.., h..]).to_owned(),
    ];
    BlockSet { half: h, blocks }
}
