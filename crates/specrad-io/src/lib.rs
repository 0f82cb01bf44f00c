//! # Specrad IO
//!
//! Plain-text matrix files for the specrad toolkit. The format is a
//! dimension line followed by the rows:
//!
//! ```text
//! # Matrix size: 3x3
//! 3
//! 1.0 2.0 3.0
//! 4.0 5.0 6.0
//! 7.0 8.0 9.0
//! ```
//!
//! Lines beginning with `#` are comments. The [`reader`] pads an odd
//! dimension with one zero row and one zero column so that the quadrant
//! partitioner downstream always sees an even dimension.

pub mod reader;
pub mod writer;

use thiserror::Error;

/// Errors during matrix file reading or writing.
#[derive(Debug, Error)]
pub enum MatrixFileError {
    #[error("Failed to access file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error at line {line}: {message}")]
    Format { line: usize, message: String },
}
