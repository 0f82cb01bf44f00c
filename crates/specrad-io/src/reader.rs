//! Parser for plain-text matrix files.
//!
//! The first significant line holds the matrix dimension `m` as a base-10
//! integer, followed by exactly `m` lines each containing `m`
//! whitespace-separated floating-point values, row-major. An odd `m` is
//! padded with one zero row and one zero column, so callers always receive
//! an even-dimensioned matrix.

use std::path::Path;

use ndarray::Array2;

use crate::MatrixFileError;

/// Parse a matrix from file content.
pub fn parse_matrix(content: &str) -> Result<Array2<f64>, MatrixFileError> {
    let mut declared: Option<usize> = None;
    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut last_line = 0;

    for (index, raw) in content.lines().enumerate() {
        let line_no = index + 1;
        last_line = line_no;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some(m) = declared else {
            let m: usize = line.parse().map_err(|_| MatrixFileError::Format {
                line: line_no,
                message: format!("Expected the matrix dimension, got '{}'", line),
            })?;
            if m == 0 {
                return Err(MatrixFileError::Format {
                    line: line_no,
                    message: "Matrix dimension must be positive".into(),
                });
            }
            declared = Some(m);
            continue;
        };

        if rows.len() == m {
            return Err(MatrixFileError::Format {
                line: line_no,
                message: format!("Expected {} rows, found extra data", m),
            });
        }

        let values = line
            .split_whitespace()
            .map(|token| {
                token.parse::<f64>().map_err(|_| MatrixFileError::Format {
                    line: line_no,
                    message: format!("Invalid value '{}'", token),
                })
            })
            .collect::<Result<Vec<f64>, _>>()?;

        if values.len() != m {
            return Err(MatrixFileError::Format {
                line: line_no,
                message: format!("Expected {} values per row, got {}", m, values.len()),
            });
        }
        rows.push(values);
    }

    let m = declared.ok_or(MatrixFileError::Format {
        line: 1,
        message: "Missing matrix dimension".into(),
    })?;
    if rows.len() != m {
        return Err(MatrixFileError::Format {
            line: last_line,
            message: format!("Header says {} rows but found {}", m, rows.len()),
        });
    }

    // Pad an odd dimension with one zero row and one zero column.
    let dim = if m % 2 != 0 { m + 1 } else { m };
    let mut matrix = Array2::<f64>::zeros((dim, dim));
    for (i, row) in rows.iter().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            matrix[[i, j]] = value;
        }
    }
    Ok(matrix)
}

/// Load and parse a matrix file from disk.
pub fn load_matrix(path: &Path) -> Result<Array2<f64>, MatrixFileError> {
    let content = std::fs::read_to_string(path)?;
    parse_matrix(&content)
}
