//! Writer for the plain-text matrix format read by [`crate::reader`].

use std::io::Write;
use std::path::Path;

use ndarray::Array2;

use crate::MatrixFileError;

/// Write a matrix to disk with a size comment header.
pub fn write_matrix(matrix: &Array2<f64>, path: &Path) -> Result<(), MatrixFileError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let n = matrix.nrows();
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "# Matrix size: {}x{}", n, n)?;
    writeln!(file, "{}", n)?;
    for row in matrix.rows() {
        let line = row
            .iter()
            .map(|value| value.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(file, "{}", line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::load_matrix;
    use ndarray::array;

    #[test]
    fn test_written_file_parses_back() {
        let matrix = array![[2.0, 0.5], [-1.0, 1.0]];
        let dir = std::env::temp_dir().join("specrad-writer-test");
        let path = dir.join("matrix.txt");

        write_matrix(&matrix, &path).unwrap();
        assert_eq!(load_matrix(&path).unwrap(), matrix);

        std::fs::remove_dir_all(&dir).ok();
    }
}
