// src/data_input/velocity.rs

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::constants::ROW_COUNT;
use crate::error::AnalysisError;

/// Read a per-row velocity file: plain text, exactly one floating-point
/// value per line, one line per plate row.
pub fn read_row_velocities(path: &Path) -> Result<Vec<f64>, AnalysisError> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            AnalysisError::MissingData(format!("velocity file '{}' not found", path.display()))
        } else {
            AnalysisError::io(path, e)
        }
    })?;

    let lines: Vec<&str> = content.lines().collect();
    if lines.len() != ROW_COUNT {
        return Err(AnalysisError::input_format(
            path,
            format!("expected {} velocity lines, found {}", ROW_COUNT, lines.len()),
        ));
    }

    lines
        .iter()
        .map(|line| {
            line.trim().parse::<f64>().map_err(|_| {
                AnalysisError::input_format(
                    path,
                    format!("non-numeric velocity '{}'", line.trim()),
                )
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn sixteen_valid_lines_parse() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        for n in 0..ROW_COUNT {
            writeln!(file, "{}", n as f64 * 0.25).expect("write");
        }
        let velocities = read_row_velocities(file.path()).expect("parse");
        assert_eq!(velocities.len(), ROW_COUNT);
        assert_eq!(velocities[4], 1.0);
    }

    #[test]
    fn wrong_line_count_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        for _ in 0..ROW_COUNT - 1 {
            writeln!(file, "0.5").expect("write");
        }
        assert!(matches!(
            read_row_velocities(file.path()),
            Err(AnalysisError::InputFormat { .. })
        ));
    }

    #[test]
    fn non_numeric_line_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        for n in 0..ROW_COUNT {
            if n == 7 {
                writeln!(file, "fast").expect("write");
            } else {
                writeln!(file, "0.5").expect("write");
            }
        }
        assert!(matches!(
            read_row_velocities(file.path()),
            Err(AnalysisError::InputFormat { .. })
        ));
    }

    #[test]
    fn missing_file_is_missing_data() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(matches!(
            read_row_velocities(&dir.path().join("absent.txt")),
            Err(AnalysisError::MissingData(_))
        ));
    }
}

// src/data_input/velocity.rs
