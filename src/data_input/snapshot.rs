// src/data_input/snapshot.rs

use csv::ReaderBuilder;
use std::fs;
use std::path::Path;

use crate::constants::{FORMAT_B_HEADER_LINES, ROW_COUNT, ROW_TERMINATOR_COLUMN};
use crate::data_input::plate::{Plate, PlateFormat};
use crate::error::AnalysisError;

/// OD sequences for all 16 rows of one snapshot, already reversed into
/// propagation order (well column 1 at index 0).
pub type SnapshotRows = Vec<Vec<f64>>;

/// Read and parse the snapshot backing one timestep. The file is read whole
/// and the handle dropped before parsing, so no handles accumulate across a
/// timestep scan regardless of parse failures.
pub fn read_snapshot_rows(plate: &Plate, timestep: usize) -> Result<SnapshotRows, AnalysisError> {
    let path = plate.snapshot_path(timestep);
    if !path.is_file() {
        return Err(AnalysisError::MissingData(format!(
            "snapshot '{}' not found",
            path.display()
        )));
    }
    let content = fs::read_to_string(&path).map_err(|e| AnalysisError::io(&path, e))?;
    match plate.format {
        PlateFormat::FormatA => parse_format_a(&path, &content),
        PlateFormat::FormatB => parse_format_b(&path, &content),
    }
}

fn parse_od(path: &Path, raw: &str) -> Result<f64, AnalysisError> {
    raw.trim().parse::<f64>().map_err(|_| {
        AnalysisError::input_format(path, format!("non-numeric OD value '{}'", raw.trim()))
    })
}

/// Format A: one comma-separated line per plate row, in fixed row order,
/// followed by a single sentinel footer line with no data. Raw values run
/// from the high well column down to column 1, so each row is reversed.
fn parse_format_a(path: &Path, content: &str) -> Result<SnapshotRows, AnalysisError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut records = Vec::new();
    for result in reader.records() {
        records.push(result.map_err(|e| AnalysisError::input_format(path, e.to_string()))?);
    }

    if records.pop().is_none() {
        return Err(AnalysisError::input_format(path, "empty snapshot file"));
    }
    if records.len() != ROW_COUNT {
        return Err(AnalysisError::input_format(
            path,
            format!(
                "expected {} data rows before the sentinel line, found {}",
                ROW_COUNT,
                records.len()
            ),
        ));
    }

    let mut rows = Vec::with_capacity(ROW_COUNT);
    for record in &records {
        let mut row = record
            .iter()
            .map(|field| parse_od(path, field))
            .collect::<Result<Vec<f64>, _>>()?;
        row.reverse();
        rows.push(row);
    }
    Ok(rows)
}

/// Format B: a 3-line header, then one record per well carrying the well
/// identifier in field 0 and the OD value in field 3. An identifier ending
/// in column "24" closes the row under assembly. As in format A, raw order
/// within a row is the reverse of propagation order.
fn parse_format_b(path: &Path, content: &str) -> Result<SnapshotRows, AnalysisError> {
    let lines: Vec<&str> = content.lines().collect();
    if lines.len() <= FORMAT_B_HEADER_LINES {
        return Err(AnalysisError::input_format(
            path,
            format!("snapshot shorter than its {FORMAT_B_HEADER_LINES}-line header"),
        ));
    }
    let body = lines[FORMAT_B_HEADER_LINES..].join("\n");

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(body.as_bytes());

    let mut rows: SnapshotRows = Vec::with_capacity(ROW_COUNT);
    let mut current: Vec<f64> = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| AnalysisError::input_format(path, e.to_string()))?;
        if record.len() < 4 {
            return Err(AnalysisError::input_format(
                path,
                format!("well record has {} fields, expected at least 4", record.len()),
            ));
        }
        let well_id = record.get(0).unwrap_or("");
        let od = parse_od(path, record.get(3).unwrap_or(""))?;
        current.push(od);
        if well_id.ends_with(ROW_TERMINATOR_COLUMN) {
            current.reverse();
            rows.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        return Err(AnalysisError::input_format(
            path,
            format!("{} well records left over after the last complete row", current.len()),
        ));
    }
    if rows.len() != ROW_COUNT {
        return Err(AnalysisError::input_format(
            path,
            format!("expected {} rows, found {}", ROW_COUNT, rows.len()),
        ));
    }
    Ok(rows)
}


// src/data_input/snapshot.rs
