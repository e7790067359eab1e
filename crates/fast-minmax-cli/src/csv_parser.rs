//! CSV parsing module for reading a numeric series from CSV files.
//!
//! The first row is a header. The series is one column, chosen either by
//! header name (matched case-insensitively, surrounding whitespace ignored)
//! or, when no name is given, as the first column whose every cell is a
//! number. Other columns, such as timestamps or labels, may hold anything.
//!
//! Missing cells are rejected rather than read as NaN: the filters give no
//! guarantee about NaN inputs.

use crate::error::{CliError, Result};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Raw CSV contents, column-major.
#[derive(Debug, Clone)]
pub struct ParsedCsv {
    /// Column headers from the CSV.
    pub headers: Vec<String>,
    /// Cell text for each column, one entry per data row.
    pub cells: Vec<Vec<String>>,
    /// Number of data rows parsed.
    pub row_count: usize,
}

impl ParsedCsv {
    /// Index of the column whose header matches `name`.
    pub fn find_column(&self, name: &str) -> Option<usize> {
        let wanted = normalize_header(name);
        self.headers
            .iter()
            .position(|header| normalize_header(header) == wanted)
    }

    /// Parses column `idx` as numbers.
    ///
    /// # Errors
    ///
    /// Returns `CliError::CsvParseError` naming the first cell that is empty
    /// or not a number.
    pub fn numeric_column(&self, idx: usize) -> Result<Vec<f64>> {
        let header = self.headers.get(idx).map_or("", String::as_str);
        self.cells
            .get(idx)
            .map_or(&[][..], Vec::as_slice)
            .iter()
            .enumerate()
            .map(|(row, cell)| {
                parse_value(cell).map_err(|message| CliError::CsvParseError {
                    message: format!("column '{header}': {message}"),
                    line: Some(row + 2), // +2 for header and 0-indexing
                })
            })
            .collect()
    }

    /// Selects the series to filter.
    ///
    /// With a name, the matching column must exist and be fully numeric.
    /// Without one, the first fully numeric column is used.
    ///
    /// # Errors
    ///
    /// - `CliError::InvalidArgument` if no column has the given name
    /// - `CliError::CsvParseError` if the chosen column has a bad cell, or no
    ///   column is numeric
    pub fn select_series(&self, column: Option<&str>) -> Result<Vec<f64>> {
        if let Some(name) = column {
            let idx = self.find_column(name).ok_or_else(|| CliError::InvalidArgument {
                argument: "column".to_string(),
                reason: format!("no column named '{name}'"),
                suggestion: Some(format!("Available columns: {}", self.headers.join(", "))),
            })?;
            return self.numeric_column(idx);
        }

        (0..self.headers.len())
            .find_map(|idx| self.numeric_column(idx).ok())
            .ok_or_else(|| CliError::CsvParseError {
                message: "no fully numeric column found".to_string(),
                line: None,
            })
    }
}

/// Normalize a column header name for matching.
fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase()
}

/// Parse a cell as f64, rejecting empty cells and NaN.
fn parse_value(value: &str) -> std::result::Result<f64, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("empty cell".to_string());
    }
    match trimmed.parse::<f64>() {
        Ok(parsed) if parsed.is_nan() => Err("NaN is not a valid sample".to_string()),
        Ok(parsed) => Ok(parsed),
        Err(_) => Err(format!("cannot parse '{trimmed}' as number")),
    }
}

/// Parse a CSV file.
///
/// # Errors
///
/// Returns `CliError::IoError` if the file cannot be read, or
/// `CliError::CsvParseError` if the CSV is malformed.
pub fn parse_csv<P: AsRef<Path>>(path: P) -> Result<ParsedCsv> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| CliError::IoError {
        source: e,
        path: Some(path.display().to_string()),
    })?;
    parse_csv_from_reader(BufReader::new(file))
}

/// Parse CSV data from a reader.
///
/// # Errors
///
/// Returns `CliError::CsvParseError` if the header is missing or a record is
/// malformed.
pub fn parse_csv_from_reader<R: Read>(reader: R) -> Result<ParsedCsv> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()
        .map_err(|e| CliError::CsvParseError {
            message: e.to_string(),
            line: Some(1),
        })?
        .iter()
        .map(String::from)
        .collect();

    if headers.is_empty() || headers.iter().all(String::is_empty) {
        return Err(CliError::CsvParseError {
            message: "CSV file has no headers".to_string(),
            line: Some(1),
        });
    }

    let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    let mut row_count = 0;
    for (line_idx, result) in csv_reader.records().enumerate() {
        let record = result.map_err(|e| CliError::CsvParseError {
            message: e.to_string(),
            line: Some(line_idx + 2),
        })?;

        // short rows read as empty cells
        for (idx, column) in cells.iter_mut().enumerate() {
            column.push(record.get(idx).unwrap_or("").to_string());
        }
        row_count += 1;
    }

    tracing::debug!(columns = headers.len(), rows = row_count, "parsed CSV");
    Ok(ParsedCsv {
        headers,
        cells,
        row_count,
    })
}

/// Parse a CSV file and select one numeric column.
///
/// # Errors
///
/// See [`parse_csv`] and [`ParsedCsv::select_series`].
pub fn parse_series<P: AsRef<Path>>(path: P, column: Option<&str>) -> Result<Vec<f64>> {
    let parsed = parse_csv(path)?;
    parsed.select_series(column)
}
