//! CSV output module for writing filter results.
//!
//! # Output Format
//!
//! `filter` writes one row per window:
//!
//! ```text
//! index,max,min
//! 0,3,1
//! 1,5,2
//! ```
//!
//! `index` is the window's first sample, or in clamped mode the sample the
//! window is centred on. `verify` writes one `variant,status` row per
//! algorithm.

use crate::error::{CliError, Result};
use fast_minmax::ExtremaOutput;
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Output destination: either stdout or a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputDest {
    /// Write to stdout.
    Stdout,
    /// Write to a file at the given path.
    File(String),
}

impl OutputDest {
    /// File destination if a path is given, stdout otherwise.
    pub fn from_path(path: Option<&str>) -> Self {
        path.map_or(OutputDest::Stdout, |p| OutputDest::File(p.to_string()))
    }

    /// Create a writer for this output destination.
    ///
    /// # Errors
    ///
    /// Returns `CliError::IoError` if the file cannot be created.
    pub fn writer(&self) -> Result<Box<dyn Write>> {
        match self {
            OutputDest::Stdout => Ok(Box::new(BufWriter::new(io::stdout()))),
            OutputDest::File(path) => {
                let file = File::create(path).map_err(|e| CliError::IoError {
                    source: e,
                    path: Some(path.clone()),
                })?;
                Ok(Box::new(BufWriter::new(file)))
            }
        }
    }
}

/// Write `index,max,min` rows for every window.
///
/// # Errors
///
/// Returns `CliError::IoError` if writing fails.
pub fn write_extrema<W: Write + ?Sized>(writer: &mut W, output: &ExtremaOutput<f64>) -> Result<()> {
    writeln!(writer, "index,max,min")?;
    for (index, (max, min)) in output.max.iter().zip(&output.min).enumerate() {
        writeln!(writer, "{index},{max},{min}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Write filter output to a destination.
///
/// # Errors
///
/// Returns `CliError::IoError` if the destination cannot be opened or written.
pub fn write_extrema_to(output: &ExtremaOutput<f64>, dest: &OutputDest) -> Result<()> {
    let mut writer = dest.writer()?;
    write_extrema(&mut *writer, output)
}

/// Write a two-column `variant,status` table.
///
/// # Errors
///
/// Returns `CliError::IoError` if writing fails.
pub fn write_status_table<W: Write + ?Sized>(
    writer: &mut W,
    rows: &[(String, String)],
) -> Result<()> {
    writeln!(writer, "variant,status")?;
    for (variant, status) in rows {
        writeln!(writer, "{variant},{status}")?;
    }
    writer.flush()?;
    Ok(())
}
