//! Command implementations.

use std::io::Write;

use fast_minmax::{compute_extrema, compute_extrema_clamped, window_from_signed, Variant};

use crate::args::Command;
use crate::csv_parser::parse_series;
use crate::csv_writer::{write_extrema_to, write_status_table, OutputDest};
use crate::error::{CliError, Result};

/// Runs one parsed command.
///
/// # Errors
///
/// Returns the first error hit while reading, filtering or writing. `verify`
/// also fails with `CliError::VariantMismatch` when any variant disagrees with
/// the reference.
pub fn run(command: &Command) -> Result<()> {
    tracing::debug!(command = command.name(), "running command");
    match command {
        Command::Filter {
            input,
            width,
            variant,
            column,
            clamp,
            output,
        } => {
            let dest = OutputDest::from_path(output.as_deref());
            run_filter(input, *width, *variant, column.as_deref(), *clamp, &dest)
        }
        Command::Verify {
            input,
            width,
            column,
        } => run_verify(input, *width, column.as_deref(), &OutputDest::Stdout),
        Command::Variants => list_variants(&OutputDest::Stdout),
    }
}

/// Filters one column of `input` and writes `index,max,min` rows.
///
/// # Errors
///
/// See [`run`].
pub fn run_filter(
    input: &str,
    width: i64,
    variant: Variant,
    column: Option<&str>,
    clamp: bool,
    dest: &OutputDest,
) -> Result<()> {
    let series = parse_series(input, column)?;
    tracing::info!(input, samples = series.len(), width, %variant, clamp, "filtering");

    let output = if clamp {
        // clamped windows may be wider than the input
        let width = usize::try_from(width).map_err(|_| fast_minmax::Error::InvalidWindow {
            width,
            len: series.len(),
            reason: "width must be at least 1",
        })?;
        compute_extrema_clamped(variant, &series, width)?
    } else {
        let width = window_from_signed(width, series.len())?;
        compute_extrema(variant, &series, width)?
    };

    tracing::info!(windows = output.len(), "writing output");
    write_extrema_to(&output, dest)
}

/// Runs every variant supporting `width` and compares it with the reference.
///
/// Writes one `variant,status` row per variant: `reference`, `ok`,
/// `MISMATCH`, or `skipped (...)` when the width is out of range.
///
/// # Errors
///
/// See [`run`].
pub fn run_verify(input: &str, width: i64, column: Option<&str>, dest: &OutputDest) -> Result<()> {
    let series = parse_series(input, column)?;
    let width = window_from_signed(width, series.len())?;
    tracing::info!(input, samples = series.len(), width, "verifying all variants");

    let reference = compute_extrema(Variant::Naive, &series, width)?;
    let mut rows = Vec::with_capacity(Variant::ALL.len());
    let mut mismatched = Vec::new();

    for variant in Variant::ALL {
        let status = if variant == Variant::Naive {
            "reference".to_string()
        } else if !variant.supports(width) {
            let max = variant.max_width().unwrap_or(width);
            format!("skipped (width exceeds {max})")
        } else if compute_extrema(variant, &series, width)? == reference {
            "ok".to_string()
        } else {
            tracing::warn!(%variant, width, "output differs from reference");
            mismatched.push(variant.name().to_string());
            "MISMATCH".to_string()
        };
        rows.push((variant.name().to_string(), status));
    }

    let mut writer = dest.writer()?;
    write_status_table(&mut *writer, &rows)?;

    if mismatched.is_empty() {
        Ok(())
    } else {
        Err(CliError::VariantMismatch {
            variants: mismatched,
        })
    }
}

/// Writes the variant names, width limits and descriptions.
///
/// # Errors
///
/// Returns `CliError::IoError` if writing fails.
pub fn list_variants(dest: &OutputDest) -> Result<()> {
    let mut writer = dest.writer()?;
    writeln!(writer, "variant,max_width,description")?;
    for variant in Variant::ALL {
        let limit = variant
            .max_width()
            .map_or_else(|| "input length".to_string(), |max| max.to_string());
        writeln!(writer, "{variant},{limit},{}", variant.description())?;
    }
    writer.flush()?;
    Ok(())
}
