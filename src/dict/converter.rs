use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use log::info;

use super::iter::EntryIterator;
use super::types::error::{ConvertError, Result};
use super::types::models::{ConversionStats, LineOutcome};

/// Stream a source dump from `reader` into `writer`, one output line per
/// converted entry.
///
/// Malformed lines are counted as skipped. An I/O error aborts the run;
/// lines already written stay in `writer`.
pub fn convert<R: BufRead, W: Write>(reader: R, mut writer: W) -> Result<ConversionStats> {
    let mut stats = ConversionStats::default();

    for result in EntryIterator::new(reader) {
        let (_, outcome) = result?;
        if let LineOutcome::Converted(entry) = &outcome {
            writeln!(writer, "{}", entry)?;
        }
        stats.record(&outcome);
    }

    writer.flush()?;
    Ok(stats)
}

/// Convert the source dump at `input` into a dictionary at `output`.
///
/// The input is opened first, so a missing input never creates (or
/// truncates) the output file.
///
/// # Errors
/// - [`ConvertError::InputNotFound`] if `input` does not exist
/// - [`ConvertError::Io`] for any other read or write failure
pub fn convert_file(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<ConversionStats> {
    let input = input.as_ref();
    let output = output.as_ref();
    info!("Converting {} to {}", input.display(), output.display());

    let source = File::open(input).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConvertError::InputNotFound(input.to_path_buf()),
        _ => ConvertError::Io(e),
    })?;
    let target = File::create(output)?;

    let stats = convert(BufReader::new(source), BufWriter::new(target))?;

    info!(
        "Conversion finished: {} processed, {} converted, {} skipped",
        stats.processed, stats.converted, stats.skipped
    );
    Ok(stats)
}
