//! Lazy, line-by-line traversal of a source dump.
//!
//! # Example
//! ```
//! # use vi2zh_dict::{EntryIterator, LineOutcome};
//! let source = "abc\t漢字\t1. nghĩa một<br />2. nghĩa hai\n\n";
//! for result in EntryIterator::new(source.as_bytes()) {
//!     let (line_no, outcome) = result.unwrap();
//!     if let LineOutcome::Converted(entry) = outcome {
//!         println!("{}: {}", line_no, entry);
//!     }
//! }
//! ```

use std::io::{BufRead, Lines};

use log::{debug, trace};

use super::format::definition::clean_definition;
use super::format::line::parse_line;
use super::types::error::Result;
use super::types::models::{DictEntry, LineOutcome, SkipReason};

/// Classify a single source line.
pub fn convert_line(line: &str) -> LineOutcome {
    if line.trim().is_empty() {
        return LineOutcome::Skipped(SkipReason::Blank);
    }

    let Some(record) = parse_line(line) else {
        return LineOutcome::Skipped(SkipReason::Malformed);
    };

    let definition = clean_definition(&record.definition);
    if definition.is_empty() {
        return LineOutcome::Skipped(SkipReason::EmptyDefinition);
    }

    LineOutcome::Converted(DictEntry {
        term: record.term,
        definition,
    })
}

/// Iterator over `(line_number, outcome)` pairs of a source stream.
///
/// Line numbers are 1-based. Yields an error and then stops if the underlying
/// reader fails or the input is not valid UTF-8.
pub struct EntryIterator<R: BufRead> {
    lines: Lines<R>,
    line_no: u64,
    failed: bool,
}

impl<R: BufRead> EntryIterator<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
            failed: false,
        }
    }

    /// Number of lines consumed so far.
    pub fn line_no(&self) -> u64 {
        self.line_no
    }
}

impl<R: BufRead> Iterator for EntryIterator<R> {
    type Item = Result<(u64, LineOutcome)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let line = match self.lines.next()? {
            Ok(line) => line,
            Err(e) => {
                self.failed = true;
                return Some(Err(e.into()));
            }
        };
        self.line_no += 1;

        let outcome = convert_line(&line);
        match &outcome {
            LineOutcome::Skipped(reason) => debug!("Line {} skipped: {}", self.line_no, reason),
            LineOutcome::Converted(entry) => trace!("Line {} converted: {}", self.line_no, entry),
        }

        Some(Ok((self.line_no, outcome)))
    }
}
