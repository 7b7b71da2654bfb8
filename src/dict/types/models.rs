//! Data structures flowing through the conversion pipeline.

use std::fmt;

/// One tab-separated source line, split and trimmed.
///
/// `term` and `definition` are guaranteed non-empty by
/// [`parse_line`](crate::dict::format::line::parse_line).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// Vietnamese headword.
    pub term: String,
    /// Chinese characters column. Carried along but never emitted.
    pub secondary: String,
    /// Definition with its wiki/HTML markup still in place.
    pub definition: String,
}

/// A converted dictionary entry, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictEntry {
    pub term: String,
    pub definition: String,
}

impl fmt::Display for DictEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.term, self.definition)
    }
}

/// Why a source line produced no output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Empty or whitespace-only line.
    Blank,
    /// Fewer than three fields, or an empty term/definition.
    Malformed,
    /// The definition was nothing but markup noise.
    EmptyDefinition,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SkipReason::Blank => "blank line",
            SkipReason::Malformed => "malformed line",
            SkipReason::EmptyDefinition => "definition empty after cleaning",
        };
        f.write_str(text)
    }
}

/// Result of processing a single source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Converted(DictEntry),
    Skipped(SkipReason),
}

/// Counters for one conversion run.
///
/// `processed == converted + skipped` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionStats {
    pub processed: u64,
    pub converted: u64,
    pub skipped: u64,
}

impl ConversionStats {
    /// Account for one processed line.
    pub fn record(&mut self, outcome: &LineOutcome) {
        self.processed += 1;
        match outcome {
            LineOutcome::Converted(_) => self.converted += 1,
            LineOutcome::Skipped(_) => self.skipped += 1,
        }
    }
}
