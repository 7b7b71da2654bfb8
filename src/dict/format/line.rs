//! Tab-separated source line parsing.

use crate::dict::types::models::RawRecord;

/// Field separator of the source dump.
pub const FIELD_SEPARATOR: char = '\t';

/// Split a source line into its term, Chinese characters and definition.
///
/// Returns `None` if the line has fewer than three tab-separated fields, or
/// if the term or definition is empty once trimmed. Fields after the third
/// are ignored.
pub fn parse_line(line: &str) -> Option<RawRecord> {
    let mut fields = line.split(FIELD_SEPARATOR).map(str::trim);

    let term = fields.next()?;
    let secondary = fields.next()?;
    let definition = fields.next()?;

    if term.is_empty() || definition.is_empty() {
        return None;
    }

    Some(RawRecord {
        term: term.to_string(),
        secondary: secondary.to_string(),
        definition: definition.to_string(),
    })
}
