//! # vi2zh-dict
//!
//! Converts a tab-separated Vietnamese-Chinese wiki dictionary dump
//! (`vietnamese<TAB>chinese<TAB>definition`) into a plain text dictionary with
//! one `term : definition` line per entry.
//!
//! Definitions are stripped of category tags, wiki links, `<br>` tags and the
//! assorted bracket residue found in the dump; numbered senses are joined
//! with `"; "`.
pub mod dict;

// Re-export the main types for convenience
pub use dict::{
    convert,
    convert_file,
    convert_line,
    format::{definition::clean_definition, line::parse_line},
    types::models::{
        ConversionStats,
        DictEntry,
        LineOutcome,
        RawRecord,
        SkipReason,
    },
    ConvertError,
    EntryIterator,
    Result,
};
