//! Core conversion module

pub mod types;
pub mod format;
pub mod iter;
mod converter;

pub use converter::{convert, convert_file};
pub use iter::{convert_line, EntryIterator};
pub use types::error::{ConvertError, Result};
