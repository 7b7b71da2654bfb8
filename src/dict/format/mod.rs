//! Source format handling for the Vietnamese-Chinese wiki dump.
//!
//! This module holds the two pure transforms of the conversion and knows
//! nothing about I/O:
//!
//! - [`line`]: splits one tab-separated line into a [`RawRecord`](crate::dict::types::models::RawRecord)
//! - [`definition`]: strips markup from the definition column
//!
//! # Architecture
//!
//! ```text
//! Source line:
//! ┌──────────┬──────────────┬────────────────────────────┐
//! │  term    │  chinese     │  definition (wiki markup)  │ ← line::parse_line()
//! └──────────┴──────────────┴────────────────────────────┘
//!      │                                  │
//!      │                                  ▼
//!      │                      definition::clean_definition()
//!      ▼                                  ▼
//!   "term : sense one; sense two"
//! ```

pub mod definition;
pub mod line;
