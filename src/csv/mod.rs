//! CSV text codec
//!
//! Converts between raw CSV text and [`TableModel`](crate::model::TableModel):
//! `decode` for text → model, `encode` for model → text. The format is
//! plain comma-separated fields with line-feed record separators,
//! header-first, intentionally a subset of RFC 4180 (no quoting or
//! escaping on either side).

mod codec;

pub use codec::{decode, encode, ParseError};
