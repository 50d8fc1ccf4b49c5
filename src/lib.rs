//! csved - a minimal CSV table editor
//!
//! This crate provides the core types and logic for loading a CSV
//! document, editing its rows in memory, and serializing it back out.
//! The core performs no I/O; the CLI in `cli` is one thin consumer.

pub mod cli;
pub mod csv;
pub mod model;
pub mod tracing;

// Re-export commonly used types
pub use csv::{decode, encode, ParseError};
pub use model::{Row, TableError, TableModel};
