//! Domain model - the in-memory state of one editing session

pub mod table;

pub use table::{Row, TableError, TableModel};
