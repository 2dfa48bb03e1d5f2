//! Tabular data model
//!
//! In-memory representation of an uploaded file:
//! - `Table`: ordered, named columns sharing one row count
//! - `CellValue`: a single scalar cell
//! - `TableError`: construction errors

pub mod error;
pub mod types;

pub use error::{TableError, TableResult};
pub use types::{CellValue, Table};
