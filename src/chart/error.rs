//! Chart rendering errors
//!
//! Every variant is local to one render attempt; the dashboard reports it
//! next to the upload that caused it and keeps rendering the others.

use thiserror::Error;

use super::coords::CoordsError;

/// Errors that can occur while building a figure
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// Row selector outside `1..=row_count`
    #[error("Row {selector} is out of range (table has {row_count} rows)")]
    OutOfRangeSelector { selector: i64, row_count: usize },

    /// Map data without a coordinate column
    #[error("Table has no 'coords' column")]
    MissingCoordsColumn,

    /// Coordinate cell is not a nested numeric list literal
    #[error("Malformed coordinate literal: {0}")]
    MalformedCoordinateLiteral(#[from] CoordsError),

    /// First ring of the polygon has no points
    #[error("Polygon ring is empty")]
    EmptyRing,
}

/// Result type for chart operations
pub type RenderResult<T> = Result<T, RenderError>;
