//! Chart construction
//!
//! Turns a decoded [`Table`](crate::table::Table) plus a 1-indexed row
//! selector into a Plotly figure:
//!
//! - **classify**: histogram vs. polygon data
//! - **histogram**: grouped bar chart of one row
//! - **map**: polygon overlay on a map base layer
//! - **coords**: strict parser for coordinate literals
//! - **figure**: serializable figure model
//! - **error**: Error types

pub mod classify;
pub mod coords;
pub mod error;
pub mod figure;
pub mod histogram;
pub mod map;

pub use classify::{classify, DataShape};
pub use coords::{parse_rings, CoordsError, Point, Ring};
pub use error::{RenderError, RenderResult};
pub use figure::{Figure, Layout, Trace};
pub use histogram::create_histogram;
pub use map::{create_map, Polygon};

use crate::table::Table;

/// Render a table with the renderer its shape calls for
///
/// The shape is returned even when rendering fails.
pub fn render(table: &Table, selected_row: i64) -> (DataShape, RenderResult<Figure>) {
    let shape = classify(table);
    let figure = match shape {
        DataShape::Polygon => create_map(table, selected_row),
        DataShape::Histogram => create_histogram(table, selected_row),
    };
    (shape, figure)
}

/// Convert a 1-indexed selector into a 0-indexed row
pub(crate) fn row_index(selected_row: i64, row_count: usize) -> RenderResult<usize> {
    match usize::try_from(selected_row) {
        Ok(row) if row >= 1 && row <= row_count => Ok(row - 1),
        _ => Err(RenderError::OutOfRangeSelector {
            selector: selected_row,
            row_count,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::CellValue;

    #[test]
    fn test_row_index_bounds() {
        assert_eq!(row_index(1, 3), Ok(0));
        assert_eq!(row_index(3, 3), Ok(2));
        assert!(row_index(0, 3).is_err());
        assert!(row_index(4, 3).is_err());
        assert!(row_index(-2, 3).is_err());
        assert!(row_index(1, 0).is_err());
    }

    #[test]
    fn test_render_dispatches_on_shape() {
        let histogram =
            Table::from_columns(vec![("water", vec![CellValue::Int(5)])]).unwrap();
        let (shape, fig) = render(&histogram, 1);
        assert_eq!(shape, DataShape::Histogram);
        assert!(matches!(fig.unwrap().data[0], Trace::Bar(_)));

        let polygon = Table::from_columns(vec![(
            "coords",
            vec![CellValue::from("[[[1, 1], [2, 2], [3, 1]]]")],
        )])
        .unwrap();
        let (shape, fig) = render(&polygon, 1);
        assert_eq!(shape, DataShape::Polygon);
        assert!(matches!(fig.unwrap().data[0], Trace::Scattermapbox(_)));

        // Shape survives a failed render
        let (shape, fig) = render(&polygon, 2);
        assert_eq!(shape, DataShape::Polygon);
        assert!(fig.is_err());
    }
}
