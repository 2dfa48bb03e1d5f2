//! Dashboard event handlers
//!
//! Each user interaction maps to one stateless function taking typed inputs
//! and returning a typed view model. The HTTP layer and CLI are thin
//! adapters over these.
//!
//! | Interaction        | Handler                 |
//! |--------------------|-------------------------|
//! | files uploaded     | [`update_row_options`], [`summarize_upload`] |
//! | row selected       | [`render_selection`]    |
//! | sidebar toggled    | [`SidebarLayout::for_clicks`] |
//!
//! # Multiple uploads
//!
//! Only the first upload populates the row selector ("first file wins").
//! Uploads are expected to describe the same rows, e.g. one histogram file
//! and one polygon file for the same set of tiles. Rendering still visits
//! every upload.

pub mod layout;

pub use layout::{ContentStyle, SidebarLayout, SidebarStyle};

use serde::Serialize;

use crate::chart::{self, DataShape, Figure};
use crate::decode::{parse_contents, Upload};
use crate::table::Table;

/// One entry of the row selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowOption {
    pub label: String,
    pub value: usize,
}

impl RowOption {
    pub fn new(value: usize) -> Self {
        Self {
            label: format!("Row {}", value),
            value,
        }
    }
}

/// Selectable rows `1..=row_count` for a table, or none without one
pub fn row_options(table: Option<&Table>) -> Vec<RowOption> {
    match table {
        Some(table) => (1..=table.row_count()).map(RowOption::new).collect(),
        None => Vec::new(),
    }
}

/// Row selector contents after an upload
///
/// Only the first upload is decoded; see the module docs.
pub fn update_row_options(uploads: &[Upload]) -> Vec<RowOption> {
    let Some(first) = uploads.first() else {
        return Vec::new();
    };

    if uploads.len() > 1 {
        tracing::debug!(
            filename = %first.filename,
            ignored = uploads.len() - 1,
            "Row options taken from first upload"
        );
    }

    row_options(parse_contents(first).as_ref())
}

/// Outcome of rendering one upload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedChart {
    pub filename: String,
    pub shape: DataShape,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub figure: Option<Figure>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RenderedChart {
    pub fn is_ok(&self) -> bool {
        self.figure.is_some()
    }
}

/// Charts for the selected row, one per decodable upload
///
/// Uploads that fail to decode are skipped. A render failure is reported on
/// its own entry and does not stop the remaining uploads.
pub fn render_selection(selected_row: Option<i64>, uploads: &[Upload]) -> Vec<RenderedChart> {
    let Some(selected_row) = selected_row else {
        return Vec::new();
    };

    uploads
        .iter()
        .filter_map(|upload| parse_contents(upload).map(|table| (upload, table)))
        .map(|(upload, table)| render_table(&upload.filename, &table, selected_row))
        .collect()
}

fn render_table(filename: &str, table: &Table, selected_row: i64) -> RenderedChart {
    let (shape, result) = chart::render(table, selected_row);

    match result {
        Ok(figure) => RenderedChart {
            filename: filename.to_string(),
            shape,
            figure: Some(figure),
            error: None,
        },
        Err(e) => {
            tracing::warn!(filename = %filename, row = selected_row, error = %e, "Render failed");
            RenderedChart {
                filename: filename.to_string(),
                shape,
                figure: None,
                error: Some(e.to_string()),
            }
        }
    }
}

/// Preview of an upload before any row is selected
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UploadSummary {
    pub filename: String,
    pub heading: String,
    pub shape: DataShape,
    pub rows: usize,
    pub columns: Vec<String>,
}

/// Describe an upload, or `None` if it cannot be decoded
pub fn summarize_upload(upload: &Upload) -> Option<UploadSummary> {
    let table = parse_contents(upload)?;
    let shape = chart::classify(&table);
    let heading = match shape {
        DataShape::Polygon => "Uploaded Map Data",
        DataShape::Histogram => "Uploaded Histogram Data",
    };

    Some(UploadSummary {
        filename: upload.filename.clone(),
        heading: heading.to_string(),
        shape,
        rows: table.row_count(),
        columns: table.column_names().to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HISTOGRAM_CSV: &[u8] = b"water,forest,urban\n12,40,7\n3,55,0\n9,1,30\n";
    const POLYGON_CSV: &[u8] = b"id,coords\n1,\"[[[0, 0], [2, 0], [2, 2], [0, 2]]]\"\n2,\"[[]]\"\n";

    fn histogram_upload() -> Upload {
        Upload::from_bytes(HISTOGRAM_CSV, "pixels.csv")
    }

    fn polygon_upload() -> Upload {
        Upload::from_bytes(POLYGON_CSV, "tiles.csv")
    }

    #[test]
    fn test_row_options_labels() {
        let table = crate::decode::decode_upload(&histogram_upload()).unwrap();
        let options = row_options(Some(&table));

        assert_eq!(options.len(), 3);
        assert_eq!(options[0], RowOption::new(1));
        assert_eq!(options[2].label, "Row 3");
        assert_eq!(
            options.iter().map(|o| o.value).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_row_options_empty_cases() {
        assert!(row_options(None).is_empty());
        assert!(row_options(Some(&Table::new())).is_empty());
        assert!(update_row_options(&[]).is_empty());
        assert!(update_row_options(&[Upload::new("bad", "x.csv")]).is_empty());
    }

    #[test]
    fn test_first_upload_wins() {
        let options = update_row_options(&[polygon_upload(), histogram_upload()]);
        assert_eq!(options.len(), 2);

        // A broken first upload hides a valid second one
        let options = update_row_options(&[Upload::new("bad", "x.csv"), histogram_upload()]);
        assert!(options.is_empty());
    }

    #[test]
    fn test_render_selection_dispatches_per_upload() {
        let charts = render_selection(Some(1), &[histogram_upload(), polygon_upload()]);

        assert_eq!(charts.len(), 2);
        assert_eq!(charts[0].shape, DataShape::Histogram);
        assert_eq!(charts[0].figure.as_ref().unwrap().data.len(), 3);
        assert_eq!(charts[1].shape, DataShape::Polygon);
        assert!(charts[1].is_ok());
    }

    #[test]
    fn test_render_failure_is_local() {
        // Row 2 of the polygon file has an empty ring
        let charts = render_selection(Some(2), &[polygon_upload(), histogram_upload()]);

        assert_eq!(charts.len(), 2);
        assert_eq!(charts[0].error.as_deref(), Some("Polygon ring is empty"));
        assert!(charts[1].is_ok());
    }

    #[test]
    fn test_render_selection_skips_undecodable() {
        let charts = render_selection(Some(1), &[Upload::new("bad", "x.csv"), histogram_upload()]);
        assert_eq!(charts.len(), 1);
        assert_eq!(charts[0].filename, "pixels.csv");
    }

    #[test]
    fn test_render_selection_without_inputs() {
        assert!(render_selection(None, &[histogram_upload()]).is_empty());
        assert!(render_selection(Some(1), &[]).is_empty());
    }

    #[test]
    fn test_out_of_range_selection() {
        let charts = render_selection(Some(4), &[histogram_upload()]);
        assert_eq!(
            charts[0].error.as_deref(),
            Some("Row 4 is out of range (table has 3 rows)")
        );
    }

    #[test]
    fn test_summaries() {
        let summary = summarize_upload(&polygon_upload()).unwrap();
        assert_eq!(summary.heading, "Uploaded Map Data");
        assert_eq!(summary.rows, 2);
        assert_eq!(summary.columns, vec!["id", "coords"]);

        let summary = summarize_upload(&histogram_upload()).unwrap();
        assert_eq!(summary.heading, "Uploaded Histogram Data");
        assert_eq!(summary.shape, DataShape::Histogram);

        assert!(summarize_upload(&Upload::new("bad", "x.csv")).is_none());
    }
}
