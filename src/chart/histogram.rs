//! Histogram renderer
//!
//! One bar per column for the selected row, grouped on a shared axis.

use super::error::RenderResult;
use super::figure::{Axis, BarTrace, Figure, Layout, Margin, Title, Trace};
use super::row_index;
use crate::table::Table;

pub const X_AXIS_TITLE: &str = "Land Classification";
pub const Y_AXIS_TITLE: &str = "Number of pixels in Land Classification";

/// Build a grouped bar chart of one row
///
/// `selected_row` is 1-indexed. A table without columns renders an empty
/// chart.
pub fn create_histogram(table: &Table, selected_row: i64) -> RenderResult<Figure> {
    let row = row_index(selected_row, table.row_count())?;

    let data = table
        .columns()
        .map(|(name, values)| {
            Trace::Bar(BarTrace {
                x: vec![name.to_string()],
                y: vec![values[row].clone()],
                name: name.to_string(),
            })
        })
        .collect();

    let layout = Layout {
        title: Some(Title::new(histogram_title(selected_row))),
        xaxis: Some(Axis::titled(X_AXIS_TITLE)),
        yaxis: Some(Axis::titled(Y_AXIS_TITLE)),
        barmode: Some("group".to_string()),
        margin: Some(Margin::uniform(40)),
        ..Default::default()
    };

    Ok(Figure::new(data, layout))
}

pub fn histogram_title(selected_row: i64) -> String {
    format!(
        "Number of Pixels For Land Classification in Row {}",
        selected_row
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::RenderError;
    use crate::table::CellValue;
    use serde_json::json;

    fn pixel_table() -> Table {
        Table::from_columns(vec![
            ("water", vec![CellValue::Int(12), CellValue::Int(3)]),
            ("forest", vec![CellValue::Int(40), CellValue::Int(55)]),
            ("urban", vec![CellValue::Float(7.5), CellValue::Empty]),
        ])
        .unwrap()
    }

    #[test]
    fn test_one_series_per_column() {
        let fig = create_histogram(&pixel_table(), 2).unwrap();

        assert_eq!(fig.data.len(), 3);
        let expected = [
            ("water", CellValue::Int(3)),
            ("forest", CellValue::Int(55)),
            ("urban", CellValue::Empty),
        ];
        for (trace, (name, value)) in fig.data.iter().zip(expected) {
            match trace {
                Trace::Bar(bar) => {
                    assert_eq!(bar.x, vec![name.to_string()]);
                    assert_eq!(bar.y, vec![value]);
                    assert_eq!(bar.name, name);
                }
                other => panic!("expected bar trace, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_layout_labels() {
        let json = create_histogram(&pixel_table(), 1).unwrap().to_json();

        assert_eq!(
            json["layout"],
            json!({
                "title": {"text": "Number of Pixels For Land Classification in Row 1"},
                "xaxis": {"title": {"text": "Land Classification"}},
                "yaxis": {"title": {"text": "Number of pixels in Land Classification"}},
                "barmode": "group",
                "margin": {"l": 40, "r": 40, "t": 40, "b": 40}
            })
        );
        assert_eq!(json["data"][0]["type"], "bar");
        assert_eq!(json["data"][2]["y"], json!([7.5]));
    }

    #[test]
    fn test_zero_columns_is_empty_chart() {
        let table = Table::from_rows(Vec::new(), vec![Vec::new(), Vec::new()]);
        let fig = create_histogram(&table, 1).unwrap();
        assert!(fig.data.is_empty());
    }

    #[test]
    fn test_out_of_range_selector() {
        let table = pixel_table();
        for selector in [0, 3, -1] {
            assert_eq!(
                create_histogram(&table, selector),
                Err(RenderError::OutOfRangeSelector {
                    selector,
                    row_count: 2
                })
            );
        }
    }
}
