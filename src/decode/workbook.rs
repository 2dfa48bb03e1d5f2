//! Excel uploads
//!
//! Reads the first worksheet of an in-memory workbook. The first row is the
//! header; every following row becomes a record.

use calamine::{open_workbook_auto_from_rs, Data, Reader};
use std::io::Cursor;

use super::error::{DecodeError, DecodeResult};
use crate::table::{CellValue, Table};

/// Parse workbook bytes (xls, xlsx, xlsb or ods) into a `Table`
pub fn parse_workbook(bytes: Vec<u8>) -> DecodeResult<Table> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or(DecodeError::EmptyWorkbook)??;

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header) => header.iter().map(header_name).collect(),
        None => return Err(DecodeError::NoColumns),
    };

    let records = rows
        .map(|row| row.iter().map(cell_value).collect())
        .collect();

    Ok(Table::from_rows(headers, records))
}

fn header_name(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        other => other.to_string(),
    }
}

fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::String(s) => CellValue::Text(s.clone()),
        // Dates, durations and cell errors are kept in their display form
        other => CellValue::Text(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{classify, create_map, DataShape, Trace};
    use crate::decode::{decode_upload, Upload};

    const PIXELS_XLSX: &[u8] = include_bytes!("../../tests/fixtures/pixels.xlsx");
    const TILES_XLSX: &[u8] = include_bytes!("../../tests/fixtures/tiles.xlsx");

    #[test]
    fn test_cell_conversion() {
        assert_eq!(cell_value(&Data::Empty), CellValue::Empty);
        assert_eq!(cell_value(&Data::Int(3)), CellValue::Int(3));
        assert_eq!(cell_value(&Data::Float(2.5)), CellValue::Float(2.5));
        assert_eq!(
            cell_value(&Data::String("[[[1, 2]]]".into())),
            CellValue::Text("[[[1, 2]]]".into())
        );
    }

    #[test]
    fn test_numeric_header_name() {
        assert_eq!(header_name(&Data::Float(2020.0)), "2020");
        assert_eq!(header_name(&Data::String("coords".into())), "coords");
    }

    #[test]
    fn test_garbage_bytes_rejected() {
        let result = parse_workbook(b"definitely not a workbook".to_vec());
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_histogram_workbook() {
        let table = parse_workbook(PIXELS_XLSX.to_vec()).unwrap();

        assert_eq!(table.column_names(), &["water", "forest", "urban"]);
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.cell(0, "forest"), Some(&CellValue::Float(40.0)));
        assert_eq!(table.cell(2, "forest"), Some(&CellValue::Float(1.5)));
        assert_eq!(classify(&table), DataShape::Histogram);
    }

    #[test]
    fn test_xlsx_upload_renders_polygon() {
        let table = decode_upload(&Upload::from_bytes(TILES_XLSX, "tiles.xlsx")).unwrap();

        assert_eq!(table.column_names(), &["id", "coords"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(
            table.cell(0, "coords").and_then(CellValue::as_text),
            Some("[[[0, 0], [2, 0], [2, 2], [0, 2]]]")
        );
        assert_eq!(classify(&table), DataShape::Polygon);

        let fig = create_map(&table, 2).unwrap();
        let center = &fig.layout.mapbox.as_ref().unwrap().center;
        assert_eq!((center.lat, center.lon), (21.0, 11.0));
        match &fig.data[0] {
            Trace::Scattermapbox(trace) => assert_eq!(trace.lon.len(), 5),
            other => panic!("expected scattermapbox, got {:?}", other),
        }
    }
}
