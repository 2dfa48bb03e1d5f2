//! Comma-separated uploads

use super::error::{DecodeError, DecodeResult};
use crate::table::{CellValue, Table};

/// Parse UTF-8 CSV text with a header row into a `Table`
///
/// Field types are inferred per cell. Short records are padded with empty
/// cells; records wider than the header are rejected.
pub fn parse_csv(text: &str) -> DecodeResult<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if headers.is_empty() || (headers.len() == 1 && headers[0].is_empty()) {
        return Err(DecodeError::NoColumns);
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        if record.len() > headers.len() {
            return Err(DecodeError::TooManyFields {
                line: record.position().map_or(0, |p| p.line()),
                expected: headers.len(),
                actual: record.len(),
            });
        }
        rows.push(record.iter().map(CellValue::infer).collect());
    }

    Ok(Table::from_rows(headers, rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_histogram_csv() {
        let csv_data = "water,forest,urban
12,40,7
3,55,0";

        let table = parse_csv(csv_data).unwrap();

        assert_eq!(table.column_names(), &["water", "forest", "urban"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.cell(1, "forest"), Some(&CellValue::Int(55)));
    }

    #[test]
    fn test_parse_quoted_coords() {
        let csv_data = "id,coords
1,\"[[[10.0, 20.0], [11.0, 20.0], [11.0, 21.0]]]\"";

        let table = parse_csv(csv_data).unwrap();

        assert_eq!(
            table.cell(0, "coords").and_then(CellValue::as_text),
            Some("[[[10.0, 20.0], [11.0, 20.0], [11.0, 21.0]]]")
        );
    }

    #[test]
    fn test_header_only() {
        let table = parse_csv("a,b\n").unwrap();
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(parse_csv(""), Err(DecodeError::NoColumns)));
    }

    #[test]
    fn test_short_record_is_padded() {
        let table = parse_csv("water,forest\n1,2\n3\n").unwrap();

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.cell(1, "water"), Some(&CellValue::Int(3)));
        assert_eq!(table.cell(1, "forest"), Some(&CellValue::Empty));
    }

    #[test]
    fn test_wide_record_rejected() {
        let err = parse_csv("a,b\n1,2\n1,2,3\n").unwrap_err();
        assert!(matches!(
            err,
            DecodeError::TooManyFields {
                line: 3,
                expected: 2,
                actual: 3
            }
        ));
        assert_eq!(err.to_string(), "Expected 2 fields in line 3, saw 3");
    }

    #[test]
    fn test_csv_error_message_not_doubled() {
        let err = DecodeError::from(csv::Error::from(std::io::Error::new(
            std::io::ErrorKind::Other,
            "boom",
        )));
        assert!(!err.to_string().starts_with("CSV error: CSV error"));
    }
}
