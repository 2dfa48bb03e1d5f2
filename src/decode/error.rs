//! Upload decoding errors

use thiserror::Error;

/// Errors that can occur while turning an upload into a `Table`
///
/// Callers of `parse_contents` never see these directly; they are logged
/// and collapsed to "no table".
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Contents did not have the `<prefix>,<payload>` shape
    #[error("Upload contents are missing the content-type separator")]
    MissingSeparator,

    /// Payload was not valid base64
    #[error("Invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Delimited text was not valid UTF-8
    #[error("Upload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Malformed delimited text
    #[error("{0}")]
    Csv(#[from] csv::Error),

    /// A record has more fields than the header
    #[error("Expected {expected} fields in line {line}, saw {actual}")]
    TooManyFields {
        line: u64,
        expected: usize,
        actual: usize,
    },

    /// Malformed or unreadable spreadsheet
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    /// Workbook contained no worksheet
    #[error("Workbook has no worksheets")]
    EmptyWorkbook,

    /// File had no header row at all
    #[error("No columns to parse from file")]
    NoColumns,

    /// Filename matched neither a CSV nor an Excel extension
    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),
}

/// Result type for decode operations
pub type DecodeResult<T> = Result<T, DecodeError>;
