//! Upload decoding
//!
//! Turns a browser upload into a [`Table`]:
//!
//! ```text
//! "<content-type>,<base64>" + filename
//!     → split on first ',' → base64 decode
//!     → "csv" in filename  → UTF-8 → delimited parser
//!     → "xls" in filename  → workbook parser
//! ```
//!
//! - **delimited**: CSV text parsing
//! - **workbook**: Excel/ODS parsing via calamine
//! - **error**: Error types

pub mod delimited;
pub mod error;
pub mod workbook;

pub use delimited::parse_csv;
pub use error::{DecodeError, DecodeResult};
pub use workbook::parse_workbook;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use crate::table::Table;

/// One uploaded file as delivered by the browser
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Upload {
    /// Data URL style payload: `"<content-type-prefix>,<base64-payload>"`
    pub contents: String,
    /// Original filename; its extension selects the parser
    pub filename: String,
}

impl Upload {
    pub fn new(contents: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            contents: contents.into(),
            filename: filename.into(),
        }
    }

    /// Wrap raw file bytes the way a browser upload control would
    pub fn from_bytes(bytes: &[u8], filename: impl Into<String>) -> Self {
        let filename = filename.into();
        let content_type = FileKind::detect(&filename)
            .map(FileKind::content_type)
            .unwrap_or("application/octet-stream");
        Self {
            contents: format!("data:{};base64,{}", content_type, STANDARD.encode(bytes)),
            filename,
        }
    }
}

/// Parser selected from the filename
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Csv,
    Excel,
}

impl FileKind {
    /// Pick a parser by substring match on the filename
    ///
    /// `"csv"` wins over `"xls"` when both appear. Matching ignores case.
    pub fn detect(filename: &str) -> Option<Self> {
        let lower = filename.to_lowercase();
        if lower.contains("csv") {
            Some(FileKind::Csv)
        } else if lower.contains("xls") {
            Some(FileKind::Excel)
        } else {
            None
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            FileKind::Csv => "text/csv",
            FileKind::Excel => "application/vnd.ms-excel",
        }
    }
}

/// Decode an upload into a table, reporting why it failed
pub fn decode_upload(upload: &Upload) -> DecodeResult<Table> {
    let (_content_type, payload) = upload
        .contents
        .split_once(',')
        .ok_or(DecodeError::MissingSeparator)?;

    let bytes = STANDARD.decode(payload.trim())?;

    match FileKind::detect(&upload.filename) {
        Some(FileKind::Csv) => {
            let text = String::from_utf8(bytes)?;
            parse_csv(&text)
        }
        Some(FileKind::Excel) => parse_workbook(bytes),
        None => Err(DecodeError::UnsupportedFormat(upload.filename.clone())),
    }
}

/// Decode an upload, treating any failure as "no table"
///
/// Failures are logged and never propagated: a file that cannot be read is
/// an expected outcome for the dashboard.
pub fn parse_contents(upload: &Upload) -> Option<Table> {
    match decode_upload(upload) {
        Ok(table) => {
            tracing::debug!(
                filename = %upload.filename,
                rows = table.row_count(),
                columns = table.column_count(),
                "Decoded upload"
            );
            Some(table)
        }
        Err(e) => {
            tracing::warn!(filename = %upload.filename, error = %e, "Failed to decode upload");
            None
        }
    }
}
