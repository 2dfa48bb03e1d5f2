//! Core table types
//!
//! A `Table` is created once per decoded upload and never mutated afterwards.
//! Rows are addressed 0-indexed here; the 1-indexed row selector used by the
//! dashboard is converted at the rendering boundary.

use serde::Serialize;
use std::collections::HashSet;

use super::error::{TableError, TableResult};

/// A single scalar cell
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Missing value, serialized as `null`
    Empty,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl CellValue {
    /// Infer the scalar type of a delimited-text field
    ///
    /// Empty fields become `Empty`, then integer, float and boolean literals
    /// are tried in that order. Anything else is kept verbatim as text.
    pub fn infer(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return CellValue::Empty;
        }
        if let Ok(i) = trimmed.parse::<i64>() {
            return CellValue::Int(i);
        }
        if let Ok(f) = trimmed.parse::<f64>() {
            return CellValue::Float(f);
        }
        match trimmed {
            "true" | "True" | "TRUE" => CellValue::Bool(true),
            "false" | "False" | "FALSE" => CellValue::Bool(false),
            _ => CellValue::Text(raw.to_string()),
        }
    }

    /// Borrow the text content, if this is a text cell
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric view of the cell
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Int(i) => Some(*i as f64),
            CellValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::Int(i) => write!(f, "{}", i),
            CellValue::Float(v) => write!(f, "{}", v),
            CellValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Int(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

/// An ordered collection of named columns with a common row count
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    names: Vec<String>,
    columns: Vec<Vec<CellValue>>,
    row_count: usize,
}

impl Table {
    /// Create an empty table (no columns, no rows)
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(name, values)` pairs
    ///
    /// Fails if two columns share a name or the columns differ in length.
    pub fn from_columns<I, S>(columns: I) -> TableResult<Self>
    where
        I: IntoIterator<Item = (S, Vec<CellValue>)>,
        S: Into<String>,
    {
        let mut names = Vec::new();
        let mut values = Vec::new();
        let mut seen = HashSet::new();
        let mut row_count = None;

        for (name, column) in columns {
            let name = name.into();
            if !seen.insert(name.clone()) {
                return Err(TableError::DuplicateColumn(name));
            }

            let expected = *row_count.get_or_insert(column.len());
            if column.len() != expected {
                return Err(TableError::RaggedColumn {
                    column: name,
                    expected,
                    actual: column.len(),
                });
            }

            names.push(name);
            values.push(column);
        }

        Ok(Self {
            names,
            columns: values,
            row_count: row_count.unwrap_or(0),
        })
    }

    /// Build a table from a header row and row-major records
    ///
    /// Duplicate headers are renamed `name.1`, `name.2`, ... and short
    /// records are padded with `Empty`. Cells beyond the header width are
    /// dropped.
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        let names = dedup_headers(headers);
        let width = names.len();
        let row_count = rows.len();

        let mut columns: Vec<Vec<CellValue>> = (0..width)
            .map(|_| Vec::with_capacity(row_count))
            .collect();

        for row in rows {
            let mut cells = row.into_iter();
            for column in columns.iter_mut() {
                column.push(cells.next().unwrap_or(CellValue::Empty));
            }
        }

        Self {
            names,
            columns,
            row_count,
        }
    }

    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    /// Look up a column by exact name
    pub fn column(&self, name: &str) -> Option<&[CellValue]> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|idx| self.columns[idx].as_slice())
    }

    /// Iterate `(name, values)` pairs in column order
    pub fn columns(&self) -> impl Iterator<Item = (&str, &[CellValue])> {
        self.names
            .iter()
            .zip(self.columns.iter())
            .map(|(n, c)| (n.as_str(), c.as_slice()))
    }

    /// Cell at a 0-indexed row in the named column
    pub fn cell(&self, row: usize, column: &str) -> Option<&CellValue> {
        self.column(column).and_then(|c| c.get(row))
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }
}

/// Make header names unique the way dataframe readers do
fn dedup_headers(headers: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::with_capacity(headers.len());

    for header in headers {
        let mut candidate = header.clone();
        let mut suffix = 1;
        while seen.contains(&candidate) {
            candidate = format!("{}.{}", header, suffix);
            suffix += 1;
        }
        seen.insert(candidate.clone());
        out.push(candidate);
    }

    out
}
