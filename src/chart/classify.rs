//! Shape classification
//!
//! Decides which renderer a table needs. A table is map data when any
//! column name contains `coords` (case-insensitive); everything else is
//! histogram data.

use serde::Serialize;

use crate::table::Table;

/// The two kinds of uploaded data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataShape {
    /// One polygon per row in a `coords` column
    Polygon,
    /// Per-class pixel counts, one column per class
    Histogram,
}

impl DataShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataShape::Polygon => "polygon",
            DataShape::Histogram => "histogram",
        }
    }
}

impl std::fmt::Display for DataShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Classify a table by its column names
pub fn classify(table: &Table) -> DataShape {
    if table.column_names().iter().any(|name| is_coords_column(name)) {
        DataShape::Polygon
    } else {
        DataShape::Histogram
    }
}

pub(crate) fn is_coords_column(name: &str) -> bool {
    name.to_lowercase().contains("coords")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::CellValue;

    fn table_with(names: &[&str]) -> Table {
        Table::from_columns(names.iter().map(|n| (*n, vec![CellValue::Empty]))).unwrap()
    }

    #[test]
    fn test_coords_variants_are_polygon() {
        for name in ["coords", "Coords", "COORDS_X", "coords2", "polygon_coords"] {
            assert_eq!(classify(&table_with(&["id", name])), DataShape::Polygon, "{}", name);
        }
    }

    #[test]
    fn test_other_columns_are_histogram() {
        assert_eq!(
            classify(&table_with(&["water", "forest", "urban"])),
            DataShape::Histogram
        );
        // Latitude/longitude columns alone do not make map data
        assert_eq!(
            classify(&table_with(&["latitude", "longitude"])),
            DataShape::Histogram
        );
        assert_eq!(classify(&table_with(&["coord"])), DataShape::Histogram);
    }

    #[test]
    fn test_empty_table_is_histogram() {
        assert_eq!(classify(&Table::new()), DataShape::Histogram);
    }

    #[test]
    fn test_shape_strings() {
        assert_eq!(DataShape::Polygon.to_string(), "polygon");
        assert_eq!(
            serde_json::to_string(&DataShape::Histogram).unwrap(),
            "\"histogram\""
        );
    }
}
