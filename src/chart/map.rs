//! Map renderer
//!
//! Draws the first ring of a row's polygon as a filled outline on a map
//! base layer, centered on the ring's centroid.

use super::classify::is_coords_column;
use super::coords::{parse_rings, CoordsError, Point};
use super::error::{RenderError, RenderResult};
use super::figure::{
    Figure, Layout, Line, MapCenter, Mapbox, Marker, ScatterMapboxTrace, Title, Trace,
};
use super::row_index;
use crate::table::{CellValue, Table};

pub const MAP_TITLE: &str = "Polygon on Map";
pub const MAP_STYLE: &str = "carto-positron";
pub const MAP_ZOOM: f64 = 9.0;

/// Name of the column holding coordinate literals
pub const COORDS_COLUMN: &str = "coords";

/// The first ring of a coordinate literal, as written (not closed)
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Build from a non-empty point list
    pub fn new(points: Vec<Point>) -> RenderResult<Self> {
        if points.is_empty() {
            return Err(RenderError::EmptyRing);
        }
        Ok(Self { points })
    }

    /// Parse a coordinate literal and keep only its first ring
    pub fn from_literal(text: &str) -> RenderResult<Self> {
        let first = parse_rings(text)?.into_iter().next().unwrap_or_default();
        Self::new(first)
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Mean of the ring's points, ignoring the closing point
    pub fn centroid(&self) -> Point {
        let n = self.points.len() as f64;
        let (sx, sy) = self
            .points
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        Point::new(sx / n, sy / n)
    }

    /// Longitudes and latitudes with the first point repeated at the end
    pub fn closed(&self) -> (Vec<f64>, Vec<f64>) {
        let mut lon: Vec<f64> = self.points.iter().map(|p| p.x).collect();
        let mut lat: Vec<f64> = self.points.iter().map(|p| p.y).collect();
        lon.push(self.points[0].x);
        lat.push(self.points[0].y);
        (lon, lat)
    }
}

/// Build a map figure for one row of polygon data
///
/// `selected_row` is 1-indexed.
pub fn create_map(table: &Table, selected_row: i64) -> RenderResult<Figure> {
    let row = row_index(selected_row, table.row_count())?;
    let column = coords_column(table).ok_or(RenderError::MissingCoordsColumn)?;

    let cell = table
        .cell(row, column)
        .ok_or(RenderError::MissingCoordsColumn)?;
    let text = match cell {
        CellValue::Text(text) => text,
        other => {
            return Err(CoordsError::NotText(other.to_string()).into());
        }
    };

    let polygon = Polygon::from_literal(text)?;

    // Centroid uses the ring as written; closing happens afterwards
    let centroid = polygon.centroid();
    let (lon, lat) = polygon.closed();

    tracing::debug!(
        row = selected_row,
        points = polygon.points().len(),
        center_lat = centroid.y,
        center_lon = centroid.x,
        "Rendering polygon"
    );

    let trace = Trace::Scattermapbox(ScatterMapboxTrace {
        mode: "lines+markers".to_string(),
        lon,
        lat,
        marker: Marker { size: 10 },
        line: Line {
            width: 2,
            color: "blue".to_string(),
        },
        fill: "toself".to_string(),
        fillcolor: "rgba(0,0,255,0.2)".to_string(),
    });

    let layout = Layout {
        title: Some(Title::new(MAP_TITLE)),
        autosize: Some(true),
        hovermode: Some("closest".to_string()),
        mapbox: Some(Mapbox {
            style: MAP_STYLE.to_string(),
            bearing: 0.0,
            center: MapCenter {
                lat: centroid.y,
                lon: centroid.x,
            },
            pitch: 0.0,
            zoom: MAP_ZOOM,
        }),
        ..Default::default()
    };

    Ok(Figure::new(vec![trace], layout))
}

/// Exact `coords` column, else the first column whose name contains it
fn coords_column(table: &Table) -> Option<&str> {
    let names = table.column_names();
    names
        .iter()
        .find(|n| n.as_str() == COORDS_COLUMN)
        .or_else(|| names.iter().find(|n| is_coords_column(n)))
        .map(String::as_str)
}
