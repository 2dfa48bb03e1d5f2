//! Figure model
//!
//! Serializes to the JSON shape Plotly expects for `Plotly.newPlot`:
//! `{"data": [...traces], "layout": {...}}`. Unset layout fields are
//! omitted so the client applies its own defaults.

use serde::Serialize;

use crate::table::CellValue;

/// A complete renderable chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    pub fn new(data: Vec<Trace>, layout: Layout) -> Self {
        Self { data, layout }
    }

    /// Serialize to a `serde_json::Value`
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

/// One data series
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Bar(BarTrace),
    Scattermapbox(ScatterMapboxTrace),
}

/// Bar series: categories on x, values on y
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarTrace {
    pub x: Vec<String>,
    pub y: Vec<CellValue>,
    pub name: String,
}

/// Line/marker series drawn on a map base layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterMapboxTrace {
    pub mode: String,
    pub lon: Vec<f64>,
    pub lat: Vec<f64>,
    pub marker: Marker,
    pub line: Line,
    pub fill: String,
    pub fillcolor: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub width: u32,
    pub color: String,
}

/// Figure layout
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barmode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autosize: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovermode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mapbox: Option<Mapbox>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: Title,
}

impl Axis {
    pub fn titled(text: impl Into<String>) -> Self {
        Self {
            title: Title::new(text),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

impl Margin {
    pub fn uniform(px: u32) -> Self {
        Self {
            l: px,
            r: px,
            t: px,
            b: px,
        }
    }
}

/// Map base layer settings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mapbox {
    pub style: String,
    pub bearing: f64,
    pub center: MapCenter,
    pub pitch: f64,
    pub zoom: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapCenter {
    pub lat: f64,
    pub lon: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bar_trace_json() {
        let fig = Figure::new(
            vec![Trace::Bar(BarTrace {
                x: vec!["water".into()],
                y: vec![CellValue::Int(12)],
                name: "water".into(),
            })],
            Layout {
                barmode: Some("group".into()),
                ..Default::default()
            },
        );

        assert_eq!(
            fig.to_json(),
            json!({
                "data": [{"type": "bar", "x": ["water"], "y": [12], "name": "water"}],
                "layout": {"barmode": "group"}
            })
        );
    }

    #[test]
    fn test_empty_layout_omits_fields() {
        let json = serde_json::to_value(Layout::default()).unwrap();
        assert_eq!(json, json!({}));
    }
}
