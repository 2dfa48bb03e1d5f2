//! # Sparks
//!
//! Backend for the Sparks land-classification dashboard. Users upload
//! tables of per-pixel class counts or tile polygons, pick a row, and get
//! back a Plotly figure: a grouped bar chart for class counts or a filled
//! polygon on a map for tiles.
//!
//! ## Modules
//!
//! - [`table`]: In-memory tabular data
//! - [`decode`]: Upload decoding (CSV and Excel)
//! - [`chart`]: Shape classification and figure rendering
//! - [`dashboard`]: Stateless event handlers
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use sparks::dashboard::{render_selection, update_row_options};
//! use sparks::decode::Upload;
//!
//! let upload = Upload::from_bytes(b"water,forest\n12,40\n3,55\n", "pixels.csv");
//!
//! let options = update_row_options(&[upload.clone()]);
//! assert_eq!(options.len(), 2);
//!
//! let charts = render_selection(Some(2), &[upload]);
//! assert_eq!(charts[0].shape.as_str(), "histogram");
//! ```

pub mod api;
pub mod chart;
pub mod config;
pub mod dashboard;
pub mod decode;
pub mod table;

// Re-export top-level types for convenience
pub use table::{CellValue, Table, TableError};

pub use decode::{decode_upload, parse_contents, DecodeError, FileKind, Upload};

pub use chart::{
    classify, create_histogram, create_map, CoordsError, DataShape, Figure, Polygon, RenderError,
    RenderResult,
};

pub use dashboard::{
    render_selection, row_options, summarize_upload, update_row_options, RenderedChart, RowOption,
    SidebarLayout, UploadSummary,
};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{ApiConfig, Config, ConfigError, LoggingConfig};
