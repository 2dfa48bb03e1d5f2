//! Sparks CLI
//!
//! Runs the dashboard pipeline on local files:
//! - List selectable rows
//! - Classify files
//! - Render a row to Plotly figure JSON
//! - Generate a default config file

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use sparks::dashboard::{render_selection, row_options, summarize_upload, RowOption};
use sparks::decode::{decode_upload, Upload};

#[derive(Parser)]
#[command(name = "sparks-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Land classification histograms and polygon maps from tables")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the selectable rows of a file
    Rows {
        /// Path to a CSV or Excel file
        path: PathBuf,
    },

    /// Show whether files hold histogram or polygon data
    Classify {
        /// Paths to CSV or Excel files
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Render one row of each file as Plotly figure JSON
    Render {
        /// Paths to CSV or Excel files
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// Row to render (1-indexed)
        #[arg(short, long)]
        row: i64,
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sparks=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Rows { path } => {
            let options = read_row_options(&path)?;
            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&options)?);
            } else {
                for option in &options {
                    println!("{:>6}  {}", option.value, option.label);
                }
            }
        }

        Commands::Classify { paths } => {
            let uploads = read_uploads(&paths)?;
            let summaries: Vec<_> = uploads.iter().map(summarize_upload).collect();

            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&summaries)?);
            } else {
                println!("{:<30} {:<10} {:>6} {}", "File", "Shape", "Rows", "Columns");
                println!("{}", "-".repeat(70));
                for (upload, summary) in uploads.iter().zip(&summaries) {
                    match summary {
                        Some(s) => println!(
                            "{:<30} {:<10} {:>6} {}",
                            s.filename,
                            s.shape,
                            s.rows,
                            s.columns.join(", ")
                        ),
                        None => println!("{:<30} unreadable", upload.filename),
                    }
                }
            }
        }

        Commands::Render {
            paths,
            row,
            pretty,
            output,
        } => {
            let uploads = read_uploads(&paths)?;
            let charts = render_selection(Some(row), &uploads);

            if charts.is_empty() {
                bail!("None of the files could be read");
            }
            for chart in charts.iter().filter(|c| !c.is_ok()) {
                eprintln!(
                    "{}: {}",
                    chart.filename,
                    chart.error.as_deref().unwrap_or("render failed")
                );
            }

            let json = if pretty {
                serde_json::to_string_pretty(&charts)?
            } else {
                serde_json::to_string(&charts)?
            };

            match output {
                Some(path) => {
                    std::fs::write(&path, &json)
                        .with_context(|| format!("Failed to write {:?}", path))?;
                    println!("Wrote {} chart(s) to {:?}", charts.len(), path);
                }
                None => println!("{}", json),
            }
        }

        Commands::Config { output } => {
            let config = sparks::config::generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

fn read_upload(path: &Path) -> Result<Upload> {
    let bytes = std::fs::read(path).with_context(|| format!("Failed to read {:?}", path))?;
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());
    Ok(Upload::from_bytes(&bytes, filename))
}

/// Row options of one file, decoding it once
///
/// Unlike the dashboard handler, a decode failure is an error here.
fn read_row_options(path: &Path) -> Result<Vec<RowOption>> {
    let upload = read_upload(path)?;
    let table = decode_upload(&upload).with_context(|| format!("Failed to read {:?}", path))?;
    Ok(row_options(Some(&table)))
}

fn read_uploads(paths: &[PathBuf]) -> Result<Vec<Upload>> {
    paths.iter().map(PathBuf::as_path).map(read_upload).collect()
}
