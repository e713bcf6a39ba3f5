//! Command-line interface for precedent-matcher.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **match**: Find historical precedents for a planned investment
//! - **indices**: Compute the strategic indices for a parameter set
//! - **archive**: List, show, or export cases from the archive
//! - **serve**: Start the JSON API server
//!
//! ## Usage
//!
//! ```text
//! # Precedents for a technology joint venture in Vietnam
//! precedent-matcher match --industry Technology --country Vietnam \
//!     --region Asia-Pacific --intent "Joint Venture expansion"
//!
//! # Full report parameters from a file, JSON output
//! precedent-matcher match --params report.json --format json
//!
//! # Explain which rules drove each index
//! precedent-matcher indices --params report.json --explain
//!
//! # Start the API server
//! precedent-matcher serve --port 8080
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod archive;
pub mod indices;
pub mod params;
pub mod precedents;

#[derive(Parser)]
#[command(name = "precedent-matcher")]
#[command(version)]
#[command(about = "Match planned investments against historical precedents")]
#[command(
    long_about = "precedent-matcher compares a planned cross-border investment against an archive of historical precedents.\n\nFor each sufficiently similar case it reports:\n- A similarity score across sector, geography and strategy\n- A probability of success blended from the case's outcome\n- Success factors or warnings drawn from the case's learnings\n\nIt also computes a family of strategic indices from the same report parameters."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find historical precedents matching a planned investment
    Match(precedents::MatchArgs),

    /// Compute strategic indices from report parameters
    Indices(indices::IndicesArgs),

    /// Browse the case archive
    Archive(archive::ArchiveArgs),

    /// Start the web server
    Serve(ServeArgs),
}

#[derive(clap::Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    pub port: u16,

    /// Address to bind to
    #[arg(short, long, default_value = "127.0.0.1")]
    pub address: String,

    /// Open browser automatically
    #[arg(long)]
    pub open: bool,

    /// Path to custom archive file
    #[arg(long)]
    pub archive: Option<PathBuf>,

    /// Path to a JSON matching configuration (threshold, regions)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
