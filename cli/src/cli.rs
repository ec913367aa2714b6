//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Service root used when neither `--api-base` nor `HISTORY_API_BASE` is set.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api/v1";

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns.
    Table,
    /// One block per record.
    Vertical,
    /// The raw page as pretty JSON.
    Json,
}

/// Top-level parser.
#[derive(Parser)]
#[command(name = "hd-cli", version, about = "Human detector history CLI")]
pub struct Cli {
    /// Command to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Search the detection history, one page or all of it.
    History(HistoryArgs),
}

/// Options of `hd-cli history`.
#[derive(Debug, Clone, Args)]
pub struct HistoryArgs {
    /// History service root (the `/history` endpoint lives under it).
    #[arg(long, env = "HISTORY_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,
    /// JSON file holding filter and page values; flags take precedence.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Exact query id.
    #[arg(long)]
    pub query_id: Option<String>,
    /// Earliest timestamp, `YYYY-MM-DD_HH-MM-SS`.
    #[arg(long)]
    pub time_min: Option<String>,
    /// Latest timestamp, `YYYY-MM-DD_HH-MM-SS`.
    #[arg(long)]
    pub time_max: Option<String>,
    /// Minimum detected humans.
    #[arg(long, allow_negative_numbers = true)]
    pub num_humans_min: Option<i64>,
    /// Maximum detected humans.
    #[arg(long, allow_negative_numbers = true)]
    pub num_humans_max: Option<i64>,
    /// 1-based page index (default 1).
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub page: Option<u64>,
    /// Rows per page (default 10).
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub page_size: Option<u64>,
    /// Fetch every page instead of a single one.
    #[arg(long, conflicts_with = "page")]
    pub all: bool,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table, ignore_case = true)]
    pub format: OutputFormat,
}
