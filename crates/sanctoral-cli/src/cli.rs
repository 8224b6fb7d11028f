//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Sanctoral - extract saints' records from a martyrology calendar and
/// flatten them into paginated CSV.
#[derive(Debug, Parser)]
#[command(name = "sanctoral")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the LLM extraction over the raw text calendar
    Extract(ExtractArgs),

    /// Flatten per-day JSON extractions into paginated CSV
    Tabulate(TabulateArgs),
}

/// Generation backends.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum BackendArg {
    /// Hosted Gemini API
    Gemini,
    /// Local Ollama server
    Ollama,
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Generation backend
    #[arg(short, long, value_enum, default_value = "gemini")]
    pub backend: BackendArg,

    /// Directory of MM-DD.txt source documents
    #[arg(long, default_value = "./data/raw")]
    pub input: PathBuf,

    /// Directory receiving one MM-DD.json per document
    #[arg(long, default_value = "./data/json")]
    pub output: PathBuf,

    /// Append-only log of unparseable model responses
    #[arg(long, default_value = "./data/debug_failed.jsonl")]
    pub debug_log: PathBuf,

    /// Model name (defaults to the backend's standard model)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Backend endpoint override
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Seconds to pause between documents (default: 6 for gemini, 0 for ollama)
    #[arg(long)]
    pub delay: Option<u64>,

    /// Token cap for a single generation (ollama only)
    #[arg(long, default_value_t = 500)]
    pub num_predict: u32,

    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
}

/// Arguments for the tabulate command.
#[derive(Debug, Parser)]
pub struct TabulateArgs {
    /// Directory of MM-DD.json extraction files
    #[arg(long, default_value = "./data/json")]
    pub input: PathBuf,

    /// Directory receiving the numbered CSV pages
    #[arg(long, default_value = "./data/csv")]
    pub output: PathBuf,

    /// Data rows per CSV page
    #[arg(long, default_value_t = 298)]
    pub rows_per_page: usize,
}
