//! Sanctoral CLI - batch extraction and tabulation of martyrology records.

mod cli;

use anyhow::Context;
use clap::Parser;
use cli::{BackendArg, Cli, Command, ExtractArgs, TabulateArgs};
use sanctoral_extractor::{Extractor, ExtractorConfig, RunSummary};
use sanctoral_llm::{gemini, ollama, GeminiProvider, OllamaProvider};
use sanctoral_tabulator::{Tabulator, TabulatorConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    match Cli::parse().command {
        Command::Extract(args) => run_extract(args).await,
        Command::Tabulate(args) => run_tabulate(args),
    }
}

async fn run_extract(args: ExtractArgs) -> anyhow::Result<()> {
    let config = ExtractorConfig {
        input_dir: args.input,
        output_dir: args.output,
        debug_log: args.debug_log,
        request_delay_secs: args.delay.unwrap_or(match args.backend {
            BackendArg::Gemini => ExtractorConfig::hosted().request_delay_secs,
            BackendArg::Ollama => ExtractorConfig::local().request_delay_secs,
        }),
    };
    config.validate().map_err(anyhow::Error::msg)?;

    let summary = match args.backend {
        BackendArg::Gemini => {
            let api_key = args
                .api_key
                .filter(|key| !key.is_empty())
                .context("GEMINI_API_KEY is not set")?;
            let provider = GeminiProvider::new(
                args.endpoint
                    .unwrap_or_else(|| gemini::DEFAULT_ENDPOINT.to_string()),
                args.model
                    .unwrap_or_else(|| gemini::DEFAULT_MODEL.to_string()),
                api_key,
            );
            Extractor::new(provider, config).run().await?
        }
        BackendArg::Ollama => {
            let provider = OllamaProvider::new(
                args.endpoint
                    .unwrap_or_else(|| ollama::DEFAULT_ENDPOINT.to_string()),
                args.model
                    .unwrap_or_else(|| ollama::DEFAULT_MODEL.to_string()),
            )
            .with_num_predict(args.num_predict);
            Extractor::new(provider, config).run().await?
        }
    };

    print_extract_summary(&summary);
    Ok(())
}

fn run_tabulate(args: TabulateArgs) -> anyhow::Result<()> {
    let config = TabulatorConfig {
        json_dir: args.input,
        csv_dir: args.output,
        rows_per_page: args.rows_per_page,
    };
    config.validate().map_err(anyhow::Error::msg)?;

    let summary = Tabulator::new(config).run()?;
    println!("Wrote {} rows across {} pages.", summary.rows, summary.pages);
    Ok(())
}

fn print_extract_summary(summary: &RunSummary) {
    println!(
        "Extraction complete: {} documents, {} records, {} parse failures.",
        summary.documents, summary.records, summary.parse_failures
    );
}
