//! Sequential file pipeline over a directory of source documents

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::parser::parse_records;
use crate::prompt::PromptBuilder;
use crate::sanitize::strip_code_fences;
use indicatif::{ProgressBar, ProgressStyle};
use sanctoral_domain::{DayKey, LlmProvider, Record};
use serde_json::json;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Outcome of a full extraction run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Documents processed (and output files written)
    pub documents: usize,

    /// Records extracted across all documents
    pub records: usize,

    /// Documents whose model output failed to parse
    pub parse_failures: usize,
}

/// Result of extracting a single document
#[derive(Debug, Clone)]
pub struct DocumentExtraction {
    /// Normalized records; empty when the response was unparseable
    pub records: Vec<Record>,

    /// True when the model output failed to parse and was logged
    pub parse_failed: bool,
}

/// The extractor drives one document at a time through
/// prompt → backend → sanitize → parse and persists each result.
pub struct Extractor<L: LlmProvider> {
    provider: L,
    config: ExtractorConfig,
}

impl<L> Extractor<L>
where
    L: LlmProvider,
    L::Error: std::fmt::Display,
{
    /// Create a new extractor over a provider and configuration
    pub fn new(provider: L, config: ExtractorConfig) -> Self {
        Self { provider, config }
    }

    /// Process every `*.txt` file in the input directory, in lexical
    /// (hence chronological, given `MM-DD.txt` naming) order.
    ///
    /// Each document yields one `<stem>.json` output file. A backend error
    /// aborts the run with files written so far retained; an unparseable
    /// response yields an empty array for that one document and the run
    /// continues.
    pub async fn run(&self) -> Result<RunSummary, ExtractorError> {
        let files = list_source_files(&self.config.input_dir)?;
        fs::create_dir_all(&self.config.output_dir)?;

        info!(
            "extracting {} documents from {}",
            files.len(),
            self.config.input_dir.display()
        );

        let progress = ProgressBar::new(files.len() as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );

        let mut summary = RunSummary::default();

        for (idx, path) in files.iter().enumerate() {
            let day = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or_default()
                .to_string();
            if DayKey::parse(&day).is_none() {
                warn!("{} is not a MM-DD day key; the tabulator will not see it", day);
            }
            progress.set_message(day.clone());

            let text = fs::read_to_string(path)?;
            let extraction = self.extract_document(&day, &text).await?;

            let out_path = self.config.output_dir.join(format!("{}.json", day));
            fs::write(&out_path, serde_json::to_string_pretty(&extraction.records)?)?;
            debug!(
                "wrote {} records to {}",
                extraction.records.len(),
                out_path.display()
            );

            summary.documents += 1;
            summary.records += extraction.records.len();
            if extraction.parse_failed {
                summary.parse_failures += 1;
            }
            progress.inc(1);

            // Fixed pause between documents to respect hosted rate limits.
            if self.config.request_delay_secs > 0 && idx + 1 < files.len() {
                tokio::time::sleep(self.config.request_delay()).await;
            }
        }

        progress.finish_and_clear();
        info!(
            "extraction complete: {} documents, {} records, {} parse failures",
            summary.documents, summary.records, summary.parse_failures
        );

        Ok(summary)
    }

    /// Run one document through the prompt → backend → sanitize → parse
    /// sequence without touching the output directory.
    pub async fn extract_document(
        &self,
        day: &str,
        text: &str,
    ) -> Result<DocumentExtraction, ExtractorError> {
        let prompt = PromptBuilder::new(text).build();
        debug!("prompt for {}: {} chars", day, prompt.len());

        let raw = self
            .provider
            .generate(&prompt)
            .await
            .map_err(|e| ExtractorError::Llm(e.to_string()))?;
        debug!("response for {}: {} chars", day, raw.len());

        let cleaned = strip_code_fences(&raw);
        match parse_records(&cleaned) {
            Ok(records) => Ok(DocumentExtraction {
                records,
                parse_failed: false,
            }),
            Err(e) => {
                warn!("unparseable model output for {}: {}", day, e);
                self.log_failure(day, &cleaned)?;
                Ok(DocumentExtraction {
                    records: Vec::new(),
                    parse_failed: true,
                })
            }
        }
    }

    /// Append the offending response to the debug log, keyed by source day.
    fn log_failure(&self, day: &str, raw: &str) -> Result<(), ExtractorError> {
        if let Some(parent) = self.config.debug_log.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.config.debug_log)?;
        writeln!(file, "{}", json!({ "day": day, "raw": raw }))?;
        Ok(())
    }
}

/// All `*.txt` files directly under `dir`, lexically sorted.
fn list_source_files(dir: &Path) -> Result<Vec<PathBuf>, ExtractorError> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().and_then(|e| e.to_str()) == Some("txt"))
        .collect();
    files.sort();
    Ok(files)
}
