//! Sanctoral Extractor
//!
//! Converts per-day martyrology prose into structured records using an LLM.
//!
//! # Overview
//!
//! The extractor is the first half of the sanctoral pipeline. It enumerates
//! a directory of `MM-DD.txt` source documents and, for each one, builds a
//! fixed extraction prompt, calls a text-generation backend, strips any
//! code-fence decoration from the response, parses it as a JSON array of
//! records, and persists the normalized result as `MM-DD.json`.
//!
//! # Architecture
//!
//! ```text
//! Text → PromptBuilder → LlmProvider → sanitize → parse → Records → JSON file
//! ```
//!
//! Backend failures abort the run; an unparseable model response degrades to
//! an empty-but-present output file plus a line in the debug log, and the
//! run continues with the next document.
//!
//! # Example Usage
//!
//! ```no_run
//! use sanctoral_extractor::{Extractor, ExtractorConfig};
//! use sanctoral_llm::MockProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = MockProvider::new("[]");
//! let extractor = Extractor::new(provider, ExtractorConfig::local());
//!
//! let summary = extractor.run().await?;
//! println!("{} documents, {} records", summary.documents, summary.records);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod parser;
mod pipeline;
mod prompt;
mod sanitize;


pub use config::ExtractorConfig;
pub use error::ExtractorError;
pub use parser::parse_records;
pub use pipeline::{DocumentExtraction, Extractor, RunSummary};
pub use prompt::PromptBuilder;
pub use sanitize::strip_code_fences;
