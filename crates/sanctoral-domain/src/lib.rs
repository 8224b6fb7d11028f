//! Sanctoral Domain Layer
//!
//! Core data model for the sanctoral pipeline: the normalized record schema
//! shared by the extractor and the tabulator, the calendar-day key that names
//! every input and output file, and the trait seam behind which LLM backends
//! live. Infrastructure implementations (HTTP providers, file pipeline, CSV
//! paging) live in other crates.
//!
//! ## Key Concepts
//!
//! - **Record**: one extracted saint/martyr entry (place, era, name, titles)
//! - **DayKey**: `MM-DD` calendar key; names files and composes record IDs
//! - **LlmProvider**: the text-generation capability the pipeline consumes

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod day;
pub mod record;
pub mod traits;

// Re-exports for convenience
pub use day::DayKey;
pub use record::{Record, DEFAULT_TITLE};
pub use traits::LlmProvider;
