//! Trait definitions for external interactions
//!
//! These traits define the boundary between the domain model and
//! infrastructure. Implementations live in other crates.

use std::future::Future;

/// A text-generation backend.
///
/// Implemented by the infrastructure layer (sanctoral-llm) for the hosted
/// Gemini API, a local Ollama server, and a deterministic mock. The pipeline
/// is generic over this trait, so backend-specific configuration (endpoint,
/// streaming reassembly, token cap) stays inside each implementation.
pub trait LlmProvider {
    /// Error type for generation failures.
    type Error;

    /// Generate a completion for `prompt`, returning the full response text.
    ///
    /// One network call per invocation; implementations do not retry.
    fn generate(
        &self,
        prompt: &str,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send;
}
