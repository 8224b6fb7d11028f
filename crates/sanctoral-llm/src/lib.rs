//! Sanctoral LLM Provider Layer
//!
//! Implementations of the `LlmProvider` trait from `sanctoral-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: deterministic mock for testing
//! - `GeminiProvider`: hosted Gemini API, single-shot request
//! - `OllamaProvider`: local Ollama server, streamed response reassembly
//!
//! # Examples
//!
//! ```
//! use sanctoral_llm::MockProvider;
//! use sanctoral_domain::LlmProvider;
//!
//! # async fn demo() -> Result<(), sanctoral_llm::LlmError> {
//! let provider = MockProvider::new("Hello from LLM!");
//! assert_eq!(provider.generate("test prompt").await?, "Hello from LLM!");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod gemini;
pub mod ollama;

use sanctoral_domain::LlmProvider;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use gemini::GeminiProvider;
pub use ollama::OllamaProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("communication error: {0}")]
    Communication(String),

    /// Invalid response from the backend
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available on the backend
    #[error("model not available: {0}")]
    ModelNotAvailable(String),

    /// Required credential was not supplied
    #[error("missing credentials: {0}")]
    MissingCredentials(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// Mock LLM provider for deterministic testing
///
/// Returns pre-configured responses without making any network calls.
///
/// # Examples
///
/// ```
/// use sanctoral_llm::MockProvider;
/// use sanctoral_domain::LlmProvider;
///
/// # async fn demo() -> Result<(), sanctoral_llm::LlmError> {
/// let mut provider = MockProvider::new("[]");
/// provider.add_response("prompt1", "response1");
/// assert_eq!(provider.generate("prompt1").await?, "response1");
/// assert_eq!(provider.generate("anything else").await?, "[]");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, Result<String, String>>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockProvider {
    /// Create a provider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Add a specific response for a given prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(prompt.into(), Ok(response.into()));
    }

    /// Configure an error for a specific prompt
    pub fn add_error(&mut self, prompt: impl Into<String>, message: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(prompt.into(), Err(message.into()));
    }

    /// Number of times `generate` was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("[]")
    }
}

impl LlmProvider for MockProvider {
    type Error = LlmError;

    async fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        *self.call_count.lock().unwrap() += 1;

        match self.responses.lock().unwrap().get(prompt) {
            Some(Ok(response)) => Ok(response.clone()),
            Some(Err(message)) => Err(LlmError::Other(message.clone())),
            None => Ok(self.default_response.clone()),
        }
    }
}
