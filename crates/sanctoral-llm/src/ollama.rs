//! Ollama Provider Implementation
//!
//! Local variant: the generate API is called with `stream: true`, so the
//! response arrives as newline-delimited JSON fragments. Each fragment may
//! carry a partial text chunk under `response`; the provider reassembles the
//! chunks in arrival order into the final string.
//!
//! Generation length is bounded by a token cap (`num_predict`). No retry
//! and no request timeout are configured.

use crate::LlmError;
use futures_util::StreamExt;
use sanctoral_domain::LlmProvider;
use serde::{Deserialize, Serialize};

/// Default Ollama API endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434";

/// Default generation model
pub const DEFAULT_MODEL: &str = "mistral";

/// Default token cap for a single generation
pub const DEFAULT_NUM_PREDICT: u32 = 500;

/// Local Ollama provider with streamed-response reassembly
pub struct OllamaProvider {
    endpoint: String,
    model: String,
    num_predict: u32,
    client: reqwest::Client,
}

/// Request body for the Ollama generate API
#[derive(Serialize)]
struct OllamaGenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: OllamaOptions,
}

#[derive(Serialize)]
struct OllamaOptions {
    num_predict: u32,
}

/// One newline-delimited fragment of a streamed Ollama response
#[derive(Deserialize)]
struct OllamaStreamFragment {
    #[serde(default)]
    response: String,
    #[serde(default)]
    done: bool,
    #[serde(default)]
    error: Option<String>,
}

impl OllamaProvider {
    /// Create a provider with an explicit endpoint and model.
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            model: model.into(),
            num_predict: DEFAULT_NUM_PREDICT,
            client: reqwest::Client::new(),
        }
    }

    /// Create a provider against `http://localhost:11434`.
    pub fn default_endpoint(model: impl Into<String>) -> Self {
        Self::new(DEFAULT_ENDPOINT, model)
    }

    /// Set the token cap for a single generation.
    pub fn with_num_predict(mut self, num_predict: u32) -> Self {
        self.num_predict = num_predict;
        self
    }

    /// Generate text through the Ollama API, reassembling the streamed
    /// fragments into the full response.
    ///
    /// # Errors
    ///
    /// Returns an error if Ollama is unreachable, the model is not pulled
    /// (HTTP 404), the stream carries an `error` fragment, or a non-empty
    /// fragment line is not valid JSON. Only genuinely empty lines are
    /// skipped.
    pub async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let url = format!("{}/api/generate", self.endpoint);

        let request_body = OllamaGenerateRequest {
            model: &self.model,
            prompt,
            stream: true,
            options: OllamaOptions {
                num_predict: self.num_predict,
            },
        };

        let response = self
            .client
            .post(&url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| LlmError::Communication(format!("request failed: {}", e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(LlmError::ModelNotAvailable(self.model.clone()));
        }
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(LlmError::Communication(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let mut stream = response.bytes_stream();
        let mut buffer: Vec<u8> = Vec::new();
        let mut output = String::new();

        while let Some(chunk) = stream.next().await {
            let chunk =
                chunk.map_err(|e| LlmError::Communication(format!("stream error: {}", e)))?;
            buffer.extend_from_slice(&chunk);

            // Fragments are newline-delimited but may span network chunks.
            while let Some(newline) = buffer.iter().position(|&b| b == b'\n') {
                let line: Vec<u8> = buffer.drain(..=newline).collect();
                if append_fragment(&line[..line.len() - 1], &mut output)? {
                    return Ok(output);
                }
            }
        }

        // Trailing fragment without a final newline.
        if !buffer.is_empty() {
            append_fragment(&buffer, &mut output)?;
        }

        Ok(output)
    }
}

/// Parse one fragment line and append its text chunk to `output`.
///
/// Returns `true` when the fragment signals the end of the stream.
fn append_fragment(line: &[u8], output: &mut String) -> Result<bool, LlmError> {
    if line.iter().all(|b| b.is_ascii_whitespace()) {
        return Ok(false);
    }

    let fragment: OllamaStreamFragment = serde_json::from_slice(line)
        .map_err(|e| LlmError::InvalidResponse(format!("malformed stream fragment: {}", e)))?;

    if let Some(error) = fragment.error {
        return Err(LlmError::Other(error));
    }

    output.push_str(&fragment.response);
    Ok(fragment.done)
}

impl LlmProvider for OllamaProvider {
    type Error = LlmError;

    async fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        OllamaProvider::generate(self, prompt).await
    }
}
