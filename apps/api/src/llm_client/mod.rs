//! LLM client — the single point of entry for generation-service calls.
//!
//! ARCHITECTURAL RULE: no other module may call the generation endpoint
//! directly. All LLM interactions MUST go through this module.
//!
//! The wire contract is the Ollama `/api/generate` protocol: one POST with
//! `{"model", "prompt"}`, answered by a stream of newline-delimited JSON
//! objects each carrying an incremental `response` fragment. The client
//! aggregates the fragments into one complete text; a single attempt, no
//! retry.

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Endpoint of a local Ollama instance.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434/api/generate";
/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "llama2";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
}

/// One newline-delimited unit of the streamed response. Administrative
/// records (e.g. the final `done` object) carry no `response` field and
/// contribute nothing.
#[derive(Debug, Deserialize)]
struct GenerateChunk {
    #[serde(default)]
    response: String,
}

/// Seam between the pipeline and the generation service, so tests can
/// substitute a canned generator for the live endpoint.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

/// Client for an Ollama-compatible `/api/generate` endpoint.
#[derive(Clone)]
pub struct OllamaClient {
    client: Client,
    endpoint: String,
    model: String,
}

impl OllamaClient {
    pub fn new(endpoint: String, model: String, timeout: std::time::Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
            endpoint,
            model,
        }
    }
}

#[async_trait]
impl TextGenerator for OllamaClient {
    /// Posts the prompt and aggregates the streamed chunks in arrival order.
    ///
    /// Transport failures and non-success statuses are returned as errors;
    /// malformed chunks inside an otherwise healthy stream are logged and
    /// skipped so the rest of the stream still contributes.
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let request_body = GenerateRequest {
            model: &self.model,
            prompt,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Generation API returned {status}: {body}");
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let mut aggregated = String::new();
        let mut buffer: Vec<u8> = Vec::new();
        let mut stream = response.bytes_stream();

        // Network chunks align with neither JSON lines nor character
        // boundaries — buffer raw bytes and decode only completed lines.
        while let Some(chunk) = stream.next().await {
            let bytes = chunk?;
            buffer.extend_from_slice(&bytes);
            drain_complete_lines(&mut buffer, &mut aggregated);
        }
        // A final record without a trailing newline still counts.
        aggregate_line(&String::from_utf8_lossy(&buffer), &mut aggregated);

        debug!(
            "Generation stream complete: {} chars aggregated",
            aggregated.len()
        );
        Ok(aggregated)
    }
}

/// Splits off every `\n`-terminated line in `buffer` and applies it to the
/// accumulator. Any trailing partial line — possibly ending mid-way through
/// a multi-byte character — stays buffered for the next network chunk, so
/// UTF-8 decoding only ever sees complete lines.
fn drain_complete_lines(buffer: &mut Vec<u8>, aggregated: &mut String) {
    while let Some(pos) = buffer.iter().position(|&b| b == b'\n') {
        let line: Vec<u8> = buffer.drain(..=pos).collect();
        aggregate_line(&String::from_utf8_lossy(&line), aggregated);
    }
}

/// Applies one response line to the accumulator. Empty lines are skipped;
/// a line that fails to parse is logged and skipped rather than aborting
/// the stream.
fn aggregate_line(line: &str, aggregated: &mut String) {
    let line = line.trim();
    if line.is_empty() {
        return;
    }
    match serde_json::from_str::<GenerateChunk>(line) {
        Ok(chunk) => aggregated.push_str(&chunk.response),
        Err(e) => warn!("Skipping malformed stream chunk ({e}): {line}"),
    }
}
