//! Remote command oracle backed by the Google Gemini `generateContent` API.
//!
//! A free-text request is wrapped in a fixed instruction asking for the exact
//! command in backticks, followed by a short explanation. The first text part
//! of the first candidate is the answer.

use log::{debug, info};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::config::OracleConfig;
use crate::error::{Error, Result};

/// Answers free-text requests for shell commands.
pub trait CommandOracle {
    /// Asks for a command matching `query`.
    ///
    /// Returns `Ok(None)` when the service replied but the reply carried no
    /// answer text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OracleUnavailable`] on any transport failure, non-success
    /// status or unreadable response body.
    fn ask(&self, query: &str) -> Result<Option<String>>;
}

impl<O: CommandOracle + ?Sized> CommandOracle for &O {
    fn ask(&self, query: &str) -> Result<Option<String>> {
        (**self).ask(query)
    }
}

/// Wraps the user's request in the instruction sent to the model.
#[must_use]
pub fn instruction_for(query: &str) -> String {
    format!(
        "For the following command request: \"{query}\". Provide the exact command with a brief \
         explanation. Highlight the command using backticks. Output the command first then the \
         explanation."
    )
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

impl GenerateContentRequest {
    fn for_query(query: &str) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: instruction_for(query),
                }],
            }],
        }
    }
}

// Every level is optional; a missing or null one means "no answer", not a failure.
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Option<Candidate>>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    parts: Option<Vec<Option<ResponsePart>>>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorDetails,
}

#[derive(Debug, Deserialize)]
struct ErrorDetails {
    code: u16,
    message: String,
}

/// Extracts `candidates[0].content.parts[0].text` from a response body.
///
/// # Errors
///
/// Returns [`Error::OracleUnavailable`] if the body is not a JSON object.
pub fn answer_text(body: &str) -> Result<Option<String>> {
    let response: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|e| Error::OracleUnavailable(format!("unreadable response: {e}")))?;

    Ok(response
        .candidates
        .and_then(|candidates| candidates.into_iter().next().flatten())
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts)
        .and_then(|parts| parts.into_iter().next().flatten())
        .and_then(|part| part.text)
        .filter(|text| !text.is_empty()))
}

/// Describes a non-success response, preferring the API's own error message.
fn status_failure(status: reqwest::StatusCode, body: &str) -> Error {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(error_response) => Error::OracleUnavailable(format!(
            "Gemini API error {}: {}",
            error_response.error.code, error_response.error.message
        )),
        Err(_) => Error::OracleUnavailable(format!("request failed with status {status}")),
    }
}

/// Blocking Gemini client.
pub struct GeminiOracle {
    config: OracleConfig,
    client: Client,
}

impl GeminiOracle {
    #[must_use]
    pub fn new(config: OracleConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// The endpoint URL, without the API key.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }
}

impl CommandOracle for GeminiOracle {
    fn ask(&self, query: &str) -> Result<Option<String>> {
        let endpoint = self.endpoint();
        info!("Asking {} about: {}", self.config.model, query);
        debug!("POST {}", endpoint);

        let response = self
            .client
            .post(&endpoint)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&GenerateContentRequest::for_query(query))
            .send()
            .map_err(|e| Error::OracleUnavailable(e.without_url().to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| Error::OracleUnavailable(e.without_url().to_string()))?;
        debug!("Gemini replied with {} ({} bytes)", status, body.len());

        if !status.is_success() {
            return Err(status_failure(status, &body));
        }

        answer_text(&body)
    }
}
