use super::extract;
use super::record::AnalysisRecord;
use super::request::build_request;
use serde::Deserialize;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Everything that can go wrong with one analysis query. Each stage fails
/// fast; a query produces exactly one terminal error and nothing is retried
/// internally.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("no API credential configured")]
    MissingCredential,
    #[error("invalid analysis endpoint: {0}")]
    InvalidEndpoint(String),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed analysis reply: {0}")]
    Malformed(String),
}

impl AnalysisError {
    /// The exact copy shown to the user for each failure class.
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::MissingCredential => {
                "No API key is configured. Add SELAH_API_KEY to your config and restart the app."
                    .to_string()
            }
            AnalysisError::InvalidEndpoint(detail) => {
                format!("The analysis endpoint is misconfigured: {detail}")
            }
            AnalysisError::Transport(err) => {
                format!("Could not reach the analysis service: {err}")
            }
            AnalysisError::Malformed(detail) => format!(
                "The analysis could not be read. Complex punctuation in the verse text \
                 sometimes causes this; please try again. ({detail})"
            ),
        }
    }
}

// Chat-completion envelope. Only choices[0].message.content is consumed;
// an empty choice list is a fatal decode failure.
#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

static QUERY_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Monotonic ticket minted when a query is submitted. The view applies a
/// result only while its ticket is still the newest, so a slow reply from an
/// abandoned query never overwrites a newer one.
pub fn issue_query_ticket() -> u64 {
    QUERY_COUNTER.fetch_add(1, Ordering::Relaxed) + 1
}

pub fn newest_query_ticket() -> u64 {
    QUERY_COUNTER.load(Ordering::Relaxed)
}

/// Client for the hosted analysis endpoint. Holds the endpoint, model id and
/// credential threaded in by the caller; the credential is only ever turned
/// into a bearer header, never logged or persisted.
pub struct AnalysisClient {
    http: reqwest::Client,
    endpoint: reqwest::Url,
    model: String,
    credential: String,
}

// Manual impl so the credential can never leak through debug formatting.
impl std::fmt::Debug for AnalysisClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("model", &self.model)
            .field("credential", &"<redacted>")
            .finish()
    }
}

impl AnalysisClient {
    pub fn new(
        endpoint: &str,
        model: impl Into<String>,
        credential: impl Into<String>,
    ) -> Result<Self, AnalysisError> {
        let credential = credential.into();
        if credential.trim().is_empty() {
            return Err(AnalysisError::MissingCredential);
        }
        let endpoint = reqwest::Url::parse(endpoint)
            .map_err(|err| AnalysisError::InvalidEndpoint(err.to_string()))?;
        Ok(Self {
            http: reqwest::Client::new(),
            endpoint,
            model: model.into(),
            credential,
        })
    }

    /// Build a client from the process environment (see `crate::config`).
    pub fn from_config() -> Result<Self, AnalysisError> {
        let credential = crate::config::credential().ok_or(AnalysisError::MissingCredential)?;
        Self::new(&crate::config::endpoint(), crate::config::model(), credential)
    }

    /// Run one verse query end to end: build the request, POST it, unwrap
    /// the completion envelope, extract the record. Single attempt; retry is
    /// always a fresh call.
    pub async fn analyze(&self, verse_reference: &str) -> Result<AnalysisRecord, AnalysisError> {
        let request = build_request(verse_reference, &self.model);
        tracing::debug!(model = %self.model, "dispatching analysis request");

        let response = self
            .http
            .post(self.endpoint.clone())
            .bearer_auth(&self.credential)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(AnalysisError::Malformed(format!(
                "analysis endpoint returned {status}: {body}"
            )));
        }

        let envelope: ChatResponse = serde_json::from_str(&body)
            .map_err(|err| AnalysisError::Malformed(format!("unexpected envelope: {err}")))?;
        let choice = envelope
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AnalysisError::Malformed("reply contained no choices".to_string()))?;
        tracing::debug!(
            role = %choice.message.role,
            bytes = choice.message.content.len(),
            "completion received"
        );

        extract::extract(&choice.message.content)
    }
}
