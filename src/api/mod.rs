use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod client;

pub use client::ChatClient;

pub(crate) const HEALTH_PATH: &str = "/health/env";
pub(crate) const CHAT_PATH: &str = "/api/groq_chat";

/// Request body for the chat endpoint.
#[derive(Debug, Serialize)]
pub(crate) struct ChatPayload<'a> {
    pub message: &'a str,
}

/// Response envelope of the chat endpoint. Both fields are optional on
/// the wire: the backend sends `{ok, reply}` but replies missing the
/// `ok` flag are still accepted, and unknown extra fields are ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct ChatEnvelope {
    #[serde(default)]
    pub ok: Option<bool>,
    #[serde(default)]
    pub reply: Option<String>,
}

/// Body of the health probe. Both fields are required; a body missing
/// either does not count as a health report at all.
#[derive(Debug, Deserialize)]
pub(crate) struct HealthReport {
    pub ok: bool,
    pub groq_present: bool,
}

#[derive(Debug, Error)]
pub enum ChatError {
    /// The request never produced a readable HTTP response.
    #[error("chat request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The response body was not the JSON envelope the widget expects.
    #[error("malformed chat response: {0}")]
    Malformed(#[from] serde_json::Error),
    /// A well-formed envelope explicitly reported failure.
    #[error("chat backend reported failure")]
    Refused,
    /// A well-formed envelope carried no reply text.
    #[error("chat backend sent an empty reply")]
    EmptyReply,
    /// The background task finished without delivering an outcome.
    #[error("chat request was interrupted")]
    Interrupted,
}

/// Whether the chat is offered to the user at all. Decided once at
/// startup from the health probe and never recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Available,
    Unavailable,
}

impl Availability {
    /// Decision rule for the probe body. Only an explicit, well-formed
    /// report can withhold the chat; anything unreadable counts in favor
    /// of offering it.
    pub(crate) fn from_health_body(body: &str) -> Self {
        match serde_json::from_str::<HealthReport>(body) {
            Ok(report) if report.ok && report.groq_present => Availability::Available,
            Ok(report) => {
                tracing::info!(
                    "Health probe withheld chat: ok={}, groq_present={}",
                    report.ok,
                    report.groq_present
                );
                Availability::Unavailable
            }
            Err(err) => {
                tracing::debug!("Health body did not parse: {}. Offering chat anyway.", err);
                Availability::Available
            }
        }
    }
}

/// Normalizes a chat response body into either reply text or an error.
/// An explicit `ok: false` wins over any reply text the envelope carries,
/// so raw backend failure detail never reaches the transcript.
pub(crate) fn reply_from_body(body: &str) -> Result<String, ChatError> {
    let envelope: ChatEnvelope = serde_json::from_str(body)?;

    if envelope.ok == Some(false) {
        return Err(ChatError::Refused);
    }

    match envelope.reply {
        Some(reply) if !reply.trim().is_empty() => Ok(reply),
        _ => Err(ChatError::EmptyReply),
    }
}
