use reqwest::StatusCode;
use thiserror::Error;

/// Failures the WeatherAPI.com client can surface.
///
/// Every variant renders as a message fit for the UI's error line; none of
/// them is fatal, retrying the user action recovers.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response (DNS, connect, TLS, ...).
    #[error("Could not reach the weather service: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("The weather service returned {status}: {body}")]
    Api { status: StatusCode, body: String },

    /// The response body did not match the expected shape.
    #[error("Could not understand the weather service response: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A forecast response without a single day in it.
    #[error("The forecast response contained no days")]
    EmptyForecast,
}

impl ClientError {
    /// Build an [`ClientError::Api`], keeping the body short enough for a
    /// one-line message.
    pub(crate) fn api(status: StatusCode, body: &str) -> Self {
        Self::Api { status, body: truncate_body(body) }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
