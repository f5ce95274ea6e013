use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// Telegram delivery failures are deliberately not part of this enum; the
/// send operation returns its own tagged [`crate::telegram::SendError`] so
/// callers match delivery categories explicitly.
#[derive(Debug, Error)]
pub enum BotError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A response body could not be decoded as JSON.
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The data received from the provider was in an unexpected format or
    /// was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// Startup configuration is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}
