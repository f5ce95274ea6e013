use thiserror::Error;

/// Delivery failure categories reported by the Bot API.
///
/// Returned by the send operation as a value so callers match the category
/// explicitly instead of climbing an exception hierarchy. None of these are
/// retried; each is terminal to the send that produced it.
#[derive(Debug, Error)]
pub enum SendError {
    /// The token was rejected or the bot lacks access to the chat.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// The platform rejected the request as malformed.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The request timed out in transit.
    #[error("request timed out")]
    TimedOut,

    /// The request failed before the platform could answer.
    #[error("network error: {0}")]
    Network(String),

    /// The chat moved; later sends must target the new id.
    #[error("chat migrated to {new_chat_id}")]
    ChatMigrated {
        /// Replacement chat id announced by the platform.
        new_chat_id: i64,
    },

    /// Any other platform-reported failure.
    #[error("telegram error (code {code:?}): {description}")]
    Other {
        /// Numeric error code, when the platform supplied one.
        code: Option<i64>,
        /// Human-readable description from the platform.
        description: String,
    },
}
