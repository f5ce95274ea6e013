//! Telegram Bot API surface: channel delivery and command replies.
//! Internals are split into `api` (request plumbing), `wire` (response
//! shapes), and `error` (delivery failure categories).

mod api;
mod error;
mod wire;

pub use error::SendError;

use std::time::Duration;

use url::Url;

use crate::core::BotError;

const DEFAULT_API_BASE: &str = "https://api.telegram.org/";

/// How long a `getUpdates` call is allowed to hold the connection open.
const LONG_POLL_SECS: u64 = 30;

/// Pause before polling again after a failed `getUpdates` call.
const ERROR_PAUSE: Duration = Duration::from_secs(5);

/// Fixed reply to `/start`.
pub const START_REPLY: &str = "I'm a bot, please talk to me!";

/// Fixed reply to any unrecognized command.
pub const UNKNOWN_REPLY: &str = "Sorry, I didn't understand that command.";

/// Client for the Telegram Bot API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct TelegramBot {
    http: reqwest::Client,
    send_message_url: Url,
    get_updates_url: Url,
}

impl TelegramBot {
    /// Create a new builder for the given bot token.
    pub fn builder(token: impl Into<String>) -> TelegramBotBuilder {
        TelegramBotBuilder {
            token: token.into(),
            api_base: None,
            timeout: None,
        }
    }

    /* -------- internal getters used by `api` -------- */

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }
    pub(crate) fn send_message_url(&self) -> &Url {
        &self.send_message_url
    }
    pub(crate) fn get_updates_url(&self) -> &Url {
        &self.get_updates_url
    }

    /// Post a rendered news message to a channel: MarkdownV2, link previews
    /// disabled.
    ///
    /// # Errors
    ///
    /// Returns a [`SendError`] naming the failure category; the send is not
    /// retried.
    pub async fn send_news(&self, chat_id: &str, text: &str) -> Result<(), SendError> {
        api::send_message(self, api::OutgoingMessage::markdown(chat_id, text)).await
    }

    async fn reply(&self, chat_id: i64, text: &str) -> Result<(), SendError> {
        api::send_message(self, api::OutgoingMessage::plain(chat_id, text)).await
    }

    /// Answer `/start` and unrecognized commands over long polling.
    ///
    /// Runs until the process shuts down. Poll and reply failures are logged
    /// and the loop continues; this path shares no state with the dispatch
    /// cycle.
    pub async fn run_commands(&self) {
        let mut offset = None;
        loop {
            let updates = match api::get_updates(self, offset, LONG_POLL_SECS).await {
                Ok(updates) => updates,
                Err(err) => {
                    tracing::error!(error = %err, "getUpdates failed");
                    tokio::time::sleep(ERROR_PAUSE).await;
                    continue;
                }
            };

            for update in updates {
                offset = Some(update.update_id + 1);

                let Some(message) = update.message else {
                    continue;
                };
                let Some(text) = message.text else {
                    continue;
                };
                let Some(reply) = command_reply(&text) else {
                    continue;
                };

                if let Err(err) = self.reply(message.chat.id, reply).await {
                    tracing::error!(error = %err, chat_id = message.chat.id, "command reply failed");
                }
            }
        }
    }
}

// `/start` and `/start@botname` greet; other commands get the fallback.
// Non-command messages are ignored.
fn command_reply(text: &str) -> Option<&'static str> {
    let command = text.split_whitespace().next()?;
    let name = command.strip_prefix('/')?;
    match name.split('@').next() {
        Some("start") => Some(START_REPLY),
        _ => Some(UNKNOWN_REPLY),
    }
}

/* ----------------------- Builder ----------------------- */

pub struct TelegramBotBuilder {
    token: String,
    api_base: Option<Url>,
    timeout: Option<Duration>,
}

impl TelegramBotBuilder {
    /// Override the API base (e.g., for a mock server).
    #[must_use]
    pub fn api_base(mut self, url: Url) -> Self {
        self.api_base = Some(url);
        self
    }

    /// Set a global request timeout. Default: none, so long polls are not
    /// cut short.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Build the bot client.
    ///
    /// # Errors
    ///
    /// Returns a [`BotError`] if a URL fails to parse or the underlying HTTP
    /// client cannot be constructed.
    pub fn build(self) -> Result<TelegramBot, BotError> {
        let api_base = self.api_base.unwrap_or(Url::parse(DEFAULT_API_BASE)?);
        let root = api_base.join(&format!("bot{}/", self.token))?;

        let mut httpb = reqwest::Client::builder();
        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        let http = httpb.build()?;

        Ok(TelegramBot {
            http,
            send_message_url: root.join("sendMessage")?,
            get_updates_url: root.join("getUpdates")?,
        })
    }
}
