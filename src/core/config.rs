use std::env;
use std::time::Duration;

use crate::core::error::BotError;

/// How often the dispatch cycle runs when `POLL_INTERVAL_SECS` is unset.
/// The same span doubles as the recency window for delivery.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(120);

/// Runtime settings, resolved once at startup and passed explicitly to the
/// components that need them.
#[derive(Debug, Clone)]
pub struct Config {
    /// Telegram bot credential.
    pub bot_token: String,
    /// Destination channel, always `@`-prefixed.
    pub channel_id: String,
    /// Poll schedule period and recency-window width.
    pub poll_interval: Duration,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`BotError::Config`] when `BOT_TOKEN` or `CHANNEL_ID` is
    /// missing, or when `POLL_INTERVAL_SECS` is present but not an integer.
    pub fn from_env() -> Result<Self, BotError> {
        let bot_token = require("BOT_TOKEN")?;
        let channel_id = normalize_channel(&require("CHANNEL_ID")?);

        let poll_interval = match env::var("POLL_INTERVAL_SECS") {
            Ok(raw) => {
                let secs: u64 = raw.parse().map_err(|_| {
                    BotError::Config(format!("POLL_INTERVAL_SECS must be an integer, got {raw:?}"))
                })?;
                if secs == 0 {
                    return Err(BotError::Config("POLL_INTERVAL_SECS must be positive".into()));
                }
                Duration::from_secs(secs)
            }
            Err(_) => DEFAULT_POLL_INTERVAL,
        };

        Ok(Self {
            bot_token,
            channel_id,
            poll_interval,
        })
    }
}

fn require(key: &str) -> Result<String, BotError> {
    env::var(key).map_err(|_| BotError::Config(format!("{key} is not set")))
}

// The Bot API addresses channels by `@name`.
fn normalize_channel(raw: &str) -> String {
    if raw.starts_with('@') {
        raw.to_string()
    } else {
        format!("@{raw}")
    }
}
