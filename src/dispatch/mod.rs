//! The fetch → filter → format → send cycle.

use std::time::Duration;

use crate::core::XueqiuClient;
use crate::markdown;
use crate::news::{NewsBuilder, NewsItem};
use crate::telegram::{SendError, TelegramBot};

/// Runs the dispatch cycle on a fixed schedule.
///
/// Explicitly constructed from its collaborators; there is no shared
/// process-wide state.
pub struct Dispatcher {
    client: XueqiuClient,
    bot: TelegramBot,
    channel_id: String,
    interval: Duration,
}

impl Dispatcher {
    pub fn new(
        client: XueqiuClient,
        bot: TelegramBot,
        channel_id: impl Into<String>,
        interval: Duration,
    ) -> Self {
        Self {
            client,
            bot,
            channel_id: channel_id.into(),
            interval,
        }
    }

    /// Run the poll schedule forever. The first cycle fires immediately;
    /// cycles are serialized on this task.
    pub async fn run(&self) {
        let mut ticker = tokio::time::interval(self.interval);
        loop {
            ticker.tick().await;
            self.run_once(now_ms()).await;
        }
    }

    /// One dispatch cycle. Contains every failure: the scheduler never sees
    /// an error and the next tick always fires.
    pub async fn run_once(&self, now_ms: i64) {
        let news = match NewsBuilder::new(&self.client).fetch().await {
            Ok(news) => news,
            Err(err) => {
                tracing::error!(error = %err, "news fetch failed, skipping cycle");
                return;
            }
        };

        if news.is_empty() {
            tracing::info!("no news in latest {} seconds", self.interval.as_secs());
            return;
        }

        for item in delivery_order(news) {
            if !within_window(&item, now_ms, self.interval) {
                tracing::info!(id = item.id, "repeated message, skipping");
                continue;
            }

            let text = markdown::to_markdown(&item);
            tracing::info!(id = item.id, "send message: {text}");
            if let Err(err) = self.bot.send_news(&self.channel_id, &text).await {
                log_send_failure(item.id, &err);
            }
        }
    }
}

/// Reverse the provider's newest-first page into delivery order, oldest
/// first.
#[must_use]
pub fn delivery_order(mut news: Vec<NewsItem>) -> Vec<NewsItem> {
    news.reverse();
    news
}

/// Whether an item's publish time still falls inside the trailing recency
/// window. Items outside the window were already seen on an earlier tick.
#[must_use]
pub fn within_window(item: &NewsItem, now_ms: i64, interval: Duration) -> bool {
    item.created_at + interval.as_millis() as i64 >= now_ms
}

fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

// One log line per failed send, keyed by category; nothing is retried and
// nothing escalates past the cycle.
fn log_send_failure(id: i64, err: &SendError) {
    match err {
        SendError::Unauthorized(desc) => {
            tracing::error!(id, %desc, "bot unauthorized for channel");
        }
        SendError::BadRequest(desc) => {
            tracing::error!(id, %desc, "platform rejected send request");
        }
        SendError::TimedOut => {
            tracing::error!(id, "send timed out");
        }
        SendError::Network(desc) => {
            tracing::error!(id, %desc, "network failure during send");
        }
        SendError::ChatMigrated { new_chat_id } => {
            tracing::error!(id, new_chat_id, "channel migrated, reconfigure CHANNEL_ID");
        }
        SendError::Other { code, description } => {
            tracing::error!(id, ?code, %description, "platform error during send");
        }
    }
}
