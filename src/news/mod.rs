mod api;
mod model;
mod wire;

pub use model::NewsItem;

use crate::core::{BotError, XueqiuClient};

/// A builder for one fetch of the public live-news timeline.
pub struct NewsBuilder {
    client: XueqiuClient,
    count: u32,
    category: i64,
}

impl NewsBuilder {
    /// Creates a new `NewsBuilder` against the given client.
    pub fn new(client: &XueqiuClient) -> Self {
        Self {
            client: client.clone(),
            count: 10,
            category: 6,
        }
    }

    /// Sets the page size requested from the provider.
    #[must_use]
    pub const fn count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Sets the provider category filter (6 = live market news).
    #[must_use]
    pub const fn category(mut self, category: i64) -> Self {
        self.category = category;
        self
    }

    /// Fetches the latest timeline page, newest first.
    ///
    /// A rejected request (non-success status) is a soft failure: it is
    /// logged and an empty list is returned. Transport faults and malformed
    /// payloads return an error.
    ///
    /// # Errors
    ///
    /// Returns a [`BotError`] if the request cannot be sent or a payload
    /// cannot be decoded.
    pub async fn fetch(self) -> Result<Vec<NewsItem>, BotError> {
        api::fetch_timeline(&self.client, self.count, self.category).await
    }
}
