//! Session bootstrap against the provider's HTML front door.
//!
//! The timeline endpoint rejects requests that arrive without the session
//! cookies a browser would have picked up, so the first fetch visits the
//! live-news page and lets the cookie jar collect whatever is issued.

use crate::core::error::BotError;

impl super::XueqiuClient {
    pub(crate) async fn ensure_session(&self) -> Result<(), BotError> {
        // Fast path: check the flag with a read lock.
        if self.state.read().await.bootstrapped {
            return Ok(());
        }

        // Slow path: acquire the dedicated fetch lock so only one task proceeds.
        let _guard = self.session_fetch_lock.lock().await;

        // Double-check: another task might have bootstrapped while this one waited.
        if self.state.read().await.bootstrapped {
            return Ok(());
        }

        self.bootstrap_session().await
    }

    /// Drop the session flag so the next fetch bootstraps again.
    pub async fn invalidate_session(&self) {
        let mut state = self.state.write().await;
        state.bootstrapped = false;
    }

    async fn bootstrap_session(&self) -> Result<(), BotError> {
        tracing::info!("bootstrapping provider session");
        let resp = self.http.get(self.cookie_url.clone()).send().await?;

        if !resp.status().is_success() {
            return Err(BotError::Status {
                status: resp.status().as_u16(),
                url: self.cookie_url.to_string(),
            });
        }

        self.state.write().await.bootstrapped = true;
        Ok(())
    }
}
