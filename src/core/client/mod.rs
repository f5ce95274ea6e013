//! Provider client surface + builder.
//! Internals are split into `auth` (session bootstrap) and `constants`
//! (browser signature + default endpoints).

mod auth;
mod constants;

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue, REFERER};
use tokio::sync::{Mutex, RwLock};
use url::Url;

use crate::core::error::BotError;
use constants::{
    ACCEPT_JSON, ACCEPT_LANGUAGES, DEFAULT_BASE_TIMELINE, DEFAULT_COOKIE_URL, REFERER_URL,
    USER_AGENT,
};

#[derive(Debug, Default)]
struct SessionState {
    bootstrapped: bool,
}

/// HTTP client for the provider's public endpoints.
///
/// Cheap to clone; all clones share the underlying connection pool, cookie
/// jar, and session state.
#[derive(Debug, Clone)]
pub struct XueqiuClient {
    http: Client,
    base_timeline: Url,
    cookie_url: Url,

    state: Arc<RwLock<SessionState>>,
    session_fetch_lock: Arc<Mutex<()>>,
}

impl Default for XueqiuClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl XueqiuClient {
    /// Create a new builder.
    pub fn builder() -> XueqiuClientBuilder {
        XueqiuClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_timeline(&self) -> &Url {
        &self.base_timeline
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct XueqiuClientBuilder {
    user_agent: Option<String>,
    base_timeline: Option<Url>,
    cookie_url: Option<Url>,

    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl XueqiuClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the timeline endpoint (e.g., for a mock server).
    #[must_use]
    pub fn base_timeline(mut self, url: Url) -> Self {
        self.base_timeline = Some(url);
        self
    }

    /// Override the session bootstrap URL.
    #[must_use]
    pub fn cookie_url(mut self, url: Url) -> Self {
        self.cookie_url = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns a [`BotError`] if a default URL fails to parse or the
    /// underlying HTTP client cannot be constructed.
    pub fn build(self) -> Result<XueqiuClient, BotError> {
        let base_timeline = self
            .base_timeline
            .unwrap_or(Url::parse(DEFAULT_BASE_TIMELINE)?);
        let cookie_url = self.cookie_url.unwrap_or(Url::parse(DEFAULT_COOKIE_URL)?);

        let mut headers = HeaderMap::new();
        headers.insert("X-Requested-With", HeaderValue::from_static("XMLHttpRequest"));
        headers.insert(REFERER, HeaderValue::from_static(REFERER_URL));
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_JSON));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANGUAGES));

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .default_headers(headers)
            .cookie_store(true);

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(XueqiuClient {
            http,
            base_timeline,
            cookie_url,
            state: Arc::default(),
            session_fetch_lock: Arc::default(),
        })
    }
}
