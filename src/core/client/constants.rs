//! Centralized constants for default endpoints and the browser signature.

/// Desktop UA the provider accepts; bare API clients get rejected.
pub(crate) const USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:70.0) Gecko/20100101 Firefox/70.0";

/// Referer the timeline endpoint expects to see.
pub(crate) const REFERER_URL: &str = "https://xueqiu.com/today/";

pub(crate) const ACCEPT_JSON: &str = "application/json, text/javascript, */*; q=0.01";

pub(crate) const ACCEPT_LANGUAGES: &str = "en-US,en;q=0.9,zh-CN;q=0.8,zh;q=0.7";

/// Public live-news timeline endpoint.
pub(crate) const DEFAULT_BASE_TIMELINE: &str =
    "https://xueqiu.com/v4/statuses/public_timeline_by_category.json";

/// A URL that makes the provider issue session cookies.
pub(crate) const DEFAULT_COOKIE_URL: &str = "https://xueqiu.com/?category=livenews";
