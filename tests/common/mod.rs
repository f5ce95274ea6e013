#![allow(dead_code)]

use httpmock::{Method::GET, Mock, MockServer};
use livenews_bot::{TelegramBot, XueqiuClient};
use serde_json::{Value, json};
use url::Url;

pub const TIMELINE_PATH: &str = "/v4/statuses/public_timeline_by_category.json";
pub const SEND_MESSAGE_PATH: &str = "/botTEST_TOKEN/sendMessage";
pub const GET_UPDATES_PATH: &str = "/botTEST_TOKEN/getUpdates";

pub fn xueqiu_client(server: &MockServer) -> XueqiuClient {
    XueqiuClient::builder()
        .base_timeline(Url::parse(&format!("{}{}", server.base_url(), TIMELINE_PATH)).unwrap())
        .cookie_url(Url::parse(&format!("{}/?category=livenews", server.base_url())).unwrap())
        .build()
        .unwrap()
}

pub fn telegram_bot(server: &MockServer) -> TelegramBot {
    TelegramBot::builder("TEST_TOKEN")
        .api_base(Url::parse(&server.base_url()).unwrap())
        .build()
        .unwrap()
}

pub fn mock_session_bootstrap(server: &MockServer) -> Mock<'_> {
    server.mock(|when, then| {
        when.method(GET).path("/").query_param("category", "livenews");
        then.status(200)
            .header("set-cookie", "xq_a_token=test-session; Path=/")
            .body("<html></html>");
    })
}

pub fn news_payload(id: i64, text: &str, created_at: i64) -> Value {
    json!({
        "id": id,
        "text": text,
        "mark": 0,
        "target": format!("/statuses/{id}"),
        "created_at": created_at,
    })
}

/// Build the provider envelope: each slot's payload is JSON re-encoded into
/// a string, exactly as the timeline endpoint serves it.
pub fn timeline_body(payloads: &[Value]) -> String {
    let list: Vec<Value> = payloads
        .iter()
        .map(|p| json!({ "data": p.to_string() }))
        .collect();
    json!({ "list": list }).to_string()
}

pub fn mock_timeline(server: &MockServer, body: String) -> Mock<'_> {
    server.mock(|when, then| {
        when.method(GET)
            .path(TIMELINE_PATH)
            .query_param("since_id", "-1")
            .query_param("max_id", "-1");
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    })
}
