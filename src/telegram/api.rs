use serde::Serialize;

use crate::telegram::{TelegramBot, error::SendError, wire};

#[derive(Serialize)]
pub(super) struct OutgoingMessage {
    chat_id: String,
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    parse_mode: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    disable_web_page_preview: Option<bool>,
}

impl OutgoingMessage {
    /// Channel delivery: MarkdownV2 body, link previews off.
    pub(super) fn markdown(chat_id: &str, text: &str) -> Self {
        Self {
            chat_id: chat_id.to_string(),
            text: text.to_string(),
            parse_mode: Some("MarkdownV2"),
            disable_web_page_preview: Some(true),
        }
    }

    /// Plain-text reply used by command handling.
    pub(super) fn plain(chat_id: i64, text: &str) -> Self {
        Self {
            chat_id: chat_id.to_string(),
            text: text.to_string(),
            parse_mode: None,
            disable_web_page_preview: None,
        }
    }
}

#[derive(Serialize)]
struct UpdatesQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    offset: Option<i64>,
    timeout: u64,
}

pub(super) async fn send_message(bot: &TelegramBot, msg: OutgoingMessage) -> Result<(), SendError> {
    let resp = bot
        .http()
        .post(bot.send_message_url().clone())
        .json(&msg)
        .send()
        .await
        .map_err(from_transport)?;

    let envelope: wire::ApiEnvelope<wire::Message> = resp.json().await.map_err(from_transport)?;
    if envelope.ok {
        Ok(())
    } else {
        Err(from_api(envelope))
    }
}

pub(super) async fn get_updates(
    bot: &TelegramBot,
    offset: Option<i64>,
    timeout_secs: u64,
) -> Result<Vec<wire::Update>, SendError> {
    let query = UpdatesQuery {
        offset,
        timeout: timeout_secs,
    };

    let resp = bot
        .http()
        .post(bot.get_updates_url().clone())
        .json(&query)
        .send()
        .await
        .map_err(from_transport)?;

    let envelope: wire::ApiEnvelope<Vec<wire::Update>> =
        resp.json().await.map_err(from_transport)?;
    if envelope.ok {
        Ok(envelope.result.unwrap_or_default())
    } else {
        Err(from_api(envelope))
    }
}

fn from_transport(e: reqwest::Error) -> SendError {
    if e.is_timeout() {
        SendError::TimedOut
    } else {
        SendError::Network(e.to_string())
    }
}

fn from_api<T>(envelope: wire::ApiEnvelope<T>) -> SendError {
    if let Some(params) = envelope.parameters
        && let Some(new_chat_id) = params.migrate_to_chat_id
    {
        return SendError::ChatMigrated { new_chat_id };
    }

    let description = envelope
        .description
        .unwrap_or_else(|| "no description".into());
    match envelope.error_code {
        Some(401 | 403) => SendError::Unauthorized(description),
        Some(400) => SendError::BadRequest(description),
        code => SendError::Other { code, description },
    }
}
