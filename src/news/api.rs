use crate::{
    core::{BotError, XueqiuClient},
    news::{model::NewsItem, wire},
};

pub(super) async fn fetch_timeline(
    client: &XueqiuClient,
    count: u32,
    category: i64,
) -> Result<Vec<NewsItem>, BotError> {
    client.ensure_session().await?;

    let mut url = client.base_timeline().clone();
    url.query_pairs_mut()
        // always the unbounded sentinels: every call re-fetches the latest page
        .append_pair("since_id", "-1")
        .append_pair("max_id", "-1")
        .append_pair("count", &count.to_string())
        .append_pair("category", &category.to_string());

    tracing::info!("querying live news timeline");
    let resp = client.http().get(url).send().await?;

    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        tracing::warn!(status, "timeline request rejected");
        tracing::error!(body = %resp.text().await.unwrap_or_default(), "provider response");
        // a rejection usually means the session cookies went stale
        client.invalidate_session().await;
        return Ok(Vec::new());
    }

    let body = resp.text().await?;
    decode_timeline(&body)
}

fn decode_timeline(body: &str) -> Result<Vec<NewsItem>, BotError> {
    let envelope: wire::TimelineEnvelope = serde_json::from_str(body).map_err(BotError::Json)?;

    let mut items = Vec::with_capacity(envelope.list.len());
    for slot in envelope.list {
        let payload: wire::NewsPayload = serde_json::from_str(&slot.data)
            .map_err(|e| BotError::Data(format!("timeline item parse error: {e}")))?;

        items.push(NewsItem {
            id: payload.id,
            text: payload.text,
            mark: payload.mark,
            target: payload.target,
            created_at: payload.created_at,
        });
    }

    // provider order preserved: newest first
    Ok(items)
}
