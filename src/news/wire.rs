use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct TimelineEnvelope {
    #[serde(default)]
    pub(crate) list: Vec<TimelineSlot>,
}

#[derive(Deserialize)]
pub(crate) struct TimelineSlot {
    /// JSON-encoded payload string; needs a second decode.
    pub(crate) data: String,
}

#[derive(Deserialize)]
pub(crate) struct NewsPayload {
    pub(crate) id: i64,
    pub(crate) text: String,
    pub(crate) mark: i64,
    pub(crate) target: String,
    pub(crate) created_at: i64,
}
