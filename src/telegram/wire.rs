use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct ApiEnvelope<T> {
    pub(crate) ok: bool,
    pub(crate) result: Option<T>,
    pub(crate) description: Option<String>,
    pub(crate) error_code: Option<i64>,
    pub(crate) parameters: Option<ResponseParameters>,
}

#[derive(Deserialize)]
pub(crate) struct ResponseParameters {
    pub(crate) migrate_to_chat_id: Option<i64>,
}

#[derive(Deserialize)]
pub(crate) struct Update {
    pub(crate) update_id: i64,
    pub(crate) message: Option<Message>,
}

#[derive(Deserialize)]
pub(crate) struct Message {
    pub(crate) chat: Chat,
    pub(crate) text: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct Chat {
    pub(crate) id: i64,
}
