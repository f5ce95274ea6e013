use serde::Serialize;

/// One published live-news entry.
///
/// Immutable once constructed; items live for a single dispatch cycle and
/// are never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsItem {
    /// Unique identifier assigned by the provider.
    pub id: i64,
    /// Raw message body; may contain markup-reserved characters.
    pub text: String,
    /// Classification code from the provider, carried but not interpreted.
    pub mark: i64,
    /// Internal reference field from the provider, not rendered.
    pub target: String,
    /// Publication time, epoch milliseconds UTC.
    pub created_at: i64,
}

impl NewsItem {
    /// Provider identity: two values describe the same entry iff their ids
    /// match, regardless of the other fields. Structural comparison stays
    /// with `==`.
    #[must_use]
    pub fn same_item(&self, other: &NewsItem) -> bool {
        self.id == other.id
    }
}
