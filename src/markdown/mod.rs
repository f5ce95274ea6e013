//! Telegram MarkdownV2 rendering for news items.

use chrono::{DateTime, FixedOffset};

use crate::news::NewsItem;

/// Every character the MarkdownV2 dialect treats as syntax.
const RESERVED: &[char] = &[
    '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
];

/// Timestamps are rendered in the provider's local time, UTC+8.
const DISPLAY_OFFSET_SECS: i32 = 8 * 3600;

/// Backslash-escape every reserved character so the platform renders the
/// text literally.
///
/// Single pass over the input, so one application never double-escapes;
/// applying it to already-escaped text escapes the inserted backslash's
/// neighbor again. Callers apply it exactly once per field.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if RESERVED.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Render one news item as a channel-safe MarkdownV2 message: escaped body,
/// blank line, escaped `(YYYY-MM-DD HH:MM)` timestamp.
#[must_use]
pub fn to_markdown(item: &NewsItem) -> String {
    format!(
        "\n{}\n\n{}\n",
        escape(&item.text),
        escape(&format_timestamp(item.created_at))
    )
}

fn format_timestamp(epoch_ms: i64) -> String {
    let offset = FixedOffset::east_opt(DISPLAY_OFFSET_SECS).expect("valid fixed offset");
    DateTime::from_timestamp_millis(epoch_ms).map_or_else(String::new, |utc| {
        utc.with_timezone(&offset)
            .format("(%Y-%m-%d %H:%M)")
            .to_string()
    })
}
