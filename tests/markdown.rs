use livenews_bot::NewsItem;
use livenews_bot::markdown::{escape, to_markdown};

fn item(text: &str, created_at: i64) -> NewsItem {
    NewsItem {
        id: 1,
        text: text.into(),
        mark: 0,
        target: String::new(),
        created_at,
    }
}

#[test]
fn escapes_every_reserved_character() {
    let reserved = "_*[]()~`>#+-=|{}.!";
    let expected: String = reserved.chars().flat_map(|c| ['\\', c]).collect();
    assert_eq!(escape(reserved), expected);
}

#[test]
fn leaves_plain_text_untouched() {
    assert_eq!(escape("A股 rally, 3% up"), "A股 rally, 3% up");
}

#[test]
fn empty_text_stays_empty() {
    assert_eq!(escape(""), "");
}

#[test]
fn escaping_twice_double_escapes() {
    // callers must apply escape exactly once per field
    let once = escape("A_B");
    assert_eq!(once, "A\\_B");
    assert_eq!(escape(&once), "A\\\\_B");
}

#[test]
fn renders_body_blank_line_and_timestamp() {
    // 1700000000000 ms = 2023-11-14 22:13:20 UTC = 2023-11-15 06:13 in UTC+8
    let rendered = to_markdown(&item("A_B", 1_700_000_000_000));
    assert_eq!(rendered, "\nA\\_B\n\n\\(2023\\-11\\-15 06:13\\)\n");
}

#[test]
fn body_and_timestamp_are_each_escaped_once() {
    let rendered = to_markdown(&item("up 3.5%!", 1_700_000_000_000));
    assert_eq!(rendered, "\nup 3\\.5%\\!\n\n\\(2023\\-11\\-15 06:13\\)\n");
}

#[test]
fn empty_body_keeps_the_timestamp_segment() {
    let rendered = to_markdown(&item("", 1_700_000_000_000));
    assert_eq!(rendered, "\n\n\n\\(2023\\-11\\-15 06:13\\)\n");
}
