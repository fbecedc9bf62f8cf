//! Telegram `MarkdownV2` escaping.

/// Escape special characters for Telegram `MarkdownV2` body text.
pub fn escape_markdown(text: &str) -> String {
    let special_chars = [
        '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
        '\\',
    ];
    let mut result = String::with_capacity(text.len() * 2);

    for c in text.chars() {
        if special_chars.contains(&c) {
            result.push('\\');
        }
        result.push(c);
    }

    result
}

/// Escape text placed inside a `` `code` `` span.
pub fn escape_code(text: &str) -> String {
    escape_only(text, &['`', '\\'])
}

/// Escape a URL placed inside the `(...)` part of an inline link.
pub fn escape_link_url(url: &str) -> String {
    escape_only(url, &[')', '\\'])
}

/// Render an inline link with escaped label and target.
pub fn link(label: &str, url: &url::Url) -> String {
    format!(
        "[{}]({})",
        escape_markdown(label),
        escape_link_url(url.as_str())
    )
}

fn escape_only(text: &str, special_chars: &[char]) -> String {
    let mut result = String::with_capacity(text.len() + 4);
    for c in text.chars() {
        if special_chars.contains(&c) {
            result.push('\\');
        }
        result.push(c);
    }
    result
}
