//! Telegram MarkdownV2 escaping.
//!
//! Every value interpolated into a reply goes through [`escape`]. Template
//! literals are written pre-escaped and never passed through it.

/// Characters MarkdownV2 reserves in ordinary text.
pub const RESERVED: &[char] = &[
    '\\', '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
];

/// Prefix every reserved character with a backslash.
pub fn escape(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        if RESERVED.contains(&c) {
            result.push('\\');
        }
        result.push(c);
    }
    result
}

/// Escape the URL part of an inline link, where only `)` and `\` are special.
pub fn escape_link_url(url: &str) -> String {
    let mut result = String::with_capacity(url.len());
    for c in url.chars() {
        if c == ')' || c == '\\' {
            result.push('\\');
        }
        result.push(c);
    }
    result
}

/// Inline link with an escaped label.
pub fn link(label: &str, url: &str) -> String {
    format!("[{}]({})", escape(label), escape_link_url(url))
}
