//! Telegram HTML helpers.

use crate::domain::UserId;

/// Escape HTML special characters for Telegram HTML parse mode.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Inline mention that links to the user's profile, even without a username.
pub fn user_mention_html(user_id: UserId, name: &str) -> String {
    format!(
        r#"<a href="tg://user?id={}">{}</a>"#,
        user_id.0,
        escape_html(name)
    )
}
