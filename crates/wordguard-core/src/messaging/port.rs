use async_trait::async_trait;

use crate::{domain::MessageRef, messaging::types::DeleteOutcome, Result};

/// Outbound side of the chat client.
///
/// Telegram is the only implementation; tests use an in-memory fake.
#[async_trait]
pub trait MessagingPort: Send + Sync {
    /// Send plain text as a reply to `msg`.
    async fn reply_text(&self, msg: MessageRef, text: &str) -> Result<MessageRef>;

    /// Send Telegram-flavoured HTML as a reply to `msg`.
    async fn reply_html(&self, msg: MessageRef, html: &str) -> Result<MessageRef>;

    /// Best-effort deletion. Never fails; the outcome says what happened.
    async fn delete_message(&self, msg: MessageRef) -> DeleteOutcome;
}
