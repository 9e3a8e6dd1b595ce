//! Telegram adapter (teloxide).
//!
//! This crate implements the `wordguard-core` MessagingPort over the Telegram
//! Bot API and wires incoming updates to the core handlers.

use async_trait::async_trait;

use teloxide::{prelude::*, types::ParseMode, ApiError, RequestError};

use tokio::time::sleep;

pub mod handlers;
pub mod router;

use wordguard_core::{
    domain::{MessageId, MessageRef},
    errors::Error,
    messaging::{port::MessagingPort, types::DeleteOutcome},
    Result,
};

#[derive(Clone)]
pub struct TelegramMessenger {
    bot: Bot,
}

impl TelegramMessenger {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }

    fn tg_chat(msg: MessageRef) -> teloxide::types::ChatId {
        teloxide::types::ChatId(msg.chat_id.0)
    }

    fn tg_msg_id(message_id: MessageId) -> teloxide::types::MessageId {
        teloxide::types::MessageId(message_id.0)
    }

    fn map_err(e: RequestError) -> Error {
        Error::External(format!("telegram error: {e}"))
    }

    async fn with_retry<T, Fut>(
        &self,
        mut op: impl FnMut() -> Fut,
    ) -> std::result::Result<T, RequestError>
    where
        Fut: std::future::IntoFuture<Output = std::result::Result<T, RequestError>>,
        Fut::IntoFuture: Send,
    {
        const MAX_RETRIES: usize = 1;
        let mut attempts = 0usize;
        loop {
            match op().await {
                Ok(v) => return Ok(v),
                Err(RequestError::RetryAfter(d)) if attempts < MAX_RETRIES => {
                    attempts += 1;
                    sleep(d).await;
                }
                Err(other) => return Err(other),
            }
        }
    }

    async fn reply(&self, msg: MessageRef, text: &str, html: bool) -> Result<MessageRef> {
        let sent = self
            .with_retry(|| {
                let req = self
                    .bot
                    .send_message(Self::tg_chat(msg), text.to_string())
                    .reply_to_message_id(Self::tg_msg_id(msg.message_id));
                if html {
                    req.parse_mode(ParseMode::Html)
                } else {
                    req
                }
            })
            .await
            .map_err(Self::map_err)?;

        Ok(MessageRef {
            chat_id: msg.chat_id,
            message_id: MessageId(sent.id.0),
        })
    }
}

/// Map a deletion failure onto the outcome the core understands.
fn classify_delete_error(e: &RequestError) -> DeleteOutcome {
    match e {
        RequestError::Api(ApiError::MessageCantBeDeleted) => DeleteOutcome::PermissionDenied,
        RequestError::Api(ApiError::MessageToDeleteNotFound) => DeleteOutcome::NotFound,
        other => DeleteOutcome::Failed(other.to_string()),
    }
}

#[async_trait]
impl MessagingPort for TelegramMessenger {
    async fn reply_text(&self, msg: MessageRef, text: &str) -> Result<MessageRef> {
        self.reply(msg, text, false).await
    }

    async fn reply_html(&self, msg: MessageRef, html: &str) -> Result<MessageRef> {
        self.reply(msg, html, true).await
    }

    async fn delete_message(&self, msg: MessageRef) -> DeleteOutcome {
        // One attempt only: a flood-wait is reported, not slept through.
        let res = self
            .bot
            .delete_message(Self::tg_chat(msg), Self::tg_msg_id(msg.message_id))
            .await;
        match res {
            Ok(_) => DeleteOutcome::Deleted,
            Err(e) => classify_delete_error(&e),
        }
    }
}
