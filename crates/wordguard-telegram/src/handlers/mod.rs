//! Telegram update handlers.
//!
//! Each handler is a small adapter that extracts what the core needs from the
//! teloxide `Message` and calls into `wordguard-core`:
//! - new members -> welcome greeting
//! - bot commands -> word list commands
//! - any other text -> bad word filter

use std::sync::Arc;

use teloxide::{
    prelude::*,
    types::{Message, MessageEntityKind},
};

use wordguard_core::domain::{ChatId, MessageId, MessageRef};

use crate::router::AppState;

mod commands;
mod text;
mod welcome;

pub async fn handle_message(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let msg_ref = message_ref(&msg);

    if let Some(users) = msg.new_chat_members() {
        return welcome::handle_new_members(msg_ref, users, &state).await;
    }

    let Some(text) = msg.text() else {
        return Ok(());
    };

    if starts_with_bot_command(&msg) {
        let user_id = msg.from().map(|u| u.id.0 as i64);
        return commands::handle_command(msg_ref, user_id, text, &state).await;
    }

    // Slash-prefixed text without a command entity (`/ spam`) is ordinary text.
    text::handle_text(msg_ref, text, &state).await
}

/// Telegram marks real commands with a `bot_command` entity at offset 0.
fn starts_with_bot_command(msg: &Message) -> bool {
    msg.entities()
        .and_then(|entities| entities.first())
        .is_some_and(|e| e.offset == 0 && matches!(e.kind, MessageEntityKind::BotCommand))
}

fn message_ref(msg: &Message) -> MessageRef {
    MessageRef {
        chat_id: ChatId(msg.chat.id.0),
        message_id: MessageId(msg.id.0),
    }
}
