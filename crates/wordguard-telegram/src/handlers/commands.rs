use teloxide::prelude::*;

use wordguard_core::{
    commands::{execute, split_text_chunks, ModCommand},
    domain::MessageRef,
};

use crate::router::AppState;

const STORE_ERROR_REPLY: &str = "Failed to access the bad word list.";

pub async fn handle_command(
    msg: MessageRef,
    user_id: Option<i64>,
    text: &str,
    state: &AppState,
) -> ResponseResult<()> {
    // Unknown commands and commands for other bots are ignored.
    let Some(command) = ModCommand::parse(text, &state.bot_username) else {
        return Ok(());
    };

    tracing::info!(
        chat_id = msg.chat_id.0,
        user_id = ?user_id,
        command = command.name(),
        "command"
    );

    let reply = match execute(&state.store, command, &state.cfg.rank_text).await {
        Ok(reply) => reply.to_string(),
        Err(e) => {
            tracing::error!(
                error = %e,
                path = %state.store.path().display(),
                "bad word list access failed"
            );
            STORE_ERROR_REPLY.to_string()
        }
    };

    for chunk in split_text_chunks(&reply, state.cfg.telegram_message_limit) {
        if let Err(e) = state.messenger.reply_text(msg, &chunk).await {
            tracing::warn!(chat_id = msg.chat_id.0, error = %e, "failed to send reply");
            break;
        }
    }

    Ok(())
}
