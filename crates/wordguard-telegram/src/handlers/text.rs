use teloxide::prelude::*;

use wordguard_core::{domain::MessageRef, moderation::moderate_message};

use crate::router::AppState;

pub async fn handle_text(msg: MessageRef, text: &str, state: &AppState) -> ResponseResult<()> {
    // Deletion outcomes are logged inside the core; only a list read failure lands here.
    if let Err(e) = moderate_message(state.messenger.as_ref(), &state.store, msg, text).await {
        tracing::error!(
            chat_id = msg.chat_id.0,
            error = %e,
            "could not check message against bad word list"
        );
    }
    Ok(())
}
