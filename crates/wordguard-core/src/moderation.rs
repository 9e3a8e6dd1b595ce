use crate::{
    domain::MessageRef,
    filter::find_bad_word,
    messaging::{port::MessagingPort, types::DeleteOutcome},
    wordlist::WordListStore,
    Result,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModerationOutcome {
    Clean,
    Removed {
        word: String,
        outcome: DeleteOutcome,
    },
}

/// Delete `msg` if its text contains a stored bad word.
///
/// A failed deletion is logged and otherwise ignored; nothing is sent to the
/// chat and the deletion is not retried. Only a store read error is returned.
pub async fn moderate_message(
    messenger: &dyn MessagingPort,
    store: &WordListStore,
    msg: MessageRef,
    text: &str,
) -> Result<ModerationOutcome> {
    let words = store.load().await?;
    let Some(word) = find_bad_word(text, &words) else {
        return Ok(ModerationOutcome::Clean);
    };
    let word = word.to_string();

    let outcome = messenger.delete_message(msg).await;
    if outcome.is_deleted() {
        tracing::info!(
            chat_id = msg.chat_id.0,
            message_id = msg.message_id.0,
            word = %word,
            "removed message containing bad word"
        );
    } else {
        tracing::warn!(
            chat_id = msg.chat_id.0,
            message_id = msg.message_id.0,
            word = %word,
            outcome = %outcome,
            "could not remove message containing bad word"
        );
    }

    Ok(ModerationOutcome::Removed { word, outcome })
}
