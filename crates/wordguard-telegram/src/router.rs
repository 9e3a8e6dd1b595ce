use std::sync::Arc;

use teloxide::{dispatching::Dispatcher, dptree, prelude::*, types::BotCommand};

use wordguard_core::{
    commands::COMMANDS, config::Config, messaging::port::MessagingPort, wordlist::WordListStore,
};

use crate::handlers;
use crate::TelegramMessenger;

#[derive(Clone)]
pub struct AppState {
    pub cfg: Arc<Config>,
    /// Username without `@`, used to drop `/cmd@other_bot` commands.
    pub bot_username: String,
    pub store: WordListStore,
    pub messenger: Arc<dyn MessagingPort>,
}

pub async fn run_polling(cfg: Arc<Config>) -> anyhow::Result<()> {
    let bot = Bot::new(cfg.bot_token.clone());

    // Commands are matched against our own username, so this one is required.
    let me = bot.get_me().await?;
    let bot_username = me.username().to_string();
    tracing::info!("wordguard started: @{bot_username}");
    tracing::info!(path = %cfg.bad_words_file.display(), "using bad word list");

    // Best-effort: the bot works without the command menu.
    let menu = COMMANDS
        .iter()
        .map(|(name, description)| BotCommand::new(*name, *description));
    if let Err(e) = bot.set_my_commands(menu).await {
        tracing::warn!(error = %e, "failed to register bot commands");
    }

    let state = Arc::new(AppState {
        cfg: cfg.clone(),
        bot_username,
        store: WordListStore::new(cfg.bad_words_file.clone()),
        messenger: Arc::new(TelegramMessenger::new(bot.clone())),
    });

    let handler =
        dptree::entry().branch(Update::filter_message().endpoint(handlers::handle_message));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .build()
        .dispatch()
        .await;

    Ok(())
}
