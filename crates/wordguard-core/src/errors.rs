/// Core error type for the moderation bot.
///
/// Adapter crates should map their specific errors into this type so the bot
/// core can decide between a user-facing reply and a silent log entry.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("external error: {0}")]
    External(String),
}

pub type Result<T> = std::result::Result<T, Error>;
