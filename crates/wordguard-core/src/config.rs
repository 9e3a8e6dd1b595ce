use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::{errors::Error, Result};

pub const DEFAULT_BAD_WORDS_FILE: &str = "badwords.txt";
pub const DEFAULT_RANK_TEXT: &str = "Your Rank: Member 👤";
pub const DEFAULT_MESSAGE_LIMIT: usize = 4096;

/// Typed configuration for the moderation bot.
#[derive(Clone, Debug)]
pub struct Config {
    pub bot_token: String,
    pub bad_words_file: PathBuf,
    pub rank_text: String,
    pub telegram_message_limit: usize,
}

impl Config {
    /// Load `.env` (if present) and read the process environment.
    ///
    /// A missing `BOT_TOKEN` is fatal: the caller is expected to abort startup.
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));
        Self::from_lookup(env_str)
    }

    /// Build the config from a variable lookup (the process env in `load`).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bot_token = lookup("BOT_TOKEN").and_then(non_empty).ok_or_else(|| {
            Error::Config("BOT_TOKEN environment variable missing!".to_string())
        })?;

        let bad_words_file = lookup("BAD_WORDS_FILE")
            .and_then(non_empty)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BAD_WORDS_FILE));

        let rank_text = lookup("RANK_TEXT")
            .and_then(non_empty)
            .unwrap_or_else(|| DEFAULT_RANK_TEXT.to_string());

        // Telegram rejects anything above 4096 characters.
        let telegram_message_limit = lookup("TELEGRAM_MESSAGE_LIMIT")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or(DEFAULT_MESSAGE_LIMIT)
            .clamp(1, DEFAULT_MESSAGE_LIMIT);

        Ok(Self {
            bot_token,
            bad_words_file,
            rank_text,
            telegram_message_limit,
        })
    }
}

fn env_str(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for (key, val) in parse_dotenv(&contents) {
        if env::var_os(&key).is_some() {
            continue; // do not override existing env
        }
        env::set_var(key, val);
    }
}

fn parse_dotenv(contents: &str) -> Vec<(String, String)> {
    let mut out = Vec::new();
    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let line = line.strip_prefix("export ").unwrap_or(line);
        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim();
        if key.is_empty() {
            continue;
        }

        let mut val = v.trim().to_string();
        // Strip optional surrounding quotes.
        if val.len() >= 2
            && ((val.starts_with('"') && val.ends_with('"'))
                || (val.starts_with('\'') && val.ends_with('\'')))
        {
            val = val[1..val.len() - 1].to_string();
        }

        out.push((key.to_string(), val));
    }
    out
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
