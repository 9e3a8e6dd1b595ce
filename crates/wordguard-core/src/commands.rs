//! Slash commands that manage the bad word list.
//!
//! Every command is a single request/response against [`WordListStore`]: the
//! list is loaded fresh, possibly rewritten, and a reply is produced. The
//! load-modify-save sequence in add/del is not atomic.

use std::fmt;

use crate::{wordlist::WordListStore, Result};

/// Commands the bot answers to, with their `/help`-style descriptions.
pub const COMMANDS: &[(&str, &str)] = &[
    ("rank", "Show your rank"),
    ("addbad", "Add a bad word: /addbad word"),
    ("delbad", "Remove a bad word: /delbad word"),
    ("badlist", "List all bad words"),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModCommand {
    Rank,
    AddBad(Option<String>),
    DelBad(Option<String>),
    BadList,
}

impl ModCommand {
    /// Parse a command message addressed to `bot_username` (without `@`).
    ///
    /// Unknown commands and `/cmd@other_bot` yield `None` and are ignored.
    pub fn parse(text: &str, bot_username: &str) -> Option<Self> {
        let (cmd, target, rest) = parse_command(text);
        if target.is_some_and(|t| !t.eq_ignore_ascii_case(bot_username)) {
            return None;
        }
        let arg = rest.split_whitespace().next().map(str::to_string);
        match cmd.as_str() {
            "rank" => Some(Self::Rank),
            "addbad" => Some(Self::AddBad(arg)),
            "delbad" => Some(Self::DelBad(arg)),
            "badlist" => Some(Self::BadList),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Rank => "rank",
            Self::AddBad(_) => "addbad",
            Self::DelBad(_) => "delbad",
            Self::BadList => "badlist",
        }
    }
}

fn parse_command(text: &str) -> (String, Option<&str>, &str) {
    // Telegram may send `/cmd@botname arg1 ...`
    let mut parts = text.trim().splitn(2, char::is_whitespace);
    let first = parts.next().unwrap_or("").trim();
    let rest = parts.next().unwrap_or("").trim();

    let (cmd, target) = match first.trim_start_matches('/').split_once('@') {
        Some((cmd, target)) => (cmd, Some(target)),
        None => (first.trim_start_matches('/'), None),
    };

    (cmd.to_lowercase(), target, rest)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandReply {
    Rank(String),
    Usage(&'static str),
    AlreadyExists,
    Added(String),
    NotFound,
    Deleted(String),
    List(Vec<String>),
    EmptyList,
}

impl fmt::Display for CommandReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rank(text) => f.write_str(text),
            Self::Usage(usage) => write!(f, "Usage: {usage}"),
            Self::AlreadyExists => f.write_str("Already exists!"),
            Self::Added(word) => write!(f, "Added bad word: {word}"),
            Self::NotFound => f.write_str("Not found!"),
            Self::Deleted(word) => write!(f, "Deleted: {word}"),
            Self::List(words) => f.write_str(&words.join("\n")),
            Self::EmptyList => f.write_str("No bad words!"),
        }
    }
}

/// Run `command` against the store.
///
/// `rank_text` is the fixed `/rank` reply.
pub async fn execute(
    store: &WordListStore,
    command: ModCommand,
    rank_text: &str,
) -> Result<CommandReply> {
    match command {
        ModCommand::Rank => Ok(CommandReply::Rank(rank_text.to_string())),
        ModCommand::AddBad(None) => Ok(CommandReply::Usage("/addbad word")),
        ModCommand::AddBad(Some(word)) => add_word(store, &word).await,
        ModCommand::DelBad(None) => Ok(CommandReply::Usage("/delbad word")),
        ModCommand::DelBad(Some(word)) => delete_word(store, &word).await,
        ModCommand::BadList => {
            let words = store.load().await?;
            if words.is_empty() {
                Ok(CommandReply::EmptyList)
            } else {
                Ok(CommandReply::List(words))
            }
        }
    }
}

async fn add_word(store: &WordListStore, word: &str) -> Result<CommandReply> {
    let word = word.to_lowercase();
    let mut words = store.load().await?;
    if words.contains(&word) {
        return Ok(CommandReply::AlreadyExists);
    }

    words.push(word.clone());
    store.save(&words).await?;
    Ok(CommandReply::Added(word))
}

async fn delete_word(store: &WordListStore, word: &str) -> Result<CommandReply> {
    let word = word.to_lowercase();
    let mut words = store.load().await?;
    let Some(pos) = words.iter().position(|w| *w == word) else {
        return Ok(CommandReply::NotFound);
    };

    words.remove(pos);
    store.save(&words).await?;
    Ok(CommandReply::Deleted(word))
}

/// Split `text` into chunks of at most `limit` characters, preferring line breaks.
///
/// A single line longer than `limit` is cut at character boundaries.
pub fn split_text_chunks(text: &str, limit: usize) -> Vec<String> {
    let limit = limit.max(1);
    if text.chars().count() <= limit {
        return vec![text.to_string()];
    }

    let mut out = Vec::new();
    let mut chunk = String::new();
    let mut chunk_len = 0usize;

    for line in text.split('\n') {
        let line_len = line.chars().count();
        let sep = usize::from(!chunk.is_empty());

        if chunk_len + sep + line_len <= limit {
            if sep == 1 {
                chunk.push('\n');
            }
            chunk.push_str(line);
            chunk_len += sep + line_len;
            continue;
        }

        if !chunk.is_empty() {
            out.push(std::mem::take(&mut chunk));
            chunk_len = 0;
        }

        let mut rest: Vec<char> = line.chars().collect();
        while rest.len() > limit {
            out.push(rest.drain(..limit).collect());
        }
        chunk = rest.into_iter().collect();
        chunk_len = chunk.chars().count();
    }

    if !chunk.is_empty() {
        out.push(chunk);
    }
    out
}
