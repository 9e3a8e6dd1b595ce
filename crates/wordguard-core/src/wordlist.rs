//! Flat-file persistence for the bad word list.
//!
//! One word per line, UTF-8, no header. The file is re-read on every operation
//! and rewritten in full on every mutation. There is no locking: two writers
//! racing on the same file can lose an update.

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::Result;

#[derive(Clone, Debug)]
pub struct WordListStore {
    path: PathBuf,
}

impl WordListStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the current list. A missing file reads as an empty list.
    ///
    /// Entries keep whatever case and duplicates the file holds; callers
    /// normalize before comparing. Blank lines are the one thing not kept:
    /// they are dropped on purpose, since an empty entry is a substring of
    /// every message and would get everything deleted. A hand-edited file
    /// with blank lines therefore does not survive a load/save unchanged.
    pub async fn load(&self) -> Result<Vec<String>> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(s) => s,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        Ok(parse_words(&contents))
    }

    /// Overwrite the file with `words`, newline-joined, no trailing newline.
    pub async fn save(&self, words: &[String]) -> Result<()> {
        tokio::fs::write(&self.path, words.join("\n")).await?;
        Ok(())
    }
}

fn parse_words(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        // Deliberately lossy, see `load`.
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}
