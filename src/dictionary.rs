//! Ranked word-list loading.
//!
//! The on-disk format is one word per line, most frequent first. Blank lines
//! are ignored and do not take a rank; `\r\n` line endings are accepted.

use crate::model::{CostModel, ModelError};
use memchr::memchr_iter;
use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read dictionary: {0}")]
    Read(#[from] io::Error),
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Split a word list into its non-empty lines, in order. Only a trailing
/// `\r` is removed; other whitespace is part of the entry.
pub fn parse_ranked(text: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start = 0;
    for end in memchr_iter(b'\n', text.as_bytes()).chain(std::iter::once(text.len())) {
        let line = &text[start..end];
        let line = line.strip_suffix('\r').unwrap_or(line);
        if !line.is_empty() {
            words.push(line);
        }
        start = end + 1;
    }
    words
}

pub fn load_ranked<R: Read>(mut reader: R) -> Result<Vec<String>, DictionaryError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(parse_ranked(&text).into_iter().map(str::to_owned).collect())
}

pub fn load_ranked_file(path: impl AsRef<Path>) -> Result<Vec<String>, DictionaryError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let words: Vec<String> = parse_ranked(&text).into_iter().map(str::to_owned).collect();
    debug!(path = %path.display(), words = words.len(), "loaded ranked dictionary");
    Ok(words)
}

impl CostModel {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DictionaryError> {
        Ok(Self::from_ranked(load_ranked(reader)?)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        Ok(Self::from_ranked(load_ranked_file(path)?)?)
    }
}
