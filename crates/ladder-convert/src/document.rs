//! Puzzle document model and its YAML encoding.
//!
//! Field declaration order is the order keys appear in the output file:
//! `meta` before `ladder`, then `title`, `author`, `difficulty` and
//! `word`, `clue`, `transform`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{read_file, ConvertError, ConvertResult};

/// Puzzle metadata block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// Always `From {first} to {last}` for generated documents.
    pub title: String,
    pub author: String,
    pub difficulty: String,
}

/// One step of the ladder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rung {
    pub word: String,
    /// Filled in by hand after generation.
    #[serde(default)]
    pub clue: String,
    /// How this word was derived from the previous one. Filled in by hand.
    #[serde(default)]
    pub transform: String,
}

impl Rung {
    /// A rung with blank clue and transform.
    pub fn blank(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            clue: String::new(),
            transform: String::new(),
        }
    }
}

/// Top-level puzzle file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleDocument {
    pub meta: Meta,
    pub ladder: Vec<Rung>,
}

/// Title derived from the first and last words of a ladder.
pub fn title_for(first: &str, last: &str) -> String {
    format!("From {first} to {last}")
}

impl PuzzleDocument {
    /// Build a fresh document from an ordered word list.
    ///
    /// Fails with [`ConvertError::EmptyInput`] when `words` is empty.
    pub fn from_words<S: AsRef<str>>(
        words: &[S],
        author: impl Into<String>,
        difficulty: impl Into<String>,
    ) -> ConvertResult<Self> {
        let (Some(first), Some(last)) = (words.first(), words.last()) else {
            return Err(ConvertError::EmptyInput { path: None });
        };

        Ok(Self {
            meta: Meta {
                title: title_for(first.as_ref(), last.as_ref()),
                author: author.into(),
                difficulty: difficulty.into(),
            },
            ladder: words.iter().map(|w| Rung::blank(w.as_ref())).collect(),
        })
    }

    pub fn first_word(&self) -> Option<&str> {
        self.ladder.first().map(|r| r.word.as_str())
    }

    pub fn last_word(&self) -> Option<&str> {
        self.ladder.last().map(|r| r.word.as_str())
    }

    /// `first-last` in lowercase, used when naming the output after the ladder ends.
    pub fn file_stem_slug(&self) -> Option<String> {
        let first = self.first_word()?;
        let last = self.last_word()?;
        Some(format!("{}-{}", first.to_lowercase(), last.to_lowercase()))
    }

    /// Encode as block-style YAML.
    pub fn to_yaml(&self) -> ConvertResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn from_yaml(yaml: &str) -> ConvertResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a previously written puzzle file.
    pub fn load(path: &Path) -> ConvertResult<Self> {
        Self::from_yaml(&read_file(path)?)
    }
}
