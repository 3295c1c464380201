//! Password complexity policy for operator accounts.
//!
//! The dictionary of forbidden words is passed in by the caller, so the
//! policy can be checked against a small word list in tests and against a
//! full system word list in production.

use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::consts::{PASSWORD_MAX_LEN, PASSWORD_MIN_LEN, PASSWORD_SPECIAL_CHARS};
use crate::error::Result;

/// Rule a rejected password failed, in check order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyViolation {
    #[error("password must be {min}-{max} characters long (got {len})")]
    Length { len: usize, min: usize, max: usize },

    #[error("password must contain a lowercase letter")]
    NoLowercase,

    #[error("password must contain an uppercase letter")]
    NoUppercase,

    #[error("password must contain a special character ({})", PASSWORD_SPECIAL_CHARS)]
    NoSpecialChar,

    #[error("password contains dictionary words: {}", .0.join(", "))]
    DictionaryWord(Vec<String>),
}

/// Set of lowercase words a password must not contain.
#[derive(Clone, Debug, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Load a word list with one word per line (e.g. `/usr/share/dict/words`).
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let dict = Self::from_words(content.lines());
        debug!(path = %path.display(), words = dict.len(), "loaded dictionary");
        Ok(dict)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[derive(Clone, Debug)]
pub struct PasswordPolicy {
    pub min_len: usize,
    pub max_len: usize,
    pub dictionary: Dictionary,
}

impl PasswordPolicy {
    pub fn new(dictionary: Dictionary) -> Self {
        Self {
            min_len: PASSWORD_MIN_LEN,
            max_len: PASSWORD_MAX_LEN,
            dictionary,
        }
    }

    pub fn check(&self, password: &str) -> std::result::Result<(), PolicyViolation> {
        let len = password.chars().count();
        if len < self.min_len || len > self.max_len {
            return Err(PolicyViolation::Length {
                len,
                min: self.min_len,
                max: self.max_len,
            });
        }
        if !password.chars().any(char::is_lowercase) {
            return Err(PolicyViolation::NoLowercase);
        }
        if !password.chars().any(char::is_uppercase) {
            return Err(PolicyViolation::NoUppercase);
        }
        if !password.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c)) {
            return Err(PolicyViolation::NoSpecialChar);
        }

        let found: Vec<String> = alphabetic_words(password)
            .filter(|w| w.len() > 1 && self.dictionary.contains(w))
            .map(str::to_string)
            .collect();
        if !found.is_empty() {
            return Err(PolicyViolation::DictionaryWord(found));
        }
        Ok(())
    }
}

/// Maximal runs of ASCII letters bounded by non-word characters.
///
/// Runs glued to digits or underscores are not words, so `abc1` yields
/// nothing while `abc-def` yields `abc` and `def`.
fn alphabetic_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| !token.is_empty() && token.chars().all(|c| c.is_ascii_alphabetic()))
}

/// Usernames are matched case-insensitively and stored lowercase.
pub fn normalize_username(username: &str) -> String {
    username.trim().to_lowercase()
}
