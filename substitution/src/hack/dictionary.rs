//! Dictionary-membership key recovery

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use super::Recovery;
use crate::caesar::Caesar;
use crate::cipher::SubstitutionCipher;
use crate::error::{CipherError, Result};

/// Set of known lowercase words.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    /// Builds a word list from text with one word per line.
    ///
    /// Line terminators are stripped, words are lowercased and blank lines skipped.
    pub fn from_text(text: &str) -> Self {
        let words = text
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();
        Self { words }
    }

    /// Reads a word list file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| CipherError::io(path, e))?;
        Ok(Self::from_text(&text))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of whitespace-separated tokens of `text` found in the list.
    ///
    /// Leading and trailing non-letters are stripped from each token and the
    /// token is lowercased, so `"Fox."` matches `fox`.
    pub fn matches(&self, text: &str) -> usize {
        text.split_whitespace()
            .map(normalize_token)
            .filter(|token| !token.is_empty() && self.contains(token))
            .count()
    }
}

fn normalize_token(token: &str) -> String {
    token
        .trim_matches(|c: char| !c.is_ascii_alphabetic())
        .to_lowercase()
}

/// Recovers the Caesar key whose decryption contains the most dictionary words.
///
/// # Errors
///
/// `CipherError::Inconclusive` if no key yields a single known word.
pub fn hack_dictionary(ciphertext: &str, words: &WordList) -> Result<Recovery> {
    if words.is_empty() {
        warn!("word list is empty");
    }

    let mut best_key: u8 = 0;
    let mut best_match: usize = 0;

    for cipher in Caesar::all() {
        let candidate = cipher.decrypt(ciphertext);
        let hits = words.matches(&candidate);
        debug!(key = cipher.key(), hits, "dictionary candidate");

        if hits > best_match {
            best_match = hits;
            best_key = cipher.key();
        }
    }

    if best_match == 0 {
        return Err(CipherError::Inconclusive(
            "no key produced any word from the word list".to_string(),
        ));
    }

    Ok(Recovery {
        key: best_key,
        plaintext: Caesar::new(best_key as i64).decrypt(ciphertext),
        score: best_match as f64,
    })
}
