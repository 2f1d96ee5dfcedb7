//! Cipher trait and tagged dispatch over the supported ciphers

use std::fmt;
use std::str::FromStr;

use crate::caesar::Caesar;
use crate::error::{CipherError, Result};
use crate::vigenere::Vigenere;

/// Trait for a character-wise substitution cipher
pub trait SubstitutionCipher {
    /// Encrypts a whole text
    fn encrypt(&self, text: &str) -> String;

    /// Decrypts a whole text
    fn decrypt(&self, text: &str) -> String;
}

/// Cipher names accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherKind {
    Caesar,
    Vigenere,
}

impl FromStr for CipherKind {
    type Err = CipherError;

    fn from_str(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "caesar" => Ok(CipherKind::Caesar),
            "vigenere" => Ok(CipherKind::Vigenere),
            _ => Err(CipherError::UnknownCipher(name.to_string())),
        }
    }
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherKind::Caesar => write!(f, "caesar"),
            CipherKind::Vigenere => write!(f, "vigenere"),
        }
    }
}

/// A keyed cipher, ready to encrypt or decrypt.
///
/// Only the Caesar variant has a key space small enough to search, so key
/// recovery in [`crate::hack`] works on [`Caesar`] directly rather than on this enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cipher {
    Caesar(Caesar),
    Vigenere(Vigenere),
}

impl Cipher {
    /// Builds a cipher from its kind and the raw key text.
    ///
    /// # Errors
    ///
    /// `CipherError::InvalidKey` if a Caesar key is not an integer or a
    /// Vigenère key is empty or contains non-letters.
    pub fn from_key(kind: CipherKind, key: &str) -> Result<Self> {
        match kind {
            CipherKind::Caesar => Ok(Cipher::Caesar(Caesar::parse(key)?)),
            CipherKind::Vigenere => Ok(Cipher::Vigenere(Vigenere::new(key)?)),
        }
    }

    pub fn kind(&self) -> CipherKind {
        match self {
            Cipher::Caesar(_) => CipherKind::Caesar,
            Cipher::Vigenere(_) => CipherKind::Vigenere,
        }
    }
}

impl SubstitutionCipher for Cipher {
    fn encrypt(&self, text: &str) -> String {
        match self {
            Cipher::Caesar(c) => c.encrypt(text),
            Cipher::Vigenere(v) => v.encrypt(text),
        }
    }

    fn decrypt(&self, text: &str) -> String {
        match self {
            Cipher::Caesar(c) => c.decrypt(text),
            Cipher::Vigenere(v) => v.decrypt(text),
        }
    }
}
