//! Caesar (additive) cipher

use crate::alphabet::{self, ALPHABET_LEN};
use crate::cipher::SubstitutionCipher;
use crate::error::{CipherError, Result};

/// Single-shift cipher with its key normalized into `[0, 26)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caesar {
    key: u8,
}

impl Caesar {
    /// Creates a Caesar cipher from any integer key.
    ///
    /// # Example
    ///
    /// ```rust
    /// use substitution::{Caesar, SubstitutionCipher};
    ///
    /// let cipher = Caesar::new(-1);
    /// assert_eq!(cipher.key(), 25);
    /// assert_eq!(cipher.encrypt("Abc"), "Zab");
    /// ```
    pub fn new(key: i64) -> Self {
        Self {
            key: key.rem_euclid(ALPHABET_LEN as i64) as u8,
        }
    }

    /// Parses a decimal key of any magnitude, with optional sign.
    ///
    /// The value is reduced modulo 26 digit by digit, so keys wider than
    /// `i64` are accepted.
    ///
    /// # Errors
    ///
    /// `CipherError::InvalidKey` if `key` is not a decimal integer.
    pub fn parse(key: &str) -> Result<Self> {
        let invalid =
            || CipherError::InvalidKey(format!("Caesar key must be an integer, got {:?}", key));

        let trimmed = key.trim();
        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        if digits.is_empty() {
            return Err(invalid());
        }

        let mut remainder: u32 = 0;
        for c in digits.chars() {
            let digit = c.to_digit(10).ok_or_else(invalid)?;
            remainder = (remainder * 10 + digit) % ALPHABET_LEN as u32;
        }
        let remainder = remainder as u8;

        let key = if negative { alphabet::inverse(remainder) } else { remainder };
        Ok(Self { key })
    }

    /// The normalized key.
    pub fn key(&self) -> u8 {
        self.key
    }

    /// The cipher whose encryption undoes this one.
    pub fn inverse(&self) -> Self {
        Self {
            key: alphabet::inverse(self.key),
        }
    }

    /// All 26 Caesar ciphers, in ascending key order.
    pub fn all() -> impl Iterator<Item = Caesar> {
        (0..ALPHABET_LEN).map(|key| Caesar { key })
    }
}

impl SubstitutionCipher for Caesar {
    fn encrypt(&self, text: &str) -> String {
        text.chars().map(|c| alphabet::shift(c, self.key)).collect()
    }

    fn decrypt(&self, text: &str) -> String {
        self.inverse().encrypt(text)
    }
}
