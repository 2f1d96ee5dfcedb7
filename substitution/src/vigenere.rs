//! Vigenère cipher, composed from per-position Caesar shifts

use crate::alphabet;
use crate::cipher::SubstitutionCipher;
use crate::error::{CipherError, Result};

/// Polyalphabetic cipher over a repeating keyword.
///
/// The keyword is stored as its shift values; key casing has no effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vigenere {
    shifts: Vec<u8>,
}

impl Vigenere {
    /// Creates a Vigenère cipher from a keyword.
    ///
    /// # Arguments
    ///
    /// * `key` - Non-empty keyword made only of ASCII letters.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::InvalidKey` for an empty key or one containing non-letters.
    pub fn new(key: &str) -> Result<Self> {
        if key.is_empty() {
            return Err(CipherError::InvalidKey(
                "Vigenère key cannot be empty".to_string(),
            ));
        }

        let shifts = key
            .chars()
            .map(|c| {
                alphabet::index_of(c).ok_or_else(|| {
                    CipherError::InvalidKey(format!(
                        "Vigenère key may only contain letters, found {:?}",
                        c
                    ))
                })
            })
            .collect::<Result<Vec<u8>>>()?;

        Ok(Self { shifts })
    }

    /// The keyword in lowercase.
    pub fn keyword(&self) -> String {
        self.shifts.iter().map(|&s| (b'a' + s) as char).collect()
    }

    // Position i always uses shifts[i % len], letter or not.
    fn apply(&self, text: &str, decrypt: bool) -> String {
        text.chars()
            .zip(self.shifts.iter().cycle())
            .map(|(c, &by)| {
                let by = if decrypt { alphabet::inverse(by) } else { by };
                alphabet::shift(c, by)
            })
            .collect()
    }
}

impl SubstitutionCipher for Vigenere {
    fn encrypt(&self, text: &str) -> String {
        self.apply(text, false)
    }

    fn decrypt(&self, text: &str) -> String {
        self.apply(text, true)
    }
}
