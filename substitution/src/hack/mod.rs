//! Key recovery for Caesar ciphertext
//!
//! Both strategies decrypt the ciphertext under each of the 26 keys in
//! ascending order and keep the best-scoring candidate; on equal scores the
//! smaller key wins.

pub mod dictionary;
pub mod frequency;

pub use dictionary::{hack_dictionary, WordList};
pub use frequency::{distance, hack_frequency};

/// Outcome of a successful key search.
#[derive(Debug, Clone, PartialEq)]
pub struct Recovery {
    /// The recovered encryption key.
    pub key: u8,
    /// Ciphertext decrypted under `key`.
    pub plaintext: String,
    /// Winning score: word hits for the dictionary method, squared distance
    /// for the frequency method.
    pub score: f64,
}
