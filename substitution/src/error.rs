//! Error types for cipher, model and key-recovery operations

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CipherError {
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Unknown cipher `{0}` (expected caesar or vigenere)")]
    UnknownCipher(String),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Corrupt frequency model at {}: {reason}", .path.display())]
    CorruptModel { path: PathBuf, reason: String },

    #[error("Frequency model letter total overflows")]
    ModelOverflow,

    #[error("Frequency model is empty (train it before hacking)")]
    EmptyModel,

    #[error("Inconclusive key recovery: {0}")]
    Inconclusive(String),
}

impl CipherError {
    /// Wraps an I/O error together with the path that caused it
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CipherError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CipherError>;
