//! # Substitution Cipher Library
//!
//! Classical substitution ciphers and the cryptanalysis to break them.
//!
//! ## Ciphers
//!
//! - **Caesar** - single shift over the 26-letter alphabet
//! - **Vigenère** - repeating keyword, one Caesar shift per text position
//!
//! ## Key recovery
//!
//! - **Dictionary** - the Caesar key whose decryption contains the most known words
//! - **Frequency** - the Caesar key whose decryption is closest to a trained [`FrequencyModel`]
//!
//! ## Usage
//!
//! ```rust
//! use substitution::{hack, Caesar, FrequencyModel, SubstitutionCipher};
//!
//! let cipher = Caesar::new(3);
//! let ciphertext = cipher.encrypt("the quick brown fox");
//! assert_eq!(ciphertext, "wkh txlfn eurzq ira");
//!
//! let words = hack::WordList::from_text("the\nquick\nbrown\nfox");
//! let recovery = hack::hack_dictionary(&ciphertext, &words)?;
//! assert_eq!(recovery.key, 3);
//!
//! let model = FrequencyModel::new().merge("the quick brown fox jumps over the lazy dog")?;
//! assert_eq!(model.total(), 35);
//! # Ok::<(), substitution::CipherError>(())
//! ```
//!
//! Letters are ASCII `A-Z`/`a-z` only; every other character passes through
//! unchanged and keeps its position.

pub mod alphabet;
pub mod caesar;
pub mod cipher;
pub mod error;
pub mod hack;
pub mod model;
pub mod vigenere;

// Re-exports for easy access
pub use caesar::Caesar;
pub use cipher::{Cipher, CipherKind, SubstitutionCipher};
pub use error::{CipherError, Result};
pub use hack::Recovery;
pub use model::FrequencyModel;
pub use vigenere::Vigenere;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
