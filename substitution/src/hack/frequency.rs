//! Frequency-distance key recovery against a trained model

use tracing::{debug, warn};

use super::Recovery;
use crate::alphabet;
use crate::caesar::Caesar;
use crate::cipher::SubstitutionCipher;
use crate::error::{CipherError, Result};
use crate::model::{self, FrequencyModel};

// Below this many letters the candidate distribution is mostly noise.
const SHORT_TEXT_LETTERS: u64 = 50;

/// Sum of squared differences between two letter distributions.
pub fn distance(a: &[f64; 26], b: &[f64; 26]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y).powi(2)).sum()
}

/// Recovers the Caesar key whose decryption has the letter distribution closest to `model`.
///
/// # Errors
///
/// * `CipherError::EmptyModel` if the model has no letters.
/// * `CipherError::Inconclusive` if the ciphertext has no letters.
pub fn hack_frequency(ciphertext: &str, model: &FrequencyModel) -> Result<Recovery> {
    let model_frequency = model.frequency().ok_or(CipherError::EmptyModel)?;

    let letters: u64 = alphabet::letter_counts(ciphertext).iter().sum();
    if letters == 0 {
        return Err(CipherError::Inconclusive(
            "ciphertext contains no letters".to_string(),
        ));
    }
    if letters < SHORT_TEXT_LETTERS {
        warn!(letters, "ciphertext may be too short for reliable frequency analysis");
    }

    let mut best_key: u8 = 0;
    let mut best_diff = f64::INFINITY;

    for cipher in Caesar::all() {
        let candidate = cipher.decrypt(ciphertext);
        let Some(candidate_frequency) = model::distribution(&alphabet::letter_counts(&candidate))
        else {
            continue;
        };

        let diff = distance(&model_frequency, &candidate_frequency);
        debug!(key = cipher.key(), diff, "frequency candidate");

        if diff < best_diff {
            best_diff = diff;
            best_key = cipher.key();
        }
    }

    Ok(Recovery {
        key: best_key,
        plaintext: Caesar::new(best_key as i64).decrypt(ciphertext),
        score: best_diff,
    })
}
