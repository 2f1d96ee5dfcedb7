//! Letter-frequency language model and its on-disk store
//!
//! The model keeps one occurrence count per letter and nothing else: the total
//! is always the sum of the 26 counts, so merging samples is commutative and
//! associative and the total can never drift from the per-letter counts.
//!
//! On disk the model is a bincode-encoded [`PersistedModel`] starting with the
//! `SFM1` magic bytes. A missing or empty file loads as the all-zero model.
//!
//! Saving replaces the file through a temporary file in the same directory.
//! Two `train` runs against the same path can still lose an update (last
//! writer wins).

use std::collections::BTreeMap;
use std::fs;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;

use bincode::Options;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::alphabet::{self, LOWERCASE};
use crate::error::{CipherError, Result};

const MAGIC: [u8; 4] = *b"SFM1";

/// Per-letter occurrence counts of some training text.
///
/// The sum of the counts always fits in a `u64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrequencyModel {
    counts: [u64; 26],
}

/// Serialized form of a model.
#[derive(Serialize, Deserialize)]
struct PersistedModel {
    magic: [u8; 4],
    counts: BTreeMap<char, u64>,
}

impl FrequencyModel {
    /// An all-zero model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts of a single sample.
    pub fn from_sample(sample: &str) -> Self {
        Self {
            counts: alphabet::letter_counts(sample),
        }
    }

    /// Returns a new model with the letters of `sample` added to this one.
    ///
    /// # Errors
    ///
    /// `CipherError::ModelOverflow` if the merged letter total no longer fits in a `u64`.
    pub fn merge(&self, sample: &str) -> Result<Self> {
        let mut merged = *self;
        let added = alphabet::letter_counts(sample);
        for (count, extra) in merged.counts.iter_mut().zip(added) {
            *count = count.checked_add(extra).ok_or(CipherError::ModelOverflow)?;
        }
        checked_total(&merged.counts).ok_or(CipherError::ModelOverflow)?;
        Ok(merged)
    }

    /// Occurrences of `letter` (case-insensitive); 0 for non-letters.
    pub fn count(&self, letter: char) -> u64 {
        alphabet::index_of(letter).map_or(0, |i| self.counts[i as usize])
    }

    pub fn counts(&self) -> &[u64; 26] {
        &self.counts
    }

    /// Sum of all letter counts.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Relative frequency of each letter, or `None` if the model holds no letters.
    pub fn frequency(&self) -> Option<[f64; 26]> {
        distribution(&self.counts)
    }

    /// Reads a model from `path`.
    ///
    /// A missing or empty file yields the all-zero model. Any other read
    /// failure is `CipherError::Io`; content that is not a model is
    /// `CipherError::CorruptModel`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no model file, starting empty");
                return Ok(Self::new());
            }
            Err(e) => return Err(CipherError::io(path, e)),
        };

        if bytes.is_empty() {
            debug!(path = %path.display(), "empty model file, starting empty");
            return Ok(Self::new());
        }

        let corrupt = |reason: String| CipherError::CorruptModel {
            path: path.to_path_buf(),
            reason,
        };

        if !bytes.starts_with(&MAGIC) {
            return Err(corrupt("missing model header".to_string()));
        }

        let persisted: PersistedModel = codec()
            .deserialize(&bytes)
            .map_err(|e| corrupt(e.to_string()))?;

        let mut model = Self::new();
        for (letter, count) in persisted.counts {
            if !letter.is_ascii_lowercase() {
                return Err(corrupt(format!("unexpected key {:?}", letter)));
            }
            model.counts[(letter as u8 - b'a') as usize] = count;
        }

        if checked_total(&model.counts).is_none() {
            return Err(corrupt("letter total overflows".to_string()));
        }

        Ok(model)
    }

    /// Writes the model to `path`, replacing whatever was there.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let parent_dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };

        let persisted = PersistedModel {
            magic: MAGIC,
            counts: LOWERCASE.chars().zip(self.counts).collect(),
        };

        let temp_file =
            NamedTempFile::new_in(parent_dir).map_err(|e| CipherError::io(parent_dir, e))?;
        {
            let mut writer = BufWriter::new(&temp_file);
            codec().serialize_into(&mut writer, &persisted).map_err(|e| {
                CipherError::io(path, std::io::Error::new(ErrorKind::Other, e))
            })?;
            writer.flush().map_err(|e| CipherError::io(path, e))?;
        }
        temp_file.persist(path).map_err(|e| CipherError::io(path, e.error))?;

        debug!(path = %path.display(), total = self.total(), "model saved");
        Ok(())
    }

    /// Loads the model at `path`, adds `sample` to it and writes it back.
    pub fn train(path: impl AsRef<Path>, sample: &str) -> Result<Self> {
        let path = path.as_ref();
        let model = Self::load(path)?.merge(sample)?;
        model.save(path)?;
        Ok(model)
    }
}

// Fixed-width integers, no trailing bytes after the model.
fn codec() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .reject_trailing_bytes()
}

fn checked_total(counts: &[u64; 26]) -> Option<u64> {
    counts.iter().try_fold(0u64, |sum, &count| sum.checked_add(count))
}

/// Normalizes counts into relative frequencies; `None` when all counts are zero.
pub fn distribution(counts: &[u64; 26]) -> Option<[f64; 26]> {
    let total: u128 = counts.iter().map(|&count| count as u128).sum();
    if total == 0 {
        return None;
    }

    let mut frequencies = [0.0; 26];
    for (freq, &count) in frequencies.iter_mut().zip(counts) {
        *freq = count as f64 / total as f64;
    }
    Some(frequencies)
}
