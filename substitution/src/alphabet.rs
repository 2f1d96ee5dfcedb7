//! The 26-letter Latin alphabet and the case rule shared by every transform

/// Number of letters in the alphabet.
pub const ALPHABET_LEN: u8 = 26;

/// Canonical lowercase alphabet.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

/// Uppercase alphabet, index-aligned with [`LOWERCASE`].
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Classification of a single input character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Letter {
    Upper(u8),
    Lower(u8),
    Other,
}

/// Classifies a character into upper/lowercase letter (with its alphabet index) or other.
pub fn classify(c: char) -> Letter {
    if c.is_ascii_uppercase() {
        Letter::Upper(c as u8 - b'A')
    } else if c.is_ascii_lowercase() {
        Letter::Lower(c as u8 - b'a')
    } else {
        Letter::Other
    }
}

/// Case-insensitive alphabet index of `c`, `None` for non-letters.
pub fn index_of(c: char) -> Option<u8> {
    match classify(c) {
        Letter::Upper(i) | Letter::Lower(i) => Some(i),
        Letter::Other => None,
    }
}

/// Rotates a letter `by` positions forward, keeping its case.
///
/// Non-letters are returned unchanged.
pub fn shift(c: char, by: u8) -> char {
    let by = by % ALPHABET_LEN;
    match classify(c) {
        Letter::Upper(i) => (b'A' + (i + by) % ALPHABET_LEN) as char,
        Letter::Lower(i) => (b'a' + (i + by) % ALPHABET_LEN) as char,
        Letter::Other => c,
    }
}

/// Shift that undoes a forward shift of `by`.
pub fn inverse(by: u8) -> u8 {
    (ALPHABET_LEN - by % ALPHABET_LEN) % ALPHABET_LEN
}

/// Counts occurrences of each letter in `text`, case-folded; non-letters are ignored.
pub fn letter_counts(text: &str) -> [u64; 26] {
    let mut counts: [u64; 26] = [0; 26];

    for c in text.chars() {
        if let Some(index) = index_of(c) {
            counts[index as usize] += 1;
        }
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabets_share_index() {
        for (lower, upper) in LOWERCASE.chars().zip(UPPERCASE.chars()) {
            assert_eq!(index_of(lower), index_of(upper));
        }
        assert_eq!(LOWERCASE.len(), ALPHABET_LEN as usize);
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify('A'), Letter::Upper(0));
        assert_eq!(classify('z'), Letter::Lower(25));
        assert_eq!(classify('5'), Letter::Other);
        assert_eq!(classify('é'), Letter::Other);
    }

    #[test]
    fn test_shift_wraps_and_keeps_case() {
        assert_eq!(shift('x', 3), 'a');
        assert_eq!(shift('X', 3), 'A');
        assert_eq!(shift('!', 3), '!');
        assert_eq!(shift(shift('q', 11), inverse(11)), 'q');
    }

    #[test]
    fn test_letter_counts_case_folded() {
        let counts = letter_counts("AaB, b? c");
        assert_eq!(counts[0], 2);
        assert_eq!(counts[1], 2);
        assert_eq!(counts[2], 1);
        assert_eq!(counts.iter().sum::<u64>(), 5);
    }
}
