//! Fixed 26-letter alphabet shared by all three ciphers.

pub const ALPHABET_LEN: i64 = 26;

/// 0-based alphabet position of an ASCII letter, case-insensitive.
///
/// Returns `None` for anything that is not an ASCII letter; the ciphers use
/// that to route spaces, digits, and punctuation through unchanged.
pub fn letter_index(ch: char) -> Option<i64> {
    if ch.is_ascii_alphabetic() {
        Some(i64::from(ch.to_ascii_lowercase() as u8 - b'a'))
    } else {
        None
    }
}

/// Lowercase letter at `index`, reduced `rem_euclid(26)` so a caller that
/// skipped its own reduction still lands inside the alphabet.
pub fn lower_letter(index: i64) -> char {
    (b'a' + index.rem_euclid(ALPHABET_LEN) as u8) as char
}

/// Uppercase counterpart of [`lower_letter`].
pub fn upper_letter(index: i64) -> char {
    (b'A' + index.rem_euclid(ALPHABET_LEN) as u8) as char
}
