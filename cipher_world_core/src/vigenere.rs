//! Vigenère cipher with a repeating key cycled over alphabetic positions.
//!
//! Output letters are always lowercase regardless of input case (quirk
//! preserved from the original system); non-alphabetic characters pass
//! through verbatim and do not advance the key cycle.

use log::debug;

use crate::alphabet::{letter_index, lower_letter, ALPHABET_LEN};
use crate::key::{CipherError, RawKey};
use crate::trace::{arithmetic_step, passthrough_step, CipherOutput, Mode};

fn vigenere_transform(text: &str, mode: Mode, key_values: &[i64]) -> CipherOutput {
    debug!(
        "vigenere mode={mode:?} key_len={} chars={}",
        key_values.len(),
        text.chars().count()
    );

    let mut output = String::with_capacity(text.len());
    let mut steps = Vec::new();
    let op = mode.operator();
    // Cycle position; advances only on alphabetic characters.
    let mut cycle = 0usize;

    for ch in text.chars() {
        match letter_index(ch) {
            Some(value) => {
                let k = key_values[cycle % key_values.len()];
                let raw = match mode {
                    Mode::Encrypt => value + k,
                    Mode::Decrypt => value - k,
                };
                let reduced = raw.rem_euclid(ALPHABET_LEN);
                let out = lower_letter(reduced);
                output.push(out);
                steps.push(arithmetic_step(ch, value, op, k, reduced, out));
                cycle += 1;
            }
            None => {
                output.push(ch);
                steps.push(passthrough_step(ch));
            }
        }
    }

    CipherOutput { text: output, steps }
}

/// Encrypt with a repeating key, one derivation step per input character.
pub fn vigenere_encrypt_with_steps(
    text: &str,
    key: impl Into<RawKey>,
) -> Result<CipherOutput, CipherError> {
    let key_values = key.into().sequence()?;
    Ok(vigenere_transform(text, Mode::Encrypt, &key_values))
}

/// Decrypt with a repeating key, one derivation step per input character.
pub fn vigenere_decrypt_with_steps(
    text: &str,
    key: impl Into<RawKey>,
) -> Result<CipherOutput, CipherError> {
    let key_values = key.into().sequence()?;
    Ok(vigenere_transform(text, Mode::Decrypt, &key_values))
}

/// Text-only projection of [`vigenere_encrypt_with_steps`].
pub fn vigenere_encrypt(text: &str, key: impl Into<RawKey>) -> Result<String, CipherError> {
    Ok(vigenere_encrypt_with_steps(text, key)?.text)
}

/// Text-only projection of [`vigenere_decrypt_with_steps`].
pub fn vigenere_decrypt(text: &str, key: impl Into<RawKey>) -> Result<String, CipherError> {
    Ok(vigenere_decrypt_with_steps(text, key)?.text)
}
