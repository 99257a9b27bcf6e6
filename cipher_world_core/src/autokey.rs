//! Autokey cipher: the plaintext itself extends the key stream.
//!
//! The stream starts from a numeric seed and continues with the alphabet
//! index of each previous plaintext letter, which makes decryption strictly
//! sequential — every step depends on the plaintext recovered so far. Input
//! is uppercased and stripped of spaces before ciphering, so the original
//! casing and spacing are not preserved (quirk carried over from the
//! original system).

use log::debug;

use crate::alphabet::{letter_index, upper_letter, ALPHABET_LEN};
use crate::key::{CipherError, RawKey};
use crate::trace::{arithmetic_step, passthrough_step, CipherOutput, Mode};

fn prepare(text: &str) -> String {
    text.chars()
        .filter(|ch| *ch != ' ')
        .flat_map(char::to_uppercase)
        .collect()
}

/// Encrypt with a seed key extended by the plaintext's own letter values.
pub fn autokey_encrypt_with_steps(
    text: &str,
    key: impl Into<RawKey>,
) -> Result<CipherOutput, CipherError> {
    let seed = key.into().seed()?;
    let prepared = prepare(text);
    debug!("autokey encrypt seed={seed} chars={}", prepared.chars().count());

    let mut output = String::with_capacity(prepared.len());
    let mut steps = Vec::new();
    // Key value for the next alphabetic character: the seed first, then the
    // index of the previous plaintext letter.
    let mut stream = seed;

    for ch in prepared.chars() {
        match letter_index(ch) {
            Some(p) => {
                let c = (p + stream).rem_euclid(ALPHABET_LEN);
                let out = upper_letter(c);
                output.push(out);
                steps.push(arithmetic_step(ch, p, '+', stream, c, out));
                stream = p;
            }
            None => {
                output.push(ch);
                steps.push(passthrough_step(ch));
            }
        }
    }

    Ok(CipherOutput { text: output, steps })
}

/// Decrypt by rebuilding the key stream from the plaintext recovered so far.
pub fn autokey_decrypt_with_steps(
    text: &str,
    key: impl Into<RawKey>,
) -> Result<CipherOutput, CipherError> {
    let seed = key.into().seed()?;
    let prepared = prepare(text);
    debug!("autokey decrypt seed={seed} chars={}", prepared.chars().count());

    let mut output = String::with_capacity(prepared.len());
    let mut steps = Vec::new();
    let mut stream = seed;

    for ch in prepared.chars() {
        match letter_index(ch) {
            Some(c) => {
                let p = (c - stream).rem_euclid(ALPHABET_LEN);
                let out = upper_letter(p);
                output.push(out);
                steps.push(arithmetic_step(ch, c, '-', stream, p, out));
                stream = p;
            }
            None => {
                output.push(ch);
                steps.push(passthrough_step(ch));
            }
        }
    }

    Ok(CipherOutput { text: output, steps })
}

/// Text-only projection of [`autokey_encrypt_with_steps`].
pub fn autokey_encrypt(text: &str, key: impl Into<RawKey>) -> Result<String, CipherError> {
    Ok(autokey_encrypt_with_steps(text, key)?.text)
}

/// Text-only projection of [`autokey_decrypt_with_steps`].
pub fn autokey_decrypt(text: &str, key: impl Into<RawKey>) -> Result<String, CipherError> {
    Ok(autokey_decrypt_with_steps(text, key)?.text)
}
