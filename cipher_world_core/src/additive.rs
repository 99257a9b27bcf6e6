//! Additive (Caesar-style) shift cipher.
//!
//! Encrypt and decrypt share one transform; decrypt flips the sign of the
//! shift. Output letters are always lowercase regardless of input case, a
//! quirk preserved from the original system.

use log::debug;

use crate::alphabet::{letter_index, lower_letter, ALPHABET_LEN};
use crate::key::{CipherError, RawKey};
use crate::trace::{arithmetic_step, passthrough_step, wraparound_step, CipherOutput, Mode};

/// Shift `text` by the normalized key, with one derivation step per input
/// character. The key error, if any, is returned before any character is
/// processed.
pub fn additive_transform_with_steps(
    text: &str,
    mode: Mode,
    key: impl Into<RawKey>,
) -> Result<CipherOutput, CipherError> {
    let shift = key.into().shift()?;
    let signed = mode.signed(shift);
    debug!("additive mode={mode:?} shift={shift} chars={}", text.chars().count());

    let mut output = String::with_capacity(text.len());
    let mut steps = Vec::new();
    let op = mode.operator();

    for ch in text.chars() {
        match letter_index(ch) {
            Some(index) => {
                let raw = index + signed;
                let reduced = raw.rem_euclid(ALPHABET_LEN);
                let out = lower_letter(reduced);
                output.push(out);
                let wrapped = match mode {
                    Mode::Encrypt => raw >= ALPHABET_LEN,
                    Mode::Decrypt => raw < 0,
                };
                steps.push(if wrapped {
                    wraparound_step(ch, index, op, shift, raw, reduced, out)
                } else {
                    arithmetic_step(ch, index, op, shift, reduced, out)
                });
            }
            None => {
                output.push(ch);
                steps.push(passthrough_step(ch));
            }
        }
    }

    Ok(CipherOutput { text: output, steps })
}

/// Text-only projection of [`additive_transform_with_steps`].
pub fn additive_transform(
    text: &str,
    mode: Mode,
    key: impl Into<RawKey>,
) -> Result<String, CipherError> {
    Ok(additive_transform_with_steps(text, mode, key)?.text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn hello_shift_three() {
        assert_eq!(
            additive_transform("HELLO", Mode::Encrypt, 3).unwrap(),
            "khoor"
        );
        assert_eq!(
            additive_transform("khoor", Mode::Decrypt, 3).unwrap(),
            "hello"
        );
    }

    #[test]
    fn letter_key_uses_alphabet_index() {
        // 'd' has index 3, so the result matches a shift of 3.
        assert_eq!(
            additive_transform("hello", Mode::Encrypt, "d").unwrap(),
            "khoor"
        );
    }

    #[test]
    fn multi_letter_key_is_rejected_before_processing() {
        let err = additive_transform("abc", Mode::Encrypt, "xyz").unwrap_err();
        assert!(matches!(err, CipherError::KeyFormat { .. }));
    }

    #[test]
    fn non_alphabetic_characters_pass_through_verbatim() {
        let out = additive_transform_with_steps("He, no. 9!", Mode::Encrypt, 1).unwrap();
        assert_eq!(out.text, "if, op. 9!");
        assert_eq!(out.steps[2], ", (non-alphabetic) -> ,");
    }

    #[test]
    fn step_trace_shows_wraparound_phrasing() {
        let out = additive_transform_with_steps("yb", Mode::Encrypt, 3).unwrap();
        assert_eq!(out.text, "be");
        assert_eq!(out.steps[0], "Y (24) + 3 = 27 = (27-26) = 1 -> B");
        assert_eq!(out.steps[1], "B (1) + 3 = 4 -> E");

        let out = additive_transform_with_steps("be", Mode::Decrypt, 3).unwrap();
        assert_eq!(out.text, "yb");
        assert_eq!(out.steps[0], "B (1) - 3 = -2 = (-2+26) = 24 -> Y");
    }

    #[test]
    fn one_step_per_character() {
        let text = "attack at dawn!";
        let out = additive_transform_with_steps(text, Mode::Encrypt, 13).unwrap();
        assert_eq!(out.steps.len(), text.chars().count());
    }

    #[test]
    fn negative_and_oversized_shifts_reduce_mod_26() {
        assert_eq!(additive_transform("abc", Mode::Encrypt, -1).unwrap(), "zab");
        assert_eq!(additive_transform("abc", Mode::Encrypt, 53).unwrap(), "bcd");
    }

    proptest! {
        #[test]
        fn roundtrip_any_shift(text in "[a-z]{0,40}", shift in -100i64..=100) {
            let encrypted = additive_transform(&text, Mode::Encrypt, shift).unwrap();
            let decrypted = additive_transform(&encrypted, Mode::Decrypt, shift).unwrap();
            prop_assert_eq!(decrypted, text);
        }

        #[test]
        fn steps_match_input_length(text in ".{0,40}", shift in 0i64..26) {
            let out = additive_transform_with_steps(&text, Mode::Encrypt, shift).unwrap();
            prop_assert_eq!(out.steps.len(), text.chars().count());
        }
    }
}
