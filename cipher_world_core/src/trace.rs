//! Step-trace conventions shared by the three ciphers.
//!
//! Every transform emits exactly one step string per input character, in
//! input order, mirroring the arithmetic it actually performed. Front-ends
//! number and display the steps; nothing here is consumed by the transforms
//! themselves.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Encrypt,
    Decrypt,
}

impl Mode {
    /// Effective shift for the additive cipher: the sign flips on decrypt.
    pub fn signed(self, shift: i64) -> i64 {
        match self {
            Self::Encrypt => shift,
            Self::Decrypt => -shift,
        }
    }

    pub(crate) fn operator(self) -> char {
        match self {
            Self::Encrypt => '+',
            Self::Decrypt => '-',
        }
    }
}

/// Transform output: the produced text plus one derivation step per input
/// character.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherOutput {
    pub text: String,
    pub steps: Vec<String>,
}

/// `"H (7) + 3 = 10 -> K"` — letters are shown uppercase regardless of the
/// case the cipher emits.
pub(crate) fn arithmetic_step(
    input: char,
    index: i64,
    op: char,
    key: i64,
    result: i64,
    output: char,
) -> String {
    format!(
        "{} ({}) {} {} = {} -> {}",
        input.to_ascii_uppercase(),
        index,
        op,
        key,
        result,
        output.to_ascii_uppercase()
    )
}

/// Additive wraparound phrasing: `"Y (24) + 3 = 27 = (27-26) = 1 -> B"` on
/// encrypt, `"B (1) - 3 = -2 = (-2+26) = 24 -> Y"` on decrypt. The phrasing
/// is cosmetic; `result` is the true-modulo reduction either way.
pub(crate) fn wraparound_step(
    input: char,
    index: i64,
    op: char,
    key: i64,
    raw: i64,
    result: i64,
    output: char,
) -> String {
    let correction = if op == '+' {
        format!("({raw}-26)")
    } else {
        format!("({raw}+26)")
    };
    format!(
        "{} ({}) {} {} = {} = {} = {} -> {}",
        input.to_ascii_uppercase(),
        index,
        op,
        key,
        raw,
        correction,
        result,
        output.to_ascii_uppercase()
    )
}

/// `"! (non-alphabetic) -> !"` — the character passes through verbatim.
pub(crate) fn passthrough_step(ch: char) -> String {
    format!("{ch} (non-alphabetic) -> {ch}")
}
