//! Classical substitution ciphers with step-by-step solution traces.
//!
//! The three transforms here are historical teaching ciphers and offer
//! **no** real-world security; the crate exists to show the per-character
//! arithmetic, not to protect data. Every transform is a pure function over
//! (text, key, mode) and emits one human-readable derivation step per input
//! character alongside the output text.

pub mod additive;
pub mod alphabet;
pub mod autokey;
pub mod key;
pub mod trace;
pub mod vigenere;

pub use crate::additive::{additive_transform, additive_transform_with_steps};
pub use crate::autokey::{
    autokey_decrypt, autokey_decrypt_with_steps, autokey_encrypt, autokey_encrypt_with_steps,
};
pub use crate::key::{CipherError, RawKey};
pub use crate::trace::{CipherOutput, Mode};
pub use crate::vigenere::{
    vigenere_decrypt, vigenere_decrypt_with_steps, vigenere_encrypt, vigenere_encrypt_with_steps,
};
