//! Key normalization across the heterogeneous key forms callers supply.
//!
//! Front-ends hand keys over as whatever the user typed: a lone letter, a
//! decimal string, a comma-separated list, or an already-parsed integer
//! sequence. [`RawKey`] tags the form once at the boundary; each cipher then
//! asks for the canonical shape it needs (`shift`, `seed`, or `sequence`)
//! before touching a single character of text.

use thiserror::Error;

use crate::alphabet::letter_index;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CipherError {
    #[error("cannot read key {key:?} as {expected}")]
    KeyFormat { key: String, expected: &'static str },

    #[error("key normalized to an empty sequence")]
    EmptyKey,
}

/// A key exactly as the caller supplied it, before normalization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RawKey {
    Integer(i64),
    Letter(char),
    Text(String),
    List(Vec<i64>),
}

impl From<i64> for RawKey {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for RawKey {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<&str> for RawKey {
    fn from(value: &str) -> Self {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) if ch.is_ascii_alphabetic() => Self::Letter(ch),
            _ => Self::Text(value.to_owned()),
        }
    }
}

impl From<String> for RawKey {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<Vec<i64>> for RawKey {
    fn from(values: Vec<i64>) -> Self {
        Self::List(values)
    }
}

impl From<&[i64]> for RawKey {
    fn from(values: &[i64]) -> Self {
        Self::List(values.to_vec())
    }
}

impl RawKey {
    /// Additive shift: a single letter's alphabet index, or any integer.
    ///
    /// Sign and magnitude are unconstrained; the cipher reduces mod 26 at
    /// use time.
    pub fn shift(&self) -> Result<i64, CipherError> {
        match self {
            Self::Integer(n) => Ok(*n),
            Self::Letter(ch) => letter_index(*ch).ok_or_else(|| CipherError::KeyFormat {
                key: ch.to_string(),
                expected: "a letter or integer shift",
            }),
            Self::Text(s) => s.trim().parse().map_err(|_| CipherError::KeyFormat {
                key: s.clone(),
                expected: "a letter or integer shift",
            }),
            Self::List(values) => Err(CipherError::KeyFormat {
                key: format!("{values:?}"),
                expected: "a letter or integer shift",
            }),
        }
    }

    /// Autokey seed: an integer, or failing that a single letter's index.
    pub fn seed(&self) -> Result<i64, CipherError> {
        match self {
            Self::Integer(n) => Ok(*n),
            Self::Letter(ch) => letter_index(*ch).ok_or_else(|| CipherError::KeyFormat {
                key: ch.to_string(),
                expected: "an integer or single letter",
            }),
            Self::Text(s) => {
                let trimmed = s.trim();
                if let Ok(n) = trimmed.parse() {
                    return Ok(n);
                }
                let mut chars = trimmed.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => letter_index(ch),
                    _ => None,
                }
                .ok_or_else(|| CipherError::KeyFormat {
                    key: s.clone(),
                    expected: "an integer or single letter",
                })
            }
            Self::List(values) => Err(CipherError::KeyFormat {
                key: format!("{values:?}"),
                expected: "an integer or single letter",
            }),
        }
    }

    /// Vigenère key sequence.
    ///
    /// Integer lists pass through; text containing a comma is parsed as a
    /// list of integers (blank components skipped); any other text is read
    /// letter by letter, discarding non-alphabetic characters. An empty
    /// final sequence is an [`CipherError::EmptyKey`].
    pub fn sequence(&self) -> Result<Vec<i64>, CipherError> {
        let values = match self {
            Self::Integer(n) => vec![*n],
            Self::Letter(ch) => letter_index(*ch).into_iter().collect(),
            Self::List(values) => values.clone(),
            Self::Text(s) if s.contains(',') => {
                let mut values = Vec::new();
                for component in s.split(',') {
                    let component = component.trim();
                    if component.is_empty() {
                        continue;
                    }
                    let n = component.parse().map_err(|_| CipherError::KeyFormat {
                        key: component.to_owned(),
                        expected: "a comma-separated integer",
                    })?;
                    values.push(n);
                }
                values
            }
            Self::Text(s) => s.chars().filter_map(letter_index).collect(),
        };
        if values.is_empty() {
            return Err(CipherError::EmptyKey);
        }
        Ok(values)
    }
}
