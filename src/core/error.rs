//! Decode errors for entity unescaping
//!
//! Only the strict decode path (`unescape`) is fallible; everything else in
//! the payload core degrades silently per the node contract.

use thiserror::Error;

/// Error produced while decoding entity references in encoded text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A numeric character reference did not parse or named a code point
    /// outside the valid range.
    #[error("invalid character reference at byte {0}")]
    InvalidCharacterReference(usize),
    /// A numeric character reference was opened but never closed with `;`.
    #[error("unterminated character reference at byte {0}")]
    UnterminatedReference(usize),
}

impl DecodeError {
    /// Byte offset in the encoded input where decoding failed.
    pub fn position(&self) -> usize {
        match *self {
            DecodeError::InvalidCharacterReference(pos) => pos,
            DecodeError::UnterminatedReference(pos) => pos,
        }
    }
}
