//! Core byte-level building blocks
//!
//! Shared low-level pieces used by the DOM layer:
//! - Entity decoding with zero-copy fast paths
//! - Decode error type

pub mod entities;
pub mod error;

pub use entities::{decode_text, unescape};
pub use error::DecodeError;
