//! Byte spans - borrowed or owned views of payload bytes
//!
//! A span either borrows a range of the shared session buffer (zero-copy,
//! the parser's fast path) or owns its bytes outright. Spans are immutable
//! once built; all operations are non-mutating.

use super::source::{SourceBuffer, SourceRange};

/// An immutable view of contiguous bytes.
#[derive(Debug, Clone)]
pub enum ByteSpan {
    /// View into the shared session buffer
    Borrowed {
        /// Handle to the backing storage
        source: SourceBuffer,
        /// Byte range inside `source`
        range: SourceRange,
    },
    /// Independently owned bytes
    Owned(Vec<u8>),
}

impl ByteSpan {
    /// The empty span
    #[inline]
    pub const fn empty() -> Self {
        ByteSpan::Owned(Vec::new())
    }

    /// Build a borrowed span over `range`.
    ///
    /// Precondition: `source.contains(range)`; the node validates ranges
    /// before constructing spans.
    #[inline]
    pub fn borrowed(source: SourceBuffer, range: SourceRange) -> Self {
        debug_assert!(source.contains(range));
        ByteSpan::Borrowed { source, range }
    }

    /// Build an owned span from bytes
    #[inline]
    pub fn from_owned(bytes: Vec<u8>) -> Self {
        ByteSpan::Owned(bytes)
    }

    /// Build an owned span by copying a subrange of `bytes`.
    ///
    /// Precondition: `range` is in bounds for `bytes`.
    #[inline]
    pub fn from_owned_range(bytes: &[u8], range: SourceRange) -> Self {
        ByteSpan::Owned(bytes[range.start..range.end].to_vec())
    }

    /// Length in bytes
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            ByteSpan::Borrowed { range, .. } => range.len(),
            ByteSpan::Owned(bytes) => bytes.len(),
        }
    }

    /// Check if the span is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read one byte without copying.
    ///
    /// Precondition: `index < self.len()`.
    #[inline]
    pub fn byte_at(&self, index: usize) -> u8 {
        self.bytes()[index]
    }

    /// View the span's bytes without copying
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        match self {
            ByteSpan::Borrowed { source, range } => source.slice(*range),
            ByteSpan::Owned(bytes) => bytes,
        }
    }

    /// Copy out into an independent buffer
    #[inline]
    pub fn to_owned_bytes(&self) -> Vec<u8> {
        self.bytes().to_vec()
    }

    /// Check if this span aliases a shared buffer
    #[inline]
    pub fn is_borrowed(&self) -> bool {
        matches!(self, ByteSpan::Borrowed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_span() {
        let span = ByteSpan::empty();
        assert!(span.is_empty());
        assert_eq!(span.len(), 0);
        assert_eq!(span.bytes(), b"");
    }

    #[test]
    fn test_borrowed_span() {
        let buffer = SourceBuffer::new(b"hello world");
        let span = ByteSpan::borrowed(buffer, SourceRange::new(6, 11));
        assert!(span.is_borrowed());
        assert_eq!(span.len(), 5);
        assert_eq!(span.bytes(), b"world");
        assert_eq!(span.byte_at(0), b'w');
    }

    #[test]
    fn test_owned_span() {
        let span = ByteSpan::from_owned(b"abc".to_vec());
        assert!(!span.is_borrowed());
        assert_eq!(span.bytes(), b"abc");
    }

    #[test]
    fn test_from_owned_range_copies() {
        let bytes = b"hello world";
        let span = ByteSpan::from_owned_range(bytes, SourceRange::new(0, 5));
        assert_eq!(span.bytes(), b"hello");
        assert!(!span.is_borrowed());
    }

    #[test]
    fn test_to_owned_is_independent() {
        let buffer = SourceBuffer::new(b"data");
        let span = ByteSpan::borrowed(buffer, SourceRange::new(0, 4));
        let owned = span.to_owned_bytes();
        assert_eq!(owned, b"data");
        assert_eq!(span.bytes(), b"data");
    }

    #[test]
    fn test_borrowed_outlives_original_handle() {
        let span = {
            let buffer = SourceBuffer::new(b"scoped");
            ByteSpan::borrowed(buffer.clone(), SourceRange::new(0, 6))
        };
        // The span's own handle keeps the storage alive.
        assert_eq!(span.bytes(), b"scoped");
    }
}
