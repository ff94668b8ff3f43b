//! Shared source buffer for one parse session
//!
//! The original input bytes are owned once per session and shared read-only
//! across every node that borrows from them. Reference counting guarantees
//! the storage outlives all borrowed spans.

use std::sync::Arc;

/// Half-open byte range `[start, end)` into a source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceRange {
    /// Start offset (inclusive)
    pub start: usize,
    /// End offset (exclusive)
    pub end: usize,
}

impl SourceRange {
    /// Create a new range
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length in bytes; zero for malformed ranges
    #[inline]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if this range is empty
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check `start <= end`
    #[inline]
    pub const fn is_well_formed(&self) -> bool {
        self.start <= self.end
    }

    /// Check if `next` starts exactly where this range ends
    #[inline]
    pub const fn adjoins(&self, next: SourceRange) -> bool {
        self.end == next.start
    }
}

/// Immutable session-wide byte storage.
///
/// Cheap to clone: every clone is a handle to the same shared bytes, so a
/// buffer can back many borrowed spans at once.
#[derive(Debug, Clone)]
pub struct SourceBuffer {
    data: Arc<[u8]>,
}

impl SourceBuffer {
    /// Create a buffer owning a copy of `input`
    pub fn new(input: impl AsRef<[u8]>) -> Self {
        Self {
            data: Arc::from(input.as_ref()),
        }
    }

    /// Total byte count
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the buffer is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Check if `range` is well formed and in bounds for this buffer
    #[inline]
    pub fn contains(&self, range: SourceRange) -> bool {
        range.is_well_formed() && range.end <= self.data.len()
    }

    /// Slice out `range`.
    ///
    /// Precondition: `self.contains(range)`; callers validate ranges before
    /// building spans. Out-of-bounds ranges yield an empty slice.
    #[inline]
    pub fn slice(&self, range: SourceRange) -> &[u8] {
        if self.contains(range) {
            &self.data[range.start..range.end]
        } else {
            &[]
        }
    }

    /// View the whole buffer
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Check whether two handles share the same storage
    #[inline]
    pub fn same_storage(&self, other: &SourceBuffer) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_basic() {
        let range = SourceRange::new(5, 9);
        assert_eq!(range.len(), 4);
        assert!(!range.is_empty());
        assert!(range.is_well_formed());
    }

    #[test]
    fn test_range_malformed() {
        let range = SourceRange::new(9, 5);
        assert!(!range.is_well_formed());
        assert_eq!(range.len(), 0);
    }

    #[test]
    fn test_range_adjacency() {
        let a = SourceRange::new(0, 5);
        assert!(a.adjoins(SourceRange::new(5, 9)));
        assert!(!a.adjoins(SourceRange::new(6, 9)));
        assert!(!a.adjoins(SourceRange::new(4, 9)));
    }

    #[test]
    fn test_buffer_contains() {
        let buffer = SourceBuffer::new(b"hello world");
        assert!(buffer.contains(SourceRange::new(0, 11)));
        assert!(buffer.contains(SourceRange::new(11, 11)));
        assert!(!buffer.contains(SourceRange::new(0, 12)));
        assert!(!buffer.contains(SourceRange::new(9, 5)));
    }

    #[test]
    fn test_buffer_slice() {
        let buffer = SourceBuffer::new(b"hello world");
        assert_eq!(buffer.slice(SourceRange::new(6, 11)), b"world");
        assert_eq!(buffer.slice(SourceRange::new(6, 42)), b"");
    }

    #[test]
    fn test_handles_share_storage() {
        let buffer = SourceBuffer::new(b"shared");
        let handle = buffer.clone();
        assert!(buffer.same_storage(&handle));
        assert!(!buffer.same_storage(&SourceBuffer::new(b"shared")));
    }
}
