//! markdom - markup DOM nodes with lazy zero-copy raw-text payloads
//!
//! The centerpiece is [`DataNode`], the `#data` node holding raw script or
//! style content. While the parser scans, the node borrows byte spans
//! straight out of the shared [`SourceBuffer`] instead of copying:
//! contiguous discoveries extend the span in place, discontiguous ones
//! accumulate as fragments, and the first external read materializes
//! everything into one owned buffer exactly once.
//!
//! ```
//! use markdom::{ByteSpan, DataNode, SourceBuffer, SourceRange};
//!
//! let source = SourceBuffer::new(b"<script>alert(1)</script>");
//! let span = ByteSpan::borrowed(source.clone(), SourceRange::new(8, 16));
//! let mut node = DataNode::from_span(span);
//! assert_eq!(node.data(), "alert(1)");
//! node.append(ByteSpan::from_owned(b";".to_vec()));
//! assert_eq!(node.data(), "alert(1);");
//! ```

pub mod core;
pub mod dom;

pub use crate::core::{decode_text, unescape, DecodeError};
pub use dom::{
    Attribute, Attributes, ByteSpan, DataNode, NodeHeader, NodeId, NodeKind, NodeRender,
    OutputSettings, SourceBuffer, SourceRange,
};
