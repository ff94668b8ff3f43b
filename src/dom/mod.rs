//! DOM Module - document nodes with lazy raw-text payloads
//!
//! Pieces:
//! - Shared source buffer + byte ranges (one per parse session)
//! - Borrowed/owned byte spans
//! - Ordered attribute store
//! - Node base header (linkage, base URI, dirty indicator)
//! - Raw data node state machine
//! - Serialization surface

pub mod attributes;
pub mod data_node;
pub mod node;
pub mod serialize;
pub mod source;
pub mod span;

pub use attributes::{Attribute, Attributes};
pub use data_node::DataNode;
pub use node::{NodeHeader, NodeId, NodeKind};
pub use serialize::{NodeRender, OutputSettings};
pub use source::{SourceBuffer, SourceRange};
pub use span::ByteSpan;
