//! Raw data node (`#data`)
//!
//! Holds the unescaped payload of script/style content. During parsing the
//! payload is a borrowed span over the session's source buffer (zero-copy);
//! contiguous growth extends the span in place, discontiguous growth
//! accumulates fragments, and the first forced read materializes everything
//! into one owned buffer. Materialization is one-way: span memory is
//! discarded and never repopulated.

use super::attributes::Attributes;
use super::node::{NodeHeader, NodeKind};
use super::serialize::{NodeRender, OutputSettings};
use super::source::{SourceBuffer, SourceRange};
use super::span::ByteSpan;
use crate::core::entities::unescape;
use crate::core::error::DecodeError;
use std::io;
use std::mem;

/// Payload representation. Exactly one variant is active at a time and all
/// transitions go through the methods below; `Owned` is terminal for a
/// materialization episode.
#[derive(Debug, Clone)]
enum RawPayload {
    /// Nothing accumulated yet
    Empty,
    /// Single borrowed span; the range is kept for adjacency checks
    Borrowed {
        source: SourceBuffer,
        range: SourceRange,
    },
    /// Discontiguous fragments in insertion order.
    /// `total_len` is maintained incrementally, never recomputed at read time.
    Fragments {
        parts: Vec<ByteSpan>,
        total_len: usize,
    },
    /// Materialized payload
    Owned(Vec<u8>),
}

/// A document node carrying raw, unescaped textual payload.
#[derive(Debug)]
pub struct DataNode {
    header: NodeHeader,
    attributes: Attributes,
    payload: RawPayload,
}

impl DataNode {
    /// Create a node from already-decoded text (API path).
    ///
    /// Bypasses spans entirely; the payload is owned from the start.
    pub fn from_data(data: impl Into<String>) -> Self {
        DataNode {
            header: NodeHeader::new(NodeKind::Data),
            attributes: Attributes::new(),
            payload: RawPayload::Owned(data.into().into_bytes()),
        }
    }

    /// Create a node from encoded text, unescaping entity references.
    ///
    /// Fails only on malformed escape sequences.
    pub fn from_encoded(encoded: &[u8]) -> Result<Self, DecodeError> {
        let decoded = unescape(encoded)?;
        Ok(DataNode {
            header: NodeHeader::new(NodeKind::Data),
            attributes: Attributes::new(),
            payload: RawPayload::Owned(decoded),
        })
    }

    /// Create a node from a span discovered by the parser.
    ///
    /// A borrowed span keeps its source range tracked so the parser can
    /// extend it in place; an owned span starts out materialized.
    pub fn from_span(span: ByteSpan) -> Self {
        DataNode {
            header: NodeHeader::new(NodeKind::Data),
            attributes: Attributes::new(),
            payload: payload_from_span(span),
        }
    }

    /// Set the base URI, builder style
    pub fn with_base_uri(mut self, base_uri: impl Into<String>) -> Self {
        self.header.set_base_uri(base_uri);
        self
    }

    /// Node bookkeeping header
    pub fn header(&self) -> &NodeHeader {
        &self.header
    }

    /// Node bookkeeping header, mutable
    pub fn header_mut(&mut self) -> &mut NodeHeader {
        &mut self.header
    }

    /// Genuine node attributes (the payload never lives here)
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Genuine node attributes, mutable
    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    /// Check whether the payload has been materialized into an owned buffer
    pub fn is_materialized(&self) -> bool {
        matches!(self.payload, RawPayload::Owned(_))
    }

    /// Payload length in bytes, without forcing materialization
    pub fn payload_len(&self) -> usize {
        match &self.payload {
            RawPayload::Empty => 0,
            RawPayload::Borrowed { range, .. } => range.len(),
            RawPayload::Fragments { total_len, .. } => *total_len,
            RawPayload::Owned(bytes) => bytes.len(),
        }
    }

    /// Grow a borrowed span in place to cover adjacent newly-scanned bytes.
    ///
    /// Legal only while the payload is a single borrowed span, the node is
    /// not dirty, and `new_range` is well formed, in bounds, and starts
    /// exactly at the tracked range's end. Returns `false` without mutating
    /// anything otherwise; the caller falls back to `append`.
    pub fn extend(&mut self, new_range: SourceRange) -> bool {
        if self.header.is_source_dirty() {
            return false;
        }
        match &mut self.payload {
            RawPayload::Borrowed { source, range } => {
                if !new_range.is_well_formed()
                    || !source.contains(new_range)
                    || !range.adjoins(new_range)
                {
                    return false;
                }
                range.end = new_range.end;
                true
            }
            _ => false,
        }
    }

    /// Accumulate another span after the current payload.
    ///
    /// Fragments are concatenated in insertion order regardless of their
    /// source positions. Once materialized, appends land directly on the
    /// owned buffer; span state is never repopulated. Every call marks the
    /// node dirty, including zero-length spans.
    pub fn append(&mut self, span: ByteSpan) {
        self.header.mark_source_dirty();
        let payload = mem::replace(&mut self.payload, RawPayload::Empty);
        self.payload = match payload {
            RawPayload::Empty => payload_from_span(span),
            RawPayload::Borrowed { source, range } => {
                let total_len = range.len() + span.len();
                RawPayload::Fragments {
                    parts: vec![ByteSpan::Borrowed { source, range }, span],
                    total_len,
                }
            }
            RawPayload::Fragments {
                mut parts,
                total_len,
            } => {
                let total_len = total_len + span.len();
                parts.push(span);
                RawPayload::Fragments { parts, total_len }
            }
            RawPayload::Owned(mut bytes) => {
                bytes.extend_from_slice(span.bytes());
                RawPayload::Owned(bytes)
            }
        };
    }

    /// Read the whole payload, forcing materialization.
    ///
    /// Span states collapse into one owned buffer and their memory is
    /// discarded; a copy of the bytes is returned. Empty nodes stay empty.
    pub fn data_bytes(&mut self) -> Vec<u8> {
        self.materialize();
        match &self.payload {
            RawPayload::Empty => Vec::new(),
            RawPayload::Owned(bytes) => bytes.clone(),
            _ => unreachable!("span states were materialized above"),
        }
    }

    /// Read the whole payload as text (lossy for invalid UTF-8)
    pub fn data(&mut self) -> String {
        String::from_utf8_lossy(&self.data_bytes()).into_owned()
    }

    /// View the payload, avoiding copies where possible.
    ///
    /// A single borrowed span is returned directly with no state change.
    /// Fragments must be concatenated, so they materialize as a side effect.
    pub fn data_view(&mut self) -> &[u8] {
        if let RawPayload::Fragments { .. } = self.payload {
            self.materialize();
        }
        match &self.payload {
            RawPayload::Empty => &[],
            RawPayload::Borrowed { source, range } => source.slice(*range),
            RawPayload::Owned(bytes) => bytes,
            RawPayload::Fragments { .. } => unreachable!("materialized above"),
        }
    }

    /// Overwrite the payload with decoded text, discarding any span state
    pub fn set_data(&mut self, data: impl Into<String>) {
        self.payload = RawPayload::Owned(data.into().into_bytes());
        self.header.mark_source_dirty();
    }

    /// Deep copy. Forces materialization first, so the clone owns its bytes
    /// and never aliases the original session's source buffer.
    pub fn clone_node(&mut self) -> DataNode {
        self.materialize();
        let mut header = self.header.clone();
        header.detach();
        DataNode {
            header,
            attributes: self.attributes.clone(),
            payload: self.payload.clone(),
        }
    }

    /// Collapse span state into one owned buffer. Empty and already-owned
    /// payloads are left untouched, keeping reads idempotent.
    fn materialize(&mut self) {
        if matches!(self.payload, RawPayload::Empty | RawPayload::Owned(_)) {
            return;
        }
        let payload = mem::replace(&mut self.payload, RawPayload::Empty);
        let owned = match payload {
            RawPayload::Borrowed { source, range } => source.slice(range).to_vec(),
            RawPayload::Fragments { parts, total_len } => {
                let mut buf = Vec::with_capacity(total_len);
                for part in &parts {
                    buf.extend_from_slice(part.bytes());
                }
                buf
            }
            RawPayload::Empty | RawPayload::Owned(_) => unreachable!("handled above"),
        };
        self.payload = RawPayload::Owned(owned);
    }
}

/// Map an incoming span onto the payload representation.
fn payload_from_span(span: ByteSpan) -> RawPayload {
    match span {
        ByteSpan::Borrowed { source, range } => RawPayload::Borrowed { source, range },
        ByteSpan::Owned(bytes) => RawPayload::Owned(bytes),
    }
}

impl NodeRender for DataNode {
    fn node_name(&self) -> &'static str {
        "#data"
    }

    /// Raw payload is written verbatim, no escaping and no indentation.
    fn render(
        &mut self,
        out: &mut dyn io::Write,
        _depth: usize,
        _settings: &OutputSettings,
    ) -> io::Result<()> {
        out.write_all(self.data_view())
    }
}
