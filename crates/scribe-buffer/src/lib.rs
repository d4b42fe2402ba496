//! Scribe Buffer - Glyph Buffer Engine
//!
//! The central mutable sequence of the shaping pipeline:
//! - Dual input/output regions with lazy output separation
//! - Cluster merging, reversal and masking
//! - Segment-property guessing over a pluggable Unicode provider
//! - Sticky allocation-failure semantics (errors are data, not panics)

pub mod buffer;
pub mod glyph;

pub use buffer::{Buffer, BufferFlags, ContentType, CONTEXT_LENGTH};
pub use glyph::{GlyphInfo, GlyphPosition};
