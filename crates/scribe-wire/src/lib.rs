//! Scribe Wire - Glyph-run Serializer/Deserializer
//!
//! Text and JSON wire formats for shaped glyph runs:
//! - Chunked serialization into caller-supplied buffers
//! - Hand-written parsers with exact-offset failure reporting
//! - Field suppression flags and pluggable glyph naming

pub mod deserialize;
pub mod namer;
pub mod serialize;

pub use deserialize::{deserialize_json, deserialize_str, deserialize_text, WireError};
pub use namer::{GlyphNamer, NumericNamer};
pub use serialize::{serialize_glyphs, serialize_to_string, SerializeFlags, SerializeFormat};
