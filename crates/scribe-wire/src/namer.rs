//! Glyph naming capability
//!
//! Resolving a glyph id to its font-defined name (and back) belongs to the
//! font backend. The wire formats only need this narrow slice of it.

/// Glyph-name resolution, implemented by a font backend.
pub trait GlyphNamer {
    /// The glyph's name, if the font defines one.
    fn glyph_to_name(&self, glyph: u32) -> Option<String>;

    /// The glyph id a name resolves to.
    fn glyph_from_name(&self, name: &str) -> Option<u32>;
}

/// A namer that knows no names: glyphs serialize as numeric ids and only
/// numeric ids parse back.
#[derive(Clone, Copy, Default, Debug)]
pub struct NumericNamer;

impl GlyphNamer for NumericNamer {
    fn glyph_to_name(&self, _glyph: u32) -> Option<String> {
        None
    }

    fn glyph_from_name(&self, name: &str) -> Option<u32> {
        name.parse().ok()
    }
}
