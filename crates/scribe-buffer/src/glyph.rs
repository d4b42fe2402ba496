//! Per-glyph records

/// One input or output unit of the buffer.
///
/// `codepoint` holds a Unicode scalar before shaping and a glyph id after.
/// The two `var` words are scratch space whose ownership is arbitrated by the
/// buffer's lease ledger (see [`crate::Buffer::allocate_var`]); shaping
/// stages view them through the lane accessors below.
///
/// Kept the same size as [`GlyphPosition`] so the two arrays stay
/// interchangeable for storage purposes.
#[repr(C)]
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct GlyphInfo {
    pub codepoint: u32,
    pub mask: u32,
    pub cluster: u32,
    pub var1: u32,
    pub var2: u32,
}

impl GlyphInfo {
    pub const fn new(codepoint: u32, cluster: u32) -> Self {
        GlyphInfo {
            codepoint,
            mask: 0,
            cluster,
            var1: 0,
            var2: 0,
        }
    }

    #[inline]
    pub fn var1_u16(&self, lane: usize) -> u16 {
        (self.var1 >> (16 * lane)) as u16
    }

    #[inline]
    pub fn set_var1_u16(&mut self, lane: usize, n: u16) {
        let shift = 16 * lane;
        self.var1 = (self.var1 & !(0xFFFF << shift)) | ((n as u32) << shift);
    }

    #[inline]
    pub fn var1_u8(&self, lane: usize) -> u8 {
        (self.var1 >> (8 * lane)) as u8
    }

    #[inline]
    pub fn set_var1_u8(&mut self, lane: usize, n: u8) {
        let shift = 8 * lane;
        self.var1 = (self.var1 & !(0xFF << shift)) | ((n as u32) << shift);
    }

    #[inline]
    pub fn var2_u16(&self, lane: usize) -> u16 {
        (self.var2 >> (16 * lane)) as u16
    }

    #[inline]
    pub fn set_var2_u16(&mut self, lane: usize, n: u16) {
        let shift = 16 * lane;
        self.var2 = (self.var2 & !(0xFFFF << shift)) | ((n as u32) << shift);
    }

    #[inline]
    pub fn var2_u8(&self, lane: usize) -> u8 {
        (self.var2 >> (8 * lane)) as u8
    }

    #[inline]
    pub fn set_var2_u8(&mut self, lane: usize, n: u8) {
        let shift = 8 * lane;
        self.var2 = (self.var2 & !(0xFF << shift)) | ((n as u32) << shift);
    }
}

/// Where a glyph goes once shaped, in font units.
#[repr(C)]
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct GlyphPosition {
    pub x_advance: i32,
    pub y_advance: i32,
    pub x_offset: i32,
    pub y_offset: i32,
    var: u32,
}
