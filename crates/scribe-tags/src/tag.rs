//! The 4-byte OpenType tag

/// A 4-byte ASCII tag as used in font binary tables.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag(pub u32);

impl Tag {
    pub const fn from_bytes(bytes: &[u8; 4]) -> Self {
        Tag(u32::from_be_bytes(*bytes))
    }

    pub const fn to_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// The tag fonts use for script-less lookups.
    pub const DEFAULT_SCRIPT: Tag = Tag::from_bytes(b"DFLT");

    /// The tag fonts use for language-less lookups.
    pub const DEFAULT_LANGUAGE: Tag = Tag::from_bytes(b"dflt");

    pub(crate) fn to_lowercase(self) -> Tag {
        Tag(self.0 | 0x2020_2020)
    }
}

impl core::fmt::Debug for Tag {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Tag({self})")
    }
}

impl core::fmt::Display for Tag {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for b in self.to_bytes() {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}
