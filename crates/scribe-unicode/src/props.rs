//! Static range-membership predicates
//!
//! These are data, not algorithm: the ranges come straight from the Unicode
//! character database and are copied verbatim.

/// Default_Ignorable codepoints.
///
/// Note: while U+115F, U+1160, U+3164 and U+FFA0 are Default_Ignorable, we do
/// NOT want to hide them, as fonts are made to give them regular spacing
/// glyphs; those four are excluded. U+1BCA0..=U+1BCA3 are likewise excluded.
///
/// Unicode 14.0:
/// ```text
/// 00AD          # Cf       SOFT HYPHEN
/// 034F          # Mn       COMBINING GRAPHEME JOINER
/// 061C          # Cf       ARABIC LETTER MARK
/// 17B4..17B5    # Mn   [2] KHMER VOWEL INHERENT AQ..KHMER VOWEL INHERENT AA
/// 180B..180D    # Mn   [3] MONGOLIAN FREE VARIATION SELECTOR ONE..THREE
/// 180E          # Cf       MONGOLIAN VOWEL SEPARATOR
/// 180F          # Mn       MONGOLIAN FREE VARIATION SELECTOR FOUR
/// 200B..200F    # Cf   [5] ZERO WIDTH SPACE..RIGHT-TO-LEFT MARK
/// 202A..202E    # Cf   [5] LEFT-TO-RIGHT EMBEDDING..RIGHT-TO-LEFT OVERRIDE
/// 2060..2064    # Cf   [5] WORD JOINER..INVISIBLE PLUS
/// 2065          # Cn       <reserved-2065>
/// 2066..206F    # Cf  [10] LEFT-TO-RIGHT ISOLATE..NOMINAL DIGIT SHAPES
/// FE00..FE0F    # Mn  [16] VARIATION SELECTOR-1..VARIATION SELECTOR-16
/// FEFF          # Cf       ZERO WIDTH NO-BREAK SPACE
/// FFF0..FFF8    # Cn   [9] <reserved-FFF0>..<reserved-FFF8>
/// 1D173..1D17A  # Cf   [8] MUSICAL SYMBOL BEGIN BEAM..END PHRASE
/// E0000..E0FFF  # *        tag characters, VS17..256 and surrounding reserved
/// ```
pub fn is_default_ignorable(cp: u32) -> bool {
    let plane = cp >> 16;
    if plane == 0 {
        // BMP
        let page = cp >> 8;
        match page {
            0x00 => cp == 0x00AD,
            0x03 => cp == 0x034F,
            0x06 => cp == 0x061C,
            0x17 => (0x17B4..=0x17B5).contains(&cp),
            0x18 => (0x180B..=0x180F).contains(&cp),
            0x20 => {
                (0x200B..=0x200F).contains(&cp)
                    || (0x202A..=0x202E).contains(&cp)
                    || (0x2060..=0x206F).contains(&cp)
            }
            0xFE => (0xFE00..=0xFE0F).contains(&cp) || cp == 0xFEFF,
            0xFF => (0xFFF0..=0xFFF8).contains(&cp),
            _ => false,
        }
    } else {
        match plane {
            0x01 => (0x1D173..=0x1D17A).contains(&cp),
            0x0E => (0xE0000..=0xE0FFF).contains(&cp),
            _ => false,
        }
    }
}

/// Variation selector codepoints.
///
/// U+180B..=U+180D and U+180F (Mongolian free variation selectors) are
/// deliberately not matched here; the Mongolian-specific machinery handles
/// them itself.
pub fn is_variation_selector(cp: u32) -> bool {
    (0xFE00..=0xFE0F).contains(&cp) ||  // VARIATION SELECTOR-1..16
    (0xE0100..=0xE01EF).contains(&cp) // VARIATION SELECTOR-17..256
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ignorables() {
        assert!(is_default_ignorable(0x00AD)); // soft hyphen
        assert!(is_default_ignorable(0x034F)); // CGJ
        assert!(is_default_ignorable(0x200D)); // ZWJ
        assert!(is_default_ignorable(0xFEFF)); // BOM
        assert!(is_default_ignorable(0xE0041)); // TAG LATIN CAPITAL LETTER A
        assert!(is_default_ignorable(0xE0100)); // VS17
    }

    #[test]
    fn test_spacing_filler_exceptions() {
        // Default_Ignorable in the UCD, but fonts space them; kept visible.
        assert!(!is_default_ignorable(0x115F));
        assert!(!is_default_ignorable(0x1160));
        assert!(!is_default_ignorable(0x3164));
        assert!(!is_default_ignorable(0xFFA0));
    }

    #[test]
    fn test_variation_selectors() {
        assert!(is_variation_selector(0xFE00));
        assert!(is_variation_selector(0xFE0F));
        assert!(is_variation_selector(0xE0100));
        assert!(is_variation_selector(0xE01EF));
        assert!(!is_variation_selector(0x180B)); // Mongolian FVS excluded
        assert!(!is_variation_selector(0x0041));
    }
}
