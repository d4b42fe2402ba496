//! Shaping-specific combining class reordering
//!
//! Raw Canonical_Combining_Class values put some marks in an order that
//! breaks shaping; this module layers the well-known remapping on top. The
//! table is a pure function of the raw class and must stay byte-for-byte
//! identical to the reference data, or mark reordering diverges from every
//! other shaping engine in the wild.

use crate::provider::UnicodeFuncs;

/// Raw combining class values with meaningful names.
#[allow(dead_code)]
pub(crate) mod combining_class {
    pub const NOT_REORDERED: u8 = 0;
    pub const OVERLAY: u8 = 1;
    pub const NUKTA: u8 = 7;
    pub const KANA_VOICING: u8 = 8;
    pub const VIRAMA: u8 = 9;

    pub const ATTACHED_BELOW_LEFT: u8 = 200;
    pub const ATTACHED_BELOW: u8 = 202;
    pub const ATTACHED_ABOVE: u8 = 214;
    pub const ATTACHED_ABOVE_RIGHT: u8 = 216;
    pub const BELOW_LEFT: u8 = 218;
    pub const BELOW: u8 = 220;
    pub const BELOW_RIGHT: u8 = 222;
    pub const LEFT: u8 = 224;
    pub const RIGHT: u8 = 226;
    pub const ABOVE_LEFT: u8 = 228;
    pub const ABOVE: u8 = 230;
    pub const ABOVE_RIGHT: u8 = 232;
    pub const DOUBLE_BELOW: u8 = 233;
    pub const DOUBLE_ABOVE: u8 = 234;

    pub const IOTA_SUBSCRIPT: u8 = 240;

    pub const INVALID: u8 = 255;
}

// Hebrew
//
// The "fixed-position" classes 10-26 are permuted into the order described
// in the SBL Hebrew manual:
// https://www.sbl-site.org/Fonts/SBLHebrewUserManual1.5x.pdf
//
// Arabic
//
// Classes 27-35 are rotated so that shadda (raw 33) comes before the vowel
// points, per the Unicode normalization caveat:
// https://unicode.org/faq/normalization.html#8
//
// Telugu
//
// The two length marks (84, 91) are the only matras in the main Indic range
// with a non-zero class; zeroed so they stop reordering around the halant.
//
// Thai / Lao
//
// SARA U / SARA UU (103) move to the unassigned slot 3 so they reorder
// before PHINTHU (9); Uniscribe does the same. Lao U/UU (118) likewise sort
// before the below-consonant sign.
//
// Tibetan
//
// With multiple vowel signs, vowel U is applied first (after a-chung), which
// lets Dzongkha multi-vowel shortcuts render correctly.
#[rustfmt::skip]
static MODIFIED_COMBINING_CLASS: [u8; 256] = [
    0,   // NotReordered
    1,   // Overlay
    2, 3, 4, 5, 6,
    7,   // Nukta
    8,   // Kana voicing
    9,   // Virama

    // Hebrew
    22,  // 10 sheva
    15,  // 11 hataf segol
    16,  // 12 hataf patah
    17,  // 13 hataf qamats
    23,  // 14 hiriq
    18,  // 15 tsere
    19,  // 16 segol
    20,  // 17 patah
    21,  // 18 qamats & qamats qatan
    14,  // 19 holam & holam haser for vav
    24,  // 20 qubuts
    12,  // 21 dagesh
    25,  // 22 meteg
    13,  // 23 rafe
    10,  // 24 shin dot
    11,  // 25 sin dot
    26,  // 26 point varika

    // Arabic
    28,  // 27 fathatan
    29,  // 28 dammatan
    30,  // 29 kasratan
    31,  // 30 fatha
    32,  // 31 damma
    33,  // 32 kasra
    27,  // 33 shadda
    34,  // 34 sukun
    35,  // 35 superscript alef

    // Syriac
    36,  // 36 superscript alaph

    37, 38, 39,
    40, 41, 42, 43, 44, 45, 46, 47, 48, 49, 50, 51, 52, 53, 54, 55, 56, 57, 58, 59,
    60, 61, 62, 63, 64, 65, 66, 67, 68, 69, 70, 71, 72, 73, 74, 75, 76, 77, 78, 79,
    80, 81, 82, 83,

    // Telugu
    0,   // 84 length mark
    85, 86, 87, 88, 89, 90,
    0,   // 91 ai length mark
    92, 93, 94, 95, 96, 97, 98, 99, 100, 101, 102,

    // Thai
    3,   // 103 sara u / sara uu
    104, 105, 106,
    107, // 107 mai *
    108, 109, 110, 111, 112, 113, 114, 115, 116, 117,

    // Lao
    118, // 118 sign u / sign uu
    119, 120, 121,
    122, // 122 mai *
    123, 124, 125, 126, 127, 128,

    // Tibetan
    129, // 129 sign aa
    132, // 130 sign i
    131,
    131, // 132 sign u
    133, 134, 135, 136, 137, 138, 139,

    140, 141, 142, 143, 144, 145, 146, 147, 148, 149,
    150, 151, 152, 153, 154, 155, 156, 157, 158, 159,
    160, 161, 162, 163, 164, 165, 166, 167, 168, 169,
    170, 171, 172, 173, 174, 175, 176, 177, 178, 179,
    180, 181, 182, 183, 184, 185, 186, 187, 188, 189,
    190, 191, 192, 193, 194, 195, 196, 197, 198, 199,

    200, 201, 202, 203, 204, 205, 206, 207, 208, 209,
    210, 211, 212, 213, 214, 215, 216, 217, 218, 219,
    220, 221, 222, 223, 224, 225, 226, 227, 228, 229,
    230, 231, 232, 233, 234,
    235, 236, 237, 238, 239,
    240, // Iota subscript
    241, 242, 243, 244, 245, 246, 247, 248, 249, 250, 251, 252, 253, 254,
    255, // Invalid
];

/// The combining class of `cp` remapped for shaping.
///
/// Three codepoints get hard-coded classes independent of the table; the
/// first two belong to downstream script shapers and must not be "cleaned
/// up" without consulting them.
pub fn modified_combining_class(funcs: &UnicodeFuncs, cp: u32) -> u8 {
    // Reorder SAKOT to ensure it comes after any tone marks.
    if cp == 0x1A60 {
        return 254;
    }

    // Reorder PADMA to ensure it comes after any vowel marks.
    if cp == 0x0FC6 {
        return 254;
    }

    // Reorder TSA -PHRU to reorder before U+0F74.
    if cp == 0x0F39 {
        return 127;
    }

    MODIFIED_COMBINING_CLASS[funcs.combining_class(cp) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::UnicodeFuncs;

    #[test]
    fn test_shadda_sorts_before_vowel_points() {
        let funcs = UnicodeFuncs::built_in();
        let shadda = modified_combining_class(funcs, 0x0651);

        // fathatan, dammatan, kasratan, fatha, damma, kasra
        for vowel in [0x064B, 0x064C, 0x064D, 0x064E, 0x064F, 0x0650] {
            assert!(
                shadda < modified_combining_class(funcs, vowel),
                "shadda must reorder before U+{vowel:04X}"
            );
        }
    }

    #[test]
    fn test_hebrew_sbl_order() {
        let funcs = UnicodeFuncs::built_in();
        // shin dot (raw 24) sorts before sheva (raw 10) in SBL order
        let shin_dot = modified_combining_class(funcs, 0x05C1);
        let sheva = modified_combining_class(funcs, 0x05B0);
        assert!(shin_dot < sheva);
    }

    #[test]
    fn test_thai_sara_u_before_phinthu() {
        let funcs = UnicodeFuncs::built_in();
        let sara_u = modified_combining_class(funcs, 0x0E38);
        let phinthu = modified_combining_class(funcs, 0x0E3A);
        assert!(sara_u < phinthu);
    }

    #[test]
    fn test_hard_coded_exceptions() {
        let funcs = UnicodeFuncs::built_in();
        assert_eq!(modified_combining_class(funcs, 0x1A60), 254);
        assert_eq!(modified_combining_class(funcs, 0x0FC6), 254);
        assert_eq!(modified_combining_class(funcs, 0x0F39), 127);
    }

    #[test]
    fn test_identity_outside_remapped_bands() {
        let funcs = UnicodeFuncs::built_in();
        // Plain above-base marks keep their raw class.
        assert_eq!(modified_combining_class(funcs, 0x0301), 230);
        assert_eq!(modified_combining_class(funcs, 0x0316), 220);
    }
}
