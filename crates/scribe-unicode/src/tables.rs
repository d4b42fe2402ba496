//! Built-in property backend
//!
//! Compact sorted range tables covering the scripts and combining-mark
//! blocks the engine special-cases. Platform backends (ICU and friends) can
//! replace any of these through `UnicodeFuncsBuilder`; this backend exists so
//! the engine is fully functional with nothing attached.

use crate::provider::{EastAsianWidth, GeneralCategory, MAX_COMPAT_DECOMPOSITION};
use scribe_core::{script, Script};

fn range_lookup<T: Copy>(table: &[(u32, u32, T)], cp: u32) -> Option<T> {
    table
        .binary_search_by(|&(start, end, _)| {
            if cp < start {
                core::cmp::Ordering::Greater
            } else if cp > end {
                core::cmp::Ordering::Less
            } else {
                core::cmp::Ordering::Equal
            }
        })
        .ok()
        .map(|i| table[i].2)
}

// Canonical_Combining_Class, non-zero entries only. Sorted by range start.
#[rustfmt::skip]
static COMBINING_CLASSES: &[(u32, u32, u8)] = &[
    (0x0300, 0x0314, 230), (0x0315, 0x0315, 232), (0x0316, 0x0319, 220),
    (0x031A, 0x031A, 232), (0x031B, 0x031B, 216), (0x031C, 0x0320, 220),
    (0x0321, 0x0322, 202), (0x0323, 0x0326, 220), (0x0327, 0x0328, 202),
    (0x0329, 0x0333, 220), (0x0334, 0x0338, 1),   (0x0339, 0x033C, 220),
    (0x033D, 0x0344, 230), (0x0345, 0x0345, 240), (0x0346, 0x0346, 230),
    (0x0347, 0x0349, 220), (0x034A, 0x034C, 230), (0x034D, 0x034E, 220),
    (0x0350, 0x0352, 230), (0x0353, 0x0356, 220), (0x0357, 0x0357, 230),
    (0x0358, 0x0358, 232), (0x0359, 0x035A, 220), (0x035B, 0x035B, 230),
    (0x035C, 0x035C, 233), (0x035D, 0x035E, 234), (0x035F, 0x035F, 233),
    (0x0360, 0x0361, 234), (0x0362, 0x0362, 233), (0x0363, 0x036F, 230),
    (0x0483, 0x0487, 230), (0x0591, 0x0591, 220), (0x0592, 0x0595, 230),
    (0x0596, 0x0596, 220), (0x0597, 0x0599, 230), (0x059A, 0x059A, 222),
    (0x059B, 0x059B, 220), (0x059C, 0x05A1, 230), (0x05A2, 0x05A7, 220),
    (0x05A8, 0x05A9, 230), (0x05AA, 0x05AA, 220), (0x05AB, 0x05AC, 230),
    (0x05AD, 0x05AD, 222), (0x05AE, 0x05AE, 228), (0x05AF, 0x05AF, 230),
    // Hebrew points, raw fixed-position classes 10..25
    (0x05B0, 0x05B0, 10),  (0x05B1, 0x05B1, 11),  (0x05B2, 0x05B2, 12),
    (0x05B3, 0x05B3, 13),  (0x05B4, 0x05B4, 14),  (0x05B5, 0x05B5, 15),
    (0x05B6, 0x05B6, 16),  (0x05B7, 0x05B7, 17),  (0x05B8, 0x05B8, 18),
    (0x05B9, 0x05BA, 19),  (0x05BB, 0x05BB, 20),  (0x05BC, 0x05BC, 21),
    (0x05BD, 0x05BD, 22),  (0x05BF, 0x05BF, 23),  (0x05C1, 0x05C1, 24),
    (0x05C2, 0x05C2, 25),  (0x05C4, 0x05C4, 230), (0x05C5, 0x05C5, 220),
    (0x05C7, 0x05C7, 18),
    (0x0610, 0x0617, 230), (0x0618, 0x0618, 30),  (0x0619, 0x0619, 31),
    (0x061A, 0x061A, 32),
    // Arabic points, raw fixed-position classes 27..34
    (0x064B, 0x064B, 27),  (0x064C, 0x064C, 28),  (0x064D, 0x064D, 29),
    (0x064E, 0x064E, 30),  (0x064F, 0x064F, 31),  (0x0650, 0x0650, 32),
    (0x0651, 0x0651, 33),  (0x0652, 0x0652, 34),  (0x0653, 0x0654, 230),
    (0x0655, 0x0656, 220), (0x0657, 0x065B, 230), (0x065C, 0x065C, 220),
    (0x065D, 0x065E, 230), (0x065F, 0x065F, 220), (0x0670, 0x0670, 35),
    (0x06D6, 0x06DC, 230), (0x06DF, 0x06E2, 230), (0x06E3, 0x06E3, 220),
    (0x06E4, 0x06E4, 230), (0x06E7, 0x06E8, 230), (0x06EA, 0x06EA, 220),
    (0x06EB, 0x06EC, 230), (0x06ED, 0x06ED, 220),
    (0x0711, 0x0711, 36), // Syriac superscript alaph
    (0x093C, 0x093C, 7),   (0x094D, 0x094D, 9),   (0x0951, 0x0951, 230),
    (0x0952, 0x0952, 220), (0x09BC, 0x09BC, 7),   (0x09CD, 0x09CD, 9),
    (0x0A3C, 0x0A3C, 7),   (0x0A4D, 0x0A4D, 9),   (0x0ABC, 0x0ABC, 7),
    (0x0ACD, 0x0ACD, 9),   (0x0B3C, 0x0B3C, 7),   (0x0B4D, 0x0B4D, 9),
    (0x0BCD, 0x0BCD, 9),   (0x0C4D, 0x0C4D, 9),
    (0x0C55, 0x0C55, 84),  (0x0C56, 0x0C56, 91), // Telugu length marks
    (0x0CBC, 0x0CBC, 7),   (0x0CCD, 0x0CCD, 9),   (0x0D4D, 0x0D4D, 9),
    (0x0DCA, 0x0DCA, 9),
    (0x0E38, 0x0E39, 103), (0x0E3A, 0x0E3A, 9),   (0x0E48, 0x0E4B, 107),
    (0x0EB8, 0x0EB9, 118), (0x0EC8, 0x0ECB, 122),
    (0x0F35, 0x0F35, 220), (0x0F37, 0x0F37, 220), (0x0F39, 0x0F39, 216),
    (0x0F71, 0x0F71, 129), (0x0F72, 0x0F72, 130), (0x0F74, 0x0F74, 132),
    (0x0F7A, 0x0F7D, 130), (0x0F80, 0x0F80, 130), (0x0F82, 0x0F83, 230),
    (0x0F84, 0x0F84, 9),   (0x0FC6, 0x0FC6, 220),
    (0x1037, 0x1037, 7),   (0x1039, 0x103A, 9),
    (0x1A60, 0x1A60, 9),
    (0x3099, 0x309A, 8),
    (0xFB1E, 0xFB1E, 26), // Hebrew point varika
    (0xFE20, 0xFE26, 230), (0xFE27, 0xFE2D, 220),
];

pub(crate) fn combining_class(cp: u32) -> u8 {
    range_lookup(COMBINING_CLASSES, cp).unwrap_or(0)
}

// Script block ranges, coarse but sorted and non-overlapping. Anything
// unlisted is Unknown; combining blocks are Inherited.
#[rustfmt::skip]
static SCRIPTS: &[(u32, u32, Script)] = &[
    (0x0000, 0x0040, script::COMMON),
    (0x0041, 0x005A, script::LATIN),
    (0x005B, 0x0060, script::COMMON),
    (0x0061, 0x007A, script::LATIN),
    (0x007B, 0x00A9, script::COMMON),
    (0x00AA, 0x00AA, script::LATIN),
    (0x00AB, 0x00B9, script::COMMON),
    (0x00BA, 0x00BA, script::LATIN),
    (0x00BB, 0x00BF, script::COMMON),
    (0x00C0, 0x024F, script::LATIN),
    (0x02B0, 0x02FF, script::COMMON),
    (0x0300, 0x036F, script::INHERITED),
    (0x0370, 0x03FF, script::GREEK),
    (0x0400, 0x0484, script::CYRILLIC),
    (0x0485, 0x0486, script::INHERITED),
    (0x0487, 0x052F, script::CYRILLIC),
    (0x0531, 0x058F, script::ARMENIAN),
    (0x0591, 0x05F4, script::HEBREW),
    (0x0600, 0x0604, script::ARABIC),
    (0x0605, 0x0605, script::COMMON),
    (0x0606, 0x060B, script::ARABIC),
    (0x060C, 0x060C, script::COMMON),
    (0x060D, 0x061A, script::ARABIC),
    (0x061B, 0x061B, script::COMMON),
    (0x061C, 0x061E, script::ARABIC),
    (0x061F, 0x061F, script::COMMON),
    (0x0620, 0x063F, script::ARABIC),
    (0x0640, 0x0640, script::COMMON),
    (0x0641, 0x064A, script::ARABIC),
    (0x064B, 0x0655, script::INHERITED),
    (0x0656, 0x066F, script::ARABIC),
    (0x0670, 0x0670, script::INHERITED),
    (0x0671, 0x06FF, script::ARABIC),
    (0x0700, 0x074F, script::SYRIAC),
    (0x0750, 0x077F, script::ARABIC),
    (0x0780, 0x07BF, script::THAANA),
    (0x07C0, 0x07FF, script::NKO),
    (0x0800, 0x083F, script::SAMARITAN),
    (0x0840, 0x085F, script::MANDAIC),
    (0x0860, 0x086F, script::SYRIAC),
    (0x0870, 0x08FF, script::ARABIC),
    (0x0900, 0x097F, script::DEVANAGARI),
    (0x0980, 0x09FF, script::BENGALI),
    (0x0A00, 0x0A7F, script::GURMUKHI),
    (0x0A80, 0x0AFF, script::GUJARATI),
    (0x0B00, 0x0B7F, script::ORIYA),
    (0x0B80, 0x0BFF, script::TAMIL),
    (0x0C00, 0x0C7F, script::TELUGU),
    (0x0C80, 0x0CFF, script::KANNADA),
    (0x0D00, 0x0D7F, script::MALAYALAM),
    (0x0D80, 0x0DFF, script::SINHALA),
    (0x0E00, 0x0E7F, script::THAI),
    (0x0E80, 0x0EFF, script::LAO),
    (0x0F00, 0x0FFF, script::TIBETAN),
    (0x1000, 0x109F, script::MYANMAR),
    (0x10A0, 0x10FF, script::GEORGIAN),
    (0x1100, 0x11FF, script::HANGUL),
    (0x1200, 0x139F, script::ETHIOPIC),
    (0x13A0, 0x13FF, script::CHEROKEE),
    (0x1780, 0x17FF, script::KHMER),
    (0x1800, 0x18AF, script::MONGOLIAN),
    (0x1A20, 0x1AAF, script::TAI_THAM),
    (0x1CD0, 0x1CD2, script::INHERITED),
    (0x1E00, 0x1EFF, script::LATIN),
    (0x1F00, 0x1FFF, script::GREEK),
    (0x2000, 0x2BFF, script::COMMON),
    (0x2C60, 0x2C7F, script::LATIN),
    (0x3000, 0x3004, script::COMMON),
    (0x3005, 0x3005, script::HAN),
    (0x3006, 0x3006, script::COMMON),
    (0x3007, 0x3007, script::HAN),
    (0x3008, 0x3020, script::COMMON),
    (0x3041, 0x309F, script::HIRAGANA),
    (0x30A0, 0x30A0, script::COMMON),
    (0x30A1, 0x30FA, script::KATAKANA),
    (0x30FB, 0x30FC, script::COMMON),
    (0x30FD, 0x30FF, script::KATAKANA),
    (0x3400, 0x9FFF, script::HAN),
    (0xA000, 0xA4CF, script::YI),
    (0xA500, 0xA63F, script::VAI),
    (0xA722, 0xA7FF, script::LATIN),
    (0xAC00, 0xD7AF, script::HANGUL),
    (0xF900, 0xFAFF, script::HAN),
    (0xFB1D, 0xFB4F, script::HEBREW),
    (0xFB50, 0xFDFF, script::ARABIC),
    (0xFE00, 0xFE0F, script::INHERITED),
    (0xFE70, 0xFEFF, script::ARABIC),
    (0xFF00, 0xFF20, script::COMMON),
    (0xFF21, 0xFF3A, script::LATIN),
    (0xFF3B, 0xFF40, script::COMMON),
    (0xFF41, 0xFF5A, script::LATIN),
    (0xFF5B, 0xFF65, script::COMMON),
    (0xFF66, 0xFF9F, script::KATAKANA),
    (0x10800, 0x1083F, script::CYPRIOT),
    (0x10900, 0x1091F, script::PHOENICIAN),
    (0x10A00, 0x10A5F, script::KHAROSHTHI),
    (0x1E900, 0x1E95F, script::ADLAM),
    (0x20000, 0x3FFFD, script::HAN),
    (0xE0100, 0xE01EF, script::INHERITED),
];

pub(crate) fn script(cp: u32) -> Script {
    range_lookup(SCRIPTS, cp).unwrap_or(script::UNKNOWN)
}

// Bidi mirrored pairs, sorted by the left column.
#[rustfmt::skip]
static MIRRORING: &[(u32, u32)] = &[
    (0x0028, 0x0029), (0x0029, 0x0028), (0x003C, 0x003E), (0x003E, 0x003C),
    (0x005B, 0x005D), (0x005D, 0x005B), (0x007B, 0x007D), (0x007D, 0x007B),
    (0x00AB, 0x00BB), (0x00BB, 0x00AB), (0x2039, 0x203A), (0x203A, 0x2039),
    (0x2045, 0x2046), (0x2046, 0x2045), (0x207D, 0x207E), (0x207E, 0x207D),
    (0x208D, 0x208E), (0x208E, 0x208D), (0x2208, 0x220B), (0x220B, 0x2208),
    (0x2264, 0x2265), (0x2265, 0x2264), (0x2329, 0x232A), (0x232A, 0x2329),
    (0x2768, 0x2769), (0x2769, 0x2768), (0x27E6, 0x27E7), (0x27E7, 0x27E6),
    (0x27E8, 0x27E9), (0x27E9, 0x27E8), (0x2983, 0x2984), (0x2984, 0x2983),
    (0x3008, 0x3009), (0x3009, 0x3008), (0x300A, 0x300B), (0x300B, 0x300A),
    (0x300C, 0x300D), (0x300D, 0x300C), (0x300E, 0x300F), (0x300F, 0x300E),
    (0x3010, 0x3011), (0x3011, 0x3010), (0x3014, 0x3015), (0x3015, 0x3014),
    (0xFF08, 0xFF09), (0xFF09, 0xFF08), (0xFF1C, 0xFF1E), (0xFF1E, 0xFF1C),
    (0xFF3B, 0xFF3D), (0xFF3D, 0xFF3B), (0xFF5B, 0xFF5D), (0xFF5D, 0xFF5B),
];

pub(crate) fn mirroring(cp: u32) -> u32 {
    MIRRORING
        .binary_search_by_key(&cp, |&(from, _)| from)
        .ok()
        .map(|i| MIRRORING[i].1)
        .unwrap_or(cp)
}

pub(crate) fn general_category(cp: u32) -> GeneralCategory {
    use GeneralCategory::*;

    match cp {
        0x00..=0x1F | 0x7F..=0x9F => Control,
        0x20 | 0xA0 | 0x2000..=0x200A | 0x202F | 0x205F | 0x3000 => SpaceSeparator,
        0x2028 => LineSeparator,
        0x2029 => ParagraphSeparator,
        0xAD | 0x61C | 0x200B..=0x200F | 0x202A..=0x202E | 0x2060..=0x2064 | 0xFEFF
        | 0xE0001 | 0xE0020..=0xE007F => Format,
        0x30..=0x39 | 0x660..=0x669 | 0x6F0..=0x6F9 | 0x966..=0x96F | 0xE50..=0xE59 => {
            DecimalNumber
        }
        0x28 | 0x5B | 0x7B => OpenPunctuation,
        0x29 | 0x5D | 0x7D => ClosePunctuation,
        0x2D => DashPunctuation,
        0x5F => ConnectPunctuation,
        0x21..=0x23 | 0x25..=0x27 | 0x2A | 0x2C | 0x2E | 0x2F | 0x3A | 0x3B | 0x3F | 0x40
        | 0x5C => OtherPunctuation,
        0x24 | 0xA2..=0xA5 | 0x20A0..=0x20CF => CurrencySymbol,
        0x2B | 0x3C..=0x3E | 0x7C | 0x7E | 0xD7 | 0xF7 | 0x2200..=0x22FF => MathSymbol,
        0x5E | 0x60 | 0xA8 | 0xAF | 0xB4 | 0xB8 => ModifierSymbol,
        0x41..=0x5A | 0xC0..=0xD6 | 0xD8..=0xDE => UppercaseLetter,
        0x61..=0x7A | 0xDF..=0xF6 | 0xF8..=0xFF => LowercaseLetter,
        0xD800..=0xDFFF => Surrogate,
        0xE000..=0xF8FF | 0xF0000..=0xFFFFD | 0x100000..=0x10FFFD => PrivateUse,
        // Spacing matras in the Indic blocks.
        0x903 | 0x93B | 0x93E..=0x940 | 0x949..=0x94C | 0x982..=0x983 | 0x9BE..=0x9C0 => {
            SpacingMark
        }
        _ => {
            if combining_class(cp) != 0 || (0xFE00..=0xFE0F).contains(&cp) || cp == 0x34F {
                NonSpacingMark
            } else if cp > 0x10FFFF {
                Unassigned
            } else {
                OtherLetter
            }
        }
    }
}

pub(crate) fn east_asian_width(cp: u32) -> EastAsianWidth {
    use EastAsianWidth::*;

    match cp {
        0x20..=0x7E => Narrow,
        0xFF01..=0xFF60 | 0xFFE0..=0xFFE6 => Fullwidth,
        0xFF61..=0xFFDC => Halfwidth,
        0x1100..=0x115F
        | 0x2E80..=0x303E
        | 0x3041..=0x33FF
        | 0x3400..=0x4DBF
        | 0x4E00..=0x9FFF
        | 0xA000..=0xA4CF
        | 0xAC00..=0xD7A3
        | 0xF900..=0xFAFF
        | 0xFE30..=0xFE4F
        | 0x20000..=0x3FFFD => Wide,
        0xA1 | 0xA4 | 0xA7..=0xA8 | 0xAA | 0xB0..=0xB4 | 0xB6..=0xBA => Ambiguous,
        _ => Neutral,
    }
}

// Hangul composition is algorithmic.
const S_BASE: u32 = 0xAC00;
const L_BASE: u32 = 0x1100;
const V_BASE: u32 = 0x1161;
const T_BASE: u32 = 0x11A7;
const L_COUNT: u32 = 19;
const V_COUNT: u32 = 21;
const T_COUNT: u32 = 28;
const N_COUNT: u32 = V_COUNT * T_COUNT;
const S_COUNT: u32 = L_COUNT * N_COUNT;

fn compose_hangul(a: u32, b: u32) -> Option<u32> {
    if (L_BASE..L_BASE + L_COUNT).contains(&a) && (V_BASE..V_BASE + V_COUNT).contains(&b) {
        Some(S_BASE + (a - L_BASE) * N_COUNT + (b - V_BASE) * T_COUNT)
    } else if (S_BASE..=S_BASE + S_COUNT - T_COUNT).contains(&a)
        && (T_BASE..T_BASE + T_COUNT).contains(&b)
        && (a - S_BASE) % T_COUNT == 0
    {
        Some(a + (b - T_BASE))
    } else {
        None
    }
}

fn decompose_hangul(ab: u32) -> Option<(u32, u32)> {
    let si = ab.wrapping_sub(S_BASE);
    if si >= S_COUNT {
        return None;
    }

    if si % T_COUNT != 0 {
        // LV, T
        Some((S_BASE + (si / T_COUNT) * T_COUNT, T_BASE + (si % T_COUNT)))
    } else {
        // L, V
        Some((L_BASE + (si / N_COUNT), V_BASE + (si % N_COUNT) / T_COUNT))
    }
}

// Canonical pairs, sorted by (composed) for decomposition and searched
// linearly for composition (the table is tiny).
#[rustfmt::skip]
static CANONICAL_PAIRS: &[(u32, u32, u32)] = &[
    // composed, base, mark
    (0x00C0, 0x0041, 0x0300), (0x00C1, 0x0041, 0x0301), (0x00C2, 0x0041, 0x0302),
    (0x00C3, 0x0041, 0x0303), (0x00C4, 0x0041, 0x0308), (0x00C5, 0x0041, 0x030A),
    (0x00C7, 0x0043, 0x0327), (0x00C8, 0x0045, 0x0300), (0x00C9, 0x0045, 0x0301),
    (0x00CA, 0x0045, 0x0302), (0x00CB, 0x0045, 0x0308), (0x00CC, 0x0049, 0x0300),
    (0x00CD, 0x0049, 0x0301), (0x00CE, 0x0049, 0x0302), (0x00CF, 0x0049, 0x0308),
    (0x00D1, 0x004E, 0x0303), (0x00D2, 0x004F, 0x0300), (0x00D3, 0x004F, 0x0301),
    (0x00D4, 0x004F, 0x0302), (0x00D5, 0x004F, 0x0303), (0x00D6, 0x004F, 0x0308),
    (0x00D9, 0x0055, 0x0300), (0x00DA, 0x0055, 0x0301), (0x00DB, 0x0055, 0x0302),
    (0x00DC, 0x0055, 0x0308), (0x00DD, 0x0059, 0x0301), (0x00E0, 0x0061, 0x0300),
    (0x00E1, 0x0061, 0x0301), (0x00E2, 0x0061, 0x0302), (0x00E3, 0x0061, 0x0303),
    (0x00E4, 0x0061, 0x0308), (0x00E5, 0x0061, 0x030A), (0x00E7, 0x0063, 0x0327),
    (0x00E8, 0x0065, 0x0300), (0x00E9, 0x0065, 0x0301), (0x00EA, 0x0065, 0x0302),
    (0x00EB, 0x0065, 0x0308), (0x00EC, 0x0069, 0x0300), (0x00ED, 0x0069, 0x0301),
    (0x00EE, 0x0069, 0x0302), (0x00EF, 0x0069, 0x0308), (0x00F1, 0x006E, 0x0303),
    (0x00F2, 0x006F, 0x0300), (0x00F3, 0x006F, 0x0301), (0x00F4, 0x006F, 0x0302),
    (0x00F5, 0x006F, 0x0303), (0x00F6, 0x006F, 0x0308), (0x00F9, 0x0075, 0x0300),
    (0x00FA, 0x0075, 0x0301), (0x00FB, 0x0075, 0x0302), (0x00FC, 0x0075, 0x0308),
    (0x00FD, 0x0079, 0x0301), (0x00FF, 0x0079, 0x0308),
    (0x0622, 0x0627, 0x0653), (0x0623, 0x0627, 0x0654), (0x0624, 0x0648, 0x0654),
    (0x0625, 0x0627, 0x0655), (0x0626, 0x064A, 0x0654),
    (0x0929, 0x0928, 0x093C), (0x0931, 0x0930, 0x093C), (0x0934, 0x0933, 0x093C),
];

pub(crate) fn compose(a: u32, b: u32) -> Option<u32> {
    if let Some(ab) = compose_hangul(a, b) {
        return Some(ab);
    }

    CANONICAL_PAIRS
        .iter()
        .find(|&&(_, base, mark)| base == a && mark == b)
        .map(|&(composed, _, _)| composed)
}

pub(crate) fn decompose(ab: u32) -> Option<(u32, u32)> {
    if let Some(pair) = decompose_hangul(ab) {
        return Some(pair);
    }

    CANONICAL_PAIRS
        .binary_search_by_key(&ab, |&(composed, _, _)| composed)
        .ok()
        .map(|i| (CANONICAL_PAIRS[i].1, CANONICAL_PAIRS[i].2))
}

// Compatibility decompositions, sorted by source codepoint. U+FDFA is the
// longest decomposition in Unicode and sets MAX_COMPAT_DECOMPOSITION.
#[rustfmt::skip]
static COMPAT_DECOMPOSITIONS: &[(u32, &[u32])] = &[
    (0x00A8, &[0x0020, 0x0308]),
    (0x00BC, &[0x0031, 0x2044, 0x0034]),
    (0x00BD, &[0x0031, 0x2044, 0x0032]),
    (0x00BE, &[0x0033, 0x2044, 0x0034]),
    (0x0132, &[0x0049, 0x004A]),
    (0x0133, &[0x0069, 0x006A]),
    (0x2460, &[0x0031]),
    (0x2461, &[0x0032]),
    (0x2462, &[0x0033]),
    (0xFB00, &[0x0066, 0x0066]),
    (0xFB01, &[0x0066, 0x0069]),
    (0xFB02, &[0x0066, 0x006C]),
    (0xFB03, &[0x0066, 0x0066, 0x0069]),
    (0xFB04, &[0x0066, 0x0066, 0x006C]),
    (0xFDFA, &[
        0x0635, 0x0644, 0x0649, 0x0020, 0x0627, 0x0644, 0x0644, 0x0647, 0x0020,
        0x0639, 0x0644, 0x064A, 0x0647, 0x0020, 0x0648, 0x0633, 0x0644, 0x0645,
    ]),
    (0xFF21, &[0x0041]),
];

pub(crate) fn decompose_compatibility(
    cp: u32,
    out: &mut [u32; MAX_COMPAT_DECOMPOSITION],
) -> usize {
    let Ok(i) = COMPAT_DECOMPOSITIONS.binary_search_by_key(&cp, |&(source, _)| source) else {
        return 0;
    };

    let parts = COMPAT_DECOMPOSITIONS[i].1;
    out[..parts.len()].copy_from_slice(parts);
    parts.len()
}
