//! ISO 15924 script codes

/// A script identified by its 4-byte ISO 15924 code, e.g. `Arab`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Script([u8; 4]);

impl Script {
    /// Creates a script from a raw ISO 15924 code without normalization.
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Script(bytes)
    }

    /// Parses an ISO 15924 code, normalizing case (`ARAB`/`arab` -> `Arab`).
    ///
    /// Returns `None` unless all four bytes are ASCII letters.
    pub fn from_iso15924(bytes: [u8; 4]) -> Option<Self> {
        if !bytes.iter().all(|b| b.is_ascii_alphabetic()) {
            return None;
        }

        Some(Script([
            bytes[0].to_ascii_uppercase(),
            bytes[1].to_ascii_lowercase(),
            bytes[2].to_ascii_lowercase(),
            bytes[3].to_ascii_lowercase(),
        ]))
    }

    /// The raw ISO 15924 code.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        self.0
    }

    /// Whether this script carries no directional/shaping information of its own.
    #[inline]
    pub fn is_neutral(self) -> bool {
        matches!(self, COMMON | INHERITED | UNKNOWN)
    }
}

impl core::fmt::Debug for Script {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Script({}{}{}{})",
            self.0[0] as char, self.0[1] as char, self.0[2] as char, self.0[3] as char
        )
    }
}

impl core::fmt::Display for Script {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for b in self.0 {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

macro_rules! scripts {
    ($($name:ident => $code:literal,)*) => {
        $(pub const $name: Script = Script::from_bytes(*$code);)*
    };
}

scripts! {
    COMMON => b"Zyyy",
    INHERITED => b"Zinh",
    UNKNOWN => b"Zzzz",

    ADLAM => b"Adlm",
    ARABIC => b"Arab",
    ARMENIAN => b"Armn",
    AVESTAN => b"Avst",
    BENGALI => b"Beng",
    CHEROKEE => b"Cher",
    CHORASMIAN => b"Chrs",
    CYPRIOT => b"Cprt",
    CYRILLIC => b"Cyrl",
    DEVANAGARI => b"Deva",
    ELYMAIC => b"Elym",
    ETHIOPIC => b"Ethi",
    GEORGIAN => b"Geor",
    GREEK => b"Grek",
    GUJARATI => b"Gujr",
    GURMUKHI => b"Guru",
    HAN => b"Hani",
    HANGUL => b"Hang",
    HANIFI_ROHINGYA => b"Rohg",
    HATRAN => b"Hatr",
    HEBREW => b"Hebr",
    HIRAGANA => b"Hira",
    IMPERIAL_ARAMAIC => b"Armi",
    INSCRIPTIONAL_PAHLAVI => b"Phli",
    INSCRIPTIONAL_PARTHIAN => b"Prti",
    KANNADA => b"Knda",
    KATAKANA => b"Kana",
    KHAROSHTHI => b"Khar",
    KHMER => b"Khmr",
    LAO => b"Laoo",
    LATIN => b"Latn",
    LYDIAN => b"Lydi",
    MALAYALAM => b"Mlym",
    MANDAIC => b"Mand",
    MANICHAEAN => b"Mani",
    MEROITIC_CURSIVE => b"Merc",
    MEROITIC_HIEROGLYPHS => b"Mero",
    MONGOLIAN => b"Mong",
    MYANMAR => b"Mymr",
    NABATAEAN => b"Nbat",
    NKO => b"Nkoo",
    OLD_NORTH_ARABIAN => b"Narb",
    OLD_SOGDIAN => b"Sogo",
    OLD_SOUTH_ARABIAN => b"Sarb",
    OLD_TURKIC => b"Orkh",
    OLD_UYGHUR => b"Ougr",
    ORIYA => b"Orya",
    PALMYRENE => b"Palm",
    PHOENICIAN => b"Phnx",
    PSALTER_PAHLAVI => b"Phlp",
    SAMARITAN => b"Samr",
    SINHALA => b"Sinh",
    SOGDIAN => b"Sogd",
    SYRIAC => b"Syrc",
    TAI_THAM => b"Lana",
    TAMIL => b"Taml",
    TELUGU => b"Telu",
    THAANA => b"Thaa",
    THAI => b"Thai",
    TIBETAN => b"Tibt",
    VAI => b"Vaii",
    YEZIDI => b"Yezi",
    YI => b"Yiii",
}
