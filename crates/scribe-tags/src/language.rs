//! BCP 47 language to OpenType language-system tag mapping

use scribe_core::Language;

use crate::tag::Tag;

const fn t(bytes: &[u8; 4]) -> Tag {
    Tag::from_bytes(bytes)
}

// Sorted by the primary subtag. The values match what font tooling has been
// emitting for decades; several look wrong (Hebrew is IWR, Japanese is JAN)
// and must stay that way.
#[rustfmt::skip]
static LANGUAGES: &[(&str, Tag)] = &[
    ("af",  t(b"AFK ")), ("am",  t(b"AMH ")), ("ar",  t(b"ARA ")),
    ("as",  t(b"ASM ")), ("az",  t(b"AZE ")), ("be",  t(b"BEL ")),
    ("bg",  t(b"BGR ")), ("bn",  t(b"BEN ")), ("bo",  t(b"TIB ")),
    ("br",  t(b"BRE ")), ("bs",  t(b"BOS ")), ("ca",  t(b"CAT ")),
    ("ce",  t(b"CHE ")), ("co",  t(b"COS ")), ("cs",  t(b"CSY ")),
    ("cu",  t(b"CSL ")), ("cy",  t(b"WEL ")), ("da",  t(b"DAN ")),
    ("de",  t(b"DEU ")), ("dv",  t(b"DIV ")), ("dz",  t(b"DZN ")),
    ("el",  t(b"ELL ")), ("en",  t(b"ENG ")), ("eo",  t(b"NTO ")),
    ("es",  t(b"ESP ")), ("et",  t(b"ETI ")), ("eu",  t(b"EUQ ")),
    ("fa",  t(b"FAR ")), ("fi",  t(b"FIN ")), ("fo",  t(b"FOS ")),
    ("fr",  t(b"FRA ")), ("ga",  t(b"IRI ")), ("gd",  t(b"GAE ")),
    ("gl",  t(b"GAL ")), ("gn",  t(b"GUA ")), ("gu",  t(b"GUJ ")),
    ("ha",  t(b"HAU ")), ("he",  t(b"IWR ")), ("hi",  t(b"HIN ")),
    ("hr",  t(b"HRV ")), ("hu",  t(b"HUN ")), ("hy",  t(b"HYE ")),
    ("id",  t(b"IND ")), ("ig",  t(b"IBO ")), ("is",  t(b"ISL ")),
    ("it",  t(b"ITA ")), ("iu",  t(b"INU ")), ("ja",  t(b"JAN ")),
    ("jv",  t(b"JAV ")), ("ka",  t(b"KAT ")), ("kk",  t(b"KAZ ")),
    ("km",  t(b"KHM ")), ("kn",  t(b"KAN ")), ("ko",  t(b"KOR ")),
    ("ks",  t(b"KSH ")), ("ku",  t(b"KUR ")), ("ky",  t(b"KIR ")),
    ("lo",  t(b"LAO ")), ("lt",  t(b"LTH ")), ("lv",  t(b"LVI ")),
    ("mk",  t(b"MKD ")), ("ml",  t(b"MLR ")), ("mn",  t(b"MNG ")),
    ("mr",  t(b"MAR ")), ("ms",  t(b"MLY ")), ("mt",  t(b"MTS ")),
    ("my",  t(b"BRM ")), ("ne",  t(b"NEP ")), ("nl",  t(b"NLD ")),
    ("no",  t(b"NOR ")), ("or",  t(b"ORI ")), ("pa",  t(b"PAN ")),
    ("pl",  t(b"PLK ")), ("ps",  t(b"PAS ")), ("pt",  t(b"PTG ")),
    ("ro",  t(b"ROM ")), ("ru",  t(b"RUS ")), ("sa",  t(b"SAN ")),
    ("sd",  t(b"SND ")), ("si",  t(b"SNH ")), ("sk",  t(b"SKY ")),
    ("sl",  t(b"SLV ")), ("sq",  t(b"SQI ")), ("sr",  t(b"SRB ")),
    ("sv",  t(b"SVE ")), ("sw",  t(b"SWK ")), ("ta",  t(b"TAM ")),
    ("te",  t(b"TEL ")), ("th",  t(b"THA ")), ("ti",  t(b"TGY ")),
    ("tk",  t(b"TKM ")), ("tr",  t(b"TRK ")), ("uk",  t(b"UKR ")),
    ("ur",  t(b"URD ")), ("uz",  t(b"UZB ")), ("vi",  t(b"VIT ")),
    ("yi",  t(b"JII ")), ("yo",  t(b"YBA ")), ("zu",  t(b"ZUL ")),
];

const ZHS: Tag = t(b"ZHS ");
const ZHT: Tag = t(b"ZHT ");

// Chinese needs the later subtags: the script or region decides between the
// simplified and traditional language systems.
#[rustfmt::skip]
static CHINESE_SUBTAGS: &[(&str, Tag)] = &[
    ("cn", ZHS), ("hans", ZHS), ("hant", ZHT), ("hk", ZHT),
    ("mo", ZHT), ("sg", ZHS), ("tw", ZHT),
];

fn chinese_tag(lang_str: &str) -> Tag {
    for subtag in lang_str.split('-').skip(1) {
        if let Ok(i) = CHINESE_SUBTAGS.binary_search_by_key(&subtag, |&(s, _)| s) {
            return CHINESE_SUBTAGS[i].1;
        }
    }
    ZHS
}

/// The OpenType language-system tag for `lang`.
///
/// Unmapped languages resolve to `dflt`, never an error.
pub fn tag_from_language(lang: Language) -> Tag {
    let s = lang.as_str();

    // Private-use escape carrying a raw tag.
    if s.len() >= 10 && s.as_bytes()[..6].eq_ignore_ascii_case(b"x-hbot") {
        let payload = s.as_bytes();
        return Tag::from_bytes(&[payload[6], payload[7], payload[8], payload[9]]);
    }

    let first = s.split('-').next().unwrap_or(s);

    if first == "zh" {
        return chinese_tag(s);
    }

    if let Ok(i) = LANGUAGES.binary_search_by_key(&first, |&(key, _)| key) {
        return LANGUAGES[i].1;
    }

    // A three-letter subtag the table does not know is assumed to be an
    // ISO 639-3 code that doubles as its own tag.
    if first.len() == 3 && first.bytes().all(|b| b.is_ascii_alphabetic()) {
        let b = first.as_bytes();
        return Tag::from_bytes(&[
            b[0].to_ascii_uppercase(),
            b[1].to_ascii_uppercase(),
            b[2].to_ascii_uppercase(),
            b' ',
        ]);
    }

    Tag::DEFAULT_LANGUAGE
}

/// The language a font language-system tag selects, if any.
pub fn tag_to_language(tag: Tag) -> Option<Language> {
    if tag == Tag::DEFAULT_LANGUAGE {
        return None;
    }

    // Two languages share each Chinese tag; pick the canonical one.
    if tag == ZHS {
        return Language::new("zh-cn");
    }
    if tag == ZHT {
        return Language::new("zh-tw");
    }

    for &(key, value) in LANGUAGES {
        if value == tag {
            return Language::new(key);
        }
    }

    // Reconstruct the private-use escape, spaces and all, so the tag survives
    // a round trip through the language string.
    let b = tag.to_bytes();
    let mut escape = String::with_capacity(10);
    escape.push_str("x-hbot");
    for byte in b {
        escape.push(byte as char);
    }
    Language::new(&escape)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lang(s: &str) -> Language {
        Language::new(s).unwrap()
    }

    #[test]
    fn test_primary_subtag_lookup() {
        assert_eq!(tag_from_language(lang("en")).to_string(), "ENG ");
        assert_eq!(tag_from_language(lang("en-US")).to_string(), "ENG ");
        assert_eq!(tag_from_language(lang("he")).to_string(), "IWR ");
        assert_eq!(tag_from_language(lang("ja")).to_string(), "JAN ");
    }

    #[test]
    fn test_chinese_variants() {
        assert_eq!(tag_from_language(lang("zh")), ZHS);
        assert_eq!(tag_from_language(lang("zh-CN")), ZHS);
        assert_eq!(tag_from_language(lang("zh-Hans")), ZHS);
        assert_eq!(tag_from_language(lang("zh-TW")), ZHT);
        assert_eq!(tag_from_language(lang("zh-HK")), ZHT);
        assert_eq!(tag_from_language(lang("zh-Hant-SG")), ZHT);
    }

    #[test]
    fn test_iso639_3_passthrough() {
        assert_eq!(tag_from_language(lang("abq")).to_string(), "ABQ ");
        assert_eq!(tag_from_language(lang("xyz-XX")).to_string(), "XYZ ");
    }

    #[test]
    fn test_unknown_gets_default() {
        assert_eq!(tag_from_language(lang("q")), Tag::DEFAULT_LANGUAGE);
        assert_eq!(tag_from_language(lang("zzqqxxyy")), Tag::DEFAULT_LANGUAGE);
    }

    #[test]
    fn test_hbot_escape_round_trip() {
        let tag = Tag::from_bytes(b"WXYZ");
        let reconstructed = tag_to_language(tag).unwrap();
        assert_eq!(reconstructed.as_str(), "x-hbotWXYZ");
        assert_eq!(tag_from_language(reconstructed), tag);

        let padded = Tag::from_bytes(b"AB  ");
        assert_eq!(tag_from_language(tag_to_language(padded).unwrap()), padded);
    }

    #[test]
    fn test_tag_to_language() {
        assert_eq!(tag_to_language(t(b"ENG ")).unwrap().as_str(), "en");
        assert_eq!(tag_to_language(ZHS).unwrap().as_str(), "zh-cn");
        assert_eq!(tag_to_language(ZHT).unwrap().as_str(), "zh-tw");
        assert_eq!(tag_to_language(Tag::DEFAULT_LANGUAGE), None);
    }

    #[test]
    fn test_tables_sorted() {
        for pair in LANGUAGES.windows(2) {
            assert!(pair[0].0 < pair[1].0);
        }
        for pair in CHINESE_SUBTAGS.windows(2) {
            assert!(pair[0].0 < pair[1].0);
        }
    }
}
