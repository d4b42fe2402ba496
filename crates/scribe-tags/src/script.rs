//! Script code to OpenType script tag mapping

use scribe_core::{script, Script};

use crate::tag::Tag;

// Scripts with a second-generation OpenType shaping model. The new tag is
// preferred; the old one stays as a fallback for fonts predating it.
#[rustfmt::skip]
static NEW_TAGS: &[(Script, Tag)] = &[
    (script::BENGALI,    Tag::from_bytes(b"bng2")),
    (script::DEVANAGARI, Tag::from_bytes(b"dev2")),
    (script::GUJARATI,   Tag::from_bytes(b"gjr2")),
    (script::GURMUKHI,   Tag::from_bytes(b"gur2")),
    (script::KANNADA,    Tag::from_bytes(b"knd2")),
    (script::MALAYALAM,  Tag::from_bytes(b"mlm2")),
    (script::MYANMAR,    Tag::from_bytes(b"mym2")),
    (script::ORIYA,      Tag::from_bytes(b"ory2")),
    (script::TAMIL,      Tag::from_bytes(b"tml2")),
    (script::TELUGU,     Tag::from_bytes(b"tel2")),
];

fn new_tag_from_script(s: Script) -> Option<Tag> {
    NEW_TAGS.iter().find(|&&(sc, _)| sc == s).map(|&(_, t)| t)
}

fn new_tag_to_script(tag: Tag) -> Option<Script> {
    NEW_TAGS.iter().find(|&&(_, t)| t == tag).map(|&(s, _)| s)
}

fn old_tag_from_script(s: Script) -> Tag {
    if s.is_neutral() {
        return Tag::DEFAULT_SCRIPT;
    }

    // Legacy tags that do not match the lower-cased script code. These are
    // what fonts in the wild actually carry; never "correct" them.
    if s == script::HIRAGANA || s == script::KATAKANA {
        return Tag::from_bytes(b"kana");
    }
    if s == script::LAO {
        return Tag::from_bytes(b"lao ");
    }
    if s == script::YI {
        return Tag::from_bytes(b"yi  ");
    }
    if s == script::NKO {
        return Tag::from_bytes(b"nko ");
    }
    if s == script::VAI {
        return Tag::from_bytes(b"vai ");
    }

    Tag::from_bytes(&s.to_bytes()).to_lowercase()
}

fn old_tag_to_script(tag: Tag) -> Script {
    if tag == Tag::DEFAULT_SCRIPT {
        return script::UNKNOWN;
    }

    let mut b = tag.to_bytes();
    b[0] = b[0].to_ascii_uppercase();
    for byte in &mut b[1..] {
        *byte = byte.to_ascii_lowercase();
    }

    // Trailing spaces are filled by repeating the last letter, so 'nko '
    // becomes Nkoo and 'yi  ' becomes Yiii. A space in the second byte means
    // a single-letter tag.
    if b[1] == b' ' {
        b[1] = b[0].to_ascii_lowercase();
    }
    if b[2] == b' ' {
        b[2] = b[1];
    }
    if b[3] == b' ' {
        b[3] = b[2];
    }

    Script::from_bytes(b)
}

/// The OpenType script tags to try for `s`, most specific first.
///
/// The second tag is only present when the script has both a
/// second-generation tag and a legacy fallback.
pub fn tags_from_script(s: Script) -> (Tag, Option<Tag>) {
    let old = old_tag_from_script(s);
    match new_tag_from_script(s) {
        Some(new) => (new, Some(old)),
        None => (old, None),
    }
}

/// The script a font tag selects. Unmapped tags resolve to `Zzzz`.
pub fn tag_to_script(tag: Tag) -> Script {
    if tag.to_bytes()[3].is_ascii_digit() {
        return new_tag_to_script(tag).unwrap_or(script::UNKNOWN);
    }

    old_tag_to_script(tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_script_lowercases() {
        let (tag, fallback) = tags_from_script(script::ARABIC);
        assert_eq!(tag.to_string(), "arab");
        assert_eq!(fallback, None);
    }

    #[test]
    fn test_indic_prefers_new_tag() {
        let (tag, fallback) = tags_from_script(script::DEVANAGARI);
        assert_eq!(tag.to_string(), "dev2");
        assert_eq!(fallback.map(|t| t.to_string()).as_deref(), Some("deva"));
    }

    #[test]
    fn test_legacy_exceptions() {
        assert_eq!(tags_from_script(script::HIRAGANA).0.to_string(), "kana");
        assert_eq!(tags_from_script(script::KATAKANA).0.to_string(), "kana");
        assert_eq!(tags_from_script(script::LAO).0.to_string(), "lao ");
        assert_eq!(tags_from_script(script::YI).0.to_string(), "yi  ");
        assert_eq!(tags_from_script(script::NKO).0.to_string(), "nko ");
        assert_eq!(tags_from_script(script::VAI).0.to_string(), "vai ");
    }

    #[test]
    fn test_neutral_scripts_get_default() {
        assert_eq!(tags_from_script(script::COMMON).0, Tag::DEFAULT_SCRIPT);
        assert_eq!(tags_from_script(script::UNKNOWN).0, Tag::DEFAULT_SCRIPT);
    }

    #[test]
    fn test_space_padded_expansion() {
        assert_eq!(tag_to_script(Tag::from_bytes(b"nko ")), script::NKO);
        assert_eq!(tag_to_script(Tag::from_bytes(b"yi  ")), script::YI);
        assert_eq!(tag_to_script(Tag::from_bytes(b"lao ")), script::LAO);
    }

    #[test]
    fn test_digit_suffix_uses_new_table() {
        assert_eq!(tag_to_script(Tag::from_bytes(b"dev2")), script::DEVANAGARI);
        assert_eq!(tag_to_script(Tag::from_bytes(b"mym2")), script::MYANMAR);
        assert_eq!(tag_to_script(Tag::from_bytes(b"zzz9")), script::UNKNOWN);
    }

    #[test]
    fn test_round_trip_canonical_scripts() {
        for s in [
            script::LATIN,
            script::ARABIC,
            script::HEBREW,
            script::THAI,
            script::DEVANAGARI,
            script::BENGALI,
            script::TELUGU,
            script::KATAKANA,
            script::LAO,
            script::NKO,
            script::YI,
            script::VAI,
            script::HAN,
            script::HANGUL,
        ] {
            assert_eq!(tag_to_script(tags_from_script(s).0), s, "{s}");
        }
    }
}
