//! Round-trip coverage for the tag mapper.

use scribe_core::{script, Language};
use scribe_tags::{tag_from_language, tag_to_language, tag_to_script, tags_from_script, Tag};

#[test]
fn test_script_round_trip_across_models() {
    // One plain script, one legacy-exception script, one with a
    // second-generation tag.
    for s in [script::CYRILLIC, script::NKO, script::MALAYALAM] {
        let (primary, _) = tags_from_script(s);
        assert_eq!(tag_to_script(primary), s);
    }
}

#[test]
fn test_indic_fallback_tag_also_resolves() {
    let (primary, fallback) = tags_from_script(script::TAMIL);
    assert_eq!(primary, Tag::from_bytes(b"tml2"));

    let fallback = fallback.unwrap();
    assert_eq!(fallback, Tag::from_bytes(b"taml"));
    assert_eq!(tag_to_script(fallback), script::TAMIL);
}

#[test]
fn test_unknown_script_tag_is_reconstructed_not_rejected() {
    // An arbitrary non-digit tag goes through the algorithmic reversal.
    let script = tag_to_script(Tag::from_bytes(b"qabc"));
    assert_eq!(script.to_bytes(), *b"Qabc");
}

#[test]
fn test_language_table_round_trips() {
    for raw in ["ar", "bn", "de", "el", "hi", "ko", "ru", "ta", "th", "vi"] {
        let lang = Language::new(raw).unwrap();
        let tag = tag_from_language(lang);
        assert_ne!(tag, Tag::DEFAULT_LANGUAGE, "{raw} must be in the table");
        assert_eq!(tag_to_language(tag), Some(lang));
    }
}

#[test]
fn test_hbot_escape_round_trips_untabled_tags() {
    // Uppercase tags that no static table entry produces.
    for raw in [b"URD2", b"QQQQ", b"ABCD"] {
        let tag = Tag::from_bytes(raw);
        let lang = tag_to_language(tag).unwrap();
        assert_eq!(tag_from_language(lang), tag);
    }
}

#[test]
fn test_subtags_do_not_confuse_lookup() {
    let full = Language::new("sr-Latn-RS").unwrap();
    let bare = Language::new("sr").unwrap();
    assert_eq!(tag_from_language(full), tag_from_language(bare));
}
