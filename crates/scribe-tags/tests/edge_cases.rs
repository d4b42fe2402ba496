//! Boundary inputs for the tag mappers.

use scribe_core::{script, Language};
use scribe_tags::{tag_from_language, tag_to_language, tag_to_script, tags_from_script, Tag};

fn lang(s: &str) -> Language {
    Language::new(s).unwrap()
}

#[test]
fn test_escape_prefix_is_case_insensitive() {
    // Canonicalization lower-cases the prefix but leaves the payload alone.
    assert_eq!(
        tag_from_language(lang("X-HBOTAbCd")),
        Tag::from_bytes(b"AbCd")
    );
    assert_eq!(
        tag_from_language(lang("x-hbotWXYZ")),
        Tag::from_bytes(b"WXYZ")
    );
}

#[test]
fn test_escape_too_short_is_not_an_escape() {
    // Six characters with no payload, and a payload cut short.
    assert_eq!(tag_from_language(lang("x-hbot")), Tag::DEFAULT_LANGUAGE);
    assert_eq!(tag_from_language(lang("x-hbotAB")), Tag::DEFAULT_LANGUAGE);
}

#[test]
fn test_unknown_tag_reconstructs_as_escape() {
    let reconstructed = tag_to_language(Tag::from_bytes(b"QQQQ")).unwrap();
    assert_eq!(reconstructed.as_str(), "x-hbotQQQQ");
    assert_eq!(tag_from_language(reconstructed), Tag::from_bytes(b"QQQQ"));
}

#[test]
fn test_chinese_unknown_region_falls_back_to_simplified() {
    assert_eq!(tag_from_language(lang("zh-XX")), Tag::from_bytes(b"ZHS "));
    assert_eq!(
        tag_from_language(lang("zh-Latn-pinyin")),
        Tag::from_bytes(b"ZHS ")
    );
}

#[test]
fn test_language_lookup_ignores_case_and_later_subtags() {
    assert_eq!(
        tag_from_language(lang("SR-Latn-RS")),
        tag_from_language(lang("sr"))
    );
}

#[test]
fn test_single_letter_tag_expands_all_positions() {
    // 'q   ' fills every trailing space from the letter before it.
    let s = tag_to_script(Tag::from_bytes(b"q   "));
    assert_eq!(s.to_bytes(), *b"Qqqq");
}

#[test]
fn test_mixed_case_tag_normalizes_before_expansion() {
    assert_eq!(tag_to_script(Tag::from_bytes(b"ARAB")), script::ARABIC);
    assert_eq!(tag_to_script(Tag::from_bytes(b"NKO ")), script::NKO);
}

#[test]
fn test_old_indic_tag_still_maps() {
    // Fonts predating the second-generation models carry the legacy tag.
    assert_eq!(tag_to_script(Tag::from_bytes(b"deva")), script::DEVANAGARI);
    assert_eq!(tag_to_script(Tag::from_bytes(b"beng")), script::BENGALI);
}

#[test]
fn test_default_tags_map_to_nothing() {
    assert_eq!(tag_to_script(Tag::DEFAULT_SCRIPT), script::UNKNOWN);
    assert_eq!(tag_to_language(Tag::DEFAULT_LANGUAGE), None);
    assert_eq!(tags_from_script(script::INHERITED).0, Tag::DEFAULT_SCRIPT);
}
