//! Scribe Tags - OpenType Tag Mapping
//!
//! Maps segment properties to the 4-byte tags font binary tables key their
//! rule sets on, and back:
//! - Script codes to script tags, with second-generation shaping-model tags
//!   preferred and legacy tags as fallback
//! - BCP 47 languages to language-system tags, with a private-use escape
//!   (`x-hbot` + 4 characters) that round-trips arbitrary tags
//!
//! The table values are a compatibility contract with fonts in the wild;
//! several look inconsistent and are intentionally left that way.

pub mod language;
pub mod script;
pub mod tag;

pub use language::{tag_from_language, tag_to_language};
pub use script::{tag_to_script, tags_from_script};
pub use tag::Tag;
