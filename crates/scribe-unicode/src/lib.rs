//! Scribe Unicode - Property Provider
//!
//! The character-property capability set the shaping engine runs on:
//! - An eight-slot provider with copy-on-inherit construction (frozen on
//!   build, shareable across threads)
//! - A built-in backend over compact static tables
//! - The shaping-specific "modified combining class" remapping
//! - Default-ignorable / variation-selector predicates

pub mod ccc;
pub mod props;
pub mod provider;
mod tables;

pub use ccc::modified_combining_class;
pub use props::{is_default_ignorable, is_variation_selector};
pub use provider::{
    EastAsianWidth, GeneralCategory, UnicodeFuncs, UnicodeFuncsBuilder, MAX_COMPAT_DECOMPOSITION,
};
