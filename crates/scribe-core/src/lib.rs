//! Scribe Core - Shared Foundations
//!
//! This crate provides the pieces every other Scribe crate leans on:
//! - Segment property value types (direction, script, language)
//! - The process-wide language interner
//! - A mutex-protected user-data side table with out-of-lock destructors

pub mod direction;
pub mod language;
pub mod script;
pub mod userdata;

pub use direction::Direction;
pub use language::Language;
pub use script::Script;
pub use userdata::{UserDataKey, UserDataTable};
