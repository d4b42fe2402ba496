//! BCP 47 language identifiers backed by a process-wide interner

use std::collections::HashSet;
use std::sync::{Mutex, OnceLock};

use once_cell::sync::Lazy;

/// An interned, canonicalized BCP 47 language identifier.
///
/// Copies are pointer-sized; comparison is by identity. Interned entries live
/// for the rest of the process (see [`intern`]).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language(&'static str);

impl Language {
    /// Canonicalizes and interns a language string.
    ///
    /// Canonicalization lower-cases ASCII and maps `_` to `-`. The four
    /// characters following an `x-hbot` private-use prefix are kept verbatim:
    /// they encode a raw OpenType tag and must round-trip exactly.
    ///
    /// Returns `None` for an empty string.
    pub fn new(s: &str) -> Option<Language> {
        if s.is_empty() {
            return None;
        }

        let has_escape = s.len() >= 10 && s.as_bytes()[..6].eq_ignore_ascii_case(b"x-hbot");

        let mut canonical = String::with_capacity(s.len());
        for (i, c) in s.char_indices() {
            // Payload of the private-use escape, case-preserved.
            let in_escape = has_escape && (6..10).contains(&i);

            if in_escape {
                canonical.push(c);
            } else if c == '_' {
                canonical.push('-');
            } else {
                canonical.push(c.to_ascii_lowercase());
            }
        }

        Some(Language(intern(&canonical)))
    }

    #[inline]
    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// The process default language, derived from `LC_ALL`/`LANG` once and
    /// cached; falls back to `en`.
    pub fn process_default() -> Language {
        static DEFAULT: OnceLock<Language> = OnceLock::new();
        *DEFAULT.get_or_init(|| {
            let raw = std::env::var("LC_ALL")
                .or_else(|_| std::env::var("LANG"))
                .unwrap_or_default();

            // "pt_BR.UTF-8" -> "pt-br"
            let trimmed = raw.split(['.', '@']).next().unwrap_or("");
            Language::new(trimmed).unwrap_or(Language(intern("en")))
        })
    }
}

impl core::fmt::Debug for Language {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Language({})", self.0)
    }
}

impl core::fmt::Display for Language {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.0)
    }
}

static INTERNER: Lazy<Mutex<HashSet<&'static str>>> = Lazy::new(|| Mutex::new(HashSet::new()));

/// Interns a string for the lifetime of the process.
///
/// Entries are leaked on purpose: the set of distinct languages seen by a
/// process is tiny and identity-comparable handles are worth more than the
/// bytes. This matches the upstream engines this format interoperates with.
fn intern(s: &str) -> &'static str {
    let mut set = match INTERNER.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    if let Some(existing) = set.get(s) {
        return existing;
    }

    let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
    set.insert(leaked);
    leaked
}
