//! The pluggable property provider

use std::sync::Arc;

use once_cell::sync::Lazy;
use smallvec::SmallVec;

use crate::tables;
use scribe_core::Script;

/// The longest compatibility decomposition in Unicode (U+FDFA).
pub const MAX_COMPAT_DECOMPOSITION: usize = 18;

/// Unicode general category.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum GeneralCategory {
    Control,
    Format,
    Unassigned,
    PrivateUse,
    Surrogate,
    LowercaseLetter,
    ModifierLetter,
    OtherLetter,
    TitlecaseLetter,
    UppercaseLetter,
    SpacingMark,
    EnclosingMark,
    NonSpacingMark,
    DecimalNumber,
    LetterNumber,
    OtherNumber,
    ConnectPunctuation,
    DashPunctuation,
    ClosePunctuation,
    FinalPunctuation,
    InitialPunctuation,
    OtherPunctuation,
    OpenPunctuation,
    CurrencySymbol,
    ModifierSymbol,
    MathSymbol,
    OtherSymbol,
    LineSeparator,
    ParagraphSeparator,
    SpaceSeparator,
}

impl GeneralCategory {
    #[inline]
    pub fn is_mark(self) -> bool {
        matches!(
            self,
            GeneralCategory::SpacingMark
                | GeneralCategory::EnclosingMark
                | GeneralCategory::NonSpacingMark
        )
    }

    #[inline]
    pub fn is_letter(self) -> bool {
        matches!(
            self,
            GeneralCategory::LowercaseLetter
                | GeneralCategory::ModifierLetter
                | GeneralCategory::OtherLetter
                | GeneralCategory::TitlecaseLetter
                | GeneralCategory::UppercaseLetter
        )
    }
}

/// East Asian width class.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum EastAsianWidth {
    #[default]
    Neutral,
    Ambiguous,
    Halfwidth,
    Narrow,
    Wide,
    Fullwidth,
}

type CombiningClassFn = dyn Fn(u32) -> u8 + Send + Sync;
type EastAsianWidthFn = dyn Fn(u32) -> EastAsianWidth + Send + Sync;
type GeneralCategoryFn = dyn Fn(u32) -> GeneralCategory + Send + Sync;
type MirroringFn = dyn Fn(u32) -> u32 + Send + Sync;
type ScriptFn = dyn Fn(u32) -> Script + Send + Sync;
type ComposeFn = dyn Fn(u32, u32) -> Option<u32> + Send + Sync;
type DecomposeFn = dyn Fn(u32) -> Option<(u32, u32)> + Send + Sync;
type DecomposeCompatFn =
    dyn Fn(u32, &mut [u32; MAX_COMPAT_DECOMPOSITION]) -> usize + Send + Sync;

/// An immutable set of Unicode property capabilities.
///
/// A provider is frozen from the moment it exists: there are no setters, so
/// an `Arc<UnicodeFuncs>` can be shared across threads freely. Construction
/// and per-slot overriding happen on [`UnicodeFuncsBuilder`], which copies
/// all eight slots from its parent up front rather than chaining lookups
/// through it.
pub struct UnicodeFuncs {
    combining_class: Arc<CombiningClassFn>,
    east_asian_width: Arc<EastAsianWidthFn>,
    general_category: Arc<GeneralCategoryFn>,
    mirroring: Arc<MirroringFn>,
    script: Arc<ScriptFn>,
    compose: Arc<ComposeFn>,
    decompose: Arc<DecomposeFn>,
    decompose_compatibility: Arc<DecomposeCompatFn>,
}

impl UnicodeFuncs {
    /// The built-in provider over the compact static tables.
    pub fn built_in() -> &'static Arc<UnicodeFuncs> {
        static BUILT_IN: Lazy<Arc<UnicodeFuncs>> = Lazy::new(|| {
            Arc::new(UnicodeFuncs {
                combining_class: Arc::new(tables::combining_class),
                east_asian_width: Arc::new(tables::east_asian_width),
                general_category: Arc::new(tables::general_category),
                mirroring: Arc::new(tables::mirroring),
                script: Arc::new(tables::script),
                compose: Arc::new(tables::compose),
                decompose: Arc::new(tables::decompose),
                decompose_compatibility: Arc::new(tables::decompose_compatibility),
            })
        });
        &BUILT_IN
    }

    /// Canonical_Combining_Class of `cp`.
    #[inline]
    pub fn combining_class(&self, cp: u32) -> u8 {
        (self.combining_class)(cp)
    }

    /// Combining class remapped for shaping; see [`crate::ccc`].
    #[inline]
    pub fn modified_combining_class(&self, cp: u32) -> u8 {
        crate::ccc::modified_combining_class(self, cp)
    }

    #[inline]
    pub fn east_asian_width(&self, cp: u32) -> EastAsianWidth {
        (self.east_asian_width)(cp)
    }

    #[inline]
    pub fn general_category(&self, cp: u32) -> GeneralCategory {
        (self.general_category)(cp)
    }

    /// The bidi-mirrored counterpart of `cp`, or `cp` itself when unpaired.
    #[inline]
    pub fn mirroring(&self, cp: u32) -> u32 {
        (self.mirroring)(cp)
    }

    #[inline]
    pub fn script(&self, cp: u32) -> Script {
        (self.script)(cp)
    }

    /// Canonically composes a pair, if a composition exists.
    #[inline]
    pub fn compose(&self, a: u32, b: u32) -> Option<u32> {
        (self.compose)(a, b)
    }

    /// Canonically decomposes `cp` into one or two codepoints.
    ///
    /// A singleton decomposition is reported as `(a, 0)`.
    #[inline]
    pub fn decompose(&self, cp: u32) -> Option<(u32, u32)> {
        (self.decompose)(cp)
    }

    /// Fills `out` with the compatibility decomposition of `cp` and returns
    /// its length; zero means no decomposition.
    #[inline]
    pub fn decompose_compatibility(
        &self,
        cp: u32,
        out: &mut [u32; MAX_COMPAT_DECOMPOSITION],
    ) -> usize {
        (self.decompose_compatibility)(cp, out)
    }

    /// Convenience wrapper over [`Self::decompose_compatibility`].
    pub fn compatibility_decomposition(&self, cp: u32) -> SmallVec<[u32; MAX_COMPAT_DECOMPOSITION]> {
        let mut out = [0u32; MAX_COMPAT_DECOMPOSITION];
        let n = self.decompose_compatibility(cp, &mut out);
        SmallVec::from_slice(&out[..n])
    }
}

impl core::fmt::Debug for UnicodeFuncs {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("UnicodeFuncs").finish_non_exhaustive()
    }
}

/// Builds a [`UnicodeFuncs`] by inheriting a parent's slots and overriding
/// some of them.
///
/// All eight slots are copied from the parent when the builder is created;
/// later changes to some other provider never show through. `build` freezes
/// the result.
pub struct UnicodeFuncsBuilder {
    funcs: UnicodeFuncs,
}

impl UnicodeFuncsBuilder {
    /// Starts from the built-in provider.
    pub fn new() -> Self {
        Self::inherit(UnicodeFuncs::built_in())
    }

    /// Copies all slots from `parent`.
    pub fn inherit(parent: &UnicodeFuncs) -> Self {
        UnicodeFuncsBuilder {
            funcs: UnicodeFuncs {
                combining_class: Arc::clone(&parent.combining_class),
                east_asian_width: Arc::clone(&parent.east_asian_width),
                general_category: Arc::clone(&parent.general_category),
                mirroring: Arc::clone(&parent.mirroring),
                script: Arc::clone(&parent.script),
                compose: Arc::clone(&parent.compose),
                decompose: Arc::clone(&parent.decompose),
                decompose_compatibility: Arc::clone(&parent.decompose_compatibility),
            },
        }
    }

    /// A provider that knows nothing: zero classes, neutral widths, unknown
    /// scripts, no (de)compositions. Useful as a parent for backends that
    /// override every slot.
    pub fn nil() -> Self {
        UnicodeFuncsBuilder {
            funcs: UnicodeFuncs {
                combining_class: Arc::new(|_| 0),
                east_asian_width: Arc::new(|_| EastAsianWidth::Neutral),
                general_category: Arc::new(|_| GeneralCategory::Unassigned),
                mirroring: Arc::new(|cp| cp),
                script: Arc::new(|_| scribe_core::script::UNKNOWN),
                compose: Arc::new(|_, _| None),
                decompose: Arc::new(|_| None),
                decompose_compatibility: Arc::new(|_, _| 0),
            },
        }
    }

    pub fn combining_class(mut self, f: impl Fn(u32) -> u8 + Send + Sync + 'static) -> Self {
        self.funcs.combining_class = Arc::new(f);
        self
    }

    pub fn east_asian_width(
        mut self,
        f: impl Fn(u32) -> EastAsianWidth + Send + Sync + 'static,
    ) -> Self {
        self.funcs.east_asian_width = Arc::new(f);
        self
    }

    pub fn general_category(
        mut self,
        f: impl Fn(u32) -> GeneralCategory + Send + Sync + 'static,
    ) -> Self {
        self.funcs.general_category = Arc::new(f);
        self
    }

    pub fn mirroring(mut self, f: impl Fn(u32) -> u32 + Send + Sync + 'static) -> Self {
        self.funcs.mirroring = Arc::new(f);
        self
    }

    pub fn script(mut self, f: impl Fn(u32) -> Script + Send + Sync + 'static) -> Self {
        self.funcs.script = Arc::new(f);
        self
    }

    pub fn compose(mut self, f: impl Fn(u32, u32) -> Option<u32> + Send + Sync + 'static) -> Self {
        self.funcs.compose = Arc::new(f);
        self
    }

    pub fn decompose(
        mut self,
        f: impl Fn(u32) -> Option<(u32, u32)> + Send + Sync + 'static,
    ) -> Self {
        self.funcs.decompose = Arc::new(f);
        self
    }

    pub fn decompose_compatibility(
        mut self,
        f: impl Fn(u32, &mut [u32; MAX_COMPAT_DECOMPOSITION]) -> usize + Send + Sync + 'static,
    ) -> Self {
        self.funcs.decompose_compatibility = Arc::new(f);
        self
    }

    /// Freezes the provider.
    pub fn build(self) -> Arc<UnicodeFuncs> {
        Arc::new(self.funcs)
    }
}

impl Default for UnicodeFuncsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
