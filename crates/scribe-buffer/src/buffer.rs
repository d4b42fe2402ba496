//! The glyph buffer engine
//!
//! A `Buffer` is the mutable sequence every shaping stage reads and rewrites.
//! During a pass it is split into two logical regions inside the same storage:
//! already-produced output in front of `out_len`, unread input from `idx` to
//! `len`. The output region starts out aliasing the front of the input array
//! and only gets its own allocation once a stage produces more glyphs than it
//! consumed (`make_room_for`); most passes never pay for the second array.
//!
//! Allocation failure never panics or returns an error value: it sets the
//! sticky `in_error` flag, after which every mutation is a no-op and every
//! read accessor reports an empty buffer.

use std::sync::Arc;

use scribe_core::{Direction, Language, Script};
use scribe_unicode::UnicodeFuncs;

use crate::glyph::{GlyphInfo, GlyphPosition};

/// Codepoints of context kept on each side of the buffer for stateful shapers.
pub const CONTEXT_LENGTH: usize = 5;

bitflags::bitflags! {
    /// Caller-supplied hints about the text in the buffer.
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
    pub struct BufferFlags: u32 {
        /// The buffer starts at the beginning of a paragraph.
        const BEGINNING_OF_TEXT           = 1 << 1;
        /// The buffer ends at the end of a paragraph.
        const END_OF_TEXT                 = 1 << 2;
        /// Keep Default_Ignorable glyphs instead of hiding them.
        const PRESERVE_DEFAULT_IGNORABLES = 1 << 3;
        /// Remove Default_Ignorable glyphs instead of hiding them.
        const REMOVE_DEFAULT_IGNORABLES   = 1 << 4;
    }
}

/// Whether the records are raw Unicode scalars or resolved glyph ids.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub enum ContentType {
    #[default]
    Unicode,
    Glyphs,
}

// The output region either aliases the front of `info` or owns `out_info`.
// Separation never reverts within a pass; only sync/clear_output reset it.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum OutputStorage {
    Unified,
    Separated,
}

#[cfg(debug_assertions)]
#[derive(Default)]
struct VarLedger {
    // One owner name per scratch byte: var1 is bytes 0..4, var2 is 4..8.
    owners: [Option<&'static str>; 8],
}

/// The mutable, cluster-aware glyph sequence.
pub struct Buffer {
    pub flags: BufferFlags,
    content_type: ContentType,

    direction: Direction,
    script: Option<Script>,
    language: Option<Language>,
    unicode: Arc<UnicodeFuncs>,

    in_error: bool,
    have_output: bool,
    have_positions: bool,
    output: OutputStorage,

    idx: usize,
    len: usize,
    out_len: usize,

    info: Vec<GlyphInfo>,
    pos: Vec<GlyphPosition>,
    out_info: Vec<GlyphInfo>,

    // Ordered outward from the buffer; slot 0 is pre-context, 1 post-context.
    context: [[u32; CONTEXT_LENGTH]; 2],
    context_len: [usize; 2],

    #[cfg(debug_assertions)]
    var_ledger: VarLedger,
}

impl Buffer {
    /// An empty Unicode-content buffer over the built-in property provider.
    pub fn new() -> Self {
        Self::with_unicode_funcs(Arc::clone(UnicodeFuncs::built_in()))
    }

    /// An empty buffer over a caller-supplied property provider.
    pub fn with_unicode_funcs(unicode: Arc<UnicodeFuncs>) -> Self {
        Buffer {
            flags: BufferFlags::empty(),
            content_type: ContentType::Unicode,
            direction: Direction::Invalid,
            script: None,
            language: None,
            unicode,
            in_error: false,
            have_output: false,
            have_positions: false,
            output: OutputStorage::Unified,
            idx: 0,
            len: 0,
            out_len: 0,
            info: Vec::new(),
            pos: Vec::new(),
            out_info: Vec::new(),
            context: [[0; CONTEXT_LENGTH]; 2],
            context_len: [0, 0],
            #[cfg(debug_assertions)]
            var_ledger: VarLedger::default(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        if self.in_error {
            0
        } else {
            self.len
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn in_error(&self) -> bool {
        self.in_error
    }

    #[inline]
    pub fn info(&self) -> &[GlyphInfo] {
        if self.in_error {
            &[]
        } else {
            &self.info[..self.len]
        }
    }

    #[inline]
    pub fn info_mut(&mut self) -> &mut [GlyphInfo] {
        if self.in_error {
            &mut []
        } else {
            &mut self.info[..self.len]
        }
    }

    #[inline]
    pub fn pos(&self) -> &[GlyphPosition] {
        if self.in_error {
            &[]
        } else {
            &self.pos[..self.len]
        }
    }

    #[inline]
    pub fn pos_mut(&mut self) -> &mut [GlyphPosition] {
        if self.in_error {
            &mut []
        } else {
            &mut self.pos[..self.len]
        }
    }

    #[inline]
    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    #[inline]
    pub fn set_content_type(&mut self, kind: ContentType) {
        self.content_type = kind;
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    #[inline]
    pub fn script(&self) -> Option<Script> {
        self.script
    }

    #[inline]
    pub fn set_script(&mut self, script: Script) {
        self.script = Some(script);
    }

    #[inline]
    pub fn language(&self) -> Option<Language> {
        self.language
    }

    #[inline]
    pub fn set_language(&mut self, language: Language) {
        self.language = Some(language);
    }

    #[inline]
    pub fn unicode_funcs(&self) -> &UnicodeFuncs {
        &self.unicode
    }

    /// Committed output so far, or the read cursor when no output exists.
    #[inline]
    pub fn backtrack_len(&self) -> usize {
        if self.have_output {
            self.out_len
        } else {
            self.idx
        }
    }

    /// Unread input remaining.
    #[inline]
    pub fn lookahead_len(&self) -> usize {
        self.len - self.idx
    }

    /// Resets contents and segment properties, keeping the allocation.
    pub fn clear(&mut self) {
        self.content_type = ContentType::Unicode;
        self.direction = Direction::Invalid;
        self.script = None;
        self.language = None;

        self.in_error = false;
        self.have_output = false;
        self.have_positions = false;
        self.output = OutputStorage::Unified;

        self.idx = 0;
        self.len = 0;
        self.out_len = 0;

        self.context = [[0; CONTEXT_LENGTH]; 2];
        self.context_len = [0, 0];

        #[cfg(debug_assertions)]
        {
            self.var_ledger = VarLedger::default();
        }
    }

    // ------------------------------------------------------------------
    // Growth

    fn allocated(&self) -> usize {
        self.info.len()
    }

    /// Guarantees capacity for at least `size` records.
    ///
    /// Growth repeats `cap += cap / 2 + 32` until sufficient, with the byte
    /// size checked for overflow before the allocator is touched. On failure
    /// the sticky error flag is set and existing contents stay intact.
    pub fn ensure(&mut self, size: usize) -> bool {
        if self.in_error {
            return false;
        }

        if size <= self.allocated() {
            return true;
        }

        let mut new_allocated = self.allocated();
        while new_allocated < size {
            new_allocated = new_allocated.saturating_add(new_allocated / 2 + 32);
        }

        if new_allocated
            .checked_mul(core::mem::size_of::<GlyphInfo>())
            .is_none()
            || self.try_grow(new_allocated).is_err()
        {
            self.in_error = true;
            tracing::trace!(requested = size, "buffer growth failed");
            return false;
        }

        true
    }

    fn try_grow(&mut self, new_allocated: usize) -> Result<(), std::collections::TryReserveError> {
        self.info
            .try_reserve_exact(new_allocated - self.info.len())?;
        self.pos.try_reserve_exact(new_allocated - self.pos.len())?;
        if self.output == OutputStorage::Separated {
            self.out_info
                .try_reserve_exact(new_allocated - self.out_info.len())?;
            self.out_info.resize(new_allocated, GlyphInfo::default());
        }

        self.info.resize(new_allocated, GlyphInfo::default());
        self.pos.resize(new_allocated, GlyphPosition::default());
        Ok(())
    }

    // ------------------------------------------------------------------
    // Appending

    /// Appends one codepoint to the input region.
    pub fn add(&mut self, codepoint: u32, cluster: u32) {
        self.add_info(GlyphInfo::new(codepoint, cluster));
    }

    /// Appends one prepared record to the input region.
    pub fn add_info(&mut self, info: GlyphInfo) {
        if !self.ensure(self.len + 1) {
            return;
        }

        self.info[self.len] = info;
        self.len += 1;
    }

    /// Appends a string, one record per scalar, clustered by byte offset.
    pub fn push_str(&mut self, text: &str) {
        self.ensure(self.len + text.chars().count());
        for (i, c) in text.char_indices() {
            self.add(c as u32, i as u32);
        }
    }

    // ------------------------------------------------------------------
    // Context

    pub fn set_pre_context(&mut self, text: &str) {
        self.context_len[0] = 0;
        for (i, c) in text.chars().rev().take(CONTEXT_LENGTH).enumerate() {
            self.context[0][i] = c as u32;
            self.context_len[0] = i + 1;
        }
    }

    pub fn set_post_context(&mut self, text: &str) {
        self.context_len[1] = 0;
        for (i, c) in text.chars().take(CONTEXT_LENGTH).enumerate() {
            self.context[1][i] = c as u32;
            self.context_len[1] = i + 1;
        }
    }

    /// Codepoints before the buffer, nearest first.
    pub fn pre_context(&self) -> &[u32] {
        &self.context[0][..self.context_len[0]]
    }

    /// Codepoints after the buffer, nearest first.
    pub fn post_context(&self) -> &[u32] {
        &self.context[1][..self.context_len[1]]
    }

    // ------------------------------------------------------------------
    // Output region

    fn out_info(&self) -> &[GlyphInfo] {
        match self.output {
            OutputStorage::Separated => &self.out_info,
            OutputStorage::Unified => &self.info,
        }
    }

    fn out_info_mut(&mut self) -> &mut [GlyphInfo] {
        match self.output {
            OutputStorage::Separated => &mut self.out_info,
            OutputStorage::Unified => &mut self.info,
        }
    }

    #[inline]
    fn set_out_info(&mut self, i: usize, info: GlyphInfo) {
        self.out_info_mut()[i] = info;
    }

    /// Starts a shaping pass: an empty output region in front of the input.
    pub fn clear_output(&mut self) {
        self.have_output = true;
        self.have_positions = false;

        self.idx = 0;
        self.out_len = 0;
        self.output = OutputStorage::Unified;
    }

    /// Ends the substitution phase: zeroed positions, no output region.
    pub fn clear_positions(&mut self) {
        self.have_output = false;
        self.have_positions = true;

        self.out_len = 0;
        self.output = OutputStorage::Unified;

        for pos in &mut self.pos {
            *pos = GlyphPosition::default();
        }
    }

    #[inline]
    pub fn have_positions(&self) -> bool {
        self.have_positions
    }

    /// Declares the position array live without clearing it, e.g. after
    /// positions were filled in from a deserialized glyph stream.
    #[inline]
    pub fn set_have_positions(&mut self) {
        self.have_positions = true;
    }

    /// Folds the output region back so it becomes the next pass's input.
    pub fn sync(&mut self) {
        debug_assert!(self.have_output);
        debug_assert!(self.idx <= self.len);

        if self.in_error {
            self.have_output = false;
            self.out_len = 0;
            self.idx = 0;
            return;
        }

        self.next_glyphs(self.len - self.idx);

        if self.output == OutputStorage::Separated {
            core::mem::swap(&mut self.info, &mut self.out_info);
            self.output = OutputStorage::Unified;
        }

        self.len = self.out_len;
        self.have_output = false;
        self.out_len = 0;
        self.idx = 0;
    }

    // Guarantees room to consume `num_in` records and write `num_out`.
    // Separates the output region the first time a write would overtake the
    // unread input.
    fn make_room_for(&mut self, num_in: usize, num_out: usize) -> bool {
        if !self.ensure(self.out_len + num_out) {
            return false;
        }

        if self.output == OutputStorage::Unified && self.out_len + num_out > self.idx + num_in {
            debug_assert!(self.have_output);

            tracing::trace!(
                out_len = self.out_len,
                idx = self.idx,
                "separating output region"
            );

            let allocated = self.allocated();
            if self
                .out_info
                .try_reserve_exact(allocated.saturating_sub(self.out_info.len()))
                .is_err()
            {
                self.in_error = true;
                return false;
            }

            self.out_info.clear();
            self.out_info.extend_from_slice(&self.info[..self.out_len]);
            self.out_info.resize(allocated, GlyphInfo::default());
            self.output = OutputStorage::Separated;
        }

        true
    }

    /// Consumes `num_in` input records and emits `num_out` records carrying
    /// the new codepoints. The consumed records' clusters are merged first,
    /// and every emitted record inherits the first consumed record's
    /// non-codepoint fields.
    pub fn replace_glyphs(&mut self, num_in: usize, num_out: usize, codepoints: &[u32]) {
        if !self.make_room_for(num_in, num_out) {
            return;
        }

        debug_assert!(self.idx + num_in <= self.len);
        debug_assert!(codepoints.len() == num_out);

        self.merge_clusters(self.idx, self.idx + num_in);

        let orig_info = self.info[self.idx];
        for (i, &codepoint) in codepoints.iter().enumerate() {
            let ii = self.out_len + i;
            self.set_out_info(ii, orig_info);
            self.out_info_mut()[ii].codepoint = codepoint;
        }

        self.idx += num_in;
        self.out_len += num_out;
    }

    /// One-for-one substitution of the current record.
    pub fn replace_glyph(&mut self, codepoint: u32) {
        if self.in_error {
            return;
        }

        if self.output == OutputStorage::Separated || self.out_len != self.idx {
            if !self.make_room_for(1, 1) {
                return;
            }

            self.set_out_info(self.out_len, self.info[self.idx]);
        }

        let out_len = self.out_len;
        self.out_info_mut()[out_len].codepoint = codepoint;

        self.idx += 1;
        self.out_len += 1;
    }

    /// Emits one record without consuming input. The record copies the
    /// current input record's fields, or the previous output record's when
    /// the input is exhausted.
    pub fn output_glyph(&mut self, codepoint: u32) {
        if !self.make_room_for(0, 1) {
            return;
        }

        if self.idx == self.len && self.out_len == 0 {
            return;
        }

        let out_len = self.out_len;
        if self.idx < self.len {
            self.set_out_info(out_len, self.info[self.idx]);
        } else {
            let info = self.out_info()[out_len - 1];
            self.set_out_info(out_len, info);
        }

        self.out_info_mut()[out_len].codepoint = codepoint;
        self.out_len += 1;
    }

    /// Emits one prepared record without consuming input.
    pub fn output_info(&mut self, info: GlyphInfo) {
        if !self.make_room_for(0, 1) {
            return;
        }

        self.set_out_info(self.out_len, info);
        self.out_len += 1;
    }

    /// Copies the current record to the output without advancing the cursor.
    pub fn copy_glyph(&mut self) {
        if !self.make_room_for(0, 1) {
            return;
        }

        self.set_out_info(self.out_len, self.info[self.idx]);
        self.out_len += 1;
    }

    /// Copies the current record forward and advances the cursor. With no
    /// output region, just advances.
    pub fn next_glyph(&mut self) {
        if self.in_error {
            return;
        }

        if self.have_output {
            if self.output == OutputStorage::Separated || self.out_len != self.idx {
                if !self.make_room_for(1, 1) {
                    return;
                }

                self.set_out_info(self.out_len, self.info[self.idx]);
            }

            self.out_len += 1;
        }

        self.idx += 1;
    }

    /// [`Self::next_glyph`] for `n` records at once.
    pub fn next_glyphs(&mut self, n: usize) {
        if self.in_error {
            return;
        }

        if self.have_output {
            if self.output == OutputStorage::Separated || self.out_len != self.idx {
                if !self.make_room_for(n, n) {
                    return;
                }

                for i in 0..n {
                    let info = self.info[self.idx + i];
                    self.set_out_info(self.out_len + i, info);
                }
            }

            self.out_len += n;
        }

        self.idx += n;
    }

    /// Advances the cursor without copying to the output.
    pub fn skip_glyph(&mut self) {
        self.idx += 1;
    }

    /// Drops the current record, merging its cluster into a neighbor so no
    /// source span goes unmapped.
    pub fn delete_glyph(&mut self) {
        if self.in_error {
            return;
        }

        let cluster = self.info[self.idx].cluster;

        // Cluster survives in the next input record.
        if self.idx + 1 < self.len && cluster == self.info[self.idx + 1].cluster {
            self.skip_glyph();
            return;
        }

        if self.out_len != 0 {
            // Merge backward into the last output cluster.
            if cluster < self.out_info()[self.out_len - 1].cluster {
                let old_cluster = self.out_info()[self.out_len - 1].cluster;
                let mut i = self.out_len;
                while i != 0 && self.out_info()[i - 1].cluster == old_cluster {
                    self.out_info_mut()[i - 1].cluster = cluster;
                    i -= 1;
                }
            }

            self.skip_glyph();
            return;
        }

        if self.idx + 1 < self.len {
            // Nothing behind; merge forward.
            self.merge_clusters(self.idx, self.idx + 2);
        }

        self.skip_glyph();
    }

    /// Repositions the output cursor to absolute position `i`, counted in
    /// committed output plus remaining input.
    ///
    /// Moving forward copies input records through verbatim. Moving backward
    /// first shifts the unread input up to create slack, then hands records
    /// back from the output to the input region.
    pub fn move_to(&mut self, i: usize) -> bool {
        if !self.have_output {
            debug_assert!(i <= self.len);
            self.idx = i;
            return true;
        }

        if self.in_error {
            return false;
        }

        debug_assert!(i <= self.out_len + (self.len - self.idx));

        if self.out_len < i {
            let count = i - self.out_len;
            if !self.make_room_for(count, count) {
                return false;
            }

            for j in 0..count {
                let info = self.info[self.idx + j];
                self.set_out_info(self.out_len + j, info);
            }

            self.idx += count;
            self.out_len += count;
        } else if self.out_len > i {
            let count = self.out_len - i;

            if self.idx < count && !self.shift_forward(count - self.idx) {
                return false;
            }

            debug_assert!(self.idx >= count);

            self.idx -= count;
            self.out_len -= count;

            for j in 0..count {
                let info = self.out_info()[self.out_len + j];
                self.info[self.idx + j] = info;
            }
        }

        true
    }

    // Shifts the unread input `count` slots toward the end, opening slack in
    // front of the cursor for a rewind.
    fn shift_forward(&mut self, count: usize) -> bool {
        debug_assert!(self.have_output);

        if !self.ensure(self.len + count) {
            return false;
        }

        tracing::trace!(count, idx = self.idx, "shifting input forward");

        for i in (0..(self.len - self.idx)).rev() {
            self.info[self.idx + count + i] = self.info[self.idx + i];
        }

        if self.idx + count > self.len {
            for info in &mut self.info[self.len..self.idx + count] {
                *info = GlyphInfo::default();
            }
        }

        self.len += count;
        self.idx += count;
        true
    }

    // ------------------------------------------------------------------
    // Clusters

    fn cluster_end(&self, mut start: usize) -> usize {
        start += 1;
        while start < self.len && self.info[start - 1].cluster == self.info[start].cluster {
            start += 1;
        }
        start
    }

    /// Gives every record in `[start, end)` the minimum cluster id of the
    /// range. The range first extends outward over any neighbor sharing a
    /// boundary cluster id, so a merge never splits an existing cluster; if
    /// it reaches the unread start of the buffer it continues into the
    /// already-produced output.
    pub fn merge_clusters(&mut self, start: usize, end: usize) {
        if self.in_error || end.saturating_sub(start) < 2 {
            return;
        }

        self.merge_clusters_impl(start, end);
    }

    fn merge_clusters_impl(&mut self, mut start: usize, mut end: usize) {
        let mut cluster = self.info[start].cluster;
        for i in start + 1..end {
            cluster = cluster.min(self.info[i].cluster);
        }

        // Extend end
        while end < self.len && self.info[end - 1].cluster == self.info[end].cluster {
            end += 1;
        }

        // Extend start
        while self.idx < start && self.info[start - 1].cluster == self.info[start].cluster {
            start -= 1;
        }

        // If we hit the unread start of the buffer, continue in the output.
        if self.idx == start {
            let boundary = self.info[start].cluster;
            let mut i = self.out_len;
            while i != 0 && self.out_info()[i - 1].cluster == boundary {
                self.out_info_mut()[i - 1].cluster = cluster;
                i -= 1;
            }
        }

        for info in &mut self.info[start..end] {
            info.cluster = cluster;
        }
    }

    /// [`Self::merge_clusters`] over the output region.
    pub fn merge_out_clusters(&mut self, mut start: usize, mut end: usize) {
        if self.in_error || end.saturating_sub(start) < 2 {
            return;
        }

        let mut cluster = self.out_info()[start].cluster;
        for i in start + 1..end {
            cluster = cluster.min(self.out_info()[i].cluster);
        }

        // Extend start
        while start != 0 && self.out_info()[start - 1].cluster == self.out_info()[start].cluster {
            start -= 1;
        }

        // Extend end
        while end < self.out_len
            && self.out_info()[end - 1].cluster == self.out_info()[end].cluster
        {
            end += 1;
        }

        // If we hit the end of the output, continue into the unread input.
        if end == self.out_len {
            let boundary = self.out_info()[end - 1].cluster;
            let mut i = self.idx;
            while i < self.len && self.info[i].cluster == boundary {
                self.info[i].cluster = cluster;
                i += 1;
            }
        }

        for i in start..end {
            self.out_info_mut()[i].cluster = cluster;
        }
    }

    /// Renumbers clusters to record indices.
    pub fn reset_clusters(&mut self) {
        if self.in_error {
            return;
        }

        for (i, info) in self.info[..self.len].iter_mut().enumerate() {
            info.cluster = i as u32;
        }
    }

    // ------------------------------------------------------------------
    // Reversal

    pub fn reverse(&mut self) {
        if self.is_empty() {
            return;
        }

        self.reverse_range(0, self.len);
    }

    pub fn reverse_range(&mut self, start: usize, end: usize) {
        if self.in_error || end.saturating_sub(start) < 2 {
            return;
        }

        self.info[start..end].reverse();
        if self.have_positions {
            self.pos[start..end].reverse();
        }
    }

    /// Reverses the order of clusters while keeping each cluster's internal
    /// record order, yielding visual order for backward directions.
    pub fn reverse_clusters(&mut self) {
        if self.is_empty() {
            return;
        }

        self.reverse();

        let mut start = 0;
        while start < self.len {
            let end = self.cluster_end(start);
            self.reverse_range(start, end);
            start = end;
        }
    }

    // ------------------------------------------------------------------
    // Masks

    /// Sets every record's mask outright.
    pub fn reset_masks(&mut self, mask: u32) {
        if self.in_error {
            return;
        }

        for info in &mut self.info[..self.len] {
            info.mask = mask;
        }
    }

    /// Applies `value` under `mask` to every record whose cluster id falls in
    /// `[cluster_start, cluster_end)`. The pair `(0, u32::MAX)` is the
    /// whole-buffer sentinel and skips the range test.
    pub fn set_masks(&mut self, mut value: u32, mask: u32, cluster_start: u32, cluster_end: u32) {
        if self.in_error || mask == 0 {
            return;
        }

        let not_mask = !mask;
        value &= mask;

        if cluster_start == 0 && cluster_end == u32::MAX {
            for info in &mut self.info[..self.len] {
                info.mask = (info.mask & not_mask) | value;
            }
            return;
        }

        for info in &mut self.info[..self.len] {
            if cluster_start <= info.cluster && info.cluster < cluster_end {
                info.mask = (info.mask & not_mask) | value;
            }
        }
    }

    // ------------------------------------------------------------------
    // Segment properties

    /// Fills in whichever of script, direction and language are still unset:
    /// script from the first non-neutral codepoint, direction from the
    /// script, language from the process default.
    pub fn guess_segment_properties(&mut self) {
        if self.script.is_none() {
            let guessed = self.info[..self.len]
                .iter()
                .map(|info| self.unicode.script(info.codepoint))
                .find(|s| !s.is_neutral());

            if let Some(s) = guessed {
                self.script = Some(s);
            }
        }

        if self.direction == Direction::Invalid {
            self.direction = self
                .script
                .and_then(Direction::from_script)
                .unwrap_or(Direction::LeftToRight);
        }

        if self.language.is_none() {
            self.language = Some(Language::process_default());
        }

        tracing::debug!(
            direction = ?self.direction,
            script = ?self.script,
            language = ?self.language,
            "guessed segment properties"
        );
    }

    // ------------------------------------------------------------------
    // Glyph normalization

    /// Within each cluster run, sorts records by decreasing codepoint (a
    /// stable bubble sort, keeping mark-attachment order canonical) and moves
    /// the run's whole advance onto one edge glyph, compensating offsets.
    /// Renderers can then treat a multi-glyph cluster as a single advancing
    /// unit.
    pub fn normalize_glyphs(&mut self) {
        debug_assert!(self.have_positions);
        debug_assert_eq!(self.content_type, ContentType::Glyphs);

        if self.in_error {
            return;
        }

        let backward = self.direction.is_backward();

        let mut start = 0;
        while start < self.len {
            let end = self.cluster_end(start);
            self.normalize_glyphs_cluster(start, end, backward);
            start = end;
        }
    }

    fn normalize_glyphs_cluster(&mut self, start: usize, end: usize, backward: bool) {
        let mut total_x = 0i32;
        let mut total_y = 0i32;
        for p in &self.pos[start..end] {
            total_x = total_x.wrapping_add(p.x_advance);
            total_y = total_y.wrapping_add(p.y_advance);
        }

        // Convert advances into cumulative offsets within the run.
        let mut x = 0i32;
        let mut y = 0i32;
        for p in &mut self.pos[start..end] {
            p.x_offset = p.x_offset.wrapping_add(x);
            p.y_offset = p.y_offset.wrapping_add(y);
            x = x.wrapping_add(p.x_advance);
            y = y.wrapping_add(p.y_advance);
            p.x_advance = 0;
            p.y_advance = 0;
        }

        if backward {
            // The visually-last glyph carries the whole advance.
            self.pos[end - 1].x_advance = total_x;
            self.pos[end - 1].y_advance = total_y;
            self.sort_by_codepoint_desc(start, end - 1);
        } else {
            self.pos[start].x_advance = self.pos[start].x_advance.wrapping_add(total_x);
            self.pos[start].y_advance = self.pos[start].y_advance.wrapping_add(total_y);
            for p in &mut self.pos[start + 1..end] {
                p.x_offset = p.x_offset.wrapping_sub(total_x);
                p.y_offset = p.y_offset.wrapping_sub(total_y);
            }
            self.sort_by_codepoint_desc(start + 1, end);
        }
    }

    // Stable: equal codepoints keep their order. Cluster runs are tiny, so
    // bubble sort is fine.
    fn sort_by_codepoint_desc(&mut self, start: usize, end: usize) {
        if end.saturating_sub(start) < 2 {
            return;
        }

        let mut swapped = true;
        while swapped {
            swapped = false;
            for i in start..end - 1 {
                if self.info[i].codepoint < self.info[i + 1].codepoint {
                    self.info.swap(i, i + 1);
                    self.pos.swap(i, i + 1);
                    swapped = true;
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Scratch-byte leases

    /// Leases `count` of the 8 per-record scratch bytes starting at `start`
    /// to `owner`. Var1 is bytes 0..4, var2 is 4..8. Leases are checked in
    /// debug builds only; double-allocation is a caller bug, not a runtime
    /// error.
    #[allow(unused_variables)]
    pub fn allocate_var(&mut self, start: usize, count: usize, owner: &'static str) {
        #[cfg(debug_assertions)]
        {
            for slot in &mut self.var_ledger.owners[start..start + count] {
                assert!(
                    slot.is_none(),
                    "scratch byte already leased to {}",
                    slot.unwrap_or_default()
                );
                *slot = Some(owner);
            }
        }
    }

    /// Releases a lease taken by [`Self::allocate_var`]; the owner must match.
    #[allow(unused_variables)]
    pub fn deallocate_var(&mut self, start: usize, count: usize, owner: &'static str) {
        #[cfg(debug_assertions)]
        {
            for slot in &mut self.var_ledger.owners[start..start + count] {
                assert_eq!(*slot, Some(owner), "scratch byte leased to someone else");
                *slot = None;
            }
        }
    }

    /// Asserts that `owner` currently holds the lease.
    #[allow(unused_variables)]
    pub fn assert_var(&self, start: usize, count: usize, owner: &'static str) {
        #[cfg(debug_assertions)]
        {
            for slot in &self.var_ledger.owners[start..start + count] {
                assert_eq!(*slot, Some(owner), "scratch byte leased to someone else");
            }
        }
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Buffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Buffer")
            .field("len", &self.len)
            .field("content_type", &self.content_type)
            .field("direction", &self.direction)
            .field("script", &self.script)
            .field("language", &self.language)
            .field("in_error", &self.in_error)
            .finish_non_exhaustive()
    }
}
