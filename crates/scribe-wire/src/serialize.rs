//! Glyph-run serialization
//!
//! Both formats are a bit-for-bit compatibility contract with tooling that
//! captures and replays shaped output; do not adjust separators or key names.

use core::fmt::Write;

use scribe_buffer::Buffer;

use crate::namer::GlyphNamer;

bitflags::bitflags! {
    /// Independent field suppressions for serialization.
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SerializeFlags: u8 {
        /// Emit numeric glyph ids even when the namer knows a name.
        const NO_GLYPH_NAMES = 1 << 0;
        /// Do not emit cluster ids.
        const NO_CLUSTERS    = 1 << 1;
        /// Do not emit offsets or advances.
        const NO_POSITIONS   = 1 << 2;
    }
}

/// The wire format to produce.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SerializeFormat {
    /// Pipe-delimited records: `name=cluster@dx,dy+ax,ay`.
    Text,
    /// A JSON array of `{"g":…,"cl":…,"dx":…,"dy":…,"ax":…,"ay":…}` objects.
    Json,
}

fn escape_json_name(s: &mut String, name: &str) {
    s.push('"');
    for c in name.chars() {
        if c == '"' || c == '\\' {
            s.push('\\');
        }
        s.push(c);
    }
    s.push('"');
}

// Formats the record at `i` into `scratch`, including its leading separator
// and, for JSON, the array brackets at either end of the whole run.
fn format_record(
    scratch: &mut String,
    buffer: &Buffer,
    i: usize,
    format: SerializeFormat,
    flags: SerializeFlags,
    namer: &dyn GlyphNamer,
) -> core::fmt::Result {
    let info = &buffer.info()[i];
    let pos = &buffer.pos()[i];
    let last = i + 1 == buffer.len();

    let name = if flags.contains(SerializeFlags::NO_GLYPH_NAMES) {
        None
    } else {
        namer.glyph_to_name(info.codepoint)
    };

    match format {
        SerializeFormat::Text => {
            if i != 0 {
                scratch.push('|');
            }

            match name {
                Some(name) => scratch.push_str(&name),
                None => write!(scratch, "{}", info.codepoint)?,
            }

            if !flags.contains(SerializeFlags::NO_CLUSTERS) {
                write!(scratch, "={}", info.cluster)?;
            }

            if !flags.contains(SerializeFlags::NO_POSITIONS) {
                if pos.x_offset != 0 || pos.y_offset != 0 {
                    write!(scratch, "@{},{}", pos.x_offset, pos.y_offset)?;
                }

                write!(scratch, "+{}", pos.x_advance)?;
                if pos.y_advance != 0 {
                    write!(scratch, ",{}", pos.y_advance)?;
                }
            }
        }
        SerializeFormat::Json => {
            scratch.push(if i == 0 { '[' } else { ',' });
            scratch.push_str("{\"g\":");

            match name {
                Some(name) => escape_json_name(scratch, &name),
                None => write!(scratch, "{}", info.codepoint)?,
            }

            if !flags.contains(SerializeFlags::NO_CLUSTERS) {
                write!(scratch, ",\"cl\":{}", info.cluster)?;
            }

            if !flags.contains(SerializeFlags::NO_POSITIONS) {
                write!(
                    scratch,
                    ",\"dx\":{},\"dy\":{},\"ax\":{},\"ay\":{}",
                    pos.x_offset, pos.y_offset, pos.x_advance, pos.y_advance
                )?;
            }

            scratch.push('}');
            if last {
                scratch.push(']');
            }
        }
    }

    Ok(())
}

/// Serializes records `[start, end)` into a fixed chunk.
///
/// Only whole records are written. Returns `(records consumed, bytes
/// written)`; a caller streams an arbitrarily long buffer by advancing
/// `start` by the consumed count and flushing the chunk between calls.
pub fn serialize_glyphs(
    buffer: &Buffer,
    start: usize,
    end: usize,
    out: &mut [u8],
    format: SerializeFormat,
    flags: SerializeFlags,
    namer: &dyn GlyphNamer,
) -> (usize, usize) {
    debug_assert!(end <= buffer.len());

    let mut consumed = 0;
    let mut written = 0;
    let mut scratch = String::with_capacity(64);

    for i in start..end {
        scratch.clear();
        if format_record(&mut scratch, buffer, i, format, flags, namer).is_err() {
            break;
        }

        let bytes = scratch.as_bytes();
        if written + bytes.len() > out.len() {
            break;
        }

        out[written..written + bytes.len()].copy_from_slice(bytes);
        written += bytes.len();
        consumed += 1;
    }

    (consumed, written)
}

/// Serializes the whole buffer into one `String`, streaming through a
/// bounded chunk internally.
pub fn serialize_to_string(
    buffer: &Buffer,
    format: SerializeFormat,
    flags: SerializeFlags,
    namer: &dyn GlyphNamer,
) -> String {
    let mut result = String::new();
    let mut chunk = vec![0u8; 512];
    let mut start = 0;

    while start < buffer.len() {
        let (consumed, written) = serialize_glyphs(
            buffer,
            start,
            buffer.len(),
            &mut chunk,
            format,
            flags,
            namer,
        );

        if consumed == 0 {
            // One record larger than the chunk; widen and retry.
            chunk.resize(chunk.len() * 2, 0);
            continue;
        }

        // Records are ASCII except for names, which came from a &str.
        match core::str::from_utf8(&chunk[..written]) {
            Ok(s) => result.push_str(s),
            Err(_) => break,
        }

        start += consumed;
    }

    result
}
