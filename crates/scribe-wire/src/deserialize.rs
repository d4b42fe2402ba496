//! Glyph-run deserialization
//!
//! Two hand-written state machines, one per wire format. Each tracks the
//! start offset of the field it is scanning and parses the accumulated span
//! as a glyph name, unsigned integer, or signed integer the moment the field
//! closes, appending a finished record to the buffer as soon as all of its
//! fields are known. A malformed numeric field aborts on the spot.

use scribe_buffer::{Buffer, ContentType};

use crate::namer::GlyphNamer;
use crate::serialize::SerializeFormat;

/// A deserialization failure, reported by the strict entry point.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum WireError {
    /// The input stopped matching the grammar at this byte offset.
    #[error("malformed glyph stream at byte {0}")]
    Malformed(usize),
    /// The input is valid so far but the stream is incomplete.
    #[error("truncated glyph stream at byte {0}")]
    Truncated(usize),
}

// One record's fields as they accumulate. Positions default to zero so a
// record is complete as soon as its glyph is known.
#[derive(Default)]
struct PendingRecord {
    glyph: u32,
    cluster: Option<u32>,
    x_offset: i32,
    y_offset: i32,
    x_advance: i32,
    y_advance: i32,
}

fn flush(buffer: &mut Buffer, record: &PendingRecord) {
    let i = buffer.len();
    let cluster = record.cluster.unwrap_or(i as u32);

    buffer.add(record.glyph, cluster);
    if buffer.in_error() {
        return;
    }

    let pos = &mut buffer.pos_mut()[i];
    pos.x_offset = record.x_offset;
    pos.y_offset = record.y_offset;
    pos.x_advance = record.x_advance;
    pos.y_advance = record.y_advance;
}

struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Cursor {
            input: input.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.bump();
        }
    }

    // Unsigned decimal field. Leaves `pos` at the field start on failure.
    fn parse_unsigned(&mut self) -> Option<u32> {
        let start = self.pos;
        let mut value: u32 = 0;
        while let Some(b @ b'0'..=b'9') = self.peek() {
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(u32::from(b - b'0')))?;
            self.bump();
        }
        if self.pos == start {
            return None;
        }
        Some(value)
    }

    // Signed decimal field. Only `-` is a valid sign; a leading `+` never
    // appears on the wire.
    fn parse_signed(&mut self) -> Option<i32> {
        let negative = self.eat(b'-');
        let magnitude = i64::from(self.parse_unsigned()?);
        let value = if negative { -magnitude } else { magnitude };
        i32::try_from(value).ok()
    }
}

// Resolves a glyph field: a font name if the namer knows it, else a bare
// numeric id.
fn resolve_glyph(span: &str, namer: &dyn GlyphNamer) -> Option<u32> {
    namer
        .glyph_from_name(span)
        .or_else(|| span.parse::<u32>().ok())
}

// Whether the consumed prefix ends the stream (ignoring trailing
// whitespace). Callers use this to tell a complete array from a truncated
// one.
fn more_expected(input: &str, consumed: usize) -> bool {
    consumed == input.len() && !input[..consumed].trim_end().ends_with(']')
}

/// Parses pipe-delimited text records into `buffer`.
///
/// Returns `(more, consumed)`: `consumed` is the offset of the first
/// unconsumed byte, and `more` is true when the whole input was consumed
/// without hitting a stream terminator.
pub fn deserialize_text(buffer: &mut Buffer, input: &str, namer: &dyn GlyphNamer) -> (bool, usize) {
    let mut cur = Cursor::new(input);

    loop {
        cur.skip_whitespace();
        while cur.eat(b'|') {
            cur.skip_whitespace();
        }
        if cur.peek().is_none() {
            break;
        }

        // Glyph name or id: everything up to a field or record delimiter.
        let field_start = cur.pos;
        while let Some(b) = cur.peek() {
            if matches!(b, b'=' | b'@' | b'+' | b',' | b'|' | b' ' | b'\t' | b'\n' | b'\r') {
                break;
            }
            cur.bump();
        }
        let span = &input[field_start..cur.pos];
        let glyph = match resolve_glyph(span, namer) {
            Some(glyph) => glyph,
            None => {
                tracing::debug!(offset = field_start, "unresolvable glyph field");
                return (false, field_start);
            }
        };

        let mut record = PendingRecord {
            glyph,
            ..PendingRecord::default()
        };

        if cur.eat(b'=') {
            let field_start = cur.pos;
            match cur.parse_unsigned() {
                Some(cluster) => record.cluster = Some(cluster),
                None => {
                    tracing::debug!(offset = field_start, "malformed cluster field");
                    return (false, field_start);
                }
            }
        }

        if cur.eat(b'@') {
            let field_start = cur.pos;
            let parsed = cur
                .parse_signed()
                .filter(|_| cur.eat(b','))
                .and_then(|dx| cur.parse_signed().map(|dy| (dx, dy)));
            match parsed {
                Some((dx, dy)) => {
                    record.x_offset = dx;
                    record.y_offset = dy;
                }
                None => {
                    tracing::debug!(offset = field_start, "malformed offset field");
                    return (false, field_start);
                }
            }
        }

        if cur.eat(b'+') {
            let field_start = cur.pos;
            match cur.parse_signed() {
                Some(ax) => record.x_advance = ax,
                None => {
                    tracing::debug!(offset = field_start, "malformed advance field");
                    return (false, field_start);
                }
            }

            if cur.eat(b',') {
                let field_start = cur.pos;
                match cur.parse_signed() {
                    Some(ay) => record.y_advance = ay,
                    None => {
                        tracing::debug!(offset = field_start, "malformed advance field");
                        return (false, field_start);
                    }
                }
            }
        }

        flush(buffer, &record);
        if buffer.in_error() {
            return (false, cur.pos);
        }
    }

    buffer.set_content_type(ContentType::Glyphs);
    buffer.set_have_positions();
    (more_expected(input, cur.pos), cur.pos)
}

// A quoted JSON string with `\"` and `\\` escapes. Leaves `pos` past the
// closing quote on success. The escapes are ASCII, so collecting raw bytes
// keeps the input's UTF-8 intact.
fn parse_json_string(cur: &mut Cursor) -> Option<String> {
    if !cur.eat(b'"') {
        return None;
    }

    let mut out = Vec::new();
    loop {
        let b = cur.peek()?;
        cur.bump();
        match b {
            b'"' => return String::from_utf8(out).ok(),
            b'\\' => {
                let escaped = cur.peek()?;
                if escaped != b'"' && escaped != b'\\' {
                    return None;
                }
                out.push(escaped);
                cur.bump();
            }
            _ => out.push(b),
        }
    }
}

/// Parses a JSON glyph array into `buffer`.
///
/// Same return contract as [`deserialize_text`]; a stream that consumed
/// fully but never reached its closing `]` reports `more = true`.
pub fn deserialize_json(buffer: &mut Buffer, input: &str, namer: &dyn GlyphNamer) -> (bool, usize) {
    let mut cur = Cursor::new(input);

    cur.skip_whitespace();
    if cur.peek().is_none() {
        return (true, cur.pos);
    }
    if !cur.eat(b'[') {
        return (false, cur.pos);
    }

    loop {
        cur.skip_whitespace();
        match cur.peek() {
            Some(b']') => {
                cur.bump();
                cur.skip_whitespace();
                break;
            }
            Some(b'{') => cur.bump(),
            Some(b',') => {
                cur.bump();
                continue;
            }
            Some(_) => return (false, cur.pos),
            None => break, // truncated mid-array
        }

        let mut record = PendingRecord::default();
        let mut have_glyph = false;

        loop {
            cur.skip_whitespace();
            if cur.eat(b'}') {
                break;
            }
            if cur.eat(b',') {
                continue;
            }

            let key_start = cur.pos;
            let key = match parse_json_string(&mut cur) {
                Some(key) => key,
                None => {
                    tracing::debug!(offset = key_start, "malformed object key");
                    return (false, key_start);
                }
            };

            cur.skip_whitespace();
            if !cur.eat(b':') {
                return (false, cur.pos);
            }
            cur.skip_whitespace();

            let value_start = cur.pos;
            match key.as_str() {
                "g" => {
                    if cur.peek() == Some(b'"') {
                        let parsed = parse_json_string(&mut cur)
                            .and_then(|name| namer.glyph_from_name(&name));
                        match parsed {
                            Some(glyph) => record.glyph = glyph,
                            None => {
                                tracing::debug!(offset = value_start, "unresolvable glyph name");
                                return (false, value_start);
                            }
                        }
                    } else {
                        match cur.parse_unsigned() {
                            Some(glyph) => record.glyph = glyph,
                            None => {
                                tracing::debug!(offset = value_start, "malformed glyph id");
                                return (false, value_start);
                            }
                        }
                    }
                    have_glyph = true;
                }
                "cl" => match cur.parse_unsigned() {
                    Some(cluster) => record.cluster = Some(cluster),
                    None => {
                        tracing::debug!(offset = value_start, "malformed cluster field");
                        return (false, value_start);
                    }
                },
                "dx" | "dy" | "ax" | "ay" => match cur.parse_signed() {
                    Some(value) => match key.as_str() {
                        "dx" => record.x_offset = value,
                        "dy" => record.y_offset = value,
                        "ax" => record.x_advance = value,
                        _ => record.y_advance = value,
                    },
                    None => {
                        tracing::debug!(offset = value_start, key = %key, "malformed position field");
                        return (false, value_start);
                    }
                },
                _ => {
                    tracing::debug!(offset = key_start, key = %key, "unknown object key");
                    return (false, key_start);
                }
            }
        }

        if !have_glyph {
            tracing::debug!(offset = cur.pos, "record without a glyph field");
            return (false, cur.pos);
        }

        flush(buffer, &record);
        if buffer.in_error() {
            return (false, cur.pos);
        }
    }

    buffer.set_content_type(ContentType::Glyphs);
    buffer.set_have_positions();
    (more_expected(input, cur.pos), cur.pos)
}

/// Parses a complete stream, mapping the `(more, consumed)` contract onto
/// errors: leftover input is malformed, and a JSON array that never closes
/// is truncated.
pub fn deserialize_str(
    buffer: &mut Buffer,
    input: &str,
    format: SerializeFormat,
    namer: &dyn GlyphNamer,
) -> Result<(), WireError> {
    let (more, consumed) = match format {
        SerializeFormat::Text => deserialize_text(buffer, input, namer),
        SerializeFormat::Json => deserialize_json(buffer, input, namer),
    };

    if consumed != input.len() {
        return Err(WireError::Malformed(consumed));
    }
    if format == SerializeFormat::Json && more {
        return Err(WireError::Truncated(consumed));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namer::NumericNamer;

    fn records(buffer: &Buffer) -> Vec<(u32, u32, i32, i32, i32, i32)> {
        buffer
            .info()
            .iter()
            .zip(buffer.pos())
            .map(|(i, p)| {
                (
                    i.codepoint,
                    i.cluster,
                    p.x_offset,
                    p.y_offset,
                    p.x_advance,
                    p.y_advance,
                )
            })
            .collect()
    }

    #[test]
    fn test_text_two_records() {
        let mut buffer = Buffer::new();
        let (more, consumed) = deserialize_text(&mut buffer, "5=0+10|7=1+12", &NumericNamer);
        assert!(more);
        assert_eq!(consumed, 13);
        assert_eq!(
            records(&buffer),
            [(5, 0, 0, 0, 10, 0), (7, 1, 0, 0, 12, 0)]
        );
        assert_eq!(buffer.content_type(), ContentType::Glyphs);
        assert!(buffer.have_positions());
    }

    #[test]
    fn test_text_full_record_grammar() {
        let mut buffer = Buffer::new();
        let (more, consumed) = deserialize_text(&mut buffer, "5=0@-3,2+10,-6", &NumericNamer);
        assert!(more);
        assert_eq!(consumed, 14);
        assert_eq!(records(&buffer), [(5, 0, -3, 2, 10, -6)]);
    }

    #[test]
    fn test_text_defaults_cluster_to_index() {
        let mut buffer = Buffer::new();
        let (more, _) = deserialize_text(&mut buffer, "5+10|7+12", &NumericNamer);
        assert!(more);
        assert_eq!(buffer.info()[0].cluster, 0);
        assert_eq!(buffer.info()[1].cluster, 1);
    }

    #[test]
    fn test_text_malformed_cluster_aborts() {
        let mut buffer = Buffer::new();
        let (more, consumed) = deserialize_text(&mut buffer, "5=x+10", &NumericNamer);
        assert!(!more);
        assert_eq!(consumed, 2); // points at the bad cluster span
        assert_eq!(buffer.len(), 0); // the bad record was never flushed
    }

    #[test]
    fn test_explicit_plus_sign_is_rejected() {
        let mut buffer = Buffer::new();
        let (more, consumed) = deserialize_text(&mut buffer, "5=0++10", &NumericNamer);
        assert!(!more);
        assert_eq!(consumed, 4); // the advance field starts after the `+`
        assert!(buffer.is_empty());

        let mut buffer = Buffer::new();
        let (more, consumed) = deserialize_text(&mut buffer, "5=0@+3,4+10", &NumericNamer);
        assert!(!more);
        assert_eq!(consumed, 4);

        let mut buffer = Buffer::new();
        let input = "[{\"g\":5,\"ax\":+10}]";
        let (more, consumed) = deserialize_json(&mut buffer, input, &NumericNamer);
        assert!(!more);
        assert_eq!(consumed, 13); // offset of the signed value
    }

    #[test]
    fn test_text_overflowing_id_aborts() {
        let mut buffer = Buffer::new();
        let (more, consumed) = deserialize_text(&mut buffer, "99999999999=0+1", &NumericNamer);
        assert!(!more);
        assert_eq!(consumed, 0);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_json_two_records() {
        let mut buffer = Buffer::new();
        let input = "[{\"g\":5,\"cl\":0,\"dx\":0,\"dy\":0,\"ax\":10,\"ay\":0},\
                     {\"g\":7,\"cl\":1,\"dx\":0,\"dy\":0,\"ax\":12,\"ay\":0}]";
        let (more, consumed) = deserialize_json(&mut buffer, input, &NumericNamer);
        assert!(!more); // the closing bracket ends the stream
        assert_eq!(consumed, input.len());
        assert_eq!(
            records(&buffer),
            [(5, 0, 0, 0, 10, 0), (7, 1, 0, 0, 12, 0)]
        );
    }

    #[test]
    fn test_json_truncated_stream_reports_more() {
        let mut buffer = Buffer::new();
        let input = "[{\"g\":5,\"cl\":0,\"ax\":10}";
        let (more, consumed) = deserialize_json(&mut buffer, input, &NumericNamer);
        assert!(more);
        assert_eq!(consumed, input.len());
        assert_eq!(buffer.len(), 1);
    }

    #[test]
    fn test_json_named_glyph_with_escape() {
        struct OneName;
        impl crate::namer::GlyphNamer for OneName {
            fn glyph_to_name(&self, _: u32) -> Option<String> {
                None
            }
            fn glyph_from_name(&self, name: &str) -> Option<u32> {
                (name == "quo\"te").then_some(77)
            }
        }

        let mut buffer = Buffer::new();
        let input = "[{\"g\":\"quo\\\"te\",\"cl\":3}]";
        let (more, consumed) = deserialize_json(&mut buffer, input, &OneName);
        assert!(!more);
        assert_eq!(consumed, input.len());
        assert_eq!(buffer.info()[0].codepoint, 77);
        assert_eq!(buffer.info()[0].cluster, 3);
    }

    #[test]
    fn test_json_unknown_key_aborts() {
        let mut buffer = Buffer::new();
        let input = "[{\"g\":5,\"zz\":1}]";
        let (more, consumed) = deserialize_json(&mut buffer, input, &NumericNamer);
        assert!(!more);
        assert_eq!(consumed, 8); // offset of the unknown key's opening quote
    }

    #[test]
    fn test_strict_wrapper() {
        let mut buffer = Buffer::new();
        assert_eq!(
            deserialize_str(&mut buffer, "5=0+10", SerializeFormat::Text, &NumericNamer),
            Ok(())
        );

        let mut buffer = Buffer::new();
        assert_eq!(
            deserialize_str(&mut buffer, "5=x", SerializeFormat::Text, &NumericNamer),
            Err(WireError::Malformed(2))
        );

        let mut buffer = Buffer::new();
        let input = "[{\"g\":5}";
        assert_eq!(
            deserialize_str(&mut buffer, input, SerializeFormat::Json, &NumericNamer),
            Err(WireError::Truncated(input.len()))
        );
    }
}
