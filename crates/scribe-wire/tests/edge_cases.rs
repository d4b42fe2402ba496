//! Chunk boundaries, malformed streams, and truncation detection.

use scribe_buffer::Buffer;
use scribe_wire::{
    deserialize_json, deserialize_str, deserialize_text, serialize_glyphs, serialize_to_string,
    NumericNamer, SerializeFlags, SerializeFormat, WireError,
};

fn long_buffer(n: u32) -> Buffer {
    let mut buffer = Buffer::new();
    for i in 0..n {
        buffer.add(1000 + i, i);
    }
    buffer.clear_positions();
    for (i, pos) in buffer.pos_mut().iter_mut().enumerate() {
        pos.x_advance = 100 + i as i32;
    }
    buffer
}

#[test]
fn test_tiny_chunks_stream_the_same_bytes() {
    let buffer = long_buffer(20);
    let whole = serialize_to_string(
        &buffer,
        SerializeFormat::Json,
        SerializeFlags::empty(),
        &NumericNamer,
    );

    // A chunk that fits one record at a time must still produce the exact
    // stream once concatenated.
    let mut streamed = Vec::new();
    let mut chunk = [0u8; 48];
    let mut start = 0;
    while start < buffer.len() {
        let (consumed, written) = serialize_glyphs(
            &buffer,
            start,
            buffer.len(),
            &mut chunk,
            SerializeFormat::Json,
            SerializeFlags::empty(),
            &NumericNamer,
        );
        assert!(consumed > 0);
        streamed.extend_from_slice(&chunk[..written]);
        start += consumed;
    }

    assert_eq!(streamed, whole.as_bytes());
}

#[test]
fn test_malformed_numeric_aborts_at_field_start() {
    let mut buffer = Buffer::new();
    let input = "5=0+10|7=x+12";
    let (more, consumed) = deserialize_text(&mut buffer, input, &NumericNamer);

    assert!(!more);
    assert_eq!(consumed, 9); // offset of the bad cluster span
    assert_eq!(buffer.len(), 1); // the first record already flushed
}

#[test]
fn test_text_tolerates_whitespace_between_records() {
    let mut buffer = Buffer::new();
    let (more, consumed) = deserialize_text(&mut buffer, " 5=0+10 | 7=1+12 ", &NumericNamer);
    assert!(more);
    assert_eq!(consumed, 17);
    assert_eq!(buffer.len(), 2);
    assert_eq!(buffer.info()[1].codepoint, 7);
}

#[test]
fn test_json_complete_vs_truncated() {
    let mut buffer = Buffer::new();
    let (more, _) = deserialize_json(&mut buffer, "[{\"g\":5}]", &NumericNamer);
    assert!(!more);

    let mut buffer = Buffer::new();
    let (more, _) = deserialize_json(&mut buffer, "[{\"g\":5},", &NumericNamer);
    assert!(more);

    let mut buffer = Buffer::new();
    assert_eq!(
        deserialize_str(&mut buffer, "[{\"g\":5},", SerializeFormat::Json, &NumericNamer),
        Err(WireError::Truncated(9))
    );
}

#[test]
fn test_json_garbage_after_array_is_malformed() {
    let mut buffer = Buffer::new();
    let input = "[{\"g\":5}] trailing";
    let result = deserialize_str(&mut buffer, input, SerializeFormat::Json, &NumericNamer);
    assert!(matches!(result, Err(WireError::Malformed(_))));
}

#[test]
fn test_empty_inputs() {
    let mut buffer = Buffer::new();
    assert_eq!(
        deserialize_str(&mut buffer, "", SerializeFormat::Text, &NumericNamer),
        Ok(())
    );
    assert!(buffer.is_empty());

    let mut buffer = Buffer::new();
    assert_eq!(
        deserialize_str(&mut buffer, "[]", SerializeFormat::Json, &NumericNamer),
        Ok(())
    );
    assert!(buffer.is_empty());
}

#[test]
fn test_deserializing_appends_to_existing_records() {
    let mut buffer = Buffer::new();
    deserialize_str(&mut buffer, "5=0+10", SerializeFormat::Text, &NumericNamer).unwrap();
    deserialize_str(&mut buffer, "7=1+12", SerializeFormat::Text, &NumericNamer).unwrap();

    assert_eq!(buffer.len(), 2);
    assert_eq!(buffer.info()[0].codepoint, 5);
    assert_eq!(buffer.info()[1].codepoint, 7);
    assert_eq!(buffer.pos()[1].x_advance, 12);
}

#[test]
fn test_large_run_round_trips_through_both_formats() {
    let buffer = long_buffer(100);

    for format in [SerializeFormat::Text, SerializeFormat::Json] {
        let s = serialize_to_string(&buffer, format, SerializeFlags::empty(), &NumericNamer);

        let mut parsed = Buffer::new();
        deserialize_str(&mut parsed, &s, format, &NumericNamer).unwrap();

        assert_eq!(parsed.len(), buffer.len());
        for i in 0..buffer.len() {
            assert_eq!(parsed.info()[i].codepoint, buffer.info()[i].codepoint);
            assert_eq!(parsed.info()[i].cluster, buffer.info()[i].cluster);
            assert_eq!(parsed.pos()[i].x_advance, buffer.pos()[i].x_advance);
        }
    }
}
