//! Round trips across both wire formats, with and without glyph names.

use scribe_buffer::Buffer;
use scribe_wire::{
    deserialize_str, serialize_to_string, GlyphNamer, NumericNamer, SerializeFlags,
    SerializeFormat,
};

// A tiny two-glyph "font" for name round trips.
struct TestNamer;

impl GlyphNamer for TestNamer {
    fn glyph_to_name(&self, glyph: u32) -> Option<String> {
        match glyph {
            5 => Some("five".to_string()),
            7 => Some("seven".to_string()),
            _ => None,
        }
    }

    fn glyph_from_name(&self, name: &str) -> Option<u32> {
        match name {
            "five" => Some(5),
            "seven" => Some(7),
            _ => name.parse().ok(),
        }
    }
}

fn sample_buffer() -> Buffer {
    let mut buffer = Buffer::new();
    buffer.add(5, 0);
    buffer.add(7, 1);
    buffer.clear_positions();
    buffer.pos_mut()[0].x_advance = 10;
    buffer.pos_mut()[0].x_offset = -3;
    buffer.pos_mut()[0].y_offset = 2;
    buffer.pos_mut()[1].x_advance = 12;
    buffer.pos_mut()[1].y_advance = -6;
    buffer
}

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
fn test_two_glyph_text_scenario() {
    let mut buffer = Buffer::new();
    buffer.add(5, 0);
    buffer.add(7, 1);
    buffer.clear_positions();
    buffer.pos_mut()[0].x_advance = 10;
    buffer.pos_mut()[1].x_advance = 12;

    let s = serialize_to_string(
        &buffer,
        SerializeFormat::Text,
        SerializeFlags::empty(),
        &NumericNamer,
    );
    assert_eq!(s, "5=0+10|7=1+12");

    let mut parsed = Buffer::new();
    deserialize_str(&mut parsed, &s, SerializeFormat::Text, &NumericNamer).unwrap();
    assert_eq!(records(&parsed), records(&buffer));
}

#[test]
fn test_text_round_trip_with_offsets() {
    let buffer = sample_buffer();
    let s = serialize_to_string(
        &buffer,
        SerializeFormat::Text,
        SerializeFlags::empty(),
        &NumericNamer,
    );
    assert_eq!(s, "5=0@-3,2+10|7=1+12,-6");

    let mut parsed = Buffer::new();
    deserialize_str(&mut parsed, &s, SerializeFormat::Text, &NumericNamer).unwrap();
    assert_eq!(records(&parsed), records(&buffer));
}

#[test]
fn test_json_round_trip_with_offsets() {
    let buffer = sample_buffer();
    let s = serialize_to_string(
        &buffer,
        SerializeFormat::Json,
        SerializeFlags::empty(),
        &NumericNamer,
    );

    let mut parsed = Buffer::new();
    deserialize_str(&mut parsed, &s, SerializeFormat::Json, &NumericNamer).unwrap();
    assert_eq!(records(&parsed), records(&buffer));
}

#[test]
fn test_named_round_trips_in_both_formats() {
    let buffer = sample_buffer();

    for format in [SerializeFormat::Text, SerializeFormat::Json] {
        let s = serialize_to_string(&buffer, format, SerializeFlags::empty(), &TestNamer);
        assert!(s.contains("five"));
        assert!(s.contains("seven"));

        let mut parsed = Buffer::new();
        deserialize_str(&mut parsed, &s, format, &TestNamer).unwrap();
        assert_eq!(records(&parsed), records(&buffer));
    }
}

#[test]
fn test_no_positions_round_trip_zeroes_positions() {
    let buffer = sample_buffer();
    let s = serialize_to_string(
        &buffer,
        SerializeFormat::Text,
        SerializeFlags::NO_POSITIONS,
        &NumericNamer,
    );
    assert_eq!(s, "5=0|7=1");

    let mut parsed = Buffer::new();
    deserialize_str(&mut parsed, &s, SerializeFormat::Text, &NumericNamer).unwrap();
    assert_eq!(
        records(&parsed),
        [(5, 0, 0, 0, 0, 0), (7, 1, 0, 0, 0, 0)]
    );
}

#[test]
fn test_no_clusters_round_trip_defaults_to_indices() {
    let buffer = sample_buffer();
    let s = serialize_to_string(
        &buffer,
        SerializeFormat::Json,
        SerializeFlags::NO_CLUSTERS,
        &NumericNamer,
    );

    let mut parsed = Buffer::new();
    deserialize_str(&mut parsed, &s, SerializeFormat::Json, &NumericNamer).unwrap();
    assert_eq!(parsed.info()[0].cluster, 0);
    assert_eq!(parsed.info()[1].cluster, 1);
    assert_eq!(parsed.pos()[1].x_advance, 12);
}

#[test]
fn test_json_output_is_valid_json() {
    let buffer = sample_buffer();
    let s = serialize_to_string(
        &buffer,
        SerializeFormat::Json,
        SerializeFlags::empty(),
        &TestNamer,
    );

    let value: serde_json::Value = serde_json::from_str(&s).unwrap();
    let array = value.as_array().unwrap();
    assert_eq!(array.len(), 2);
    assert_eq!(array[0]["g"], "five");
    assert_eq!(array[0]["cl"], 0);
    assert_eq!(array[0]["dx"], -3);
    assert_eq!(array[0]["dy"], 2);
    assert_eq!(array[1]["g"], "seven");
    assert_eq!(array[1]["ax"], 12);
    assert_eq!(array[1]["ay"], -6);
}

#[test]
fn test_no_glyph_names_forces_numeric_ids() {
    let buffer = sample_buffer();
    let s = serialize_to_string(
        &buffer,
        SerializeFormat::Json,
        SerializeFlags::NO_GLYPH_NAMES,
        &TestNamer,
    );

    let value: serde_json::Value = serde_json::from_str(&s).unwrap();
    assert_eq!(value[0]["g"], 5);
    assert_eq!(value[1]["g"], 7);
}
