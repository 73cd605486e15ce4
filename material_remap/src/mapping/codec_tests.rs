/// Tests for the mapping binary format

use super::*;

// ============================================================================
// Helper Functions
// ============================================================================

fn id(value: &str) -> MaterialIdentity {
    MaterialIdentity::new(value)
}

fn sample() -> Mapping {
    vec![
        (id("id_b"), id("id_y")),
        (id("id_a"), id("id_x")),
    ].into_iter().collect()
}

fn header(magic: &[u8; 4], version: u32, count: u32) -> Vec<u8> {
    let mut bytes = magic.to_vec();
    bytes.extend_from_slice(&version.to_le_bytes());
    bytes.extend_from_slice(&count.to_le_bytes());
    bytes
}

fn push_string(bytes: &mut Vec<u8>, raw: &[u8]) {
    bytes.extend_from_slice(&(raw.len() as u32).to_le_bytes());
    bytes.extend_from_slice(raw);
}

// ============================================================================
// Tests: Encoding
// ============================================================================

#[test]
fn test_header_is_twelve_bytes() {
    assert_eq!(HEADER_SIZE, 12);
}

#[test]
fn test_serialize_layout() {
    let bytes = serialize(&sample());

    let mut expected = header(b"RMAP", 1, 2);
    push_string(&mut expected, b"id_a");
    push_string(&mut expected, b"id_x");
    push_string(&mut expected, b"id_b");
    push_string(&mut expected, b"id_y");
    assert_eq!(bytes, expected);
}

#[test]
fn test_serialize_is_deterministic() {
    let reversed: Mapping = sample().sorted_entries().into_iter().rev()
        .map(|(s, d)| (s.clone(), d.clone()))
        .collect();
    assert_eq!(serialize(&sample()), serialize(&reversed));
}

#[test]
fn test_round_trip() {
    let mut mapping = sample();
    mapping.insert(id("ünïcode"), id(""));
    mapping.insert(id("same"), id("same"));

    let decoded = deserialize(&serialize(&mapping)).unwrap();
    assert_eq!(decoded, mapping);
}

#[test]
fn test_round_trip_empty() {
    let bytes = serialize(&Mapping::new());
    assert_eq!(bytes.len(), 12);
    assert!(deserialize(&bytes).unwrap().is_empty());
}

// ============================================================================
// Tests: Decode errors
// ============================================================================

#[test]
fn test_deserialize_truncated_header() {
    let result = deserialize(b"RMAP\x01\x00");
    assert!(matches!(result, Err(Error::MalformedMapping(_))));
}

#[test]
fn test_deserialize_truncated_entry() {
    let bytes = serialize(&sample());
    let result = deserialize(&bytes[..bytes.len() - 1]);
    assert!(matches!(result, Err(Error::MalformedMapping(_))));
}

#[test]
fn test_deserialize_bad_magic() {
    let result = deserialize(&header(b"NOPE", 1, 0));
    assert!(matches!(result, Err(Error::MalformedMapping(_))));
}

#[test]
fn test_deserialize_unsupported_version() {
    let result = deserialize(&header(b"RMAP", 7, 0));
    assert!(matches!(result, Err(Error::UnsupportedVersion(7))));
}

#[test]
fn test_deserialize_invalid_utf8() {
    let mut bytes = header(b"RMAP", 1, 1);
    push_string(&mut bytes, &[0xff, 0xfe]);
    push_string(&mut bytes, b"id_x");
    assert!(matches!(deserialize(&bytes), Err(Error::MalformedMapping(_))));
}

#[test]
fn test_deserialize_duplicate_source() {
    let mut bytes = header(b"RMAP", 1, 2);
    push_string(&mut bytes, b"id_a");
    push_string(&mut bytes, b"id_x");
    push_string(&mut bytes, b"id_a");
    push_string(&mut bytes, b"id_y");
    assert!(matches!(deserialize(&bytes), Err(Error::MalformedMapping(_))));
}

#[test]
fn test_deserialize_trailing_bytes() {
    let mut bytes = serialize(&sample());
    bytes.push(0);
    assert!(matches!(deserialize(&bytes), Err(Error::MalformedMapping(_))));
}

#[test]
fn test_deserialize_oversized_count() {
    let result = deserialize(&header(b"RMAP", 1, u32::MAX));
    assert!(matches!(result, Err(Error::MalformedMapping(_))));
}
