// ==========================================
// Location codec integration tests
// ==========================================
// Test goal: reversible percent-escaped room/position codes
// Coverage: round trips with spaces, non-ASCII and embedded
// separators; structural decode failures
// ==========================================

use excipient_stock::{LocationFormatError, StorageLocation};

// ==========================================
// Part 1: round trips
// ==========================================

#[test]
fn test_scenario_1_round_trip_with_space_unicode_and_slash() {
    // Room with a space and a non-ASCII character, position with an
    // embedded separator character
    let original = StorageLocation::new("Sala Ω", "A-12/3");

    let code = original.encode();
    let decoded = StorageLocation::decode(&code).expect("well-formed code");

    assert_eq!(decoded, original, "decode(encode(r, p)) == (r, p)");
}

#[test]
fn test_scenario_2_round_trip_plain_ascii() {
    let original = StorageLocation::new("Sala01", "B-07");

    let code = original.encode();
    assert_eq!(code, "Sala01/B-07", "unreserved characters stay readable");

    let decoded = StorageLocation::decode(&code).expect("well-formed code");
    assert_eq!(decoded, original);
}

#[test]
fn test_scenario_3_round_trip_percent_sign_in_label() {
    // A literal '%' in a label must survive the trip
    let original = StorageLocation::new("Sala 2", "50% quarantine");

    let decoded = StorageLocation::decode(&original.encode()).expect("well-formed code");
    assert_eq!(decoded, original);
}

#[test]
fn test_scenario_4_encoded_form_is_a_single_path_segment_pair() {
    let location = StorageLocation::new("Sala/Anexo", "A/1");

    let code = location.encode();
    assert_eq!(
        code.matches('/').count(),
        1,
        "component separators are escaped: {}",
        code
    );
}

// ==========================================
// Part 2: structural failures
// ==========================================

#[test]
fn test_scenario_5_missing_separator_rejected() {
    let result = StorageLocation::decode("Sala01");

    assert_eq!(
        result,
        Err(LocationFormatError::SegmentCount { found: 1 })
    );
}

#[test]
fn test_scenario_6_too_many_segments_rejected() {
    let result = StorageLocation::decode("Sala01/A/extra");

    assert_eq!(
        result,
        Err(LocationFormatError::SegmentCount { found: 3 })
    );
}

#[test]
fn test_scenario_7_invalid_escape_rejected() {
    // %FF decodes to a byte sequence that is not valid UTF-8
    let result = StorageLocation::decode("Sala01/%FF");

    assert!(
        matches!(result, Err(LocationFormatError::InvalidEscape { .. })),
        "got {:?}",
        result
    );
}

#[test]
fn test_scenario_8_empty_segments_are_structurally_valid() {
    // Absence of content is not a format error, only malformed
    // structure is
    let decoded = StorageLocation::decode("/").expect("two empty segments");

    assert_eq!(decoded.room_name, "");
    assert_eq!(decoded.position_label, "");
}
