/*!
 * Tests for timestamp parsing and rounding
 */

use subcue::time_utils::{parse_timestamp, round_to_millis};

/// Test full SRT timestamp parsing
#[test]
fn test_parse_timestamp_withFullSrtTimestamp_shouldReturnExactSeconds() {
    assert_eq!(parse_timestamp("00:00:03,602"), 3.602);
    assert_eq!(parse_timestamp("00:00:05,437"), 5.437);
    assert_eq!(parse_timestamp("01:23:45,678"), 5025.678);
}

/// Test that dot and comma sub-second separators are equivalent
#[test]
fn test_parse_timestamp_withDotSeparator_shouldMatchCommaSeparator() {
    assert_eq!(parse_timestamp("00:00:03.602"), parse_timestamp("00:00:03,602"));
}

/// Test two-component minutes:seconds form
#[test]
fn test_parse_timestamp_withMinutesSeconds_shouldReturnSeconds() {
    assert_eq!(parse_timestamp("02:05"), 125.0);
    assert_eq!(parse_timestamp("00:07"), 7.0);
    assert_eq!(parse_timestamp("01:30.5"), 90.5);
}

/// Test bare numeric seconds
#[test]
fn test_parse_timestamp_withBareNumber_shouldParseAsSeconds() {
    assert_eq!(parse_timestamp("7"), 7.0);
    assert_eq!(parse_timestamp("7.5"), 7.5);
    assert_eq!(parse_timestamp("  12,25  "), 12.25);
}

/// Test that malformed input degrades to zero instead of failing
#[test]
fn test_parse_timestamp_withMalformedInput_shouldReturnZero() {
    assert_eq!(parse_timestamp(""), 0.0);
    assert_eq!(parse_timestamp("abc"), 0.0);
    assert_eq!(parse_timestamp("aa:bb"), 0.0);
    assert_eq!(parse_timestamp("aa:bb:cc"), 0.0);
    // Four components fall through to the bare-number path, which fails
    assert_eq!(parse_timestamp("00:00:00:00"), 0.0);
}

/// Test that unparsable components degrade to zero within a valid shape
#[test]
fn test_parse_timestamp_withPartiallyMalformedInput_shouldZeroBadComponents() {
    assert_eq!(parse_timestamp("xx:01:30"), 90.0);
    assert_eq!(parse_timestamp("01:xx"), 60.0);
}

/// Test millisecond rounding
#[test]
fn test_round_to_millis_withExtraPrecision_shouldRoundToThreeDecimals() {
    assert_eq!(round_to_millis(1.23456), 1.235);
    assert_eq!(round_to_millis(3.602), 3.602);
    assert_eq!(round_to_millis(0.0), 0.0);
}
