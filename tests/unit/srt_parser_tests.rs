/*!
 * Tests for SRT block segmentation and parsing
 */

use subcue::cue::Cue;
use subcue::srt_parser::parse_srt;

use crate::common::SAMPLE_SRT;

/// End-to-end parse of a single canonical block
#[test]
fn test_parse_srt_withSingleBlock_shouldYieldOneCleanCue() {
    let document = "1\n00:00:03,602 --> 00:00:05,437\nHello, <i>welcome</i> to the show.\n";
    let cues = parse_srt(document, false);

    assert_eq!(cues.len(), 1);
    assert_eq!(cues[0].start, 3.602);
    assert_eq!(cues[0].end, 5.437);
    assert_eq!(cues[0].en, "Hello, welcome to the show.");
    assert_eq!(cues[0].vi, "");
}

/// Empty and whitespace-only documents yield empty sequences
#[test]
fn test_parse_srt_withEmptyDocument_shouldReturnEmpty() {
    assert!(parse_srt("", false).is_empty());
    assert!(parse_srt("   \n\n  \n", false).is_empty());
}

/// A block whose text is only markup produces no cue
#[test]
fn test_parse_srt_withMarkupOnlyText_shouldDropBlock() {
    let document = "1\n00:00:01,000 --> 00:00:02,000\n<i></i>\n";
    assert!(parse_srt(document, false).is_empty());
}

/// Cue order matches block order in the document
#[test]
fn test_parse_srt_withMultipleBlocks_shouldPreserveOrder() {
    let cues = parse_srt(SAMPLE_SRT, false);

    assert_eq!(cues.len(), 3);
    assert_eq!(cues[0].en, "This is a test subtitle.");
    assert_eq!(cues[1].en, "It contains multiple entries.");
    assert_eq!(cues[2].en, "For testing purposes.");
    assert_eq!(cues[0].start, 1.0);
    assert_eq!(cues[2].end, 14.0);
}

/// CRLF and CR line endings are normalized before parsing
#[test]
fn test_parse_srt_withCrlfLineEndings_shouldParseNormally() {
    let document = "1\r\n00:00:01,000 --> 00:00:02,000\r\nWindows line endings.\r\n\r\n2\r\n00:00:03,000 --> 00:00:04,000\r\nStill fine.\r\n";
    let cues = parse_srt(document, false);

    assert_eq!(cues.len(), 2);
    assert_eq!(cues[0].en, "Windows line endings.");
    assert_eq!(cues[1].en, "Still fine.");
}

/// Blocks without a timestamp range line are skipped, the rest parse
#[test]
fn test_parse_srt_withMalformedBlock_shouldSkipOnlyThatBlock() {
    let document = "1\nnot a timestamp\nGarbage block.\n\n2\n00:00:05,000 --> 00:00:06,000\nGood block.\n";
    let cues = parse_srt(document, false);

    assert_eq!(cues, vec![Cue::new(5.0, 6.0, "Good block.")]);
}

/// The sequence index line is optional
#[test]
fn test_parse_srt_withoutIndexLine_shouldStillParse() {
    let document = "00:00:01,000 --> 00:00:02,000\nNo index here.\n";
    let cues = parse_srt(document, false);

    assert_eq!(cues.len(), 1);
    assert_eq!(cues[0].en, "No index here.");
}

/// Dot sub-second separators are tolerated in the range line
#[test]
fn test_parse_srt_withDotSeparators_shouldParse() {
    let document = "1\n00:00:01.500 --> 00:00:02.250\nDotted.\n";
    let cues = parse_srt(document, false);

    assert_eq!(cues.len(), 1);
    assert_eq!(cues[0].start, 1.5);
    assert_eq!(cues[0].end, 2.25);
}

/// Multi-line text is joined with single spaces
#[test]
fn test_parse_srt_withMultiLineText_shouldJoinWithSpaces() {
    let document = "1\n00:00:01,000 --> 00:00:04,000\nFirst line\nsecond line\n";
    let cues = parse_srt(document, false);

    assert_eq!(cues.len(), 1);
    assert_eq!(cues[0].en, "First line second line");
}

/// Inverted time ranges are dropped
#[test]
fn test_parse_srt_withInvertedRange_shouldDropBlock() {
    let document = "1\n00:00:05,000 --> 00:00:01,000\nBackwards.\n";
    assert!(parse_srt(document, false).is_empty());
}

/// Markup survives when keep_markup is requested
#[test]
fn test_parse_srt_withKeepMarkup_shouldPreserveTags() {
    let document = "1\n00:00:01,000 --> 00:00:02,000\n<i>Emphasis</i>\n";
    let cues = parse_srt(document, true);

    assert_eq!(cues.len(), 1);
    assert_eq!(cues[0].en, "<i>Emphasis</i>");
}
