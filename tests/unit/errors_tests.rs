/*!
 * Tests for error types and conversions
 */

use vttkit::CaptionError;

#[test]
fn test_captionError_malformedCaption_shouldDisplayCorrectly() {
    let error = CaptionError::MalformedCaption("Invalid timestamp: \"01:00\"".to_string());
    let display = format!("{}", error);
    assert!(display.contains("Malformed caption"));
    assert!(display.contains("01:00"));
    assert!(error.is_malformed_caption());
    assert!(!error.is_malformed_file());
}

#[test]
fn test_captionError_malformedFile_shouldDisplayCorrectly() {
    let error = CaptionError::MalformedFile("Missing WEBVTT header".to_string());
    assert!(format!("{}", error).contains("Malformed file"));
    assert!(error.is_malformed_file());
    assert!(!error.is_malformed_caption());
}

#[test]
fn test_captionError_missingFilename_shouldDisplayCorrectly() {
    let display = format!("{}", CaptionError::MissingFilename);
    assert!(display.contains("No filename"));
}

#[test]
fn test_captionError_textTypeMismatch_shouldNameFoundType() {
    let error = CaptionError::TextTypeMismatch { found: "number".to_string() };
    assert_eq!(format!("{}", error), "Text must be a string, got number");
}

#[test]
fn test_captionError_fromIoError_shouldWrapAsIo() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
    let error: CaptionError = io_error.into();
    let display = format!("{}", error);
    assert!(display.contains("I/O error"));
    assert!(display.contains("File not found"));
}

#[test]
fn test_captionError_intoAnyhow_shouldKeepMessage() {
    let error: anyhow::Error = CaptionError::MissingFilename.into();
    assert!(error.downcast_ref::<CaptionError>().is_some());
}
