/*!
 * Integration tests for read, convert, mutate and save workflows
 */

use std::fs;
use anyhow::Result;
use vttkit::{Caption, CaptionError, WebVtt};
use crate::common;

/// Appending a caption and saving back to the source file
#[test]
fn test_saveCaptions_withAppendedCaption_shouldRewriteSource() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let source = common::copy_resource(temp_dir.path(), "one_caption.vtt")?;

    let mut vtt = WebVtt::read(&source)?;
    vtt.captions.push(Caption::new(
        "00:00:07.000",
        "00:00:11.890",
        vec!["New caption text line1", "New caption text line2"],
    )?);
    let written = vtt.save(None)?;

    assert_eq!(written, source);
    assert_eq!(
        common::lines_with_terminators(&fs::read_to_string(&source)?),
        vec![
            "WEBVTT\n",
            "\n",
            "00:00:00.500 --> 00:00:07.000\n",
            "Caption text #1\n",
            "\n",
            "00:00:07.000 --> 00:00:11.890\n",
            "New caption text line1\n",
            "New caption text line2",
        ]
    );
    Ok(())
}

/// SubRip to WebVTT conversion
#[test]
fn test_srtConversion_withOneCaption_shouldWriteVttNextToSource() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let source = common::copy_resource(temp_dir.path(), "one_caption.srt")?;

    let mut vtt = WebVtt::from_srt(&source)?;
    vtt.save(None)?;

    let target = temp_dir.path().join("one_caption.vtt");
    assert!(target.exists());
    assert_eq!(
        common::lines_with_terminators(&fs::read_to_string(&target)?),
        vec!["WEBVTT\n", "\n", "00:00:00.500 --> 00:00:07.000\n", "Caption text #1"]
    );
    Ok(())
}

/// SubRip timing with 900 ms keeps every digit
#[test]
fn test_srtConversion_withFractionalEnd_shouldKeepMilliseconds() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let source = common::create_test_file(
        temp_dir.path(),
        "clip.srt",
        "1\n00:00:00,500 --> 00:00:07,900\nCaption text #1\n",
    )?;

    let vtt = WebVtt::from_srt(&source)?;

    assert_eq!(vtt.content(), "WEBVTT\n\n00:00:00.500 --> 00:00:07.900\nCaption text #1");
    assert_eq!(vtt[0].end_in_seconds(), 7);
    Ok(())
}

/// SBV to WebVTT conversion
#[test]
fn test_sbvConversion_withTwoCaptions_shouldPreserveOrderAndLines() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let source = common::copy_resource(temp_dir.path(), "two_captions.sbv")?;

    let mut vtt = WebVtt::from_sbv(&source)?;
    vtt.save(None)?;

    let target = temp_dir.path().join("two_captions.vtt");
    assert!(target.exists());
    assert_eq!(
        common::lines_with_terminators(&fs::read_to_string(&target)?),
        vec![
            "WEBVTT\n",
            "\n",
            "00:00:00.378 --> 00:00:11.378\n",
            "Caption text #1\n",
            "\n",
            "00:00:11.378 --> 00:00:12.305\n",
            "Caption text #2 (line 1)\n",
            "Caption text #2 (line 2)",
        ]
    );
    Ok(())
}

/// Saving into another directory keeps the file name
#[test]
fn test_saveToOtherLocation_withDirectory_shouldKeepStem() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let target_dir = temp_dir.path().join("test_folder");
    fs::create_dir_all(&target_dir)?;

    let mut vtt = WebVtt::read(common::test_resource_path("one_caption.vtt"))?;
    let written = vtt.save(Some(&target_dir))?;

    assert_eq!(written, target_dir.join("one_caption.vtt"));
    assert!(written.exists());
    assert_eq!(vtt.file(), Some(written.as_path()));
    Ok(())
}

/// Saving to a specific filename
#[test]
fn test_saveSpecificFilename_withExtension_shouldUseIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let output_file = temp_dir.path().join("test_folder").join("custom_name.vtt");

    let mut vtt = WebVtt::read(common::test_resource_path("one_caption.vtt"))?;
    vtt.save(Some(&output_file))?;

    assert!(output_file.exists());
    Ok(())
}

/// Saving to a filename without extension appends .vtt
#[test]
fn test_saveSpecificFilename_withoutExtension_shouldAppendVtt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let output_file = temp_dir.path().join("test_folder").join("custom_name");

    let mut vtt = WebVtt::read(common::test_resource_path("one_caption.vtt"))?;
    vtt.save(Some(&output_file))?;

    assert!(temp_dir.path().join("test_folder").join("custom_name.vtt").exists());
    Ok(())
}

/// Identifiers survive a read/save cycle
#[test]
fn test_saveIdentifiers_withUnchangedDocument_shouldReemitThem() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let source = common::copy_resource(temp_dir.path(), "using_identifiers.vtt")?;
    let output = temp_dir.path().join("new_using_identifiers.vtt");

    let mut vtt = WebVtt::read(&source)?;
    vtt.save(Some(&output))?;

    let content = fs::read_to_string(&output)?;
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        vec![
            "WEBVTT",
            "",
            "00:00:00.500 --> 00:00:07.000",
            "Caption text #1",
            "",
            "second caption",
            "00:00:07.000 --> 00:00:11.890",
            "Caption text #2",
            "",
            "00:00:11.890 --> 00:00:16.320",
            "Caption text #3",
            "",
            "4",
            "00:00:16.320 --> 00:00:21.580",
            "Caption text #4",
            "",
            "00:00:21.580 --> 00:00:23.880",
            "Caption text #5",
            "",
            "00:00:23.880 --> 00:00:27.280",
            "Caption text #6",
        ]
    );
    Ok(())
}

/// Updated, removed and new identifiers are reflected on save
#[test]
fn test_saveUpdatedIdentifiers_withMutations_shouldReflectThem() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let source = common::copy_resource(temp_dir.path(), "using_identifiers.vtt")?;
    let output = temp_dir.path().join("new_using_identifiers.vtt");

    let mut vtt = WebVtt::read(&source)?;
    vtt.captions[0].identifier = Some("first caption".to_string());
    vtt.captions[1].identifier = None;
    vtt.captions[3].identifier = Some("44".to_string());
    vtt.captions.push(
        Caption::with_text("00:00:27.280", "00:00:29.200", "Caption text #7")?.with_identifier("last caption"),
    );
    vtt.save(Some(&output))?;

    let content = fs::read_to_string(&output)?;
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        vec![
            "WEBVTT",
            "",
            "first caption",
            "00:00:00.500 --> 00:00:07.000",
            "Caption text #1",
            "",
            "00:00:07.000 --> 00:00:11.890",
            "Caption text #2",
            "",
            "00:00:11.890 --> 00:00:16.320",
            "Caption text #3",
            "",
            "44",
            "00:00:16.320 --> 00:00:21.580",
            "Caption text #4",
            "",
            "00:00:21.580 --> 00:00:23.880",
            "Caption text #5",
            "",
            "00:00:23.880 --> 00:00:27.280",
            "Caption text #6",
            "",
            "last caption",
            "00:00:27.280 --> 00:00:29.200",
            "Caption text #7",
        ]
    );
    assert!(!content.ends_with('\n'));
    Ok(())
}

/// Styles survive a read/save cycle byte for byte
#[test]
fn test_saveStyles_withStyleBlocks_shouldRoundTrip() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let source = common::copy_resource(temp_dir.path(), "styles.vtt")?;
    let original = fs::read_to_string(&source)?;

    let mut vtt = WebVtt::read(&source)?;
    vtt.save(None)?;

    assert_eq!(fs::read_to_string(&source)?, original);
    Ok(())
}

/// A document built in memory has nowhere to save by default
#[test]
fn test_saveNoFilename_withNewDocument_shouldFailThenSucceedWithTarget() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let mut vtt = WebVtt::with_captions(vec![Caption::with_text("00:01.000", "00:02.000", "Hi")?]);

    assert!(matches!(vtt.save(None), Err(CaptionError::MissingFilename)));

    vtt.set_file(temp_dir.path().join("memory.vtt"));
    let written = vtt.save(None)?;
    assert_eq!(fs::read_to_string(written)?, "WEBVTT\n\n00:00:01.000 --> 00:00:02.000\nHi");
    Ok(())
}

/// Converted files parse back as WebVTT with the same captions
#[test]
fn test_conversion_reparsedOutput_shouldMatchSource() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let source = common::copy_resource(temp_dir.path(), "sample.srt")?;

    let mut converted = WebVtt::from_srt(&source)?;
    let written = converted.save(None)?;
    let reparsed = WebVtt::read(&written)?;

    assert_eq!(reparsed.captions, converted.captions);
    Ok(())
}
