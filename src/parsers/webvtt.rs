/*!
 * WebVTT parser.
 *
 * Blocks after the `WEBVTT` header are classified as:
 * - `STYLE` blocks, kept verbatim as [`Style`] lines
 * - `NOTE` comment blocks, dropped
 * - cue blocks, identified by their `-->` timing line; the line right before
 *   it becomes the cue identifier and every line after it is cue text
 */

use log::debug;

use super::{normalize_line_endings, split_blocks, split_timing_line};
use super::{CaptionFormat, CaptionParser, CueCollector, ParsedCaptions};
use crate::caption::{Caption, Style};
use crate::errors::{CaptionError, Result};

const HEADER: &str = "WEBVTT";
const STYLE_MARKER: &str = "STYLE";
const NOTE_MARKER: &str = "NOTE";

/// Parser for WebVTT documents
#[derive(Debug, Default, Clone, Copy)]
pub struct WebVttParser;

impl WebVttParser {
    /// `WEBVTT`, optionally followed by a space or tab and free text
    fn is_header(line: &str) -> bool {
        Self::is_marker(line, HEADER)
    }

    /// `marker` alone or followed by whitespace-separated text
    fn is_marker(line: &str, marker: &str) -> bool {
        let line = line.trim_end();
        match line.strip_prefix(marker) {
            Some(rest) => rest.is_empty() || rest.starts_with(' ') || rest.starts_with('\t'),
            None => false,
        }
    }

    /// Parse a block holding a timing line at `timing_index`
    fn parse_cue(block: &[&str], timing_index: usize) -> Result<Caption> {
        let timing_line = block[timing_index];
        let (start, end) = split_timing_line(timing_line).ok_or_else(|| {
            CaptionError::MalformedCaption(format!("Invalid timing line: {:?}", timing_line))
        })?;

        let mut caption = Caption::new(start, end, block[timing_index + 1..].to_vec())?;
        if timing_index > 0 {
            caption.identifier = Some(block[timing_index - 1].to_string());
        }
        Ok(caption)
    }

    fn timing_index(block: &[&str]) -> Option<usize> {
        block.iter().position(|line| line.contains("-->"))
    }
}

impl CaptionParser for WebVttParser {
    fn format(&self) -> CaptionFormat {
        CaptionFormat::WebVtt
    }

    fn parse(&self, content: &str) -> Result<ParsedCaptions> {
        let normalized = normalize_line_endings(content);
        let blocks = split_blocks(&normalized);

        let Some((header_block, cue_blocks)) = blocks.split_first() else {
            return Err(CaptionError::MalformedFile("Empty WebVTT input".to_string()));
        };

        if !Self::is_header(header_block[0]) {
            return Err(CaptionError::MalformedFile(format!(
                "Missing WEBVTT header, found {:?}",
                header_block[0]
            )));
        }

        let mut collector = CueCollector::new(self.format());

        // Header metadata lines are ignored, but a cue glued to the header still counts
        let header_rest = &header_block[1..];
        if let Some(index) = Self::timing_index(header_rest) {
            collector.push_cue(1, Self::parse_cue(header_rest, index))?;
        }

        for (offset, block) in cue_blocks.iter().enumerate() {
            let block_number = offset + 2;

            if block[0].trim_end() == STYLE_MARKER {
                collector.push_style(Style::new(block[1..].to_vec()));
                continue;
            }

            if Self::is_marker(block[0], NOTE_MARKER) {
                debug!("Skipping comment block {}", block_number);
                continue;
            }

            match Self::timing_index(block) {
                Some(index) => collector.push_cue(block_number, Self::parse_cue(block, index))?,
                None => debug!("Ignoring unrecognized block {}: {:?}", block_number, block[0]),
            }
        }

        collector.finish()
    }
}
