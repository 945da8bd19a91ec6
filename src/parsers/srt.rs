/*!
 * SubRip (SRT) parser.
 *
 * Each block holds a numeric sequence index, a `HH:MM:SS,mmm --> HH:MM:SS,mmm`
 * timing line and the cue text. Sequence numbers are discarded and never
 * validated; comma separators are translated to the canonical dot form.
 */

use super::{is_timing_line, normalize_line_endings, split_blocks, split_timing_line};
use super::{CaptionFormat, CaptionParser, CueCollector, ParsedCaptions};
use crate::caption::Caption;
use crate::errors::{CaptionError, Result};

/// Parser for SubRip files
#[derive(Debug, Default, Clone, Copy)]
pub struct SrtParser;

impl SrtParser {
    fn is_index_line(line: &str) -> bool {
        let trimmed = line.trim();
        !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit())
    }

    /// First block must be an index line followed by a timing line
    fn has_signature(block: &[&str]) -> bool {
        block.len() >= 2 && Self::is_index_line(block[0]) && is_timing_line(block[1])
    }

    fn parse_cue(block: &[&str]) -> Result<Caption> {
        // Tolerate a missing sequence index
        let timing_index = if Self::is_index_line(block[0]) { 1 } else { 0 };

        let timing_line = block.get(timing_index).ok_or_else(|| {
            CaptionError::MalformedCaption(format!("Missing timing line after index {:?}", block[0]))
        })?;
        let (start, end) = split_timing_line(timing_line).ok_or_else(|| {
            CaptionError::MalformedCaption(format!("Invalid timing line: {:?}", timing_line))
        })?;

        Caption::new(
            &start.replace(',', "."),
            &end.replace(',', "."),
            block[timing_index + 1..].to_vec(),
        )
    }
}

impl CaptionParser for SrtParser {
    fn format(&self) -> CaptionFormat {
        CaptionFormat::Srt
    }

    fn parse(&self, content: &str) -> Result<ParsedCaptions> {
        let normalized = normalize_line_endings(content);
        let blocks = split_blocks(&normalized);

        match blocks.first() {
            None => return Err(CaptionError::MalformedFile("Empty SRT input".to_string())),
            Some(first) if !Self::has_signature(first) => {
                return Err(CaptionError::MalformedFile(format!(
                    "Not a SubRip file, starts with {:?}",
                    first[0]
                )));
            }
            Some(_) => {}
        }

        let mut collector = CueCollector::new(self.format());
        for (offset, block) in blocks.iter().enumerate() {
            collector.push_cue(offset + 1, Self::parse_cue(block))?;
        }
        collector.finish()
    }
}
