/*!
 * YouTube SBV parser.
 *
 * Each block starts with a comma-joined `H:MM:SS.mmm,H:MM:SS.mmm` timing
 * line (no arrow token) followed by the cue text.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use super::{normalize_line_endings, split_blocks};
use super::{CaptionFormat, CaptionParser, CueCollector, ParsedCaptions};
use crate::caption::Caption;
use crate::errors::{CaptionError, Result};

// @const: `start,end` timing line
static SBV_TIMING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([0-9:.]+)\s*,\s*([0-9:.]+)\s*$").unwrap()
});

/// Parser for YouTube SBV files
#[derive(Debug, Default, Clone, Copy)]
pub struct SbvParser;

impl SbvParser {
    fn split_timing_line(line: &str) -> Option<(&str, &str)> {
        SBV_TIMING_REGEX
            .captures(line)
            .and_then(|caps| Some((caps.get(1)?.as_str(), caps.get(2)?.as_str())))
    }

    fn parse_cue(block: &[&str]) -> Result<Caption> {
        let (start, end) = Self::split_timing_line(block[0]).ok_or_else(|| {
            CaptionError::MalformedCaption(format!("Invalid SBV timing line: {:?}", block[0]))
        })?;
        Caption::new(start, end, block[1..].to_vec())
    }
}

impl CaptionParser for SbvParser {
    fn format(&self) -> CaptionFormat {
        CaptionFormat::Sbv
    }

    fn parse(&self, content: &str) -> Result<ParsedCaptions> {
        let normalized = normalize_line_endings(content);
        let blocks = split_blocks(&normalized);

        match blocks.first() {
            None => return Err(CaptionError::MalformedFile("Empty SBV input".to_string())),
            Some(first) if Self::split_timing_line(first[0]).is_none() => {
                return Err(CaptionError::MalformedFile(format!(
                    "Not an SBV file, starts with {:?}",
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
