/*!
 * Caption format parsers.
 *
 * Each supported on-disk format implements [`CaptionParser`], turning raw
 * text into captions (and, for WebVTT, styles):
 * - WebVTT: `webvtt`
 * - SubRip: `srt`
 * - YouTube SBV: `sbv`
 *
 * All parsers share the same tokenizer: line endings are normalized and the
 * content is cut into blank-line-delimited blocks. A block with a bad timing
 * line is skipped with a warning; a stream that yields no cue at all is
 * rejected as a malformed file.
 */

use std::fmt;
use std::str::FromStr;

use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::caption::{Caption, Style};
use crate::errors::{CaptionError, Result};

pub mod sbv;
pub mod srt;
pub mod webvtt;

pub use sbv::SbvParser;
pub use srt::SrtParser;
pub use webvtt::WebVttParser;

// @const: `<start> --> <end>` with optional trailing settings
static TIMING_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(\S+?)\s*-->\s*(\S+)(?:\s+.*)?$").unwrap()
});

/// Captions and styles produced by a parser
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCaptions {
    /// Cues in source order
    pub captions: Vec<Caption>,
    /// Style blocks in source order (WebVTT only)
    pub styles: Vec<Style>,
}

/// Common trait for all caption format parsers
pub trait CaptionParser: fmt::Debug {
    /// The format handled by this parser
    fn format(&self) -> CaptionFormat;

    /// Parse a whole caption file held in memory
    fn parse(&self, content: &str) -> Result<ParsedCaptions>;
}

/// Supported input formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaptionFormat {
    /// WebVTT (`.vtt`)
    #[serde(rename = "vtt")]
    WebVtt,
    /// SubRip (`.srt`)
    #[serde(rename = "srt")]
    Srt,
    /// YouTube SBV (`.sbv`)
    #[serde(rename = "sbv")]
    Sbv,
}

impl CaptionFormat {
    /// All formats, in detection order
    pub const ALL: [CaptionFormat; 3] = [CaptionFormat::WebVtt, CaptionFormat::Srt, CaptionFormat::Sbv];

    /// Parser implementing this format
    pub fn parser(&self) -> Box<dyn CaptionParser> {
        match self {
            Self::WebVtt => Box::new(WebVttParser),
            Self::Srt => Box::new(SrtParser),
            Self::Sbv => Box::new(SbvParser),
        }
    }

    /// Parse `content` with this format's parser
    pub fn parse(&self, content: &str) -> Result<ParsedCaptions> {
        self.parser().parse(content)
    }

    /// Conventional file extension, without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            Self::WebVtt => "vtt",
            Self::Srt => "srt",
            Self::Sbv => "sbv",
        }
    }

    /// Human readable format name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::WebVtt => "WebVTT",
            Self::Srt => "SubRip",
            Self::Sbv => "SBV",
        }
    }
}

impl fmt::Display for CaptionFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl FromStr for CaptionFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().trim_start_matches('.').to_lowercase().as_str() {
            "vtt" | "webvtt" => Ok(Self::WebVtt),
            "srt" | "subrip" => Ok(Self::Srt),
            "sbv" => Ok(Self::Sbv),
            _ => Err(anyhow::anyhow!("Unknown caption format: {}", s)),
        }
    }
}

/// Strip a byte order mark and turn `\r\n` / `\r` into `\n`
pub(crate) fn normalize_line_endings(content: &str) -> String {
    content
        .trim_start_matches('\u{feff}')
        .replace("\r\n", "\n")
        .replace('\r', "\n")
}

/// Cut normalized content into blocks separated by whitespace-only lines
pub(crate) fn split_blocks(content: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();

    for line in content.split('\n') {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }

    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}

/// Split a `start --> end` line into its two raw timecodes
pub(crate) fn split_timing_line(line: &str) -> Option<(&str, &str)> {
    TIMING_LINE_REGEX
        .captures(line)
        .and_then(|caps| Some((caps.get(1)?.as_str(), caps.get(2)?.as_str())))
}

/// Whether a line has the shape of an arrow timing line
pub(crate) fn is_timing_line(line: &str) -> bool {
    TIMING_LINE_REGEX.is_match(line)
}

/// Accumulates cues while parsing and applies the skip-and-continue policy
#[derive(Debug)]
pub(crate) struct CueCollector {
    format: CaptionFormat,
    parsed: ParsedCaptions,
    skipped: usize,
}

impl CueCollector {
    pub(crate) fn new(format: CaptionFormat) -> Self {
        CueCollector {
            format,
            parsed: ParsedCaptions::default(),
            skipped: 0,
        }
    }

    /// Record the outcome of one cue block; malformed cues are logged and dropped
    pub(crate) fn push_cue(&mut self, block_number: usize, cue: Result<Caption>) -> Result<()> {
        match cue {
            Ok(caption) => self.parsed.captions.push(caption),
            Err(CaptionError::MalformedCaption(reason)) => {
                warn!(
                    "Skipping malformed {} cue in block {}: {}",
                    self.format.display_name(),
                    block_number,
                    reason
                );
                self.skipped += 1;
            }
            Err(other) => return Err(other),
        }
        Ok(())
    }

    pub(crate) fn push_style(&mut self, style: Style) {
        self.parsed.styles.push(style);
    }

    /// Finish parsing, escalating to a file-level error when no cue survived
    pub(crate) fn finish(self) -> Result<ParsedCaptions> {
        if self.parsed.captions.is_empty() {
            return Err(CaptionError::MalformedFile(format!(
                "No valid {} cues found ({} malformed)",
                self.format.display_name(),
                self.skipped
            )));
        }

        debug!(
            "Parsed {} {} captions, {} styles, {} skipped",
            self.parsed.captions.len(),
            self.format.display_name(),
            self.parsed.styles.len(),
            self.skipped
        );

        Ok(self.parsed)
    }
}
