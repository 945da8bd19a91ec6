/*!
 * Caption and style entities.
 *
 * Both keep their text as an ordered list of lines. The joined `text` view is
 * computed from those lines on demand and assigning it splits back into lines,
 * so there is only ever one stored copy of the content.
 */

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{CaptionError, Result};
use crate::timestamp::{self, Timestamp};

// @const: Start/end used when a caption is built without timing
const ZERO_TIMESTAMP: &str = "00:00:00.000";

/// Split a text block into display lines
fn split_lines(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_string).collect()
}

/// Human readable kind of a JSON value, for type mismatch reports
fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Extract the text of a dynamically typed value, rejecting anything but a string
fn text_from_value(value: &Value) -> Result<&str> {
    value.as_str().ok_or_else(|| CaptionError::TextTypeMismatch {
        found: value_kind(value).to_string(),
    })
}

/// A single timed cue
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Caption {
    /// Optional cue identifier, written on its own line before the timing line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,

    start: String,

    end: String,

    /// Text lines in display order
    pub lines: Vec<String>,
}

impl Caption {
    /// Create a caption from raw start/end timecodes and its text lines
    pub fn new<S: Into<String>>(start: &str, end: &str, lines: Vec<S>) -> Result<Self> {
        Ok(Caption {
            identifier: None,
            start: timestamp::parse_timestamp(start)?,
            end: timestamp::parse_timestamp(end)?,
            lines: lines.into_iter().map(Into::into).collect(),
        })
    }

    /// Create a caption whose text is split on newlines
    pub fn with_text(start: &str, end: &str, text: &str) -> Result<Self> {
        Self::new(start, end, split_lines(text))
    }

    /// Builder-style identifier assignment
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    /// Canonical start timecode
    pub fn start(&self) -> &str {
        &self.start
    }

    /// Canonical end timecode
    pub fn end(&self) -> &str {
        &self.end
    }

    /// Replace the start timecode; the caption is left untouched on error
    pub fn set_start(&mut self, start: &str) -> Result<()> {
        self.start = timestamp::parse_timestamp(start)?;
        Ok(())
    }

    /// Replace the end timecode; the caption is left untouched on error
    pub fn set_end(&mut self, end: &str) -> Result<()> {
        self.end = timestamp::parse_timestamp(end)?;
        Ok(())
    }

    /// Start time in whole seconds (floored)
    pub fn start_in_seconds(&self) -> u64 {
        Self::seconds_of(&self.start)
    }

    /// End time in whole seconds (floored)
    pub fn end_in_seconds(&self) -> u64 {
        Self::seconds_of(&self.end)
    }

    // Stored timecodes only ever come out of `parse_timestamp`
    fn seconds_of(canonical: &str) -> u64 {
        let parsed = canonical.parse::<Timestamp>();
        debug_assert!(parsed.is_ok(), "stored timecode {:?} is not canonical", canonical);
        parsed.map(|ts| ts.in_seconds()).unwrap_or_default()
    }

    /// Lines joined with `\n`
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Replace the lines by splitting `text` on `\n`
    pub fn set_text(&mut self, text: &str) {
        self.lines = split_lines(text);
    }

    /// Assign a dynamically typed value to the text view.
    ///
    /// Only strings are accepted; any other value fails with
    /// [`CaptionError::TextTypeMismatch`] and leaves the lines unchanged.
    pub fn set_text_value(&mut self, value: &Value) -> Result<()> {
        let text = text_from_value(value)?;
        self.set_text(text);
        Ok(())
    }

    /// The `<start> --> <end>` timing line
    pub fn timing_line(&self) -> String {
        format!("{} --> {}", self.start, self.end)
    }
}

impl Default for Caption {
    fn default() -> Self {
        Caption {
            identifier: None,
            start: ZERO_TIMESTAMP.to_string(),
            end: ZERO_TIMESTAMP.to_string(),
            lines: Vec::new(),
        }
    }
}

impl fmt::Display for Caption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // An empty identifier would leave a stray blank line inside the block
        if let Some(identifier) = self.identifier.as_deref().filter(|id| !id.is_empty()) {
            writeln!(f, "{}", identifier)?;
        }
        write!(f, "{}", self.timing_line())?;
        for line in &self.lines {
            write!(f, "\n{}", line)?;
        }
        Ok(())
    }
}

/// Serialized shape accepted when deserializing a caption
#[derive(Deserialize)]
struct CaptionRecord {
    #[serde(default)]
    identifier: Option<String>,
    #[serde(default = "default_timestamp")]
    start: String,
    #[serde(default = "default_timestamp")]
    end: String,
    #[serde(default)]
    text: Option<Value>,
    #[serde(default)]
    lines: Option<Vec<String>>,
}

fn default_timestamp() -> String {
    ZERO_TIMESTAMP.to_string()
}

impl TryFrom<CaptionRecord> for Caption {
    type Error = CaptionError;

    fn try_from(record: CaptionRecord) -> Result<Self> {
        let mut caption = Caption::new(&record.start, &record.end, record.lines.unwrap_or_default())?;
        caption.identifier = record.identifier;

        match record.text {
            None => {}
            Some(Value::Array(items)) => {
                let mut lines = Vec::with_capacity(items.len());
                for item in &items {
                    lines.push(text_from_value(item)?.to_string());
                }
                caption.lines = lines;
            }
            Some(value) => caption.set_text_value(&value)?,
        }

        Ok(caption)
    }
}

impl<'de> Deserialize<'de> for Caption {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let record = CaptionRecord::deserialize(deserializer)?;
        Caption::try_from(record).map_err(serde::de::Error::custom)
    }
}

/// A `STYLE` block, kept as opaque CSS text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    /// Raw CSS lines
    pub lines: Vec<String>,
}

impl Style {
    /// Create a style from its lines
    pub fn new<S: Into<String>>(lines: Vec<S>) -> Self {
        Style {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a style by splitting `text` on newlines
    pub fn from_text(text: &str) -> Self {
        Style {
            lines: split_lines(text),
        }
    }

    /// Lines joined with `\n`
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Replace the lines by splitting `text` on `\n`
    pub fn set_text(&mut self, text: &str) {
        self.lines = split_lines(text);
    }

    /// Same contract as [`Caption::set_text_value`]
    pub fn set_text_value(&mut self, value: &Value) -> Result<()> {
        let text = text_from_value(value)?;
        self.set_text(text);
        Ok(())
    }
}
