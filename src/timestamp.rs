/*!
 * Timestamp codec for caption timecodes.
 *
 * Accepts `HH:MM:SS.mmm` (any number of hour digits) and the shortened
 * `MM:SS.mmm` form, and normalizes both to the canonical `HH:MM:SS.mmm`
 * representation used by every caption.
 */

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{CaptionError, Result};

// @const: Timecode grammar, hours optional; ASCII digits only
static TIMESTAMP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:([0-9]+):)?([0-9]{1,2}):([0-9]{1,2})\.([0-9]+)$").unwrap()
});

/// A parsed caption timecode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
    hours: u64,
    hours_width: usize,
    minutes: u8,
    seconds: u8,
    millis: u16,
}

impl Timestamp {
    /// Hours component
    pub fn hours(&self) -> u64 {
        self.hours
    }

    /// Minutes component
    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    /// Seconds component
    pub fn seconds(&self) -> u8 {
        self.seconds
    }

    /// Milliseconds component
    pub fn millis(&self) -> u16 {
        self.millis
    }

    /// Whole seconds; the milliseconds are discarded, never rounded
    pub fn in_seconds(&self) -> u64 {
        // Parsing rejects any timestamp whose total does not fit
        self.checked_seconds().unwrap_or(u64::MAX)
    }

    fn checked_seconds(&self) -> Option<u64> {
        self.hours
            .checked_mul(3600)?
            .checked_add(u64::from(self.minutes) * 60 + u64::from(self.seconds))
    }
}

/// Parse one numeric field, reporting failures as a malformed caption
fn parse_field<T: FromStr>(digits: &str, field: &str, raw: &str) -> Result<T> {
    digits.parse().map_err(|_| {
        CaptionError::MalformedCaption(format!("Invalid {} in timestamp: {:?}", field, raw))
    })
}

impl FromStr for Timestamp {
    type Err = CaptionError;

    fn from_str(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let caps = TIMESTAMP_REGEX
            .captures(trimmed)
            .ok_or_else(|| CaptionError::MalformedCaption(format!("Invalid timestamp: {:?}", raw)))?;

        let (hours, hours_width) = match caps.get(1) {
            Some(m) => (parse_field::<u64>(m.as_str(), "hours", raw)?, m.as_str().len().max(2)),
            None => (0, 2),
        };
        let minutes: u8 = parse_field(&caps[2], "minutes", raw)?;
        let seconds: u8 = parse_field(&caps[3], "seconds", raw)?;

        // The grammar only admits ASCII digits, so byte slicing stays on char boundaries
        let fraction = &caps[4];
        let fraction = &fraction[..fraction.len().min(3)];
        let millis: u16 = parse_field(&format!("{:0<3}", fraction), "milliseconds", raw)?;

        let timestamp = Timestamp {
            hours,
            hours_width,
            minutes,
            seconds,
            millis,
        };

        if timestamp.checked_seconds().is_none() {
            return Err(CaptionError::MalformedCaption(format!(
                "Timestamp out of range: {:?}",
                raw
            )));
        }

        Ok(timestamp)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:0width$}:{:02}:{:02}.{:03}",
            self.hours,
            self.minutes,
            self.seconds,
            self.millis,
            width = self.hours_width
        )
    }
}

/// Parse a raw timecode into its canonical `HH:MM:SS.mmm` string
pub fn parse_timestamp(raw: &str) -> Result<String> {
    Ok(raw.parse::<Timestamp>()?.to_string())
}

/// Whole seconds represented by a timecode
pub fn to_seconds(timestamp: &str) -> Result<u64> {
    Ok(timestamp.parse::<Timestamp>()?.in_seconds())
}
