/*!
 * # vttkit - caption interchange library
 *
 * Reads timed-text caption files and writes them back as WebVTT.
 *
 * ## Features
 *
 * - Parse WebVTT, SubRip (SRT) and YouTube SBV captions
 * - Normalize every timecode to the canonical `HH:MM:SS.mmm` form
 * - Keep cue identifiers and `STYLE` blocks from WebVTT sources
 * - Skip individual malformed cues instead of failing the whole file
 * - Write canonical WebVTT text to a string, a stream or a file
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `timestamp`: Timecode parsing and normalization
 * - `caption`: `Caption` and `Style` entities
 * - `parsers`: One parser per input format:
 *   - `parsers::webvtt`: WebVTT documents
 *   - `parsers::srt`: SubRip files
 *   - `parsers::sbv`: YouTube SBV files
 * - `document`: The `WebVtt` document owning captions and styles
 * - `writer`: Canonical WebVTT serialization
 * - `file_utils`: File reading/writing and save path resolution
 * - `app_config`: Configuration of the command-line tool
 * - `errors`: Custom error types for the library
 *
 * ## Example
 *
 * ```no_run
 * use vttkit::{Caption, WebVtt};
 *
 * # fn main() -> vttkit::Result<()> {
 * let mut vtt = WebVtt::from_srt("movie.srt")?;
 * vtt.captions.push(Caption::with_text("01:00:00.000", "01:00:02.500", "The end")?);
 * vtt.save(None)?; // writes movie.vtt
 * # Ok(())
 * # }
 * ```
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod caption;
pub mod document;
pub mod errors;
pub mod file_utils;
pub mod parsers;
pub mod timestamp;
pub mod writer;

// Re-export main types for easier usage
pub use app_config::Config;
pub use caption::{Caption, Style};
pub use document::WebVtt;
pub use errors::{CaptionError, Result};
pub use parsers::{CaptionFormat, CaptionParser, ParsedCaptions};
pub use timestamp::{parse_timestamp, to_seconds, Timestamp};
