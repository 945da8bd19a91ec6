/*!
 * WebVTT writer.
 *
 * Output layout: the `WEBVTT` header, then every style block, then every cue
 * block, with exactly one blank line between blocks and no terminator after
 * the last line.
 */

use std::io::Write;

use crate::caption::{Caption, Style};
use crate::errors::Result;

const HEADER: &str = "WEBVTT";

/// Render captions and styles as canonical WebVTT text
pub fn to_webvtt(captions: &[Caption], styles: &[Style]) -> String {
    let mut blocks = Vec::with_capacity(1 + styles.len() + captions.len());
    blocks.push(HEADER.to_string());

    for style in styles {
        let mut block = String::from("STYLE");
        for line in &style.lines {
            block.push('\n');
            block.push_str(line);
        }
        blocks.push(block);
    }

    for caption in captions {
        blocks.push(caption.to_string());
    }

    blocks.join("\n\n")
}

/// Write canonical WebVTT text to `writer`
pub fn write_webvtt<W: Write>(writer: &mut W, captions: &[Caption], styles: &[Style]) -> Result<()> {
    writer.write_all(to_webvtt(captions, styles).as_bytes())?;
    writer.flush()?;
    Ok(())
}
