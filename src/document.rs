/*!
 * Caption document.
 *
 * [`WebVtt`] owns the ordered captions and styles produced by a parser (or
 * supplied by the caller) and renders them back to WebVTT on demand. The
 * rendered content is never cached: every call reflects the current state.
 */

use std::fmt;
use std::io::{Read, Write};
use std::ops::{Index, IndexMut};
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::caption::{Caption, Style};
use crate::errors::Result;
use crate::file_utils::FileManager;
use crate::parsers::{CaptionFormat, ParsedCaptions};
use crate::writer;

/// An in-memory caption document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebVtt {
    /// Captions in display order; free to append, remove or edit
    pub captions: Vec<Caption>,

    /// Style blocks, emitted right after the header
    pub styles: Vec<Style>,

    file: Option<PathBuf>,
}

impl WebVtt {
    /// Create an empty document with no target file
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from caller-supplied captions
    pub fn with_captions(captions: Vec<Caption>) -> Self {
        WebVtt {
            captions,
            ..Self::default()
        }
    }

    fn from_parsed(parsed: ParsedCaptions, file: Option<PathBuf>) -> Self {
        WebVtt {
            captions: parsed.captions,
            styles: parsed.styles,
            file,
        }
    }

    /// Parse in-memory content of the given format
    pub fn parse(content: &str, format: CaptionFormat) -> Result<Self> {
        Ok(Self::from_parsed(format.parse(content)?, None))
    }

    /// Read and parse a caption file; the file becomes the default save target
    pub fn from_file<P: AsRef<Path>>(path: P, format: CaptionFormat) -> Result<Self> {
        let path = path.as_ref();
        let content = FileManager::read_to_string(path)?;
        let parsed = format.parse(&content)?;
        debug!("Loaded {} captions from {}", parsed.captions.len(), path.display());
        Ok(Self::from_parsed(parsed, Some(path.to_path_buf())))
    }

    /// Read a WebVTT file
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_file(path, CaptionFormat::WebVtt)
    }

    /// Read a SubRip file
    pub fn from_srt<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_file(path, CaptionFormat::Srt)
    }

    /// Read a YouTube SBV file
    pub fn from_sbv<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_file(path, CaptionFormat::Sbv)
    }

    /// Parse an already open stream of the given format
    pub fn from_reader<R: Read>(mut reader: R, format: CaptionFormat) -> Result<Self> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Self::parse(&content, format)
    }

    /// Parse an already open WebVTT stream
    pub fn from_buffer<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader(reader, CaptionFormat::WebVtt)
    }

    /// Canonical WebVTT text of the current captions and styles
    pub fn content(&self) -> String {
        writer::to_webvtt(&self.captions, &self.styles)
    }

    /// Write the canonical WebVTT text to an open stream
    pub fn write<W: Write>(&self, output: &mut W) -> Result<()> {
        writer::write_webvtt(output, &self.captions, &self.styles)
    }

    /// Save as WebVTT and return the path written.
    ///
    /// `target` may be a directory, a filename with or without extension, or
    /// `None` to reuse the file the document was read from. The written path
    /// becomes the new default target.
    pub fn save(&mut self, target: Option<&Path>) -> Result<PathBuf> {
        let path = FileManager::resolve_vtt_path(self.file.as_deref(), target)?;
        FileManager::write_to_file(&path, &self.content())?;
        info!("Saved {} captions to {}", self.captions.len(), path.display());
        self.file = Some(path.clone());
        Ok(path)
    }

    /// File the document was read from or last saved to
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    /// Override the default save target
    pub fn set_file<P: Into<PathBuf>>(&mut self, path: P) {
        self.file = Some(path.into());
    }

    /// Number of captions
    pub fn len(&self) -> usize {
        self.captions.len()
    }

    /// Whether the document holds no captions
    pub fn is_empty(&self) -> bool {
        self.captions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Caption> {
        self.captions.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Caption> {
        self.captions.iter_mut()
    }
}

impl Index<usize> for WebVtt {
    type Output = Caption;

    fn index(&self, index: usize) -> &Caption {
        &self.captions[index]
    }
}

impl IndexMut<usize> for WebVtt {
    fn index_mut(&mut self, index: usize) -> &mut Caption {
        &mut self.captions[index]
    }
}

impl<'a> IntoIterator for &'a WebVtt {
    type Item = &'a Caption;
    type IntoIter = std::slice::Iter<'a, Caption>;

    fn into_iter(self) -> Self::IntoIter {
        self.captions.iter()
    }
}

impl fmt::Display for WebVtt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content())
    }
}
