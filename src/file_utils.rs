use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::errors::{CaptionError, Result};
use crate::parsers::CaptionFormat;

// @module: File and path utilities around the caption codecs

// @const: Extension of every written file
const VTT_EXTENSION: &str = "vtt";

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    /// Read a UTF-8 file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        Ok(fs::read_to_string(path)?)
    }

    /// Write a string to a file, creating missing parent directories
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }
        fs::write(&path, content)?;
        Ok(())
    }

    /// Guess the caption format from a file extension
    pub fn detect_format<P: AsRef<Path>>(path: P) -> Option<CaptionFormat> {
        let ext = path.as_ref().extension()?.to_string_lossy().to_lowercase();
        CaptionFormat::ALL.into_iter().find(|format| format.extension() == ext)
    }

    /// Find every caption file (by extension) below a directory
    pub fn find_caption_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();

        for entry in WalkDir::new(dir.as_ref()).follow_links(true).sort_by_file_name() {
            let entry = entry.map_err(std::io::Error::from)?;
            let path = entry.path();

            if path.is_file() && Self::detect_format(path).is_some() {
                result.push(path.to_path_buf());
            }
        }

        debug!("Found {} caption files in {}", result.len(), dir.as_ref().display());
        Ok(result)
    }

    /// Resolve where a WebVTT document should be written.
    ///
    /// - no target: the source path with its extension replaced by `.vtt`
    /// - an existing directory: `<dir>/<source stem>.vtt`
    /// - a path already ending in `.vtt`: used as is
    /// - any other path: `.vtt` is appended
    pub fn resolve_vtt_path(source: Option<&Path>, target: Option<&Path>) -> Result<PathBuf> {
        match target {
            None => source
                .map(|source| source.with_extension(VTT_EXTENSION))
                .ok_or(CaptionError::MissingFilename),
            Some(dir) if dir.is_dir() => {
                let stem = source
                    .and_then(Path::file_stem)
                    .ok_or(CaptionError::MissingFilename)?;
                Ok(dir.join(format!("{}.{}", stem.to_string_lossy(), VTT_EXTENSION)))
            }
            Some(file) => {
                let has_vtt_extension = file
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case(VTT_EXTENSION));
                if has_vtt_extension {
                    Ok(file.to_path_buf())
                } else {
                    let mut name = file.as_os_str().to_os_string();
                    name.push(".");
                    name.push(VTT_EXTENSION);
                    Ok(PathBuf::from(name))
                }
            }
        }
    }
}
