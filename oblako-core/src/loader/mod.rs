//! Document Loading
//!
//! Turns a source file into decoded text. Three formats are understood:
//! - **PlainText** (`.txt`): any encoding, detected automatically
//! - **RichText** (`.docx`): paragraph text of the main document part
//! - **StructuredMarkup** (`.fb2`): text of the book's sections

mod docx;
mod fb2;
mod plain;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Limits;
use crate::error::{CloudError, Result};

pub use plain::decode_text;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
    PlainText,
    RichText,
    StructuredMarkup,
}

impl DocumentFormat {
    /// Detect the format from a path's extension, ignoring case.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        Self::from_extension(extension).ok_or_else(|| CloudError::UnsupportedFormat {
            extension: extension.to_string(),
        })
    }

    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "txt" => Some(Self::PlainText),
            "docx" => Some(Self::RichText),
            "fb2" => Some(Self::StructuredMarkup),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::PlainText => "txt",
            Self::RichText => "docx",
            Self::StructuredMarkup => "fb2",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Decoded source text. Never empty or whitespace only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub path: PathBuf,
    pub format: DocumentFormat,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct Loader {
    max_input_bytes: u64,
}

impl Default for Loader {
    fn default() -> Self {
        Self::new(&Limits::default())
    }
}

impl Loader {
    pub fn new(limits: &Limits) -> Self {
        Self {
            max_input_bytes: limits.max_input_bytes,
        }
    }

    /// Load a file, detecting its format from the extension.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Document> {
        let path = path.as_ref();
        let format = DocumentFormat::from_path(path)?;
        self.load_as(path, format)
    }

    /// Load a file in a declared format regardless of its extension.
    pub fn load_as(&self, path: impl AsRef<Path>, format: DocumentFormat) -> Result<Document> {
        let path = path.as_ref();
        let bytes = self.read(path)?;

        let text = match format {
            DocumentFormat::PlainText => plain::decode(path, &bytes)?,
            DocumentFormat::RichText => docx::extract(path, &bytes)?,
            DocumentFormat::StructuredMarkup => fb2::extract(path, &bytes)?,
        };

        debug!(
            path = %path.display(),
            %format,
            bytes = bytes.len(),
            chars = text.chars().count(),
            "document loaded"
        );

        Ok(Document {
            path: path.to_path_buf(),
            format,
            text,
        })
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        let read_error = |source| CloudError::Read {
            path: path.to_path_buf(),
            source,
        };

        let size = fs::metadata(path).map_err(read_error)?.len();
        if size > self.max_input_bytes {
            return Err(CloudError::InputTooLarge {
                path: path.to_path_buf(),
                size,
                limit: self.max_input_bytes,
            });
        }
        fs::read(path).map_err(read_error)
    }
}
