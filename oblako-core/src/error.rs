use std::path::PathBuf;

use oblako_morph::MorphError;

/// Every way a word cloud run can fail. All kinds are terminal.
#[derive(Debug, thiserror::Error)]
pub enum CloudError {
    #[error("missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("parameter {name}={value} exceeds the maximum of {max}")]
    InvalidParameter {
        name: &'static str,
        value: u64,
        max: u64,
    },

    #[error("unsupported source format {extension:?}; only txt, docx and fb2 are accepted")]
    UnsupportedFormat { extension: String },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is {size} bytes, above the {limit} byte input limit")]
    InputTooLarge { path: PathBuf, size: u64, limit: u64 },

    #[error("could not decode {path} as text: {reason}")]
    Decode { path: PathBuf, reason: String },

    #[error("no text content found in {path}")]
    EmptyContent { path: PathBuf },

    #[error("no Russian words found in the text")]
    NoTokens,

    #[error("text holds more than {limit} words")]
    TooManyTokens { limit: usize },

    #[error("no words matched the requested parts of speech")]
    NoNormalizedWords,

    #[error("frequency table is empty (top_k={top_k}, {words} normalized words)")]
    EmptyFrequencyTable { top_k: usize, words: usize },

    #[error("word cloud rendering failed: {0}")]
    Render(String),

    #[error("could not write image to {path}: {reason}")]
    Write { path: PathBuf, reason: String },

    #[error("morphological analyzer error: {0}")]
    Morph(#[from] MorphError),
}

pub type Result<T, E = CloudError> = std::result::Result<T, E>;
