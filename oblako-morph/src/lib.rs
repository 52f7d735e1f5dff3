//! Morphological analysis for Russian text.
//!
//! Provides the `MorphAnalyzer` capability used by the normalizer: a word goes
//! in, a ranked list of parses (normal form plus grammatical tag) comes out.
//! Two implementations ship with the crate:
//! - **RussianAnalyzer**: rule-based, no external data
//! - **DictionaryAnalyzer**: backed by a tab-separated dictionary file

mod dictionary;
mod grammeme;
mod lexicon;
mod russian;
mod traits;

pub use dictionary::DictionaryAnalyzer;
pub use grammeme::{Grammeme, Tag};
pub use russian::{RussianAnalyzer, RussianAnalyzerConfig};
pub use traits::{MorphAnalyzer, Parse, SharedAnalyzer};

#[derive(Debug, thiserror::Error)]
pub enum MorphError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown grammeme {0:?}")]
    UnknownGrammeme(String),

    #[error("dictionary line {line}: {reason}")]
    InvalidEntry { line: usize, reason: String },
}
