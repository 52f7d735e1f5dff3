//! Word clouds from Russian text.
//!
//! A run loads a TXT, DOCX or FB2 document, extracts Russian words, reduces
//! them to dictionary forms of the requested parts of speech, counts the
//! most frequent ones and draws them into a raster image.
//!
//! ```no_run
//! use oblako_core::{Category, CategorySet, CloudRequest, PipelineConfig, WordCloudPipeline};
//!
//! let pipeline = WordCloudPipeline::from_config(&PipelineConfig::default())?;
//! let written = pipeline.run(&CloudRequest {
//!     source: "book.fb2".into(),
//!     destination: "cloud.png".into(),
//!     categories: CategorySet::new([Category::Noun, Category::AdjectiveFull]),
//!     top_k: 50,
//!     width: 800,
//!     height: 600,
//!     background: "black".into(),
//! })?;
//! println!("{}", written.display());
//! # Ok::<(), oblako_core::CloudError>(())
//! ```

pub mod category;
pub mod config;
pub mod error;
pub mod loader;
pub mod normalizer;
pub mod pipeline;
pub mod ranker;
pub mod render;
pub mod tokenizer;
pub mod writer;

pub use category::{Category, CategorySet, UnknownCategory};
pub use config::{ConfigError, EmissionMode, Limits, PipelineConfig, RenderOptions};
pub use error::{CloudError, Result};
pub use loader::{Document, DocumentFormat, Loader};
pub use normalizer::{NormalizedToken, Normalizer};
pub use pipeline::{CloudRequest, WordCloudPipeline, MAX_HEIGHT, MAX_TOP_K, MAX_WIDTH};
pub use ranker::{FrequencyEntry, FrequencyTable};
pub use render::{Color, RenderConfig, Renderer, SpiralRenderer};
pub use tokenizer::Tokenizer;
