//! Word cloud pipeline: load, tokenize, normalize, rank, render, write.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use oblako_morph::{DictionaryAnalyzer, RussianAnalyzer, SharedAnalyzer};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span};

use crate::category::CategorySet;
use crate::config::PipelineConfig;
use crate::error::{CloudError, Result};
use crate::loader::Loader;
use crate::normalizer::Normalizer;
use crate::ranker::FrequencyTable;
use crate::render::{RenderConfig, Renderer, SpiralRenderer};
use crate::tokenizer::Tokenizer;
use crate::writer;

pub const MAX_TOP_K: usize = 100;
pub const MAX_WIDTH: u32 = 1920;
pub const MAX_HEIGHT: u32 = 1080;

/// Everything one cloud needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudRequest {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub categories: CategorySet,
    pub top_k: usize,
    pub width: u32,
    pub height: u32,
    pub background: String,
}

impl CloudRequest {
    /// Reject absent or zero fields, then fields above their ceilings.
    pub fn validate(&self) -> Result<()> {
        if self.source.as_os_str().is_empty() {
            return Err(CloudError::MissingParameter("source"));
        }
        if self.destination.as_os_str().is_empty() {
            return Err(CloudError::MissingParameter("destination"));
        }
        self.categories.require_non_empty()?;
        check_bound("top_k", self.top_k as u64, MAX_TOP_K as u64)?;
        check_bound("width", self.width.into(), MAX_WIDTH.into())?;
        check_bound("height", self.height.into(), MAX_HEIGHT.into())?;
        if self.background.trim().is_empty() {
            return Err(CloudError::MissingParameter("background"));
        }
        Ok(())
    }

    pub fn render_config(&self) -> RenderConfig {
        RenderConfig::new(self.width, self.height, self.background.trim())
    }
}

fn check_bound(name: &'static str, value: u64, max: u64) -> Result<()> {
    if value == 0 {
        return Err(CloudError::MissingParameter(name));
    }
    if value > max {
        return Err(CloudError::InvalidParameter { name, value, max });
    }
    Ok(())
}

/// Reusable pipeline. The analyzer and renderer are built once and shared
/// by every run.
pub struct WordCloudPipeline {
    loader: Loader,
    tokenizer: Tokenizer,
    normalizer: Normalizer,
    renderer: Arc<dyn Renderer>,
}

impl WordCloudPipeline {
    pub fn new(analyzer: SharedAnalyzer, config: &PipelineConfig) -> Result<Self> {
        let renderer = SpiralRenderer::new(&config.render)?;
        Ok(Self::with_renderer(analyzer, Arc::new(renderer), config))
    }

    pub fn with_renderer(
        analyzer: SharedAnalyzer,
        renderer: Arc<dyn Renderer>,
        config: &PipelineConfig,
    ) -> Self {
        Self {
            loader: Loader::new(&config.limits),
            tokenizer: Tokenizer::new(config.limits.max_tokens),
            normalizer: Normalizer::new(analyzer, config.emission),
            renderer,
        }
    }

    /// Build the analyzer the configuration asks for: the configured
    /// dictionary backed by the rule-based analyzer, or the rule-based
    /// analyzer alone.
    pub fn from_config(config: &PipelineConfig) -> Result<Self> {
        let rules: SharedAnalyzer = Arc::new(RussianAnalyzer::default());
        let analyzer: SharedAnalyzer = match &config.dictionary {
            Some(path) => Arc::new(DictionaryAnalyzer::from_path(path)?.with_fallback(rules)),
            None => rules,
        };
        Self::new(analyzer, config)
    }

    /// Produce the cloud image for `request` and return where it was written.
    pub fn run(&self, request: &CloudRequest) -> Result<PathBuf> {
        request.validate()?;
        let render_config = request.render_config();

        let span = info_span!(
            "cloud_run",
            source = %request.source.display(),
            destination = %request.destination.display(),
            top_k = request.top_k,
        );
        let _guard = span.enter();

        let table = self.rank(&request.source, &request.categories, request.top_k)?;

        let image = self.renderer.render(&table, &render_config)?;
        writer::write_image(&image, &request.destination)?;

        info!(words = table.len(), "word cloud complete");
        Ok(request.destination.clone())
    }

    /// Frequency table for a source, without rendering.
    pub fn analyze(
        &self,
        source: impl AsRef<Path>,
        categories: &CategorySet,
        top_k: usize,
    ) -> Result<FrequencyTable> {
        let source = source.as_ref();
        if source.as_os_str().is_empty() {
            return Err(CloudError::MissingParameter("source"));
        }
        categories.require_non_empty()?;
        check_bound("top_k", top_k as u64, MAX_TOP_K as u64)?;

        let span = info_span!("cloud_analyze", source = %source.display(), top_k);
        let _guard = span.enter();
        self.rank(source, categories, top_k)
    }

    fn rank(&self, source: &Path, categories: &CategorySet, top_k: usize) -> Result<FrequencyTable> {
        let document = self.loader.load(source)?;
        let tokens = self.tokenizer.tokenize(&document.text)?;
        debug!(tokens = tokens.len(), "text tokenized");

        let normalized = self.normalizer.normalize(&tokens, categories)?;
        let table = FrequencyTable::rank(
            normalized.iter().map(|token| token.lemma.as_str()),
            top_k,
        )?;
        debug!(
            entries = table.len(),
            top_count = table.max_count().unwrap_or_default(),
            "frequencies ranked"
        );
        Ok(table)
    }
}

impl std::fmt::Debug for WordCloudPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordCloudPipeline")
            .field("loader", &self.loader)
            .field("tokenizer", &self.tokenizer)
            .field("normalizer", &self.normalizer)
            .field("renderer", &self.renderer.name())
            .finish()
    }
}
