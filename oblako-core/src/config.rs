use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// How a token whose tag matches several requested categories is counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EmissionMode {
    /// Once per matching category. Inflates counts of ambiguous words but
    /// reproduces the historical output.
    #[default]
    PerCategory,
    /// Once per token.
    Single,
}

/// Resource bounds applied to a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    #[serde(default = "default_max_input_bytes")]
    pub max_input_bytes: u64,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,
}

fn default_max_input_bytes() -> u64 {
    64 * 1024 * 1024
}

fn default_max_tokens() -> usize {
    10_000_000
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_input_bytes: default_max_input_bytes(),
            max_tokens: default_max_tokens(),
        }
    }
}

/// Layout knobs of the bundled spiral renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Pixels per font dot for the least frequent word.
    #[serde(default = "default_min_scale")]
    pub min_scale: u32,
    /// Upper bound for the most frequent word; clamped to what fits the canvas.
    #[serde(default = "default_max_scale")]
    pub max_scale: u32,
    /// Radius growth of the placement spiral per radian, in pixels.
    #[serde(default = "default_spiral_step")]
    pub spiral_step: f32,
    /// Word colors as `#rrggbb`; cycled in rank order.
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,
}

fn default_min_scale() -> u32 {
    1
}

fn default_max_scale() -> u32 {
    16
}

fn default_spiral_step() -> f32 {
    2.0
}

fn default_palette() -> Vec<String> {
    // viridis, the default colormap of most word cloud generators
    ["#440154", "#3b528b", "#21918c", "#5ec962", "#fde725"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            min_scale: default_min_scale(),
            max_scale: default_max_scale(),
            spiral_step: default_spiral_step(),
            palette: default_palette(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    #[serde(default)]
    pub limits: Limits,
    #[serde(default)]
    pub emission: EmissionMode,
    /// Tab-separated morphological dictionary; the rule-based analyzer is
    /// used when absent.
    #[serde(default)]
    pub dictionary: Option<PathBuf>,
    #[serde(default)]
    pub render: RenderOptions,
}

impl PipelineConfig {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(ConfigError::from)
    }

    pub fn to_path(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config: PipelineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, PipelineConfig::default());
        assert_eq!(config.emission, EmissionMode::PerCategory);
        assert_eq!(config.limits.max_input_bytes, 64 * 1024 * 1024);
    }

    #[test]
    fn partial_sections_fill_defaults() {
        let config: PipelineConfig = serde_json::from_str(
            r#"{"emission": "single", "limits": {"max_tokens": 10}, "render": {"max_scale": 4}}"#,
        )
        .unwrap();
        assert_eq!(config.emission, EmissionMode::Single);
        assert_eq!(config.limits.max_tokens, 10);
        assert_eq!(config.limits.max_input_bytes, default_max_input_bytes());
        assert_eq!(config.render.max_scale, 4);
        assert_eq!(config.render.min_scale, 1);
    }

    #[test]
    fn round_trips_through_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("oblako.json");
        let config = PipelineConfig {
            emission: EmissionMode::Single,
            dictionary: Some(PathBuf::from("/data/dict.tsv")),
            ..Default::default()
        };
        config.to_path(&path).unwrap();
        assert_eq!(PipelineConfig::from_path(&path).unwrap(), config);
    }

    #[test]
    fn rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            PipelineConfig::from_path(&path),
            Err(ConfigError::Parse(_))
        ));
    }
}
