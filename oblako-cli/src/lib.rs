use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use oblako_core::{
    Category, CategorySet, CloudRequest, EmissionMode, FrequencyTable, PipelineConfig,
    WordCloudPipeline,
};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "oblako", about = "Word clouds from Russian text", version)]
pub struct Cli {
    /// Pipeline configuration file (JSON)
    #[arg(long, global = true, env = "OBLAKO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Morphological dictionary (TSV), overriding the configuration
    #[arg(long, global = true, env = "OBLAKO_DICTIONARY")]
    pub dictionary: Option<PathBuf>,

    /// Count a word once even when it matches several parts of speech
    #[arg(long, global = true)]
    pub single_emission: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a word cloud image and print where it was written
    Generate {
        /// Source document (.txt, .docx or .fb2)
        #[arg(long)]
        source: PathBuf,
        /// Destination image (.png, .jpg or .bmp)
        #[arg(long)]
        dest: PathBuf,
        /// Parts of speech to keep: NOUN, ADJF, ADJS, VERB, INFN
        #[arg(long = "pos", required = true, value_delimiter = ',')]
        pos: Vec<Category>,
        #[arg(long, default_value_t = 50)]
        top_k: usize,
        #[arg(long, default_value_t = 800)]
        width: u32,
        #[arg(long, default_value_t = 600)]
        height: u32,
        /// Name, #rgb, #rrggbb or rgb(r, g, b)
        #[arg(long, default_value = "black")]
        background: String,
    },
    /// Print the most frequent words without rendering
    Analyze {
        #[arg(long)]
        source: PathBuf,
        #[arg(long = "pos", required = true, value_delimiter = ',')]
        pos: Vec<Category>,
        #[arg(long, default_value_t = 20)]
        top_k: usize,
        /// Print the table as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Configuration file (or defaults) with command-line overrides applied.
    pub fn pipeline_config(&self) -> anyhow::Result<PipelineConfig> {
        let mut config = match &self.config {
            Some(path) => PipelineConfig::from_path(path)
                .with_context(|| format!("loading configuration from {}", path.display()))?,
            None => PipelineConfig::default(),
        };
        if let Some(dictionary) = &self.dictionary {
            config.dictionary = Some(dictionary.clone());
        }
        if self.single_emission {
            config.emission = EmissionMode::Single;
        }
        Ok(config)
    }
}

pub fn run(cli: Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let config = cli.pipeline_config()?;
    let pipeline = WordCloudPipeline::from_config(&config)?;
    info!(
        emission = ?config.emission,
        dictionary = ?config.dictionary,
        "pipeline ready"
    );

    match cli.command {
        Commands::Generate {
            source,
            dest,
            pos,
            top_k,
            width,
            height,
            background,
        } => {
            let written = pipeline.run(&CloudRequest {
                source,
                destination: dest,
                categories: CategorySet::new(pos),
                top_k,
                width,
                height,
                background,
            })?;
            writeln!(out, "{}", written.display())?;
        }
        Commands::Analyze {
            source,
            pos,
            top_k,
            json,
        } => {
            let table = pipeline.analyze(&source, &CategorySet::new(pos), top_k)?;
            print_table(&table, json, out)?;
        }
    }

    Ok(())
}

fn print_table(table: &FrequencyTable, json: bool, out: &mut impl Write) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, table.entries())?;
        writeln!(out)?;
        return Ok(());
    }
    for entry in table {
        writeln!(out, "{}\t{}", entry.count, entry.word)?;
    }
    Ok(())
}
