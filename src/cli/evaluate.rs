//! `devscore evaluate` - the full pipeline: static analysis, LLM review,
//! DevScore aggregation

use crate::cli::resolve_language;
use crate::config::UserConfig;
use crate::evaluator::{AiClient, AiConfig, LlmEvaluator};
use crate::pipeline::Pipeline;
use crate::reporters::{self, OutputFormat};
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

pub struct EvaluateArgs {
    pub file: PathBuf,
    pub language: Option<String>,
    pub interview: bool,
    pub offline: bool,
    pub backend: Option<String>,
    pub model: Option<String>,
    pub format: String,
    pub output: Option<PathBuf>,
}

fn build_pipeline(args: &EvaluateArgs) -> Result<Pipeline> {
    if args.offline {
        return Ok(Pipeline::offline());
    }

    let config = UserConfig::load()?;
    let backend = match args.backend.as_deref() {
        Some(name) => name.parse()?,
        None => config.backend()?,
    };
    let ai_config = AiConfig {
        backend,
        model: args
            .model
            .clone()
            .or_else(|| config.model().map(str::to_string)),
        ..Default::default()
    };

    // Config-file keys take over only when the env var is absent;
    // from_env_with_config re-checks the environment itself
    let client = match config.api_key_for(backend) {
        Some(key) => AiClient::new(ai_config, key),
        None => AiClient::from_env_with_config(ai_config)?,
    };

    info!(backend = ?client.backend(), model = client.model(), "using LLM evaluator");
    Ok(Pipeline::new(Box::new(LlmEvaluator::new(client))))
}

pub fn run(args: EvaluateArgs) -> Result<()> {
    let language = resolve_language(&args.file, args.language.as_deref())?;
    let code = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;

    let pipeline = build_pipeline(&args)?;
    let report = pipeline.evaluate(&code, language, args.interview);

    let format: OutputFormat = args.format.parse()?;
    let rendered = reporters::render(&report, format)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("report written to {}", path.display());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}
