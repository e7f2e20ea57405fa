//! CLI command definitions and handlers

mod analyze;
mod evaluate;

use crate::models::Language;
use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// DevScore - code submission evaluation
///
/// Static analysis plus LLM-backed qualitative review, folded into one
/// 0-100 DevScore.
#[derive(Parser, Debug)]
#[command(name = "devscore")]
#[command(
    version,
    about = "Score code submissions — lexical static analysis plus LLM review, one 0-100 DevScore",
    long_about = "DevScore inspects a submitted source file for structural and quality signals \
(nesting depth, long functions, insecure patterns, naming, missing error handling), \
optionally asks an LLM backend for a qualitative review, and combines both into a \
single 0-100 DevScore with structured feedback.\n\n\
Supported languages: JavaScript, TypeScript, Python, C++ (Java falls back to zero metrics)",
    after_help = "\
Examples:
  devscore analyze solution.py                 Static metrics only, no network
  devscore analyze main.cpp --format json      JSON output for scripting
  devscore evaluate solution.js                Full evaluation (needs GEMINI_API_KEY)
  devscore evaluate solution.ts --interview    Tougher review + interview questions
  devscore evaluate sub.py --offline           Full report with neutral LLM defaults
  devscore evaluate sub.py --backend anthropic Use Claude instead of Gemini"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run static analysis only (no network, no API key needed)
    Analyze {
        /// Source file to analyze
        file: PathBuf,

        /// Language: javascript, typescript, python, cpp, java (default: inferred from extension)
        #[arg(long, short = 'l')]
        language: Option<String>,

        /// Output format: text, json
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },

    /// Run the full evaluation: static analysis + LLM review + DevScore
    Evaluate {
        /// Source file to evaluate
        file: PathBuf,

        /// Language: javascript, typescript, python, cpp, java (default: inferred from extension)
        #[arg(long, short = 'l')]
        language: Option<String>,

        /// Interview mode: tougher evaluation with follow-up questions
        #[arg(long)]
        interview: bool,

        /// Skip the LLM call; qualitative scores use neutral defaults
        #[arg(long)]
        offline: bool,

        /// LLM backend: gemini, anthropic, openai, ollama (default: from config)
        #[arg(long)]
        backend: Option<String>,

        /// Model override (default: backend's default model)
        #[arg(long)]
        model: Option<String>,

        /// Output format: text, json
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json"])]
        format: String,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
}

/// Resolve the submission language from an explicit flag or the file
/// extension
pub(crate) fn resolve_language(file: &Path, flag: Option<&str>) -> Result<Language> {
    if let Some(name) = flag {
        return name.parse();
    }

    file.extension()
        .and_then(|e| e.to_str())
        .and_then(Language::from_extension)
        .ok_or_else(|| {
            anyhow!(
                "Cannot infer language from '{}'; pass --language (javascript, typescript, python, cpp, java)",
                file.display()
            )
        })
}

/// Run the CLI
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Analyze {
            file,
            language,
            format,
        } => analyze::run(&file, language.as_deref(), &format),
        Commands::Evaluate {
            file,
            language,
            interview,
            offline,
            backend,
            model,
            format,
            output,
        } => evaluate::run(evaluate::EvaluateArgs {
            file,
            language,
            interview,
            offline,
            backend,
            model,
            format,
            output,
        }),
    }
}
