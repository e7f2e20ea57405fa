//! DevScore - static analysis and score aggregation for code submissions
//!
//! Inspects raw source text for structural and quality signals (nesting
//! depth, long functions, insecure patterns, naming quality, missing error
//! handling) across three language families, then combines those signals
//! with an LLM-supplied qualitative evaluation into a single 0-100 DevScore.
//!
//! The analyzers are deliberately lexical: line-oriented regex heuristics
//! with brace/indentation balancing, not real parsers. They tolerate any
//! input text and never fail.

pub mod analyzers;
pub mod cli;
pub mod config;
pub mod evaluator;
pub mod models;
pub mod pipeline;
pub mod reporters;
pub mod scoring;
