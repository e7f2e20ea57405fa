//! User-level configuration for devscore
//!
//! Supports loading config from:
//! - Environment variables
//! - ~/.config/devscore/config.toml

use crate::evaluator::LlmBackend;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UserConfig {
    #[serde(default)]
    pub ai: AiSettings,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AiSettings {
    /// Gemini API key (default backend)
    pub gemini_api_key: Option<String>,

    /// Anthropic API key
    pub anthropic_api_key: Option<String>,

    /// OpenAI API key
    pub openai_api_key: Option<String>,

    /// Default model to use
    pub model: Option<String>,

    /// Backend: "gemini" (default), "anthropic", "openai", "ollama"
    pub backend: Option<String>,
}

impl UserConfig {
    /// Load config from all sources, with priority:
    /// 1. Environment variables (highest)
    /// 2. User config (~/.config/devscore/config.toml)
    pub fn load() -> Result<Self> {
        let mut config = UserConfig::default();

        if let Some(user_config) = Self::user_config_path()
            .filter(|p| p.exists())
            .and_then(|p| std::fs::read_to_string(&p).ok())
            .and_then(|content| toml::from_str::<UserConfig>(&content).ok())
        {
            config.merge(user_config);
        }

        // Environment variables override everything
        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            config.ai.gemini_api_key = Some(key);
        }
        if let Ok(key) = std::env::var("ANTHROPIC_API_KEY") {
            config.ai.anthropic_api_key = Some(key);
        }
        if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            config.ai.openai_api_key = Some(key);
        }

        Ok(config)
    }

    /// Get the user config directory path
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("devscore").join("config.toml"))
    }

    /// Merge another config into this one (other takes priority)
    fn merge(&mut self, other: UserConfig) {
        if other.ai.gemini_api_key.is_some() {
            self.ai.gemini_api_key = other.ai.gemini_api_key;
        }
        if other.ai.anthropic_api_key.is_some() {
            self.ai.anthropic_api_key = other.ai.anthropic_api_key;
        }
        if other.ai.openai_api_key.is_some() {
            self.ai.openai_api_key = other.ai.openai_api_key;
        }
        if other.ai.model.is_some() {
            self.ai.model = other.ai.model;
        }
        if other.ai.backend.is_some() {
            self.ai.backend = other.ai.backend;
        }
    }

    /// Configured backend, falling back to the default
    pub fn backend(&self) -> Result<LlmBackend> {
        match self.ai.backend.as_deref() {
            Some(name) => Ok(name.parse()?),
            None => Ok(LlmBackend::default()),
        }
    }

    /// Get the API key for a backend, if configured
    pub fn api_key_for(&self, backend: LlmBackend) -> Option<&str> {
        match backend {
            LlmBackend::Gemini => self.ai.gemini_api_key.as_deref(),
            LlmBackend::Anthropic => self.ai.anthropic_api_key.as_deref(),
            LlmBackend::OpenAi => self.ai.openai_api_key.as_deref(),
            LlmBackend::Ollama => None,
        }
    }

    /// Get the configured model, if any
    pub fn model(&self) -> Option<&str> {
        self.ai.model.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_prefers_other() {
        let mut base = UserConfig::default();
        base.ai.gemini_api_key = Some("old".to_string());
        base.ai.model = Some("model-a".to_string());

        let other = UserConfig {
            ai: AiSettings {
                gemini_api_key: Some("new".to_string()),
                ..Default::default()
            },
        };

        base.merge(other);
        assert_eq!(base.ai.gemini_api_key.as_deref(), Some("new"));
        // Unset fields in `other` leave existing values alone
        assert_eq!(base.ai.model.as_deref(), Some("model-a"));
    }

    #[test]
    fn test_backend_parsing() {
        let mut config = UserConfig::default();
        assert_eq!(config.backend().unwrap(), LlmBackend::Gemini);

        config.ai.backend = Some("anthropic".to_string());
        assert_eq!(config.backend().unwrap(), LlmBackend::Anthropic);

        config.ai.backend = Some("nonsense".to_string());
        assert!(config.backend().is_err());
    }

    #[test]
    fn test_api_key_lookup() {
        let config = UserConfig {
            ai: AiSettings {
                openai_api_key: Some("sk-test".to_string()),
                ..Default::default()
            },
        };
        assert_eq!(config.api_key_for(LlmBackend::OpenAi), Some("sk-test"));
        assert_eq!(config.api_key_for(LlmBackend::Gemini), None);
        assert_eq!(config.api_key_for(LlmBackend::Ollama), None);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_src = "\
[ai]
gemini_api_key = \"g-key\"
backend = \"gemini\"
model = \"gemini-2.0-flash\"
";
        let config: UserConfig = toml::from_str(toml_src).unwrap();
        assert_eq!(config.ai.gemini_api_key.as_deref(), Some("g-key"));
        assert_eq!(config.model(), Some("gemini-2.0-flash"));
    }
}
