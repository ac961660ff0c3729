//! File configuration
//!
//! Loaded from TOML at startup, falls back to defaults if no config file
//! exists or it fails to parse.

use artimus_core::{Error, ResponderConfig, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtimusConfig {
    /// Responder identity and emotion overrides.
    pub responder: ResponderConfig,
    /// Interactive session presentation.
    pub session: SessionConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Label printed before every reply.
    pub speaker: String,
    /// Prompt printed before reading a line.
    pub prompt: String,
    /// Lines that end the session, matched after trim + lowercase.
    pub exit_words: Vec<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            speaker: "Artimus".into(),
            prompt: "You: ".into(),
            exit_words: vec!["quit".into(), "exit".into()],
        }
    }
}

impl SessionConfig {
    pub fn is_exit(&self, line: &str) -> bool {
        let normalized = line.trim().to_lowercase();
        self.exit_words.iter().any(|w| w.to_lowercase() == normalized)
    }
}

impl ArtimusConfig {
    /// Load config from a TOML file, falling back to defaults.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {}, using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                tracing::info!("No config at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Write the current config as TOML (for generating a default config file).
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }
}
