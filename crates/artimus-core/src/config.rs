//! Responder configuration
//!
//! The `[responder]` section of the config file. Extra emotion scores are
//! merged over the built-in register when a responder is built from it.

use crate::error::{Error, Result};
use crate::types::DEFAULT_CREATOR;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponderConfig {
    /// Name of the creator the responder is bound to.
    pub creator: String,
    /// Extra or overriding emotion scores, each in 0.0..=1.0.
    pub emotions: BTreeMap<String, f64>,
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            creator: DEFAULT_CREATOR.into(),
            emotions: BTreeMap::new(),
        }
    }
}

impl ResponderConfig {
    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = creator.into();
        self
    }

    pub fn with_emotion(mut self, keyword: impl Into<String>, score: f64) -> Self {
        self.emotions.insert(keyword.into(), score);
        self
    }

    /// Reject empty keywords and scores outside 0.0..=1.0 (NaN included).
    pub fn validate(&self) -> Result<()> {
        for (keyword, score) in &self.emotions {
            if keyword.trim().is_empty() {
                return Err(Error::EmptyEmotionKeyword);
            }
            if !(0.0..=1.0).contains(score) {
                return Err(Error::invalid_score(keyword, *score));
            }
        }
        Ok(())
    }
}
