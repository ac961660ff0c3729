//! Error types for Artimus

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid emotion score for '{keyword}': {score} (expected 0.0..=1.0)")]
    InvalidEmotionScore { keyword: String, score: f64 },

    #[error("emotion keyword must not be empty")]
    EmptyEmotionKeyword,

    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_score(keyword: impl Into<String>, score: f64) -> Self {
        Self::InvalidEmotionScore {
            keyword: keyword.into(),
            score,
        }
    }
}
