//! Artimus Core - the rule-based responder, its state, and error handling

pub mod config;
pub mod error;
pub mod responder;
pub mod rules;
pub mod types;

pub use config::ResponderConfig;
pub use error::{Error, Result};
pub use responder::Responder;
pub use types::*;
