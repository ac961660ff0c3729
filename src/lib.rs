//! Artimus - interactive shell around the rule-based responder

pub mod config;
pub mod session;

pub use config::{ArtimusConfig, SessionConfig};
pub use session::{run, SessionEnd};
