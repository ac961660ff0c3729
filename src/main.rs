//! artimus - talk to the responder in the terminal
//!
//! Usage:
//!   artimus                          → chat with the default creator
//!   artimus --creator "Ada"          → bind to a different creator
//!   artimus --config ./artimus.toml  → load responder/session settings
//!   artimus --dump-config            → print the effective config and exit

use artimus::config::ArtimusConfig;
use artimus::session;
use artimus_core::Responder;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "artimus",
    about = "Rule-based conversational responder",
    version = env!("CARGO_PKG_VERSION")
)]
struct Cli {
    /// Creator name (overrides the config file)
    #[arg(long)]
    creator: Option<String>,

    /// Path to config file (TOML)
    #[arg(long, default_value = "./artimus.toml")]
    config: String,

    /// Print the effective config as TOML and exit
    #[arg(long, default_value_t = false)]
    dump_config: bool,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _log_guard = init_tracing(cli.log_file.as_deref())?;

    let mut config = ArtimusConfig::load(&expand_tilde(&cli.config));
    if let Some(creator) = cli.creator {
        config.responder.creator = creator;
    }

    if cli.dump_config {
        println!("{}", config.to_toml());
        return Ok(());
    }

    let mut responder = Responder::from_config(&config.responder)?;

    let ended = session::session_ended(&config.session);
    ctrlc::set_handler(move || {
        println!("{}", ended);
        std::process::exit(0);
    })?;

    // Stdout stays unlocked between writes so the interrupt handler can print.
    let stdin = std::io::stdin();
    let end = session::run(&mut responder, &config.session, stdin.lock(), std::io::stdout())?;
    tracing::debug!(?end, "session finished");

    Ok(())
}

/// Stderr by default; a non-blocking file writer with `--log-file`.
/// The returned guard must live until exit so buffered lines are flushed.
fn init_tracing(
    log_file: Option<&str>,
) -> anyhow::Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(expand_tilde(path))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| "artimus=info,artimus_core=info".into()),
                )
                .with(tracing_subscriber::fmt::layer().with_writer(writer).with_ansi(false))
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| "artimus=warn,artimus_core=warn".into()),
                )
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
            Ok(None)
        }
    }
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(stripped);
        }
    }
    PathBuf::from(path)
}
