// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `event-error`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "event-error",
    version,
    about = "Dispatch an application error as an `appError` event.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML). Built-in defaults are used if omitted.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Message of the error to dispatch.
    #[arg(long, value_name = "MSG", default_value = "Test Error")]
    pub message: String,

    /// Wrap the error in a context layer. Repeatable; the last one given is
    /// the outermost.
    #[arg(long, value_name = "CTX")]
    pub context: Vec<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `EVENT_ERROR_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Load + validate config, print it, but don't dispatch anything.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
