//! CLI configuration

use std::path::PathBuf;

use clap::{Args, Parser};
use maison::i18n::{I18nError, Language};

use crate::cli::Command;

/// Log output format.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub(crate) struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "RUST_LOG", default_value = "warn")]
    pub(crate) log_level: String,

    /// Log format (compact, json)
    #[arg(
        long,
        global = true,
        env = "LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Compact
    )]
    pub(crate) log_format: LogFormat,
}

/// Maison CLI configuration
#[derive(Debug, Parser)]
#[command(name = "maison", about = "La Maison restaurant ordering", long_about = None)]
pub(crate) struct Config {
    #[command(flatten)]
    pub(crate) logging: LoggingConfig,

    /// File the language choice is persisted to
    #[arg(
        long,
        global = true,
        env = "MAISON_STORAGE_PATH",
        default_value = ".maison/storage.json"
    )]
    pub(crate) storage_path: PathBuf,

    /// Display language for this run only (RU, RO, EN); the saved choice is left alone
    #[arg(long, global = true, env = "MAISON_LANGUAGE", value_parser = parse_language)]
    pub(crate) language: Option<Language>,

    #[command(subcommand)]
    pub(crate) command: Command,
}

impl Config {
    /// Load configuration from `.env`, the environment and CLI arguments.
    ///
    /// Exits with usage output if the arguments cannot be parsed.
    pub(crate) fn load() -> Self {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::parse()
    }
}

/// Language codes on the command line are accepted in any case.
pub(crate) fn parse_language(code: &str) -> Result<Language, I18nError> {
    code.trim().to_ascii_uppercase().parse()
}
