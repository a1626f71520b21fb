// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;

use xlf_translator::app_config::{self, Config, API_KEY_ENV_VAR};
use xlf_translator::server;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

/// XLF Translator - XLIFF fragment translation service
///
/// Serves the chunk translation and context generation endpoints backed by
/// the Anthropic API, with local fallbacks when the API is unavailable.
#[derive(Parser, Debug)]
#[command(name = "xlf-translator")]
#[command(version)]
#[command(about = "AI-powered XLIFF translation service")]
#[command(long_about = "Serves the XLIFF translation API.

EXAMPLES:
    xlf-translator                              # Serve with conf.json or defaults
    xlf-translator -p 8080 --static-dir public  # Custom port and frontend directory
    xlf-translator --log-level debug            # Log prompts and API usage

CONFIGURATION:
    Configuration is read from conf.json by default. The API key is taken from
    the ANTHROPIC_API_KEY environment variable when set. Without a key every
    request is answered with local fallbacks.")]
struct CommandLineOptions {
    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Address to bind to
    #[arg(short, long)]
    bind: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// Directory with the static frontend
    #[arg(long)]
    static_dir: Option<String>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger { level: LevelFilter::Trace }))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:<5} {}\x1B[0m",
                Self::color_for_level(record.level()),
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Info until the configuration says otherwise
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    let mut config = Config::load(&cli.config_path)?;
    config.apply_env_api_key(std::env::var(API_KEY_ENV_VAR).ok());

    if let Some(bind) = cli.bind {
        config.server.bind_addr = bind;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(static_dir) = cli.static_dir {
        config.server.static_dir = Some(static_dir);
    }
    if let Some(log_level) = cli.log_level {
        config.log_level = log_level.into();
    }

    log::set_max_level(config.log_level.to_level_filter());

    config
        .validate()
        .context("Configuration validation failed")?;

    info!(
        "Starting xlf-translator (model: {}, API key configured: {})",
        config.anthropic.model,
        config.anthropic.has_api_key()
    );

    server::run(config).await
}
