//! Lanai - command line entrypoint.
//!
//! Loads configuration, initializes logging, builds a trie session and runs a
//! single command against it.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use lanai_lib::config::{self, ConfigLoader, LanaiConfig, LogConfig, ENV_PREFIX};
use lanai_lib::error::{
    report_error, set_error_reporter, ErrorContext, LanaiError, LanaiResult, TracingErrorReporter,
};
use lanai_lib::session::Session;
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Command line arguments for Lanai.
#[derive(Parser, Debug)]
#[clap(name = "lanai", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Extra key to load before the command runs (repeatable)
    #[clap(short = 'w', long = "word", global = true)]
    extra: Vec<String>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Insert keys and print the resulting trie
    Insert {
        /// Keys to insert
        #[clap(required = true)]
        words: Vec<String>,
    },

    /// Report whether each key is stored
    Search {
        /// Keys to look up
        #[clap(required = true)]
        words: Vec<String>,
    },

    /// Erase keys and print the resulting trie
    Erase {
        /// Keys to erase
        #[clap(required = true)]
        words: Vec<String>,
    },

    /// Print the loaded trie and its size
    Show,

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr so
/// command output on stdout stays machine-readable.
fn init_logging(log: &LogConfig) -> LanaiResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_file(log.source_location)
        .with_line_number(log.source_location)
        .with_writer(std::io::stderr);

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(ErrorLayer::default());

    let result = if log.json {
        registry.with(fmt_layer.json()).try_init()
    } else {
        registry.with(fmt_layer.pretty()).try_init()
    };

    result.map_err(|e| LanaiError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

fn load_session(config: &LanaiConfig, extra: &[String]) -> anyhow::Result<Session> {
    Session::from_config(&config.session, extra).with_context(|| match &config.session.words_file {
        Some(path) => format!("failed to load session keys from {}", path.display()),
        None => "failed to load session keys".to_string(),
    })
}

fn run(command: Command, extra: &[String]) -> anyhow::Result<()> {
    let global = config::get_global_config().context("configuration was not initialized")?;
    let config = global.get();

    match command {
        Command::Insert { words } => {
            let mut session = load_session(config, extra)?;
            for word in &words {
                session.trie_mut().insert(Some(word.as_str()));
            }
            println!("{}", session.render()?);
        }
        Command::Search { words } => {
            let session = load_session(config, extra)?;
            for word in &words {
                println!("{word}: {}", session.trie().search(Some(word.as_str())));
            }
        }
        Command::Erase { words } => {
            let mut session = load_session(config, extra)?;
            for word in &words {
                println!("{word}: {}", session.trie_mut().erase(Some(word.as_str())));
            }
            println!("{}", session.render()?);
        }
        Command::Show => {
            let session = load_session(config, extra)?;
            println!("{}", session.render()?);
            println!("{}", session.summary());
        }
        Command::Validate => {
            info!("Configuration validated successfully");
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = LanaiConfig::default();

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .context("failed to serialize default configuration")?;
            std::fs::write(&output, toml)
                .with_context(|| format!("failed to write {}", output.display()))?;

            info!("Default configuration written to {:?}", output);
        }
    }

    Ok(())
}

/// Main entry point for the application.
fn main() -> ExitCode {
    let args = Args::parse();

    // Generating a config must work even when the current one is broken
    let loaded = match args.command {
        Command::GenConfig { .. } => Ok(LanaiConfig::default()),
        _ => ConfigLoader::new(args.config.as_deref(), ENV_PREFIX).load(),
    };

    let log_config = loaded
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();
    if let Err(e) = init_logging(&log_config) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }
    set_error_reporter(Arc::new(TracingErrorReporter));

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            report_error(ErrorContext::new(e.into(), "config").capture_span_trace());
            return ExitCode::FAILURE;
        }
    };
    config::init_global_config(config);

    match run(args.command, &args.extra) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(
                ErrorContext::new(LanaiError::Custom(format!("{e:#}")), "cli")
                    .capture_span_trace(),
            );
            ExitCode::FAILURE
        }
    }
}
