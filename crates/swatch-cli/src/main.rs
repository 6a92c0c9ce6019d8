//! swatch: command-line front end for the color name codec.
//!
//! Reads color names (or values, or JSON) from arguments or stdin and writes
//! results to stdout. Logs and per-item failures go to stderr. The exit status
//! is 1 when any input was skipped and 2 when the command itself failed.

mod cli;
mod clipboard;
mod commands;
mod input;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use swatch_common::ConfigError;
use swatch_config::SwatchConfig;
use tracing_subscriber::EnvFilter;

/// Load an explicit config file, or the default one when it exists. Returns
/// the file the config came from, if any, so it can be reported once logging
/// is up.
fn load_config(path: Option<&Path>) -> Result<(SwatchConfig, Option<PathBuf>), ConfigError> {
    let file = match path {
        Some(path) => path.to_path_buf(),
        None => swatch_config::default_config_path()?,
    };
    match swatch_config::load_from_path(&file) {
        Ok(config) => {
            swatch_config::validation::validate(&config)?;
            Ok((config, Some(file)))
        }
        Err(ConfigError::FileNotFound(_)) if path.is_none() => {
            Ok((SwatchConfig::default(), None))
        }
        Err(e) => Err(e),
    }
}

fn main() -> ExitCode {
    let args = cli::parse();

    let (config, config_file) = match load_config(args.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("swatch: {e}");
            return ExitCode::from(2);
        }
    };

    // Initialize logging
    let log_directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| format!("swatch={}", config.logging.level));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "swatch=info".parse().unwrap()),
            ),
        )
        .init();

    match &config_file {
        Some(file) => tracing::info!(path = %file.display(), "loaded config"),
        None => tracing::info!("no config file found, using defaults"),
    }

    match commands::run(args.command, &config) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(skipped) => {
            tracing::warn!(skipped, "some inputs were skipped");
            ExitCode::from(1)
        }
        Err(e) => {
            eprintln!("swatch: {e}");
            ExitCode::from(2)
        }
    }
}
