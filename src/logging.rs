//  ____  ____     __        __    __  __           _
// |  _ \|  _ \ __ \ \      / /__ |  \/  | __ _ ___| |_ ___ _ __
// | |_) | |_) / _` \ \/\ / / _ \| |\/| |/ _` / __| __/ _ \ '__|
// |  _ <|  __/ (_| |\ V  V / (_) | |  | | (_| \__ \ ||  __/ |
// |_| \_\_|   \__,_| \_/\_/ \___/|_|  |_|\__,_|___/\__\___|_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-07-02
// Version : 0.1.0
// License : Mulan PSL v2
//
// Logging setup

use thiserror::Error;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_ENV: &str = "PASSGEN_LOG";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log filter '{filter}': {source}")]
    Filter {
        filter: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },
    #[error("logging already initialised: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Builds the filter from `level`, falling back to the default.
///
/// The binary fills `level` from `--log-level` or `PASSGEN_LOG` through clap.
pub fn build_env_filter(level: Option<&str>) -> Result<EnvFilter, LoggingError> {
    let filter = level.unwrap_or(DEFAULT_LOG_LEVEL).to_string();
    EnvFilter::try_new(&filter).map_err(|source| LoggingError::Filter { filter, source })
}

/// Installs the global subscriber. Logs go to stderr so stdout stays clean
/// for passwords and prompts.
pub fn init_logging(level: Option<&str>) -> Result<(), LoggingError> {
    let filter = build_env_filter(level)?;
    Registry::default()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .try_init()?;
    Ok(())
}
