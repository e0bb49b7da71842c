use crate::config::{LogFormat, LoggingConfig, LOG_LEVELS};
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::validate_one_of;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber. `RUST_LOG` wins over the configured level.
pub fn init_logger(config: &LoggingConfig) -> Result<()> {
    validate_one_of("logging.level", &config.level, &LOG_LEVELS)?;

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(format!("small_calc={}", config.level)).map_err(|e| {
            CalcError::InvalidConfigValueError {
                field: "logging.level".to_string(),
                value: config.level.clone(),
                reason: e.to_string(),
            }
        })?,
    };

    let registry = tracing_subscriber::registry().with(filter);

    let installed = match config.format {
        LogFormat::Compact => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .json(),
            )
            .try_init(),
    };

    installed.map_err(|e| CalcError::ConfigError {
        message: format!("Failed to initialise logger: {}", e),
    })
}
