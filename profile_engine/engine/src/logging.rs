use std::path::PathBuf;

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Logging settings, filled in from CLI flags by the inspector binary.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default max level when `RUST_LOG` is not set.
    pub level: Level,
    /// Write the file layer as JSON instead of logfmt.
    pub json_format: bool,
    /// Directory for the rolling `profile.log.{date}` file. Stdout only when `None`.
    pub log_dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            json_format: false,
            log_dir: None,
        }
    }
}

/// Initialize tracing with stdout output and an optional rolling file.
///
/// The returned guard flushes the file writer on drop, so keep it alive
/// for as long as the process logs.
pub fn init_logging(config: &LoggingConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(config.level).into())
        .from_env_lossy();

    // Console layer (stderr keeps stdout clean for command output)
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    let (file_layer, guard) = match &config.log_dir {
        Some(dir) => {
            let file_appender = rolling::daily(dir, "profile.log");
            let (writer, guard) = tracing_appender::non_blocking(file_appender);

            let layer = if config.json_format {
                fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_current_span(false)
                    .with_span_list(false)
                    .with_level(true)
                    .boxed()
            } else {
                fmt::layer()
                    .with_writer(writer)
                    .with_target(false)
                    .with_level(true)
                    .boxed()
            };
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    guard
}
