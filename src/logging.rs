//! Logging configuration using the tracing ecosystem.
//!
//! Logs go to a daily-rotated file so they never interleave with the
//! interactive prompt on the console.

use std::path::PathBuf;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Default log level if neither an override nor RUST_LOG is set.
const DEFAULT_LOG_FILTER: &str = "flipswitch=info,warn";

/// Initialize the logging system.
///
/// The filter is taken from `filter_override` (the `--log-level` flag) when
/// given, else from `RUST_LOG`, else `DEFAULT_LOG_FILTER`.
///
/// # Log Directory
///
/// Logs are stored in the platform-specific local data directory:
/// - Linux: `~/.local/share/flipswitch/logs/`
/// - macOS: `~/Library/Application Support/flipswitch/logs/`
/// - Windows: `C:\Users\<User>\AppData\Local\flipswitch\logs\`
///
/// # Errors
///
/// Returns an error if:
/// - The log directory cannot be determined or created
/// - The filter override is not a valid filter directive
/// - The tracing subscriber cannot be set
pub fn init(filter_override: Option<&str>) -> anyhow::Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "flipswitch.log");

    let filter = build_filter(filter_override)?;

    let subscriber = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter);

    tracing::subscriber::set_global_default(subscriber)?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Flipswitch starting up");
    tracing::debug!(log_dir = %log_dir.display(), "Log directory");

    Ok(())
}

fn build_filter(filter_override: Option<&str>) -> anyhow::Result<EnvFilter> {
    if let Some(directives) = filter_override {
        return Ok(EnvFilter::try_new(directives)?);
    }
    Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)))
}

/// Get the log directory path.
fn get_log_directory() -> anyhow::Result<PathBuf> {
    let base_dir = dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine local data directory"))?;

    Ok(base_dir.join("flipswitch").join("logs"))
}

/// Log application shutdown.
pub fn shutdown() {
    tracing::info!("Flipswitch shutting down");
}
