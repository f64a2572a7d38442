use flexi_logger::{
    Cleanup, Criterion, Duplicate, FileSpec, Logger, LoggerHandle, Naming, WriteMode,
};
use std::path::Path;

use crate::error::AppError;

const LOG_BASENAME: &str = "iep-inbox";
const DEBUG_SPEC: &str = "debug";
const RELEASE_SPEC: &str = "error";
const MAX_LOG_BYTES: u64 = 10_000_000;
const KEEP_LOG_FILES: usize = 3;

/// Start file logging under `log_dir`.
///
/// Debug builds honor `RUST_LOG` (default `debug`) and echo to stdout;
/// release builds keep errors only, rotating at 10MB. Keep the returned
/// handle alive or buffered lines are lost.
pub fn init(log_dir: &Path) -> Result<LoggerHandle, AppError> {
    let handle = file_logger(log_dir)?
        .write_mode(WriteMode::BufferAndFlush)
        .start()?;
    log::info!("Logging to {}", log_dir.display());
    Ok(handle)
}

fn file_logger(log_dir: &Path) -> Result<Logger, AppError> {
    let files = FileSpec::default()
        .directory(log_dir)
        .basename(LOG_BASENAME);

    if cfg!(debug_assertions) {
        return Ok(Logger::try_with_env_or_str(DEBUG_SPEC)?
            .log_to_file(files)
            .duplicate_to_stdout(Duplicate::All));
    }

    Ok(Logger::try_with_str(RELEASE_SPEC)?.log_to_file(files).rotate(
        Criterion::Size(MAX_LOG_BYTES),
        Naming::Numbers,
        Cleanup::KeepLogFiles(KEEP_LOG_FILES),
    ))
}

/// Initialize stderr logging for hosts that embed the crate without a log
/// directory. `spec` uses the `RUST_LOG` filter syntax.
pub fn init_console(spec: &str) -> Result<(), AppError> {
    env_logger::Builder::new()
        .parse_filters(spec)
        .try_init()
        .map_err(|e| AppError::Other(format!("logger already initialized: {}", e)))
}
