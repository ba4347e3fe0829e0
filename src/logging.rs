// src/logging.rs
//
// Logging bootstrap for the binary.
//
// The library only talks to the `log` facade with `event=... module=...`
// lines. This installs the backend once, at startup.

use flexi_logger::{Logger, LoggerHandle};
use log::info;

use crate::error::{AppError, AppResult};

/// Start stderr logging with a flexi_logger spec such as `info` or
/// `info,pubhealth::db=debug`. Keep the handle alive for the whole process.
pub fn init_logging(spec: &str) -> AppResult<LoggerHandle> {
    let logger = Logger::try_with_str(spec)
        .map_err(|err| AppError::Config(format!("invalid log spec `{}`: {}", spec, err)))?
        .log_to_stderr()
        .format(flexi_logger::detailed_format)
        .start()
        .map_err(|err| AppError::Config(format!("failed to start logger: {}", err)))?;

    info!(
        "event=app_start module=logging status=ok platform={} version={} spec={}",
        std::env::consts::OS,
        env!("CARGO_PKG_VERSION"),
        spec
    );

    Ok(logger)
}
