use anyhow::Context;
use flexi_logger::Logger;

/// Sink for the client's debug dump (method, request body, response body).
/// Purely observational; never affects control flow.
pub trait DebugLog: Send + Sync {
    fn log(&self, message: &str);
}

/// Default sink: forwards to the `log` facade at debug level, so whatever
/// logger the host program installed decides where the line goes.
pub struct StdLogger;

impl DebugLog for StdLogger {
    fn log(&self, message: &str) {
        log::debug!("{message}");
    }
}

/// Logger setup for the demo binary: stderr only, level from RUST_LOG with
/// `info` fallback.
pub fn init_logging() -> anyhow::Result<()> {
    Logger::try_with_env_or_str("info")?
        .log_to_stderr()
        .start()
        .context("failed to start logger")?;
    Ok(())
}
