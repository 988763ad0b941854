//! simplelog's own diagnostics (config loading, file sinks), routed through a `Logger`.
//!
//! Silent until [`init`] runs. `OnceLock` keeps the first initialization; later calls
//! are no-ops.

use crate::level::{LOG_DEBUG, LOG_ERR, LOG_INFO, LOG_WARN};
use crate::logger::{Log, Logger};
use crate::output::Sink;
use std::sync::OnceLock;

static INTERNAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Enables diagnostics on stdout at `level` and above.
pub fn init(level: &str) {
    init_with_console(level, Sink::stdout());
}

/// Same as [`init`], with `console` standing in for stdout. Filtering and colors
/// still apply.
pub fn init_with_console(level: &str, console: Sink) {
    let was_init = INTERNAL_LOGGER.get().is_some();
    INTERNAL_LOGGER.get_or_init(|| Logger::with_console(level, console));
    if !was_init {
        debug(&format!("Internal logger ready, level={level}"));
    }
}

/// Pre-init calls vanish.
fn log(level: &str, msg: &str) {
    if let Some(logger) = INTERNAL_LOGGER.get() {
        logger.write(level, msg, &[]);
    }
}

pub fn debug(msg: &str) {
    log(LOG_DEBUG, msg);
}

pub fn info(msg: &str) {
    log(LOG_INFO, msg);
}

pub fn warning(msg: &str) {
    log(LOG_WARN, msg);
}

pub fn error(msg: &str) {
    log(LOG_ERR, msg);
}
