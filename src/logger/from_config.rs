//! Builds a `Logger` from a loaded [`Config`].

use super::{Log, Logger};
use crate::config::{Config, STDERR, STDOUT};
use crate::internal;
use crate::output::Sink;

impl Logger {
    /// `"stdout"` leaves a slot on the console; `"stderr"` or a file path redirects it.
    ///
    /// # Errors
    /// Path expansion or I/O errors when a file sink cannot be opened.
    pub fn from_config(config: &Config) -> Result<Self, crate::Error> {
        let mut logger = Self::new(config.general.level.as_str());

        if let Some(sink) = open_sink(&config.output.stdout)? {
            logger.set_sink(sink);
        }
        if let Some(sink) = open_sink(&config.output.stderr)? {
            logger.set_error_sink(sink);
        }

        internal::debug(&format!(
            "Logger ready: level={}, stdout={}, stderr={}",
            config.general.level, config.output.stdout, config.output.stderr
        ));
        Ok(logger)
    }
}

/// `None` means the slot stays on the console.
fn open_sink(spec: &str) -> Result<Option<Sink>, crate::Error> {
    match spec.trim() {
        "" | STDOUT => Ok(None),
        STDERR => Ok(Some(Sink::stderr())),
        path => Sink::file(path).map(Some),
    }
}
