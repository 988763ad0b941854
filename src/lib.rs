//! `simplelog` - Minimal leveled console logger.
//!
//! Every line looks like `[YYYY-MM-DD HH:MM:SS LEVEL] message`. On the console, lines
//! are colorized by severity and filtered by the configured minimum level; errors are
//! never filtered. Redirecting a sink switches it to plain, unfiltered output.
//!
//! # Example
//!
//! ```
//! use simplelog::{Log, Logger, Sink};
//!
//! let mut logger = Logger::new("warning");
//! logger.info("hidden on the console", &[]);
//! logger.warning("disk at %d%%", &[&91]);
//! logger.error("connection refused".into(), &[]);
//!
//! // Everything non-error now lands in the buffer, uncolored and unfiltered.
//! logger.set_sink(Sink::writer(Vec::new()));
//! logger.debug("kept", &[]);
//! ```
//!
//! # Features
//!
//! - `cli` (default): builds the `simplelog` binary

// Core modules (always available)
pub mod config;
mod error;
pub mod fmt;
pub mod internal;
pub mod level;
pub mod logger;
pub mod output;

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;

// Re-exports for convenience
pub use config::Config;
pub use error::Error;
pub use fmt::{colorize, sprintf, wrap_time};
pub use level::{Level, rank_of};
pub use logger::{Line, Log, Loggable, Logger, Target};
pub use output::Sink;
