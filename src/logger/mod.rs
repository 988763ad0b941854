//! The logger: one configured minimum level, two sinks, and a single dispatch routine
//! every level method funnels into.
//!
//! Console behaviour and redirected behaviour differ on purpose. While a sink is still
//! the console it was constructed with, lines are colorized and non-error levels are
//! filtered by the minimum level. Once a sink has been redirected, every line bound for
//! it is written plain and unfiltered, so captured files hold the full record.

mod from_config;
mod loggable;

pub use loggable::Loggable;

use crate::fmt::{colorize, sprintf, wrap_time};
use crate::level::{LOG_DEBUG, LOG_ERR, LOG_INFO, LOG_TEST, LOG_WARN, Level, rank_of};
use crate::output::Sink;
use std::borrow::Cow;
use std::fmt::Display;

/// Lets surrounding code swap in another logger implementation behind `dyn Log`.
///
/// Only [`Log::write`] and the two sink setters are required; the level methods
/// funnel into `write` with their fixed level name.
pub trait Log: Send + Sync {
    /// Replaces the sink for every level below error.
    fn set_sink(&mut self, sink: Sink);

    /// Replaces the sink for error lines.
    fn set_error_sink(&mut self, sink: Sink);

    /// Formats and routes one line. `args` are substituted printf-style into `message`;
    /// with no args the message is used verbatim, stray `%` included.
    fn write(&self, level: &str, message: &str, args: &[&dyn Display]);

    fn error(&self, msg: Loggable<'_>, args: &[&dyn Display]) {
        self.write(LOG_ERR, &msg.render(), args);
    }

    fn warning(&self, msg: &str, args: &[&dyn Display]) {
        self.write(LOG_WARN, msg, args);
    }

    fn info(&self, msg: &str, args: &[&dyn Display]) {
        self.write(LOG_INFO, msg, args);
    }

    fn debug(&self, msg: &str, args: &[&dyn Display]) {
        self.write(LOG_DEBUG, msg, args);
    }

    fn test(&self, msg: &str, args: &[&dyn Display]) {
        self.write(LOG_TEST, msg, args);
    }
}

/// Which of the two sinks a line is bound for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Everything below error.
    Std,
    /// Error lines.
    StdErr,
}

/// A rendered line and the sink it goes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub target: Target,
    pub text: String,
}

#[derive(Debug, Clone)]
struct Slot {
    sink: Sink,
    /// Set by any `set_*sink` call, even one that passes the console back in.
    redirected: bool,
}

impl Slot {
    const fn console(sink: Sink) -> Self {
        Self {
            sink,
            redirected: false,
        }
    }
}

/// Synchronous leveled logger. Both sinks start out as stdout.
#[derive(Debug, Clone)]
pub struct Logger {
    /// Kept as given; unknown names filter like `debug`.
    level: String,
    std: Slot,
    std_err: Slot,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LOG_DEBUG)
    }
}

impl Logger {
    /// Creates a logger whose console is the process stdout.
    #[must_use]
    pub fn new(level: impl Into<String>) -> Self {
        Self::with_console(level, Sink::stdout())
    }

    /// Creates a logger whose console is `console` instead of stdout.
    ///
    /// Both slots share the sink and neither counts as redirected, so lines keep their
    /// colors and the level filter applies. Useful to capture console output.
    #[must_use]
    pub fn with_console(level: impl Into<String>, console: Sink) -> Self {
        Self {
            level: level.into(),
            std: Slot::console(console.clone()),
            std_err: Slot::console(console),
        }
    }

    /// The configured minimum level name, exactly as it was given.
    #[must_use]
    pub fn level(&self) -> &str {
        &self.level
    }

    pub fn set_level(&mut self, level: impl Into<String>) {
        self.level = level.into();
    }

    #[must_use]
    pub const fn is_redirected(&self, target: Target) -> bool {
        match target {
            Target::Std => self.std.redirected,
            Target::StdErr => self.std_err.redirected,
        }
    }

    /// Decides whether and how a message is emitted, without writing it.
    ///
    /// Error-rank lines always produce a line for [`Target::StdErr`], colored only while
    /// that sink is the console. Other lines go to [`Target::Std`]: on the console they are
    /// filtered by the minimum level and colored; once redirected, always emitted plain.
    #[must_use]
    pub fn prepare(&self, level: &str, msg: &str) -> Option<Line> {
        let rank = rank_of(level);

        if rank >= Level::Error.rank() {
            let text = render_line(self.std_err.redirected, rank, level, msg);
            return Some(Line {
                target: Target::StdErr,
                text,
            });
        }

        if !self.std.redirected && rank_of(&self.level) > rank {
            return None;
        }

        let text = render_line(self.std.redirected, rank, level, msg);
        Some(Line {
            target: Target::Std,
            text,
        })
    }

    const fn sink(&self, target: Target) -> &Sink {
        match target {
            Target::Std => &self.std.sink,
            Target::StdErr => &self.std_err.sink,
        }
    }

    /// Flushes both sinks.
    ///
    /// # Errors
    /// Returns the first I/O error encountered.
    pub fn flush(&self) -> Result<(), crate::Error> {
        self.std.sink.flush()?;
        self.std_err.sink.flush()?;
        Ok(())
    }
}

fn render_line(plain: bool, rank: u8, level: &str, msg: &str) -> String {
    let wrapped = wrap_time(level, msg);
    if plain {
        wrapped
    } else {
        colorize(rank, &wrapped)
    }
}

impl Log for Logger {
    fn set_sink(&mut self, sink: Sink) {
        self.std = Slot {
            sink,
            redirected: true,
        };
    }

    fn set_error_sink(&mut self, sink: Sink) {
        self.std_err = Slot {
            sink,
            redirected: true,
        };
    }

    fn write(&self, level: &str, message: &str, args: &[&dyn Display]) {
        let msg = if args.is_empty() {
            Cow::Borrowed(message)
        } else {
            Cow::Owned(sprintf(message, args))
        };

        let Some(line) = self.prepare(level, &msg) else {
            return;
        };

        let _ = self.sink(line.target).write_line(&line.text);
    }
}
