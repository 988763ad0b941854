//! Writable destinations for formatted lines.
//!
//! A `Sink` is a cheap, cloneable handle: the process streams need no state, and
//! everything else sits behind a mutex so a single line is never split across writers.

mod file;

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

type SharedWriter = Arc<Mutex<Box<dyn Write + Send>>>;

#[derive(Clone)]
enum Kind {
    Stdout,
    Stderr,
    Writer(SharedWriter),
}

/// Destination for log lines.
#[derive(Clone)]
pub struct Sink {
    kind: Kind,
}

impl Sink {
    /// The process standard output stream.
    #[must_use]
    pub const fn stdout() -> Self {
        Self { kind: Kind::Stdout }
    }

    /// The process standard error stream.
    #[must_use]
    pub const fn stderr() -> Self {
        Self { kind: Kind::Stderr }
    }

    /// Any writer the caller owns, e.g. an in-memory buffer or a socket.
    ///
    /// Clones of the returned sink share the same writer.
    #[must_use]
    pub fn writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            kind: Kind::Writer(Arc::new(Mutex::new(Box::new(writer)))),
        }
    }

    /// Writes `line` followed by a single newline.
    ///
    /// # Errors
    /// I/O errors from the underlying stream.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');

        match &self.kind {
            Kind::Stdout => io::stdout().lock().write_all(buf.as_bytes()),
            Kind::Stderr => io::stderr().lock().write_all(buf.as_bytes()),
            Kind::Writer(writer) => {
                let mut writer = writer.lock().unwrap_or_else(PoisonError::into_inner);
                writer.write_all(buf.as_bytes())?;
                writer.flush()
            }
        }
    }

    /// # Errors
    /// I/O errors from the underlying stream.
    pub fn flush(&self) -> io::Result<()> {
        match &self.kind {
            Kind::Stdout => io::stdout().flush(),
            Kind::Stderr => io::stderr().flush(),
            Kind::Writer(writer) => writer
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .flush(),
        }
    }
}

impl Default for Sink {
    fn default() -> Self {
        Self::stdout()
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            Kind::Stdout => f.write_str("Sink(stdout)"),
            Kind::Stderr => f.write_str("Sink(stderr)"),
            Kind::Writer(_) => f.write_str("Sink(writer)"),
        }
    }
}
