//! File-backed sinks for redirecting output into a log file.

use super::Sink;
use crate::internal;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;

impl Sink {
    /// Opens `path` for appending, creating the file and any missing parent directories.
    ///
    /// `~` and `$VAR` references are expanded first. The file closes when the last
    /// clone of the sink is dropped.
    ///
    /// # Errors
    /// [`crate::Error::InvalidPath`] when expansion fails, I/O errors from directory
    /// creation or opening the file.
    pub fn file(path: &str) -> Result<Self, crate::Error> {
        let expanded = shellexpand::full(path)
            .map_err(|e| crate::Error::InvalidPath(format!("{path}: {e}")))?;
        let path = PathBuf::from(expanded.into_owned());

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            match fs::create_dir_all(parent) {
                Ok(()) => {
                    internal::debug(&format!("Created directory: {}", parent.display()));
                }
                Err(e) => {
                    internal::error(&format!(
                        "Failed to create directory {}: {e}",
                        parent.display()
                    ));
                    return Err(e.into());
                }
            }
        }

        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        internal::debug(&format!("Opened log file: {}", path.display()));
        Ok(Self::writer(file))
    }
}
