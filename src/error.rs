//! Errors from the fallible edges: opening sinks, loading config, the CLI.
//! Dispatching a log line never produces one.

#[derive(Debug)]
pub enum Error {
    /// Reading config, creating log directories, or opening a log file failed.
    Io(std::io::Error),
    /// The config file is not valid TOML or a field has the wrong type.
    ConfigParse(toml::de::Error),
    /// The platform reports no per-user config directory.
    ConfigDirNotFound,
    /// A sink path referenced an unset variable or could not be expanded.
    InvalidPath(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::ConfigParse(e) => write!(f, "bad config: {e}"),
            Self::ConfigDirNotFound => write!(f, "no config directory on this platform"),
            Self::InvalidPath(s) => write!(f, "cannot expand sink path {s}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            Self::ConfigDirNotFound | Self::InvalidPath(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}
