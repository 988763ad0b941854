//! Severity levels and the name → rank mapping that drives both filtering and coloring.

use std::fmt;
use std::str::FromStr;

/// Level name for test output.
pub const LOG_TEST: &str = "test";
/// Level name for debug output.
pub const LOG_DEBUG: &str = "debug";
/// Level name for informational output.
pub const LOG_INFO: &str = "info";
/// Level name for warnings.
pub const LOG_WARN: &str = "warning";
/// Level name for errors. Lines at this rank bypass the threshold.
pub const LOG_ERR: &str = "error";

/// Derives `Ord` so ranks compare the same way their numeric values do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// Scaffolding output that only matters while exercising the program.
    Test = 0,
    /// Diagnostics. Also the fallback for any name this module does not know.
    #[default]
    Debug = 1,
    /// Normal operational milestones.
    Info = 2,
    /// Non-fatal anomalies.
    Warning = 3,
    /// Failures. Always printed, whatever the configured minimum.
    Error = 4,
}

impl Level {
    /// The lowercase name used on the wire and in config files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Test => LOG_TEST,
            Self::Debug => LOG_DEBUG,
            Self::Info => LOG_INFO,
            Self::Warning => LOG_WARN,
            Self::Error => LOG_ERR,
        }
    }

    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Lenient lookup: names outside the known set resolve to `Debug` instead of failing.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or(Self::Debug)
    }

    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Test,
            Self::Debug,
            Self::Info,
            Self::Warning,
            Self::Error,
        ]
    }
}

/// Rank of a level name; anything unrecognized ranks as debug (1).
#[must_use]
pub fn rank_of(name: &str) -> u8 {
    Level::from_name(name).rank()
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` for names outside the five known levels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Exact match only: `"Warning"` or `"warn"` are not level names here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            LOG_TEST => Ok(Self::Test),
            LOG_DEBUG => Ok(Self::Debug),
            LOG_INFO => Ok(Self::Info),
            LOG_WARN => Ok(Self::Warning),
            LOG_ERR => Ok(Self::Error),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
