//! Values accepted by the error entry point, resolved to text at dispatch time.

use std::borrow::Cow;
use std::fmt;

/// Message shapes the error entry point accepts.
#[derive(Clone, Copy)]
pub enum Loggable<'a> {
    /// Plain text, used as-is.
    Text(&'a str),
    /// An error value, rendered through its `Display`.
    Error(&'a (dyn std::error::Error + 'a)),
    /// Anything else, rendered through its `Debug`.
    Opaque(&'a (dyn fmt::Debug + 'a)),
}

impl<'a> Loggable<'a> {
    #[must_use]
    pub fn error(err: &'a (dyn std::error::Error + 'a)) -> Self {
        Self::Error(err)
    }

    #[must_use]
    pub fn opaque(value: &'a (dyn fmt::Debug + 'a)) -> Self {
        Self::Opaque(value)
    }

    #[must_use]
    pub fn render(&self) -> Cow<'a, str> {
        match *self {
            Self::Text(text) => Cow::Borrowed(text),
            Self::Error(err) => Cow::Owned(err.to_string()),
            Self::Opaque(value) => Cow::Owned(format!("{value:?}")),
        }
    }
}

impl<'a> From<&'a str> for Loggable<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for Loggable<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a (dyn std::error::Error + 'a)> for Loggable<'a> {
    fn from(err: &'a (dyn std::error::Error + 'a)) -> Self {
        Self::Error(err)
    }
}

impl<'a> From<&'a std::io::Error> for Loggable<'a> {
    fn from(err: &'a std::io::Error) -> Self {
        Self::Error(err)
    }
}

impl<'a> From<&'a crate::Error> for Loggable<'a> {
    fn from(err: &'a crate::Error) -> Self {
        Self::Error(err)
    }
}

impl fmt::Debug for Loggable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Error(err) => f.debug_tuple("Error").field(&err.to_string()).finish(),
            Self::Opaque(value) => f.debug_tuple("Opaque").field(value).finish(),
        }
    }
}
