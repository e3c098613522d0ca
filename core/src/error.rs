//! Error types for option commands and typed records.

use thiserror::Error;

/// Failure reported by tmux for an option or hook command.
///
/// tmux distinguishes three kinds of option errors on stderr; anything else
/// is reported as [`OptionError::Other`]. Matching on `OptionError` as a
/// whole catches every kind.
///
/// # Examples
///
/// ```
/// use tmux_options_core::{OptionError, OptionErrorKind};
///
/// let error = OptionError::from_stderr("unknown option: moooz");
/// assert_eq!(error.kind(), OptionErrorKind::Unknown);
///
/// let error = OptionError::from_stderr("no server running on /tmp/tmux-1000/default");
/// assert_eq!(error.kind(), OptionErrorKind::Other);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionError {
    #[error("{0}")]
    Unknown(String),
    #[error("{0}")]
    Invalid(String),
    #[error("{0}")]
    Ambiguous(String),
    #[error("option error: {0}")]
    Other(String),
}

/// Fieldless discriminant of [`OptionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionErrorKind {
    Unknown,
    Invalid,
    Ambiguous,
    Other,
}

impl OptionError {
    /// Classifies a line of tmux stderr output.
    pub fn from_stderr(line: &str) -> Self {
        let message = line.to_string();
        if line.contains("unknown option") {
            Self::Unknown(message)
        } else if line.contains("invalid option") {
            Self::Invalid(message)
        } else if line.contains("ambiguous option") {
            Self::Ambiguous(message)
        } else {
            Self::Other(message)
        }
    }

    pub fn kind(&self) -> OptionErrorKind {
        match self {
            Self::Unknown(_) => OptionErrorKind::Unknown,
            Self::Invalid(_) => OptionErrorKind::Invalid,
            Self::Ambiguous(_) => OptionErrorKind::Ambiguous,
            Self::Other(_) => OptionErrorKind::Other,
        }
    }

    /// The stderr line tmux produced.
    pub fn message(&self) -> &str {
        match self {
            Self::Unknown(message)
            | Self::Invalid(message)
            | Self::Ambiguous(message)
            | Self::Other(message) => message,
        }
    }
}

/// Failure building a typed record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// The record has no field with this name.
    #[error("{record} has no field named '{field}'")]
    UnknownField { record: &'static str, field: String },
}
