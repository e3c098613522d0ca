//! Error type for the command layer.

use thiserror::Error;
use tmux_options_core::{OptionError, RecordError};

/// Errors surfaced by option and hook commands.
#[derive(Debug, Error)]
pub enum Error {
    /// tmux rejected the command; the kind is taken from its stderr.
    #[error(transparent)]
    Option(#[from] OptionError),

    /// Output named an option or hook the typed records do not know.
    #[error(transparent)]
    Record(#[from] RecordError),

    /// The command runner could not execute tmux.
    #[error("tmux command failed: {0}")]
    Command(String),

    /// A container value has no command-line form.
    #[error("cannot pass a {kind} value to '{name}' on the command line")]
    UnsupportedValue { name: String, kind: &'static str },
}

/// Convenience alias for results with [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
