//! Typed models for tmux options and hooks.
//!
//! This crate defines the values and records that `show-options` and
//! `show-hooks` output is turned into:
//!
//! - [`OptionValue`]: a single exploded value, either a scalar, a [`SparseArray`], or
//!   one of the decomposed complex forms ([`TerminalFeatures`],
//!   [`TerminalOverrides`], [`CommandAliases`]).
//! - [`OptionKey`]: a key split into name, `[index]`, and inheritance
//!   marker.
//! - [`ServerOptions`], [`SessionOptions`], [`WindowOptions`],
//!   [`PaneOptions`] and their union [`Options`]: typed records built via
//!   [`OptionRecord`].
//! - [`Hooks`]: the registry of hook commands.
//! - [`OptionScope`] and [`ScopeSelector`]: which tmux scope a command
//!   targets.
//! - [`OptionError`]: the classification of tmux's error replies.
//!
//! # Example
//!
//! ```
//! use tmux_options_core::*;
//!
//! let options = Options::from_options([
//!     ("buffer-limit", OptionValue::from(50)),
//!     ("status-format[1]", OptionValue::from("#[align=left]")),
//!     ("main-pane-width*", OptionValue::from("80")),
//! ])
//! .unwrap();
//!
//! assert_eq!(options.server.buffer_limit, Some(50));
//! assert_eq!(options.session.status_format.get(1).map(String::as_str), Some("#[align=left]"));
//! assert_eq!(options.window.main_pane_width, Some(Dimension::Cells(80)));
//! assert_eq!(OptionScope::Window.flag(), Some("-w"));
//! ```

mod array;
mod complex;
mod error;
mod hooks;
mod key;
mod record;
mod literals;
mod options;
mod scope;
mod value;

pub use array::SparseArray;
pub use complex::{COMPLEX_OPTIONS, decompose_complex};
pub use error::{OptionError, OptionErrorKind, RecordError};
pub use hooks::{CONTROL_MARKER, HookEntry, Hooks};
pub use key::{INHERITED_MARKER, MalformedKey, OptionKey, attribute_name};
pub use literals::*;
pub use options::{Options, PaneOptions, ServerOptions, SessionOptions, WindowOptions};
pub use record::{FieldValue, OptionField, OptionRecord};
pub use scope::{OptionScope, ScopeSelector};
pub use value::{
    CommandAliases, OptionValue, OverrideValue, TerminalFeatures, TerminalOverrides, is_digits,
};
