//! Parser for tmux `show-options` / `show-hooks` output and builder for the
//! matching commands.
//!
//! Option output goes through four stages:
//!
//! 1. [`parse_lines`]: lines to a flat `key → Option<value>` map, undoing
//!    shell quoting.
//! 2. [`explode_arrays`]: `name[index]` keys grouped into one
//!    [`SparseArray`](tmux_options_core::SparseArray) per name.
//! 3. [`explode_complex`]: `terminal-features`, `terminal-overrides` and
//!    `command-alias` elements decomposed into nested maps.
//! 4. [`coerce_options`]: digit strings to integers, `on`/`off` to booleans.
//!
//! [`parse_options`] runs all four. Malformed data never aborts a parse: bad
//! keys and elements are logged through `tracing` and degraded.
//!
//! Hook output is parsed into the [`Hooks`](tmux_options_core::Hooks)
//! registry by [`parse_hooks`].
//!
//! The [`client`] module issues these commands through a caller-provided
//! [`CommandRunner`], building arguments with [`CommandRequest`].
//!
//! # Example
//!
//! ```
//! use tmux_options_core::{OptionRecord, OptionValue, ServerOptions};
//! use tmux_options_parser::parse_options;
//!
//! let options = parse_options([
//!     "buffer-limit 50",
//!     "command-alias[0] split-pane=split-window",
//!     "command-alias[1] \"choose-session=choose-tree -s\"",
//!     "set-clipboard external",
//! ]);
//! assert_eq!(options["buffer-limit"], OptionValue::Integer(50));
//!
//! let server = ServerOptions::from_options(options).unwrap();
//! assert_eq!(server.buffer_limit, Some(50));
//! assert_eq!(server.command_alias["choose-session"], "choose-tree -s");
//! ```

pub mod client;
mod coerce;
mod command;
mod complex;
mod error;
mod explode;
mod hooks;
mod lines;

pub use client::{CmdOutput, CommandRunner, HooksExt, OptionsExt, TmuxTarget};
pub use coerce::{coerce_in_place, coerce_options, coerce_str};
pub use command::{
    CommandFlag, CommandRequest, CommandSwitches, HOOK_SCOPE_FLAGS_VERSION, Operation,
    TmuxCommand, VersionCheck,
};
pub use complex::explode_complex;
pub use error::{Error, Result};
pub use explode::{OptionMap, ParseConfig, explode_arrays};
pub use hooks::{parse_hook_line, parse_hooks};
pub use lines::{FlatOptions, parse_line, parse_lines};

use tmux_options_core::{OptionKey, OptionValue};

/// Parses `show-options` output with the default [`ParseConfig`].
pub fn parse_options<I, S>(lines: I) -> OptionMap
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parse_options_with(lines, &ParseConfig::default())
}

/// Parses `show-options` output through every stage.
pub fn parse_options_with<I, S>(lines: I, config: &ParseConfig) -> OptionMap
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = explode_complex(explode_arrays(parse_lines(lines), config));
    coerce_options(&mut options);
    options
}

/// Value of a single-option listing (`show-options <name>`).
///
/// The value belongs to the option named on the first non-blank line; an
/// array option listed over several lines yields one array value.
///
/// # Examples
///
/// ```
/// use tmux_options_core::{OptionKey, OptionValue};
/// use tmux_options_parser::parse_option_value;
///
/// assert_eq!(parse_option_value(["escape-time 10"]), Some(OptionValue::Integer(10)));
/// assert_eq!(
///     parse_option_value(["status-keys vi", "buffer-limit 50"]),
///     Some(OptionValue::from("vi"))
/// );
/// assert_eq!(parse_option_value(Vec::<String>::new()), None);
/// ```
pub fn parse_option_value<I, S>(lines: I) -> Option<OptionValue>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let lines: Vec<S> = lines.into_iter().collect();
    let (first_key, _) = lines.iter().find_map(|line| parse_line(line.as_ref()))?;
    let map_key = match OptionKey::parse(&first_key) {
        Ok(key) => key.map_key(),
        Err(_) => first_key.clone(),
    };
    parse_options(lines).remove(&map_key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_value_follows_first_line_not_key_order() {
        assert_eq!(
            parse_option_value(["status-keys vi", "buffer-limit 50"]),
            Some(OptionValue::from("vi"))
        );
    }

    #[test]
    fn test_option_value_groups_indexed_lines() {
        let value = parse_option_value([
            "",
            "update-environment*[1] SSH_AUTH_SOCK",
            "update-environment*[0] DISPLAY",
        ])
        .unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array.indices().collect::<Vec<_>>(), vec![0, 1]);
    }
}
