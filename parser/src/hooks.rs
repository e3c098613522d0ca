//! `show-hooks` output parsing.

use std::sync::LazyLock;

use regex::Regex;
use tmux_options_core::{HookEntry, Hooks, RecordError};
use tracing::warn;

static HOOK_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<hook>%?[\w-]+)(?:\[(?P<index>\d+)\])?$")
        .expect("static regex must compile")
});

/// Parses one `hook[index] command` line.
///
/// Lines without a command (`after-bind-key` listed on its own) yield `None`.
/// The command text is kept exactly as printed.
pub fn parse_hook_line(line: &str) -> Option<HookEntry> {
    let line = line.trim_end_matches(['\r', '\n']);
    let (key, command) = line.split_once(' ')?;

    let Some(captures) = HOOK_KEY.captures(key) else {
        warn!(line, "Skipping hook line with malformed name");
        return None;
    };

    let index = match captures.name("index") {
        Some(index) => match index.as_str().parse() {
            Ok(index) => Some(index),
            Err(_) => {
                warn!(line, "Skipping hook line with out-of-range index");
                return None;
            }
        },
        None => None,
    };

    Some(HookEntry {
        name: captures["hook"].to_string(),
        index,
        command: command.to_string(),
    })
}

/// Builds the hook registry from `show-hooks` output.
///
/// # Errors
///
/// Returns [`RecordError::UnknownField`] when a listed hook is not known.
///
/// # Examples
///
/// ```
/// use tmux_options_parser::parse_hooks;
///
/// let hooks = parse_hooks([
///     "session-renamed[0] display-message renamed",
///     "%layout-change[2] refresh-client",
///     "after-bind-key",
/// ])
/// .unwrap();
///
/// assert_eq!(hooks.session_renamed().to_vec(), vec!["display-message renamed"]);
/// assert_eq!(hooks.layout_change().indices().collect::<Vec<_>>(), vec![2]);
/// assert!(hooks.after_bind_key().is_empty());
/// ```
pub fn parse_hooks<I, S>(lines: I) -> Result<Hooks, RecordError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Hooks::from_entries(
        lines
            .into_iter()
            .filter_map(|line| parse_hook_line(line.as_ref())),
    )
}
