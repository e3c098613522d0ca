//! Flat `show-options` line parser.
//!
//! Every line is `KEY` or `KEY VALUE`. Values containing spaces are
//! shell-quoted by tmux, so the line is word-split with shell rules. When that
//! does not yield exactly a key and a value (unbalanced quotes, a value that
//! starts with `#`, unquoted spaces) the line is split at its first
//! whitespace run instead and the remainder kept verbatim.

use std::collections::BTreeMap;

/// Raw key → raw value, as listed. Bare keys map to `None`.
pub type FlatOptions = BTreeMap<String, Option<String>>;

/// Parses one output line. Blank lines yield `None`.
///
/// # Examples
///
/// ```
/// use tmux_options_parser::parse_line;
///
/// assert_eq!(
///     parse_line("status-keys vi"),
///     Some(("status-keys".to_string(), Some("vi".to_string())))
/// );
/// assert_eq!(
///     parse_line("command-alias[2] \"choose-session=choose-tree -s\""),
///     Some((
///         "command-alias[2]".to_string(),
///         Some("choose-session=choose-tree -s".to_string())
///     ))
/// );
/// assert_eq!(parse_line("user-keys"), Some(("user-keys".to_string(), None)));
/// ```
pub fn parse_line(line: &str) -> Option<(String, Option<String>)> {
    let line = line.trim_end_matches(['\r', '\n']).trim();
    if line.is_empty() {
        return None;
    }

    let Some((key, rest)) = line.split_once(char::is_whitespace) else {
        return Some((line.to_string(), None));
    };

    if let Some(mut words) = shlex::split(line) {
        if words.len() == 2 {
            let value = words.pop();
            let key = words.pop().unwrap_or_else(|| key.to_string());
            return Some((key, value));
        }
    }

    Some((key.to_string(), Some(rest.trim_start().to_string())))
}

/// Parses output lines into a flat map. Later duplicates win.
pub fn parse_lines<I, S>(lines: I) -> FlatOptions
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| parse_line(line.as_ref()))
        .collect()
}
