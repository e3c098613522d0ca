//! Element grammars of options whose array elements carry nested structure.
//!
//! - `terminal-features`: `term:feature:feature` → term → feature list
//! - `terminal-overrides`: `term:cap[=value]:cap` → term → cap → value
//! - `command-alias`: `alias=command` → alias → command
//!
//! Elements that do not follow their grammar are logged and skipped; the
//! remaining elements of the option are still decomposed.

use tracing::warn;

use crate::SparseArray;
use crate::value::{CommandAliases, OptionValue, OverrideValue, TerminalFeatures, TerminalOverrides};

/// Option names whose elements are decomposed.
pub const COMPLEX_OPTIONS: [&str; 3] = ["terminal-features", "terminal-overrides", "command-alias"];

/// Decomposes the value of a complex option.
///
/// `name` is the bare option name, without index or inheritance marker.
/// Returns `None` for any other option. A lone string counts as element 0.
///
/// # Examples
///
/// ```
/// use tmux_options_core::{OptionValue, SparseArray, decompose_complex};
///
/// let raw = OptionValue::Array(SparseArray::from([(0, OptionValue::from("splitp=split-window"))]));
/// let Some(OptionValue::CommandAlias(aliases)) = decompose_complex("command-alias", &raw) else {
///     panic!("command-alias is complex");
/// };
/// assert_eq!(aliases["splitp"], "split-window");
///
/// assert_eq!(decompose_complex("status-keys", &OptionValue::from("vi")), None);
/// ```
pub fn decompose_complex(name: &str, value: &OptionValue) -> Option<OptionValue> {
    let decomposed = match name {
        "terminal-features" => {
            OptionValue::TerminalFeatures(terminal_features(name, text_elements(value)))
        }
        "terminal-overrides" => {
            OptionValue::TerminalOverrides(terminal_overrides(name, text_elements(value)))
        }
        "command-alias" => OptionValue::CommandAlias(command_aliases(name, text_elements(value))),
        _ => return None,
    };
    Some(decomposed)
}

/// String elements of an array value; a lone scalar counts as element 0.
fn text_elements(value: &OptionValue) -> SparseArray<&str> {
    match value {
        OptionValue::Array(array) => array
            .iter()
            .filter_map(|(index, element)| match element.as_str() {
                Some(text) => Some((index, text)),
                None => {
                    warn!(index, kind = element.kind(), "Skipping non-text complex option element");
                    None
                }
            })
            .collect(),
        OptionValue::String(text) => SparseArray::from([(0, text.as_str())]),
        _ => SparseArray::new(),
    }
}

fn terminal_features(option: &str, elements: SparseArray<&str>) -> TerminalFeatures {
    let mut features = TerminalFeatures::new();
    for (index, element) in elements {
        match element.split_once(':') {
            Some((term, list)) => {
                features.insert(
                    term.to_string(),
                    list.split(':').map(str::to_string).collect(),
                );
            }
            None => warn!(option, index, element, "Expected 'term:feature' element"),
        }
    }
    features
}

fn terminal_overrides(option: &str, elements: SparseArray<&str>) -> TerminalOverrides {
    let mut overrides = TerminalOverrides::new();
    for (index, element) in elements {
        let Some((term, specs)) = element.split_once(':') else {
            warn!(option, index, element, "Expected 'term:capability' element");
            continue;
        };

        let capabilities = overrides.entry(term.to_string()).or_default();
        for spec in specs.split(':').filter(|spec| !spec.is_empty()) {
            match spec.split_once('=') {
                Some((capability, value)) => {
                    capabilities.insert(capability.to_string(), Some(OverrideValue::parse(value)));
                }
                None => {
                    capabilities.insert(spec.to_string(), None);
                }
            }
        }
    }
    overrides
}

fn command_aliases(option: &str, elements: SparseArray<&str>) -> CommandAliases {
    let mut aliases = CommandAliases::new();
    for (index, element) in elements {
        match element.split_once('=') {
            Some((alias, command)) => {
                aliases.insert(alias.to_string(), command.to_string());
            }
            None => warn!(option, index, element, "Expected 'alias=command' element"),
        }
    }
    aliases
}
