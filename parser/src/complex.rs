//! Decomposition pass over the known complex options.
//!
//! The element grammars live in
//! [`decompose_complex`](tmux_options_core::decompose_complex); this pass
//! applies them to every matching key of a parsed listing, including
//! inheritance-marked keys such as `command-alias*`.

use tmux_options_core::{INHERITED_MARKER, decompose_complex};

use crate::explode::OptionMap;

/// Decomposes the known complex options in place; other keys are untouched.
pub fn explode_complex(mut options: OptionMap) -> OptionMap {
    for (key, value) in options.iter_mut() {
        let name = key.trim_end_matches(INHERITED_MARKER);
        if let Some(decomposed) = decompose_complex(name, value) {
            *value = decomposed;
        }
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use tmux_options_core::{CommandAliases, OptionValue, OverrideValue, TerminalFeatures};
    use crate::explode::{ParseConfig, explode_arrays};
    use crate::lines::parse_lines;

    fn explode(lines: &[&str]) -> OptionMap {
        explode_complex(explode_arrays(parse_lines(lines), &ParseConfig::default()))
    }

    #[test]
    fn test_terminal_features() {
        let options = explode(&[
            "terminal-features[0] xterm*:clipboard:ccolour:cstyle:focus",
            "terminal-features[1] screen*:title",
        ]);
        let OptionValue::TerminalFeatures(features) = &options["terminal-features"] else {
            panic!("terminal-features was not decomposed");
        };
        assert_eq!(features["xterm*"], vec!["clipboard", "ccolour", "cstyle", "focus"]);
        assert_eq!(features["screen*"], vec!["title"]);
    }

    #[test]
    fn test_terminal_overrides() {
        let options = explode(&[
            "terminal-overrides[0] xterm-256color:Tc",
            "terminal-overrides[1] xterm-256color:colors=256",
            "terminal-overrides[2] screen*:colors=8bit:Ms",
        ]);
        let OptionValue::TerminalOverrides(overrides) = &options["terminal-overrides"] else {
            panic!("terminal-overrides was not decomposed");
        };
        let xterm = &overrides["xterm-256color"];
        assert_eq!(xterm["Tc"], None);
        assert_eq!(xterm["colors"], Some(OverrideValue::Integer(256)));

        let screen = &overrides["screen*"];
        assert_eq!(screen["colors"], Some(OverrideValue::String("8bit".to_string())));
        assert_eq!(screen["Ms"], None);
    }

    #[test]
    fn test_command_alias() {
        let options = explode(&[
            "command-alias[0] split-pane=split-window",
            "command-alias[2] \"choose-session=choose-tree -s\"",
        ]);
        let OptionValue::CommandAlias(aliases) = &options["command-alias"] else {
            panic!("command-alias was not decomposed");
        };
        assert_eq!(aliases["split-pane"], "split-window");
        assert_eq!(aliases["choose-session"], "choose-tree -s");
    }

    #[test]
    fn test_malformed_elements_are_skipped() {
        let options = explode(&[
            "command-alias[0] no-equals-sign",
            "command-alias[1] splitp=split-window",
            "terminal-features[0] nocolon",
        ]);
        assert_eq!(
            options["command-alias"],
            OptionValue::CommandAlias(CommandAliases::from([(
                "splitp".to_string(),
                "split-window".to_string()
            )]))
        );
        assert_eq!(
            options["terminal-features"],
            OptionValue::TerminalFeatures(TerminalFeatures::new())
        );
    }

    #[test]
    fn test_inherited_complex_option() {
        let options = explode(&["command-alias*[0] info=show-messages -JT"]);
        assert!(matches!(options["command-alias*"], OptionValue::CommandAlias(_)));
    }

    #[test]
    fn test_other_options_untouched() {
        let options = explode(&["status-format[0] zero", "status-keys vi"]);
        assert!(options["status-format"].as_array().is_some());
        assert_eq!(options["status-keys"], OptionValue::from("vi"));
    }
}
