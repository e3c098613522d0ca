use std::fs;
use std::path::PathBuf;

use tmux_options_core::{
    ClockModeStyle, Dimension, ExtendedKeys, OptionRecord, OptionValue, Options, OverrideValue,
    RemainOnExit, ServerOptions, SetClipboard, Status, Switch, VisualAlert, WindowSize,
};
use tmux_options_parser::{ParseConfig, parse_hooks, parse_options, parse_options_with};

#[test]
fn test_server_fixture_explodes_complex_options() {
    let options = parse_options(fixture_lines("show-options-server.txt"));

    assert_eq!(options["buffer-limit"], OptionValue::Integer(50));
    assert_eq!(options["exit-empty"], OptionValue::Boolean(true));
    assert_eq!(options["copy-command"], OptionValue::from(""));
    assert_eq!(options["user-keys"], OptionValue::Null);

    let OptionValue::TerminalFeatures(features) = &options["terminal-features"] else {
        panic!("terminal-features should be decomposed");
    };
    assert_eq!(features["screen*"], vec!["title"]);
    assert_eq!(features["xterm*"], vec!["clipboard", "ccolour", "cstyle", "focus"]);

    let OptionValue::TerminalOverrides(overrides) = &options["terminal-overrides"] else {
        panic!("terminal-overrides should be decomposed");
    };
    assert_eq!(overrides["xterm-256color"].len(), 1);
    assert_eq!(overrides["xterm-256color"]["Tc"], None);

    let OptionValue::CommandAlias(aliases) = &options["command-alias"] else {
        panic!("command-alias should be decomposed");
    };
    assert_eq!(aliases.len(), 6);
    assert_eq!(aliases["split-pane"], "split-window");
    assert_eq!(aliases["server-info"], "show-messages -JT");
}

#[test]
fn test_server_fixture_loads_server_record() {
    let options = parse_options(fixture_lines("show-options-server.txt"));
    let server = ServerOptions::from_options(options).expect("server options should load");

    assert_eq!(server.backspace.as_deref(), Some("C-?"));
    assert_eq!(server.buffer_limit, Some(50));
    assert_eq!(server.editor.as_deref(), Some("vim"));
    assert_eq!(server.escape_time, Some(50));
    assert_eq!(server.exit_empty, Some(Switch::On));
    assert_eq!(server.exit_unattached, Some(Switch::Off));
    assert_eq!(server.extended_keys, Some(ExtendedKeys::Off));
    assert_eq!(server.set_clipboard, Some(SetClipboard::External));
    assert_eq!(server.history_file.as_deref(), Some(""));
    assert_eq!(server.command_alias["choose-window"], "choose-tree -w");
    assert_eq!(server.terminal_features["xterm*"].len(), 4);
    assert!(server.terminal_overrides.contains_key("xterm-256color"));
    assert!(server.user_keys.is_empty());
}

#[test]
fn test_inherited_fixture_loads_union_record() {
    let options = parse_options(fixture_lines("show-options-inherited.txt"));
    assert!(options.contains_key("status-format*"));

    let entries = options.into_iter().filter(|(key, _)| !key.starts_with('@'));
    let options = Options::from_options(entries).expect("inherited options should load");

    let session = &options.session;
    assert_eq!(session.base_index, Some(1));
    assert_eq!(session.history_limit, Some(2000));
    assert_eq!(session.mouse, Some(Switch::On));
    assert_eq!(session.status, Some(Status::On));
    assert_eq!(session.status_left.as_deref(), Some("[#{session_name}] "));
    assert_eq!(session.visual_activity, Some(VisualAlert::Off));
    assert_eq!(session.word_separators.as_deref(), Some(" "));
    assert_eq!(session.status_format.indices().collect::<Vec<_>>(), vec![0, 5]);
    assert_eq!(
        session.update_environment.to_vec(),
        vec!["DISPLAY", "KRB5CCNAME", "SSH_AUTH_SOCK"]
    );
    assert_eq!(
        session.update_environment.indices().collect::<Vec<_>>(),
        vec![0, 1, 3]
    );

    let window = &options.window;
    assert_eq!(window.clock_mode_style, Some(ClockModeStyle::TwentyFour));
    assert_eq!(window.main_pane_height, Some(Dimension::Cells(24)));
    assert_eq!(window.other_pane_width, Some(Dimension::Expr("30%".to_string())));
    assert_eq!(window.pane_base_index, Some(1));
    assert_eq!(window.window_size, Some(WindowSize::Latest));

    assert_eq!(options.pane.remain_on_exit, Some(RemainOnExit::Failed));
    assert_eq!(options.server, ServerOptions::default());
}

#[test]
fn test_user_options_are_rejected_by_records() {
    let options = parse_options(fixture_lines("show-options-inherited.txt"));
    let error = Options::from_options(options).unwrap_err();
    assert!(error.to_string().contains("@catppuccin_flavour"));
}

#[test]
fn test_force_array_wraps_scalars() {
    let options = parse_options_with(
        fixture_lines("show-options-server.txt"),
        &ParseConfig::force_array(),
    );
    let editor = options["editor"].as_array().expect("editor should be wrapped");
    assert_eq!(editor.get(0), Some(&OptionValue::from("vim")));

    let OptionValue::TerminalOverrides(overrides) = &options["terminal-overrides"] else {
        panic!("indexed complex options are still decomposed");
    };
    assert_eq!(
        overrides["xterm-256color"].get("Tc"),
        Some(&None::<OverrideValue>)
    );
}

#[test]
fn test_hooks_fixture() {
    let hooks = parse_hooks(fixture_lines("show-hooks-global.txt")).expect("hooks should parse");

    assert_eq!(
        hooks.after_new_window().to_vec(),
        vec!["select-layout even-horizontal", "display-message \"window created\""]
    );
    assert_eq!(hooks.client_attached().indices().collect::<Vec<_>>(), vec![0, 2]);
    assert_eq!(
        hooks.client_attached().get(0).map(String::as_str),
        Some("run-shell \"~/.tmux/on-attach.sh\"")
    );
    assert_eq!(hooks.layout_change().to_vec(), vec!["refresh-client -S"]);
    assert_eq!(hooks.session_created().indices().collect::<Vec<_>>(), vec![3]);
    assert!(hooks.after_bind_key().is_empty());
    assert!(hooks.pane_exited().is_empty());

    let populated: Vec<_> = hooks.iter().map(|(name, _)| name).collect();
    assert_eq!(
        populated,
        vec!["client_attached", "session_created", "layout_change", "after_new_window"]
    );
}

fn fixture_lines(name: &str) -> Vec<String> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read fixture {}: {err}", path.display()))
        .lines()
        .map(str::to_string)
        .collect()
}
