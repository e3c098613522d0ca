//! Typed option records for each scope.
//!
//! [`ServerOptions`], [`SessionOptions`], [`WindowOptions`] and
//! [`PaneOptions`] hold the options tmux defines at each level. [`Options`]
//! is composed of all four so that one `show-options -A` result, which mixes
//! inherited values from every level, can be loaded in one pass.

use serde::{Deserialize, Serialize};

use crate::SparseArray;
use crate::literals::{
    AlertAction, AllowPassthrough, BorderLines, ClockModeStyle, CursorStyle, DetachOnDestroy,
    Dimension, ExtendedKeys, KeyMode, PaneBorderIndicators, PaneBorderLines, PaneBorderStatus,
    RemainOnExit, SetClipboard, Status, StatusJustify, StatusPosition, Switch, VisualAlert,
    WindowSize,
};
use crate::record::{OptionField, OptionRecord, option_record};
use crate::value::{CommandAliases, TerminalFeatures, TerminalOverrides};

option_record! {
    /// Server-wide options (`show-options -s`).
    pub struct ServerOptions {
        backspace: Option<String>,
        buffer_limit: Option<i64>,
        command_alias: CommandAliases,
        default_terminal: Option<String>,
        copy_command: Option<String>,
        escape_time: Option<i64>,
        editor: Option<String>,
        exit_empty: Option<Switch>,
        exit_unattached: Option<Switch>,
        extended_keys: Option<ExtendedKeys>,
        focus_events: Option<Switch>,
        history_file: Option<String>,
        message_limit: Option<i64>,
        prompt_history_limit: Option<i64>,
        set_clipboard: Option<SetClipboard>,
        terminal_features: TerminalFeatures,
        terminal_overrides: TerminalOverrides,
        user_keys: SparseArray<String>,
    }
}

option_record! {
    /// Session options (`show-options` with no scope flag).
    pub struct SessionOptions {
        activity_action: Option<AlertAction>,
        assume_paste_time: Option<i64>,
        base_index: Option<i64>,
        bell_action: Option<AlertAction>,
        default_command: Option<String>,
        default_shell: Option<String>,
        /// `WIDTHxHEIGHT`.
        default_size: Option<String>,
        destroy_unattached: Option<Switch>,
        detach_on_destroy: Option<DetachOnDestroy>,
        display_panes_active_colour: Option<String>,
        display_panes_colour: Option<String>,
        display_panes_time: Option<i64>,
        display_time: Option<i64>,
        history_limit: Option<i64>,
        key_table: Option<String>,
        lock_after_time: Option<i64>,
        lock_command: Option<String>,
        menu_style: Option<String>,
        menu_selected_style: Option<String>,
        menu_border_style: Option<String>,
        menu_border_lines: Option<BorderLines>,
        message_command_style: Option<String>,
        message_line: Option<i64>,
        message_style: Option<String>,
        mouse: Option<Switch>,
        prefix: Option<String>,
        prefix2: Option<String>,
        renumber_windows: Option<Switch>,
        repeat_time: Option<i64>,
        set_titles: Option<Switch>,
        set_titles_string: Option<String>,
        silence_action: Option<AlertAction>,
        status: Option<Status>,
        status_format: SparseArray<String>,
        status_interval: Option<i64>,
        status_justify: Option<StatusJustify>,
        status_keys: Option<KeyMode>,
        status_left: Option<String>,
        status_left_length: Option<i64>,
        status_left_style: Option<String>,
        status_position: Option<StatusPosition>,
        status_right: Option<String>,
        status_right_length: Option<i64>,
        status_right_style: Option<String>,
        status_style: Option<String>,
        update_environment: SparseArray<String>,
        visual_activity: Option<VisualAlert>,
        visual_bell: Option<VisualAlert>,
        visual_silence: Option<VisualAlert>,
        word_separators: Option<String>,
    }
}

option_record! {
    /// Window options (`show-options -w`).
    pub struct WindowOptions {
        aggressive_resize: Option<Switch>,
        automatic_rename: Option<Switch>,
        automatic_rename_format: Option<String>,
        clock_mode_colour: Option<String>,
        clock_mode_style: Option<ClockModeStyle>,
        fill_character: Option<String>,
        main_pane_height: Option<Dimension>,
        main_pane_width: Option<Dimension>,
        copy_mode_match_style: Option<String>,
        copy_mode_mark_style: Option<String>,
        copy_mode_current_match_style: Option<String>,
        mode_keys: Option<KeyMode>,
        mode_style: Option<String>,
        monitor_activity: Option<Switch>,
        monitor_bell: Option<Switch>,
        /// Seconds.
        monitor_silence: Option<i64>,
        other_pane_height: Option<Dimension>,
        other_pane_width: Option<Dimension>,
        pane_active_border_style: Option<String>,
        pane_base_index: Option<i64>,
        pane_border_format: Option<String>,
        pane_border_indicators: Option<PaneBorderIndicators>,
        pane_border_lines: Option<PaneBorderLines>,
        pane_border_status: Option<PaneBorderStatus>,
        pane_border_style: Option<String>,
        popup_style: Option<String>,
        popup_border_style: Option<String>,
        popup_border_lines: Option<BorderLines>,
        window_status_activity_style: Option<String>,
        window_status_bell_style: Option<String>,
        window_status_current_format: Option<String>,
        window_status_current_style: Option<String>,
        window_status_format: Option<String>,
        window_status_last_style: Option<String>,
        window_status_separator: Option<String>,
        window_status_style: Option<String>,
        window_size: Option<WindowSize>,
        wrap_search: Option<Switch>,
    }
}

option_record! {
    /// Pane options (`show-options -p`).
    pub struct PaneOptions {
        allow_passthrough: Option<AllowPassthrough>,
        allow_rename: Option<Switch>,
        alternate_screen: Option<Switch>,
        cursor_colour: Option<String>,
        pane_colours: SparseArray<String>,
        cursor_style: Option<CursorStyle>,
        remain_on_exit: Option<RemainOnExit>,
        remain_on_exit_format: Option<String>,
        scroll_on_clear: Option<Switch>,
        synchronize_panes: Option<Switch>,
        window_active_style: Option<String>,
        window_style: Option<String>,
    }
}

/// Options of every scope in one record.
///
/// # Examples
///
/// ```
/// use tmux_options_core::{OptionRecord, OptionValue, Options, VisualAlert};
///
/// let options = Options::from_options([
///     ("buffer-limit", OptionValue::from(50)),
///     ("visual-activity*", OptionValue::from("on")),
///     ("pane-base-index*", OptionValue::from(0)),
/// ])
/// .unwrap();
///
/// assert_eq!(options.server.buffer_limit, Some(50));
/// assert_eq!(options.session.visual_activity, Some(VisualAlert::On));
/// assert_eq!(options.window.pane_base_index, Some(0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub server: ServerOptions,
    pub session: SessionOptions,
    pub window: WindowOptions,
    pub pane: PaneOptions,
}

impl Options {
    pub fn from_parts(
        server: ServerOptions,
        session: SessionOptions,
        window: WindowOptions,
        pane: PaneOptions,
    ) -> Self {
        Self {
            server,
            session,
            window,
            pane,
        }
    }
}

impl OptionRecord for Options {
    const NAME: &'static str = "Options";

    fn field_names() -> Vec<&'static str> {
        [
            ServerOptions::FIELD_NAMES,
            SessionOptions::FIELD_NAMES,
            WindowOptions::FIELD_NAMES,
            PaneOptions::FIELD_NAMES,
        ]
        .concat()
    }

    fn field_mut(&mut self, attribute: &str) -> Option<&mut dyn OptionField> {
        // Field names are unique across the four scopes.
        if ServerOptions::FIELD_NAMES.contains(&attribute) {
            return self.server.field_mut(attribute);
        }
        if SessionOptions::FIELD_NAMES.contains(&attribute) {
            return self.session.field_mut(attribute);
        }
        if WindowOptions::FIELD_NAMES.contains(&attribute) {
            return self.window.field_mut(attribute);
        }
        self.pane.field_mut(attribute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecordError;
    use crate::value::{OptionValue, OverrideValue};

    #[test]
    fn test_server_options_from_hyphenated_keys() {
        let options = ServerOptions::from_options([
            ("buffer-limit", OptionValue::from(100)),
            ("exit-empty", OptionValue::Boolean(true)),
            ("set-clipboard", OptionValue::from("external")),
            ("default-terminal", OptionValue::from("xterm-256color")),
        ])
        .unwrap();

        assert_eq!(options.buffer_limit, Some(100));
        assert_eq!(options.exit_empty, Some(Switch::On));
        assert_eq!(options.set_clipboard, Some(SetClipboard::External));
        assert_eq!(options.default_terminal.as_deref(), Some("xterm-256color"));
        assert_eq!(options.escape_time, None);
        assert!(options.user_keys.is_empty());
    }

    #[test]
    fn test_indexed_raw_complex_entries_are_decomposed() {
        let options = ServerOptions::from_options([
            ("command-alias[0]", OptionValue::from("split-pane=split-window")),
            ("command-alias[1]", OptionValue::from("splitp=split-window")),
            ("terminal-overrides[0]", OptionValue::from("xterm-256color:Tc")),
            ("terminal-overrides*[1]", OptionValue::from("xterm-256color:colors=256")),
            ("terminal-features[0]", OptionValue::from("xterm*:clipboard:focus")),
        ])
        .unwrap();

        assert_eq!(options.command_alias.len(), 2);
        assert_eq!(options.command_alias["split-pane"], "split-window");
        assert_eq!(options.terminal_overrides["xterm-256color"]["Tc"], None);
        assert_eq!(
            options.terminal_overrides["xterm-256color"]["colors"],
            Some(OverrideValue::Integer(256))
        );
        assert_eq!(options.terminal_features["xterm*"], vec!["clipboard", "focus"]);
    }

    #[test]
    fn test_scoped_record_strips_one_marker() {
        let options =
            SessionOptions::from_options([("visual-activity*", OptionValue::from("on"))]).unwrap();
        assert_eq!(options.visual_activity, Some(VisualAlert::On));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let error = WindowOptions::from_options([("buffer-limit", OptionValue::from(1))])
            .unwrap_err();
        assert_eq!(
            error,
            RecordError::UnknownField {
                record: "WindowOptions",
                field: "buffer_limit".to_string(),
            }
        );
    }

    #[test]
    fn test_indexed_keys_populate_array_fields() {
        let mut options = SessionOptions::default();
        options
            .set("status-format[1]", OptionValue::from("#[align=centre]"))
            .unwrap();
        options
            .set("status-format[0]", OptionValue::from("#[align=left]"))
            .unwrap();

        assert_eq!(
            options.status_format.to_vec(),
            vec!["#[align=left]", "#[align=centre]"]
        );
    }

    #[test]
    fn test_mismatched_value_keeps_default() {
        let options =
            ServerOptions::from_options([("escape-time", OptionValue::from("soon"))]).unwrap();
        assert_eq!(options.escape_time, None);
    }

    #[test]
    fn test_union_routes_fields_to_each_scope() {
        let mut overrides = TerminalOverrides::new();
        overrides
            .entry("xterm-256color".to_string())
            .or_default()
            .insert("colors".to_string(), Some(OverrideValue::Integer(256)));

        let options = Options::from_options([
            ("terminal-overrides", OptionValue::TerminalOverrides(overrides)),
            ("status*", OptionValue::Boolean(true)),
            ("main-pane-height*", OptionValue::from("30%")),
            ("synchronize-panes", OptionValue::Boolean(false)),
        ])
        .unwrap();

        assert_eq!(
            options.server.terminal_overrides["xterm-256color"]["colors"],
            Some(OverrideValue::Integer(256))
        );
        assert_eq!(options.session.status, Some(Status::On));
        assert_eq!(
            options.window.main_pane_height,
            Some(Dimension::Expr("30%".to_string()))
        );
        assert_eq!(options.pane.synchronize_panes, Some(Switch::Off));
    }

    #[test]
    fn test_union_rejects_names_unknown_to_every_scope() {
        let error = Options::from_options([("@custom-option", OptionValue::from("x"))]).unwrap_err();
        assert!(matches!(error, RecordError::UnknownField { record: "Options", .. }));
    }

    #[test]
    fn test_union_field_names_cover_all_scopes() {
        let names = Options::field_names();
        assert_eq!(
            names.len(),
            ServerOptions::FIELD_NAMES.len()
                + SessionOptions::FIELD_NAMES.len()
                + WindowOptions::FIELD_NAMES.len()
                + PaneOptions::FIELD_NAMES.len()
        );
        assert!(names.contains(&"buffer_limit"));
        assert!(names.contains(&"window_style"));
    }

    #[test]
    fn test_debug_shows_only_populated_fields() {
        let options =
            ServerOptions::from_options([("editor", OptionValue::from("vim"))]).unwrap();
        assert_eq!(format!("{options:?}"), "ServerOptions { editor: Some(\"vim\"), .. }");
    }

    #[test]
    fn test_from_parts_composes_records() {
        let server = ServerOptions {
            buffer_limit: Some(10),
            ..ServerOptions::default()
        };
        let pane = PaneOptions {
            remain_on_exit: Some(RemainOnExit::Failed),
            ..PaneOptions::default()
        };
        let options = Options::from_parts(
            server.clone(),
            SessionOptions::default(),
            WindowOptions::default(),
            pane,
        );
        assert_eq!(options.server, server);
        assert_eq!(options.pane.remain_on_exit, Some(RemainOnExit::Failed));
    }
}
