//! Registry of tmux hooks.
//!
//! Every hook tmux knows about is a field holding the commands attached to
//! it, keyed by hook index. A [`Hooks`] value is only ever built from parsed
//! `show-hooks` output via [`Hooks::from_entries`] and is read-only after.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::SparseArray;
use crate::error::RecordError;
use crate::key::attribute_name;

/// Prefix tmux uses for control-mode notification names.
pub const CONTROL_MARKER: char = '%';

/// One hook command as listed by `show-hooks`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookEntry {
    /// Hook name, hyphenated or underscored, optionally `%`-prefixed.
    pub name: String,
    /// Position in the hook's array; `None` appends.
    pub index: Option<usize>,
    pub command: String,
}

macro_rules! hook_registry {
    (
        $( $(#[$doc:meta])* $hook:ident, )+
    ) => {
        /// Commands attached to each known hook.
        ///
        /// # Examples
        ///
        /// ```
        /// use tmux_options_core::{HookEntry, Hooks};
        ///
        /// let hooks = Hooks::from_entries([HookEntry {
        ///     name: "session-renamed".to_string(),
        ///     index: Some(3),
        ///     command: "run-shell 'echo renamed'".to_string(),
        /// }])
        /// .unwrap();
        ///
        /// assert_eq!(hooks.session_renamed().get(3).map(String::as_str), Some("run-shell 'echo renamed'"));
        /// assert!(hooks.get("session-renamed").is_some());
        /// assert!(hooks.pane_exited().is_empty());
        /// ```
        #[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(default, deny_unknown_fields)]
        pub struct Hooks {
            $(
                #[serde(skip_serializing_if = "SparseArray::is_empty")]
                $hook: SparseArray<String>,
            )+
        }

        impl Hooks {
            /// Attribute names of every known hook, in declaration order.
            pub const FIELD_NAMES: &'static [&'static str] = &[$(stringify!($hook)),+];

            $(
                $(#[$doc])*
                pub fn $hook(&self) -> &SparseArray<String> {
                    &self.$hook
                }
            )+

            /// Commands of a hook by hyphenated or underscored name.
            pub fn get(&self, name: &str) -> Option<&SparseArray<String>> {
                match attribute_name(name.trim_start_matches(CONTROL_MARKER)).as_str() {
                    $( stringify!($hook) => Some(&self.$hook), )+
                    _ => None,
                }
            }

            /// Hooks with at least one command, in declaration order.
            pub fn iter(&self) -> impl Iterator<Item = (&'static str, &SparseArray<String>)> {
                [$( (stringify!($hook), &self.$hook) ),+]
                    .into_iter()
                    .filter(|(_, commands)| !commands.is_empty())
            }

            fn slot_mut(&mut self, attribute: &str) -> Option<&mut SparseArray<String>> {
                match attribute {
                    $( stringify!($hook) => Some(&mut self.$hook), )+
                    _ => None,
                }
            }
        }

        // Only hooks with commands are shown.
        impl std::fmt::Debug for Hooks {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let mut debug = f.debug_struct("Hooks");
                for (name, commands) in self.iter() {
                    debug.field(name, commands);
                }
                debug.finish_non_exhaustive()
            }
        }
    };
}

hook_registry! {
    // Hooks run on events.
    /// A window had activity (see `monitor-activity`).
    alert_activity,
    /// A window received a bell (see `monitor-bell`).
    alert_bell,
    /// A window has been silent (see `monitor-silence`).
    alert_silence,
    /// A client became the latest active client of its session.
    client_active,
    client_attached,
    client_detached,
    client_focus_in,
    client_focus_out,
    client_resized,
    /// A client's attached session changed.
    client_session_changed,
    /// The program in a pane exited while `remain-on-exit` kept the pane open.
    pane_died,
    pane_exited,
    /// Focus entered a pane (requires `focus-events`).
    pane_focus_in,
    /// Focus left a pane (requires `focus-events`).
    pane_focus_out,
    /// The terminal clipboard was set with the xterm escape sequence.
    pane_set_clipboard,
    session_created,
    session_closed,
    session_renamed,
    window_linked,
    window_renamed,
    /// A window was resized; may follow `client-resized`.
    window_resized,
    window_unlinked,

    // Control-mode notifications.
    client_detached_control,
    client_session_changed_control,
    /// An error happened in a configuration file.
    config_error,
    /// A paused pane was continued.
    continue_control,
    exit_control,
    /// `%output` form used when the pause-after flag is set.
    extended_output,
    layout_change,
    message_control,
    output,
    pane_mode_changed,
    paste_buffer_changed,
    paste_buffer_deleted,
    pause_control,
    session_changed_control,
    session_renamed_control,
    session_window_changed,
    sessions_changed,
    subscription_changed,
    unlinked_window_add,
    unlinked_window_close,
    unlinked_window_renamed,
    window_add,
    window_close,
    window_pane_changed,
    window_renamed_control,

    // Run after the named command completes.
    after_bind_key,
    after_capture_pane,
    after_copy_mode,
    after_display_message,
    after_display_panes,
    after_kill_pane,
    after_list_buffers,
    after_list_clients,
    after_list_keys,
    after_list_panes,
    after_list_sessions,
    after_list_windows,
    after_load_buffer,
    after_lock_server,
    after_new_session,
    after_new_window,
    after_paste_buffer,
    after_pipe_pane,
    after_queue,
    after_refresh_client,
    after_rename_session,
    after_rename_window,
    after_resize_pane,
    after_resize_window,
    after_save_buffer,
    after_select_layout,
    after_select_pane,
    after_select_window,
    after_send_keys,
    after_set_buffer,
    after_set_environment,
    after_set_hook,
    after_set_option,
    after_show_environment,
    after_show_messages,
    after_show_options,
    after_split_window,
}

impl Hooks {
    /// Builds the registry from listed hook commands.
    ///
    /// A leading `%` is stripped from names. Entries without an index are
    /// appended after the hook's highest index; when that index is already
    /// `usize::MAX` the entry is logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::UnknownField`] for a hook name tmux does not
    /// define.
    pub fn from_entries<I>(entries: I) -> Result<Self, RecordError>
    where
        I: IntoIterator<Item = HookEntry>,
    {
        let mut hooks = Self::default();
        for entry in entries {
            let attribute = attribute_name(entry.name.trim_start_matches(CONTROL_MARKER));
            let Some(commands) = hooks.slot_mut(&attribute) else {
                return Err(RecordError::UnknownField {
                    record: "Hooks",
                    field: attribute,
                });
            };
            match entry.index {
                Some(index) => {
                    commands.insert(index, entry.command);
                }
                None => {
                    if commands.append(entry.command).is_none() {
                        warn!(
                            hook = %attribute,
                            "Skipping hook command with no index left to append at"
                        );
                    }
                }
            }
        }
        Ok(hooks)
    }

    /// `true` when no hook has any command.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}
