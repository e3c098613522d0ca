//! Option and hook commands issued through an external command runner.
//!
//! A target (server, session, window or pane) implements [`TmuxTarget`]:
//! it runs tmux commands, answers version queries and names its default
//! scopes. [`OptionsExt`] and [`HooksExt`] are implemented for every target
//! and build, issue and parse the commands. A non-empty stderr is turned into
//! an [`OptionError`]; set `ignore_errors` to have tmux suppress it instead.

use tmux_options_core::{
    Hooks, OptionError, OptionRecord, OptionScope, OptionValue, Options, PaneOptions,
    ServerOptions, SessionOptions, SparseArray, WindowOptions,
};
use tracing::debug;

use crate::command::{CommandRequest, CommandSwitches, Operation, VersionCheck};
use crate::error::{Error, Result};
use crate::explode::OptionMap;
use crate::{parse_hooks, parse_option_value, parse_options};

/// Output lines of one tmux invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CmdOutput {
    pub stdout: Vec<String>,
    pub stderr: Vec<String>,
}

/// Runs a tmux command against a target.
pub trait CommandRunner {
    /// Runs `tmux <name> <args..>` and captures its output lines.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Command`] when tmux could not be run at all.
    fn cmd(&self, name: &str, args: &[String]) -> Result<CmdOutput>;
}

/// A tmux object that options and hooks can be read from and written to.
pub trait TmuxTarget: CommandRunner + VersionCheck {
    /// Scope used for option commands when the caller does not pick one.
    fn default_option_scope(&self) -> Option<OptionScope>;

    /// Scope used for hook commands when the caller does not pick one.
    fn default_hook_scope(&self) -> Option<OptionScope> {
        self.default_option_scope()
    }
}

/// Builds, issues and checks one command.
fn run<T>(target: &T, request: CommandRequest<'_>) -> Result<CmdOutput>
where
    T: TmuxTarget + ?Sized,
{
    let default_scope = if request.operation().is_hook() {
        target.default_hook_scope()
    } else {
        target.default_option_scope()
    };
    let command = request.build(default_scope, target);
    debug!(command = %command, "Running tmux command");

    let output = target.cmd(&command.name, &command.args)?;
    if let Some(line) = output.stderr.first() {
        return Err(OptionError::from_stderr(line).into());
    }
    Ok(output)
}

/// Clears a switch that would make the output unparseable.
fn without_values_only(mut switches: CommandSwitches) -> CommandSwitches {
    if switches.values_only {
        debug!("Ignoring values-only switch for a parsed listing");
        switches.values_only = false;
    }
    switches
}

/// Option commands for any [`TmuxTarget`].
pub trait OptionsExt: TmuxTarget {
    /// `set-option [switches] option value`.
    ///
    /// Booleans are sent as `on`/`off`. Null sends no value.
    fn set_option(
        &self,
        option: &str,
        value: impl Into<OptionValue>,
        switches: CommandSwitches,
    ) -> Result<()> {
        let value = value.into();
        if value.to_arg().is_none() && !value.is_null() {
            return Err(Error::UnsupportedValue {
                name: option.to_string(),
                kind: value.kind(),
            });
        }
        let request = CommandRequest::new(Operation::SetOption)
            .name(option)
            .value(value)
            .switches(switches);
        run(self, request).map(drop)
    }

    /// `set-option -u option` (or `-U` with `unset_panes`).
    fn unset_option(&self, option: &str, switches: CommandSwitches) -> Result<()> {
        let request = CommandRequest::new(Operation::UnsetOption)
            .name(option)
            .switches(switches);
        run(self, request).map(drop)
    }

    /// `show-options`, parsed into exploded and coerced values.
    fn show_options(&self, switches: CommandSwitches) -> Result<OptionMap> {
        let request =
            CommandRequest::new(Operation::ShowOptions).switches(without_values_only(switches));
        let output = run(self, request)?;
        Ok(parse_options(&output.stdout))
    }

    /// `show-options -v`: raw value lines.
    fn show_options_values(&self, switches: CommandSwitches) -> Result<Vec<String>> {
        let request =
            CommandRequest::new(Operation::ShowOptions).switches(switches.with_values_only());
        Ok(run(self, request)?.stdout)
    }

    /// Value of one option, or `None` when tmux prints nothing for it.
    fn show_option(&self, option: &str, switches: CommandSwitches) -> Result<Option<OptionValue>> {
        let request = CommandRequest::new(Operation::ShowOptions)
            .name(option)
            .switches(without_values_only(switches));
        let output = run(self, request)?;
        Ok(parse_option_value(&output.stdout))
    }

    /// `show-options` loaded into a typed record.
    ///
    /// User options (`@name`) have no record field and are skipped.
    fn options_record<R: OptionRecord>(&self, switches: CommandSwitches) -> Result<R> {
        let mut switches = without_values_only(switches);
        if switches.include_hooks {
            debug!(record = R::NAME, "Ignoring include-hooks switch for a typed record");
            switches.include_hooks = false;
        }

        let options = self.show_options(switches)?;
        let entries = options.into_iter().filter(|(key, _)| {
            let user = key.starts_with('@');
            if user {
                debug!(record = R::NAME, option = %key, "Skipping user option");
            }
            !user
        });
        Ok(R::from_options(entries)?)
    }

    fn server_options(&self, switches: CommandSwitches) -> Result<ServerOptions> {
        self.options_record(switches.with_scope(OptionScope::Server))
    }

    fn session_options(&self, switches: CommandSwitches) -> Result<SessionOptions> {
        self.options_record(switches.with_scope(OptionScope::Session))
    }

    fn window_options(&self, switches: CommandSwitches) -> Result<WindowOptions> {
        self.options_record(switches.with_scope(OptionScope::Window))
    }

    fn pane_options(&self, switches: CommandSwitches) -> Result<PaneOptions> {
        self.options_record(switches.with_scope(OptionScope::Pane))
    }

    /// `show-options -A` loaded into the union record, so inherited values
    /// from every scope are included.
    fn options(&self, switches: CommandSwitches) -> Result<Options> {
        self.options_record(switches.with_include_inherited())
    }
}

impl<T: TmuxTarget + ?Sized> OptionsExt for T {}

/// Hook commands for any [`TmuxTarget`].
pub trait HooksExt: TmuxTarget {
    /// `set-hook [switches] hook command`.
    fn set_hook(&self, hook: &str, command: &str, switches: CommandSwitches) -> Result<()> {
        let request = CommandRequest::new(Operation::SetHook)
            .name(hook)
            .value(OptionValue::from(command))
            .switches(switches);
        run(self, request).map(drop)
    }

    /// `set-hook -u hook`.
    fn unset_hook(&self, hook: &str, switches: CommandSwitches) -> Result<()> {
        let request = CommandRequest::new(Operation::UnsetHook)
            .name(hook)
            .switches(switches);
        run(self, request).map(drop)
    }

    /// `set-hook -R hook`: runs the hook's commands now.
    fn run_hook(&self, hook: &str, switches: CommandSwitches) -> Result<()> {
        let request = CommandRequest::new(Operation::RunHook)
            .name(hook)
            .switches(switches);
        run(self, request).map(drop)
    }

    /// `show-hooks`, parsed into the hook registry.
    fn show_hooks(&self, switches: CommandSwitches) -> Result<Hooks> {
        let request =
            CommandRequest::new(Operation::ShowHooks).switches(without_values_only(switches));
        let output = run(self, request)?;
        Ok(parse_hooks(&output.stdout)?)
    }

    /// Commands attached to one hook, or `None` when it has none.
    fn show_hook(&self, hook: &str, switches: CommandSwitches) -> Result<Option<SparseArray<String>>> {
        let request = CommandRequest::new(Operation::ShowHooks)
            .name(hook)
            .switches(without_values_only(switches));
        let output = run(self, request)?;
        let hooks = parse_hooks(&output.stdout)?;
        Ok(hooks
            .get(hook)
            .filter(|commands| !commands.is_empty())
            .cloned())
    }
}

impl<T: TmuxTarget + ?Sized> HooksExt for T {}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use tmux_options_core::OptionErrorKind;

    #[derive(Default)]
    struct FakeWindow {
        stdout: Vec<String>,
        stderr: Vec<String>,
        old_tmux: bool,
        issued: RefCell<Vec<String>>,
    }

    impl FakeWindow {
        fn replying(lines: &[&str]) -> Self {
            Self {
                stdout: lines.iter().map(|line| line.to_string()).collect(),
                ..Self::default()
            }
        }

        fn last(&self) -> String {
            self.issued.borrow().last().cloned().unwrap_or_default()
        }
    }

    impl CommandRunner for FakeWindow {
        fn cmd(&self, name: &str, args: &[String]) -> Result<CmdOutput> {
            let mut line = vec![name.to_string()];
            line.extend(args.iter().cloned());
            self.issued.borrow_mut().push(line.join(" "));
            Ok(CmdOutput {
                stdout: self.stdout.clone(),
                stderr: self.stderr.clone(),
            })
        }
    }

    impl VersionCheck for FakeWindow {
        fn has_lt_version(&self, _version: &str) -> bool {
            self.old_tmux
        }
    }

    impl TmuxTarget for FakeWindow {
        fn default_option_scope(&self) -> Option<OptionScope> {
            Some(OptionScope::Window)
        }
    }

    #[test]
    fn test_set_option_uses_default_scope() {
        let window = FakeWindow::default();
        window
            .set_option("automatic-rename", true, CommandSwitches::default())
            .unwrap();
        assert_eq!(window.last(), "set-option -w automatic-rename on");
    }

    #[test]
    fn test_stderr_becomes_option_error() {
        let window = FakeWindow {
            stderr: vec!["unknown option: moooz".to_string()],
            ..FakeWindow::default()
        };
        let error = window
            .set_option("moooz", "x", CommandSwitches::default())
            .unwrap_err();
        let Error::Option(error) = error else {
            panic!("expected an option error");
        };
        assert_eq!(error.kind(), OptionErrorKind::Unknown);
    }

    #[test]
    fn test_container_values_are_rejected() {
        let window = FakeWindow::default();
        let error = window
            .set_option(
                "status-format",
                OptionValue::Array(SparseArray::new()),
                CommandSwitches::default(),
            )
            .unwrap_err();
        assert!(matches!(error, Error::UnsupportedValue { kind: "array", .. }));
        assert!(window.issued.borrow().is_empty());
    }

    #[test]
    fn test_show_option_coerces_value() {
        let window = FakeWindow::replying(&["main-pane-height 24"]);
        let value = window
            .show_option("main-pane-height", CommandSwitches::default().with_global())
            .unwrap();
        assert_eq!(value, Some(OptionValue::Integer(24)));
        assert_eq!(window.last(), "show-options -g -w main-pane-height");
    }

    #[test]
    fn test_show_option_without_output() {
        let window = FakeWindow::default();
        let value = window
            .show_option("pane-border-format", CommandSwitches::default())
            .unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn test_window_options_skip_user_options() {
        let window = FakeWindow::replying(&[
            "aggressive-resize on",
            "@plugin-state ready",
            "main-pane-width 30%",
        ]);
        let options = window.window_options(CommandSwitches::default()).unwrap();
        assert_eq!(options.aggressive_resize, Some(tmux_options_core::Switch::On));
        assert_eq!(
            options.main_pane_width,
            Some(tmux_options_core::Dimension::Expr("30%".to_string()))
        );
    }

    #[test]
    fn test_hook_scope_dropped_on_old_tmux() {
        let window = FakeWindow {
            old_tmux: true,
            ..FakeWindow::default()
        };
        window
            .set_hook("window-resized", "refresh-client", CommandSwitches::default())
            .unwrap();
        assert_eq!(window.last(), "set-hook window-resized refresh-client");
    }

    #[test]
    fn test_show_hook_returns_commands() {
        let window = FakeWindow::replying(&[
            "window-renamed[0] display-message one",
            "window-renamed[4] display-message two",
        ]);
        let commands = window
            .show_hook("window-renamed", CommandSwitches::default())
            .unwrap()
            .unwrap();
        assert_eq!(commands.indices().collect::<Vec<_>>(), vec![0, 4]);
        assert_eq!(window.last(), "show-hooks -w window-renamed");
    }

    #[test]
    fn test_show_hook_without_commands() {
        let window = FakeWindow::default();
        let commands = window
            .show_hook("window-renamed", CommandSwitches::default())
            .unwrap();
        assert_eq!(commands, None);
    }
}
