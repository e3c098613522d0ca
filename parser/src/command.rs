//! Scope-aware argument builder for option and hook commands.
//!
//! Switches are emitted in one fixed order, then the scope flag, then the
//! option or hook name, then the value. Switches an operation does not accept
//! are dropped. `-w`/`-p` on hook commands need tmux 3.2; on older servers
//! they are dropped with a warning.

use std::fmt;

use serde::{Deserialize, Serialize};
use tmux_options_core::{OptionScope, ScopeSelector};
use tracing::{debug, warn};

/// Lowest tmux version accepting `-w`/`-p` on hook commands.
pub const HOOK_SCOPE_FLAGS_VERSION: &str = "3.2";

/// Version predicates of the connected tmux server.
pub trait VersionCheck {
    /// `true` if the server is older than `version`.
    fn has_lt_version(&self, version: &str) -> bool;

    /// `true` if the server is `version` or newer.
    fn has_gte_version(&self, version: &str) -> bool {
        !self.has_lt_version(version)
    }
}

/// The option or hook command being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    SetOption,
    UnsetOption,
    ShowOptions,
    SetHook,
    UnsetHook,
    ShowHooks,
    RunHook,
}

impl Operation {
    /// tmux command the operation runs.
    pub fn command_name(self) -> &'static str {
        match self {
            Self::SetOption | Self::UnsetOption => "set-option",
            Self::ShowOptions => "show-options",
            Self::SetHook | Self::UnsetHook | Self::RunHook => "set-hook",
            Self::ShowHooks => "show-hooks",
        }
    }

    pub fn is_hook(self) -> bool {
        matches!(
            self,
            Self::SetHook | Self::UnsetHook | Self::ShowHooks | Self::RunHook
        )
    }

    /// Whether the switch may be passed to this operation.
    pub fn accepts(self, flag: CommandFlag) -> bool {
        use CommandFlag::*;

        match self {
            Self::SetOption => matches!(
                flag,
                Format | Unset | UnsetPanes | PreventOverwrite | IgnoreErrors | Append | Global
            ),
            Self::UnsetOption => matches!(flag, Unset | UnsetPanes | IgnoreErrors | Global),
            Self::ShowOptions => matches!(
                flag,
                IgnoreErrors | Global | IncludeHooks | IncludeInherited | ValuesOnly
            ),
            Self::SetHook => matches!(
                flag,
                Format | Unset | PreventOverwrite | IgnoreErrors | Append | Global | RunImmediately
            ),
            Self::UnsetHook => matches!(flag, Unset | IgnoreErrors | Global),
            Self::ShowHooks => matches!(flag, IgnoreErrors | Global | ValuesOnly),
            Self::RunHook => matches!(flag, Global | RunImmediately),
        }
    }

    /// Switches the operation always passes.
    fn implied(self, switches: &CommandSwitches) -> &'static [CommandFlag] {
        match self {
            Self::UnsetOption if switches.unset_panes => &[],
            Self::UnsetOption | Self::UnsetHook => &[CommandFlag::Unset],
            Self::RunHook => &[CommandFlag::RunImmediately],
            _ => &[],
        }
    }

    /// Whether another set switch replaces `flag` for this operation.
    ///
    /// Unsetting an option passes exactly one of `-u` and `-U`.
    fn overridden(self, flag: CommandFlag, switches: &CommandSwitches) -> bool {
        self == Self::UnsetOption && flag == CommandFlag::Unset && switches.unset_panes
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::SetOption => "set-option",
            Self::UnsetOption => "unset-option",
            Self::ShowOptions => "show-options",
            Self::SetHook => "set-hook",
            Self::UnsetHook => "unset-hook",
            Self::ShowHooks => "show-hooks",
            Self::RunHook => "run-hook",
        };
        f.write_str(label)
    }
}

/// A boolean command switch, listed in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandFlag {
    Format,
    Unset,
    UnsetPanes,
    PreventOverwrite,
    IgnoreErrors,
    Append,
    Global,
    IncludeHooks,
    IncludeInherited,
    RunImmediately,
    ValuesOnly,
}

impl CommandFlag {
    pub const ALL: [CommandFlag; 11] = [
        Self::Format,
        Self::Unset,
        Self::UnsetPanes,
        Self::PreventOverwrite,
        Self::IgnoreErrors,
        Self::Append,
        Self::Global,
        Self::IncludeHooks,
        Self::IncludeInherited,
        Self::RunImmediately,
        Self::ValuesOnly,
    ];

    pub fn flag(self) -> &'static str {
        match self {
            Self::Format => "-F",
            Self::Unset => "-u",
            Self::UnsetPanes => "-U",
            Self::PreventOverwrite => "-o",
            Self::IgnoreErrors => "-q",
            Self::Append => "-a",
            Self::Global => "-g",
            Self::IncludeHooks => "-H",
            Self::IncludeInherited => "-A",
            Self::RunImmediately => "-R",
            Self::ValuesOnly => "-v",
        }
    }
}

/// Switches and scope for one command.
///
/// # Examples
///
/// ```
/// use tmux_options_core::OptionScope;
/// use tmux_options_parser::CommandSwitches;
///
/// let switches = CommandSwitches::default()
///     .with_global()
///     .with_scope(OptionScope::Window);
/// assert!(switches.global);
/// assert!(!switches.ignore_errors);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandSwitches {
    /// `-F`: expand formats in the value.
    pub format: bool,
    /// `-u`: unset instead of set.
    pub unset: bool,
    /// `-U`: unset in every pane of the window as well.
    pub unset_panes: bool,
    /// `-o`: do not overwrite an existing value.
    pub prevent_overwrite: bool,
    /// `-q`: let tmux swallow option errors.
    pub ignore_errors: bool,
    /// `-a`: append to the existing value.
    pub append: bool,
    /// `-g`: global value.
    pub global: bool,
    /// Deprecated spelling of `global`.
    pub g: bool,
    /// `-H`: include hooks in `show-options`.
    pub include_hooks: bool,
    /// `-A`: include inherited values.
    pub include_inherited: bool,
    /// `-R`: run the hook immediately.
    pub run_immediately: bool,
    /// `-v`: print values only.
    pub values_only: bool,
    pub scope: ScopeSelector,
}

impl CommandSwitches {
    pub fn with_scope(mut self, scope: impl Into<ScopeSelector>) -> Self {
        self.scope = scope.into();
        self
    }

    pub fn with_global(mut self) -> Self {
        self.global = true;
        self
    }

    pub fn with_ignore_errors(mut self) -> Self {
        self.ignore_errors = true;
        self
    }

    pub fn with_include_inherited(mut self) -> Self {
        self.include_inherited = true;
        self
    }

    pub fn with_values_only(mut self) -> Self {
        self.values_only = true;
        self
    }

    pub fn with_append(mut self) -> Self {
        self.append = true;
        self
    }

    pub fn is_set(&self, flag: CommandFlag) -> bool {
        match flag {
            CommandFlag::Format => self.format,
            CommandFlag::Unset => self.unset,
            CommandFlag::UnsetPanes => self.unset_panes,
            CommandFlag::PreventOverwrite => self.prevent_overwrite,
            CommandFlag::IgnoreErrors => self.ignore_errors,
            CommandFlag::Append => self.append,
            CommandFlag::Global => self.global || self.g,
            CommandFlag::IncludeHooks => self.include_hooks,
            CommandFlag::IncludeInherited => self.include_inherited,
            CommandFlag::RunImmediately => self.run_immediately,
            CommandFlag::ValuesOnly => self.values_only,
        }
    }
}

/// A tmux command name with its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TmuxCommand {
    pub name: String,
    pub args: Vec<String>,
}

impl fmt::Display for TmuxCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        for arg in &self.args {
            match shlex::try_quote(arg) {
                Ok(quoted) => write!(f, " {quoted}")?,
                Err(_) => write!(f, " {arg:?}")?,
            }
        }
        Ok(())
    }
}

/// Request to build one option or hook command.
///
/// # Examples
///
/// ```
/// use tmux_options_core::{OptionScope, OptionValue};
/// use tmux_options_parser::{CommandRequest, CommandSwitches, Operation, VersionCheck};
///
/// struct Tmux31;
///
/// impl VersionCheck for Tmux31 {
///     fn has_lt_version(&self, version: &str) -> bool {
///         version == "3.2"
///     }
/// }
///
/// let switches = CommandSwitches::default().with_global();
/// let command = CommandRequest::new(Operation::SetOption)
///     .name("mouse")
///     .value(OptionValue::from(true))
///     .switches(switches)
///     .build(Some(OptionScope::Window), &Tmux31);
/// assert_eq!(command.args, vec!["-g", "-w", "mouse", "on"]);
///
/// let command = CommandRequest::new(Operation::SetHook)
///     .name("pane-exited")
///     .value("kill-session".into())
///     .build(Some(OptionScope::Pane), &Tmux31);
/// assert_eq!(command.args, vec!["pane-exited", "kill-session"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CommandRequest<'a> {
    operation: Operation,
    name: Option<&'a str>,
    value: Option<String>,
    switches: CommandSwitches,
}

impl<'a> CommandRequest<'a> {
    pub fn new(operation: Operation) -> Self {
        Self {
            operation,
            name: None,
            value: None,
            switches: CommandSwitches::default(),
        }
    }

    /// Option or hook name the command applies to.
    pub fn name(mut self, name: &'a str) -> Self {
        self.name = Some(name);
        self
    }

    /// Value to set. Booleans are rendered as `on`/`off`; containers and
    /// null have no argument form and are omitted.
    pub fn value(mut self, value: tmux_options_core::OptionValue) -> Self {
        self.value = value.to_arg();
        self
    }

    pub fn switches(mut self, switches: CommandSwitches) -> Self {
        self.switches = switches;
        self
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Builds the command, resolving [`ScopeSelector::UseDefault`] to
    /// `default_scope`.
    pub fn build<V>(&self, default_scope: Option<OptionScope>, version: &V) -> TmuxCommand
    where
        V: VersionCheck + ?Sized,
    {
        let operation = self.operation;
        let switches = &self.switches;

        if switches.g {
            warn!(%operation, "The `g` switch is deprecated in favor of `global`");
        }

        let implied = operation.implied(switches);
        let mut args = Vec::new();
        for flag in CommandFlag::ALL {
            if implied.contains(&flag) {
                args.push(flag.flag().to_string());
                continue;
            }
            if !switches.is_set(flag) {
                continue;
            }
            if operation.overridden(flag, switches) {
                debug!(%operation, flag = flag.flag(), "Dropping switch replaced by another");
                continue;
            }
            if operation.accepts(flag) {
                args.push(flag.flag().to_string());
            } else {
                debug!(%operation, flag = flag.flag(), "Ignoring switch the operation does not take");
            }
        }

        if let Some(scope) = switches.scope.resolve(default_scope) {
            if let Some(flag) = scope_flag(operation, scope, version) {
                args.push(flag.to_string());
            }
        }

        args.extend(self.name.map(str::to_string));
        if matches!(operation, Operation::SetOption | Operation::SetHook) {
            args.extend(self.value.clone());
        }

        TmuxCommand {
            name: operation.command_name().to_string(),
            args,
        }
    }
}

/// Scope flag for `operation`, or `None` when it is omitted.
fn scope_flag<V>(operation: Operation, scope: OptionScope, version: &V) -> Option<&'static str>
where
    V: VersionCheck + ?Sized,
{
    let flag = scope.flag()?;
    if operation.is_hook()
        && scope.hook_flag_requires_3_2()
        && version.has_lt_version(HOOK_SCOPE_FLAGS_VERSION)
    {
        warn!(
            %operation,
            flag,
            "Scope flags '-w' and '-p' require tmux {HOOK_SCOPE_FLAGS_VERSION}+; ignoring"
        );
        return None;
    }
    Some(flag)
}
