//! Option and hook scopes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Level an option or hook command applies to.
///
/// # Examples
///
/// ```
/// use tmux_options_core::OptionScope;
///
/// assert_eq!(OptionScope::Server.flag(), Some("-s"));
/// assert_eq!(OptionScope::Session.flag(), None);
/// assert_eq!(OptionScope::Pane.flag(), Some("-p"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionScope {
    Server,
    Session,
    Window,
    Pane,
}

impl OptionScope {
    pub const ALL: [OptionScope; 4] = [Self::Server, Self::Session, Self::Window, Self::Pane];

    /// Command-line flag selecting this scope.
    ///
    /// Session scope is what `set-option`/`show-options` use when no scope
    /// flag is given, so it has none.
    pub fn flag(self) -> Option<&'static str> {
        match self {
            Self::Server => Some("-s"),
            Self::Session => None,
            Self::Window => Some("-w"),
            Self::Pane => Some("-p"),
        }
    }

    /// Whether the scope flag only exists for hook commands from tmux 3.2 on.
    pub fn hook_flag_requires_3_2(self) -> bool {
        matches!(self, Self::Window | Self::Pane)
    }
}

impl fmt::Display for OptionScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Server => "server",
            Self::Session => "session",
            Self::Window => "window",
            Self::Pane => "pane",
        };
        f.write_str(label)
    }
}

/// Scope requested by a caller.
///
/// Keeps "use the target's own default" distinct from "no scope at all":
/// a window target defaults to [`OptionScope::Window`], but a caller may
/// still ask for an unscoped command.
///
/// # Examples
///
/// ```
/// use tmux_options_core::{OptionScope, ScopeSelector};
///
/// let default = Some(OptionScope::Window);
/// assert_eq!(ScopeSelector::UseDefault.resolve(default), Some(OptionScope::Window));
/// assert_eq!(ScopeSelector::Unscoped.resolve(default), None);
/// assert_eq!(
///     ScopeSelector::from(OptionScope::Pane).resolve(default),
///     Some(OptionScope::Pane)
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScopeSelector {
    #[default]
    UseDefault,
    Unscoped,
    Scope(OptionScope),
}

impl ScopeSelector {
    /// Resolves against the target's default scope.
    pub fn resolve(self, default: Option<OptionScope>) -> Option<OptionScope> {
        match self {
            Self::UseDefault => default,
            Self::Unscoped => None,
            Self::Scope(scope) => Some(scope),
        }
    }
}

impl From<OptionScope> for ScopeSelector {
    fn from(scope: OptionScope) -> Self {
        Self::Scope(scope)
    }
}

impl From<Option<OptionScope>> for ScopeSelector {
    fn from(scope: Option<OptionScope>) -> Self {
        scope.map_or(Self::Unscoped, Self::Scope)
    }
}
