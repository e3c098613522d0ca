//! Exploded option values.
//!
//! A value starts life as a raw string (or nothing, for a bare key), is
//! grouped into a [`SparseArray`] when its key carries an `[index]` suffix,
//! may be decomposed into one of the nested shapes used by
//! `terminal-features`, `terminal-overrides` and `command-alias`, and finally
//! has its string leaves coerced to integers or booleans.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::SparseArray;

/// `terminal-features`: terminal pattern → feature names.
pub type TerminalFeatures = BTreeMap<String, Vec<String>>;

/// `terminal-overrides`: terminal pattern → capability → optional value.
pub type TerminalOverrides = BTreeMap<String, BTreeMap<String, Option<OverrideValue>>>;

/// `command-alias`: alias → command string.
pub type CommandAliases = BTreeMap<String, String>;

/// Value of a single `terminal-overrides` capability (`Tc`, `colors=256`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OverrideValue {
    Integer(i64),
    String(String),
}

impl OverrideValue {
    /// Parses a capability value, producing an integer when fully numeric.
    pub fn parse(raw: &str) -> Self {
        if is_digits(raw) {
            if let Ok(number) = raw.parse() {
                return Self::Integer(number);
            }
        }
        Self::String(raw.to_string())
    }
}

impl fmt::Display for OverrideValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(number) => write!(f, "{number}"),
            Self::String(text) => f.write_str(text),
        }
    }
}

/// A parsed option value.
///
/// # Examples
///
/// ```
/// use tmux_options_core::OptionValue;
///
/// let value = OptionValue::from(true);
/// assert_eq!(value.to_arg().as_deref(), Some("on"));
///
/// let value = OptionValue::from(50);
/// assert_eq!(value.as_i64(), Some(50));
/// assert_eq!(value.to_arg().as_deref(), Some("50"));
/// ```
///
/// Deserialization tries the variants in declaration order, so an object
/// whose keys are all indices (including `{}`) reads back as an
/// [`Array`](OptionValue::Array).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// Key listed without a value (`user-keys`).
    #[default]
    Null,
    Boolean(bool),
    Integer(i64),
    String(String),
    /// Array option grouped by index.
    Array(SparseArray<OptionValue>),
    TerminalFeatures(TerminalFeatures),
    TerminalOverrides(TerminalOverrides),
    CommandAlias(CommandAliases),
}

impl OptionValue {
    /// Wraps a raw line value: `None` becomes [`OptionValue::Null`].
    pub fn from_raw(raw: Option<String>) -> Self {
        raw.map_or(Self::Null, Self::String)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(number) => Some(*number),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(flag) => Some(*flag),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&SparseArray<OptionValue>> {
        match self {
            Self::Array(array) => Some(array),
            _ => None,
        }
    }

    /// Short label of the variant, used in log messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::TerminalFeatures(_) => "terminal-features",
            Self::TerminalOverrides(_) => "terminal-overrides",
            Self::CommandAlias(_) => "command-alias",
        }
    }

    /// Renders a scalar the way `set-option` expects it on the command line.
    ///
    /// Booleans become `on`/`off`. Containers and [`OptionValue::Null`] have
    /// no single-argument form and return `None`.
    pub fn to_arg(&self) -> Option<String> {
        match self {
            Self::Boolean(true) => Some("on".to_string()),
            Self::Boolean(false) => Some("off".to_string()),
            Self::Integer(number) => Some(number.to_string()),
            Self::String(text) => Some(text.clone()),
            _ => None,
        }
    }

    /// Structured JSON form of the value.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u32> for OptionValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<SparseArray<OptionValue>> for OptionValue {
    fn from(value: SparseArray<OptionValue>) -> Self {
        Self::Array(value)
    }
}

impl<T: Into<OptionValue>> From<Option<T>> for OptionValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// `true` for a non-empty string made only of ASCII digits.
pub fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|byte| byte.is_ascii_digit())
}
