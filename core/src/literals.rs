//! Enumerated option values.
//!
//! Each enum accepts the literal tmux prints as well as the coerced forms
//! produced by the parser: `on`/`off` arrive as booleans and `12`/`24` as
//! integers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::record::{FieldValue, literal_text};
use crate::value::OptionValue;

/// A string that is not one of an enum's literals.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{value}' is not a valid {kind}")]
pub struct UnknownLiteral {
    pub kind: &'static str,
    pub value: String,
}

macro_rules! option_literal {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $variant:ident => $text:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( #[serde(rename = $text)] $variant, )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $text, )+
                }
            }
        }

        impl FromStr for $name {
            type Err = UnknownLiteral;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $text => Ok($name::$variant), )+
                    _ => Err(UnknownLiteral {
                        kind: stringify!($name),
                        value: s.to_string(),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FieldValue for $name {
            fn from_option_value(value: OptionValue) -> Option<Self> {
                literal_text(value)?.parse().ok()
            }
        }

        impl From<$name> for OptionValue {
            fn from(value: $name) -> Self {
                OptionValue::String(value.as_str().to_string())
            }
        }
    };
}

option_literal! {
    /// Plain `on`/`off` option.
    pub enum Switch {
        On => "on",
        Off => "off",
    }
}

impl From<bool> for Switch {
    fn from(value: bool) -> Self {
        if value { Self::On } else { Self::Off }
    }
}

impl From<Switch> for bool {
    fn from(value: Switch) -> Self {
        value == Switch::On
    }
}

option_literal! {
    pub enum ExtendedKeys {
        On => "on",
        Off => "off",
        Always => "always",
    }
}

option_literal! {
    pub enum SetClipboard {
        On => "on",
        External => "external",
        Off => "off",
    }
}

option_literal! {
    /// `activity-action`, `bell-action` and `silence-action`.
    pub enum AlertAction {
        Any => "any",
        None => "none",
        Current => "current",
        Other => "other",
    }
}

option_literal! {
    pub enum DetachOnDestroy {
        Off => "off",
        On => "on",
        NoDetached => "no-detached",
        Previous => "previous",
        Next => "next",
    }
}

option_literal! {
    /// Border style of menus and popups.
    pub enum BorderLines {
        Single => "single",
        Rounded => "rounded",
        Double => "double",
        Heavy => "heavy",
        Simple => "simple",
        Padded => "padded",
        None => "none",
    }
}

option_literal! {
    pub enum StatusJustify {
        Left => "left",
        Centre => "centre",
        Right => "right",
        AbsoluteCentre => "absolute-centre",
    }
}

option_literal! {
    /// `status-keys` and `mode-keys`.
    pub enum KeyMode {
        Vi => "vi",
        Emacs => "emacs",
    }
}

option_literal! {
    pub enum StatusPosition {
        Top => "top",
        Bottom => "bottom",
    }
}

option_literal! {
    /// `visual-activity`, `visual-bell` and `visual-silence`.
    pub enum VisualAlert {
        On => "on",
        Off => "off",
        Both => "both",
    }
}

option_literal! {
    pub enum ClockModeStyle {
        Twelve => "12",
        TwentyFour => "24",
    }
}

option_literal! {
    pub enum PaneBorderIndicators {
        Off => "off",
        Colour => "colour",
        Arrows => "arrows",
        Both => "both",
    }
}

option_literal! {
    pub enum PaneBorderLines {
        Single => "single",
        Double => "double",
        Heavy => "heavy",
        Simple => "simple",
        Number => "number",
    }
}

option_literal! {
    pub enum PaneBorderStatus {
        Off => "off",
        Top => "top",
        Bottom => "bottom",
    }
}

option_literal! {
    pub enum WindowSize {
        Largest => "largest",
        Smallest => "smallest",
        Manual => "manual",
        Latest => "latest",
    }
}

option_literal! {
    pub enum AllowPassthrough {
        On => "on",
        Off => "off",
        All => "all",
    }
}

option_literal! {
    pub enum CursorStyle {
        Default => "default",
        BlinkingBlock => "blinking-block",
        Block => "block",
        BlinkingUnderline => "blinking-underline",
        Underline => "underline",
        BlinkingBar => "blinking-bar",
        Bar => "bar",
    }
}

option_literal! {
    pub enum RemainOnExit {
        On => "on",
        Off => "off",
        Failed => "failed",
    }
}

/// The `status` option: `on`, `off`, or a number of status lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    On,
    Off,
    Lines(i64),
}

impl FieldValue for Status {
    fn from_option_value(value: OptionValue) -> Option<Self> {
        match value {
            OptionValue::Boolean(true) => Some(Self::On),
            OptionValue::Boolean(false) => Some(Self::Off),
            OptionValue::Integer(lines) => Some(Self::Lines(lines)),
            OptionValue::String(text) => match text.as_str() {
                "on" => Some(Self::On),
                "off" => Some(Self::Off),
                other => other.parse().ok().map(Self::Lines),
            },
            _ => None,
        }
    }
}

/// Size given either in cells or as an expression such as `30%`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    Cells(i64),
    Expr(String),
}

impl FieldValue for Dimension {
    fn from_option_value(value: OptionValue) -> Option<Self> {
        match value {
            OptionValue::Integer(cells) => Some(Self::Cells(cells)),
            OptionValue::String(text) => Some(
                text.parse()
                    .map(Self::Cells)
                    .unwrap_or(Self::Expr(text)),
            ),
            _ => None,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cells(cells) => write!(f, "{cells}"),
            Self::Expr(expr) => f.write_str(expr),
        }
    }
}
