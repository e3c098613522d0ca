//! String-to-type coercion of exploded values.

use tmux_options_core::{OptionValue, is_digits};

use crate::explode::OptionMap;

/// Coerces one raw string: digits become an integer, `on`/`off` a boolean.
///
/// Every digit-only string is converted, including values that are really
/// identifiers. Numbers too large for `i64` stay strings.
///
/// # Examples
///
/// ```
/// use tmux_options_core::OptionValue;
/// use tmux_options_parser::coerce_str;
///
/// assert_eq!(coerce_str("50"), OptionValue::Integer(50));
/// assert_eq!(coerce_str("on"), OptionValue::Boolean(true));
/// assert_eq!(coerce_str("%50"), OptionValue::from("%50"));
/// ```
pub fn coerce_str(raw: &str) -> OptionValue {
    match raw {
        "on" => OptionValue::Boolean(true),
        "off" => OptionValue::Boolean(false),
        digits if is_digits(digits) => digits
            .parse()
            .map_or_else(|_| OptionValue::from(digits), OptionValue::Integer),
        text => OptionValue::from(text),
    }
}

/// Coerces every string leaf of `value`, descending into arrays.
///
/// Decomposed complex values already carry typed leaves and are left alone.
pub fn coerce_in_place(value: &mut OptionValue) -> &mut OptionValue {
    match value {
        OptionValue::String(text) => {
            let coerced = coerce_str(text);
            *value = coerced;
        }
        OptionValue::Array(array) => {
            for element in array.values_mut() {
                coerce_in_place(element);
            }
        }
        OptionValue::Null
        | OptionValue::Boolean(_)
        | OptionValue::Integer(_)
        | OptionValue::TerminalFeatures(_)
        | OptionValue::TerminalOverrides(_)
        | OptionValue::CommandAlias(_) => {}
    }
    value
}

/// Coerces every value of an exploded map.
pub fn coerce_options(options: &mut OptionMap) -> &mut OptionMap {
    for value in options.values_mut() {
        coerce_in_place(value);
    }
    options
}
