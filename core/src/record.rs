//! Field assignment for typed option records.
//!
//! Records are plain structs; each one carries a generated lookup table from
//! attribute name (`buffer_limit`) to field, so building a record from tmux
//! output is a table lookup per key. Unknown names are rejected with
//! [`RecordError::UnknownField`]. Values that do not fit the field's type are
//! logged and leave the field at its default.

use tracing::warn;

use crate::complex::decompose_complex;
use crate::error::RecordError;
use crate::key::{OptionKey, attribute_name};
use crate::value::{CommandAliases, OptionValue, TerminalFeatures, TerminalOverrides};
use crate::SparseArray;

/// Conversion from an exploded value into a scalar field type.
pub trait FieldValue: Sized {
    fn from_option_value(value: OptionValue) -> Option<Self>;
}

impl FieldValue for String {
    fn from_option_value(value: OptionValue) -> Option<Self> {
        value.to_arg()
    }
}

impl FieldValue for i64 {
    fn from_option_value(value: OptionValue) -> Option<Self> {
        match value {
            OptionValue::Integer(number) => Some(number),
            OptionValue::String(text) => text.trim().parse().ok(),
            _ => None,
        }
    }
}

/// Raw text of a scalar as tmux would print it, for literal parsing.
pub(crate) fn literal_text(value: OptionValue) -> Option<String> {
    match value {
        OptionValue::String(text) => Some(text),
        OptionValue::Boolean(true) => Some("on".to_string()),
        OptionValue::Boolean(false) => Some("off".to_string()),
        OptionValue::Integer(number) => Some(number.to_string()),
        _ => None,
    }
}

/// A record field that can absorb an exploded value.
pub trait OptionField {
    /// Stores `value`, returning `false` when it does not fit the field.
    fn assign(&mut self, value: OptionValue) -> bool;
}

impl<T: FieldValue> OptionField for Option<T> {
    fn assign(&mut self, value: OptionValue) -> bool {
        if value.is_null() {
            *self = None;
            return true;
        }
        match T::from_option_value(value) {
            Some(converted) => {
                *self = Some(converted);
                true
            }
            None => false,
        }
    }
}

impl OptionField for SparseArray<String> {
    fn assign(&mut self, value: OptionValue) -> bool {
        match value {
            OptionValue::Null => true,
            OptionValue::Array(array) => {
                // Entries listed without a value carry nothing to store.
                let texts = array.filter_map(|_, element| element.to_arg());
                self.extend_from(texts);
                true
            }
            scalar => match scalar.to_arg() {
                Some(text) => {
                    *self = SparseArray::from([(0, text)]);
                    true
                }
                None => false,
            },
        }
    }
}

impl OptionField for TerminalFeatures {
    fn assign(&mut self, value: OptionValue) -> bool {
        match value {
            OptionValue::Null => true,
            OptionValue::TerminalFeatures(features) => {
                self.extend(features);
                true
            }
            raw @ (OptionValue::Array(_) | OptionValue::String(_)) => {
                match decompose_complex("terminal-features", &raw) {
                    Some(decomposed) => self.assign(decomposed),
                    None => false,
                }
            }
            _ => false,
        }
    }
}

impl OptionField for TerminalOverrides {
    fn assign(&mut self, value: OptionValue) -> bool {
        match value {
            OptionValue::Null => true,
            OptionValue::TerminalOverrides(overrides) => {
                for (term, capabilities) in overrides {
                    self.entry(term).or_default().extend(capabilities);
                }
                true
            }
            raw @ (OptionValue::Array(_) | OptionValue::String(_)) => {
                match decompose_complex("terminal-overrides", &raw) {
                    Some(decomposed) => self.assign(decomposed),
                    None => false,
                }
            }
            _ => false,
        }
    }
}

impl OptionField for CommandAliases {
    fn assign(&mut self, value: OptionValue) -> bool {
        match value {
            OptionValue::Null => true,
            OptionValue::CommandAlias(aliases) => {
                self.extend(aliases);
                true
            }
            raw @ (OptionValue::Array(_) | OptionValue::String(_)) => {
                match decompose_complex("command-alias", &raw) {
                    Some(decomposed) => self.assign(decomposed),
                    None => false,
                }
            }
            _ => false,
        }
    }
}

/// A typed record built from hyphenated option names.
///
/// # Examples
///
/// ```
/// use tmux_options_core::{OptionRecord, OptionValue, ServerOptions};
///
/// let options = ServerOptions::from_options([
///     ("buffer-limit", OptionValue::from(100)),
///     ("editor*", OptionValue::from("vim")),
/// ])
/// .unwrap();
/// assert_eq!(options.buffer_limit, Some(100));
/// assert_eq!(options.editor.as_deref(), Some("vim"));
///
/// assert!(ServerOptions::from_options([("moooz", OptionValue::Null)]).is_err());
/// ```
pub trait OptionRecord: Default {
    /// Type name used in error messages.
    const NAME: &'static str;

    /// Attribute names of every field, in declaration order.
    fn field_names() -> Vec<&'static str>;

    /// Looks up a field by attribute name.
    fn field_mut(&mut self, attribute: &str) -> Option<&mut dyn OptionField>;

    /// Assigns one hyphenated key, which may carry an `[index]` suffix or an
    /// inheritance marker.
    fn set(&mut self, key: &str, value: OptionValue) -> Result<(), RecordError> {
        let (attribute, value) = match OptionKey::parse(key) {
            Ok(parsed) => {
                let value = match parsed.index {
                    Some(index) => OptionValue::Array(SparseArray::from([(index, value)])),
                    None => value,
                };
                (parsed.attribute_name(), value)
            }
            Err(_) => (attribute_name(key.trim()), value),
        };

        let Some(field) = self.field_mut(&attribute) else {
            return Err(RecordError::UnknownField {
                record: Self::NAME,
                field: attribute,
            });
        };

        let kind = value.kind();
        if !field.assign(value) {
            warn!(
                record = Self::NAME,
                field = %attribute,
                value_kind = kind,
                "Ignoring option value that does not fit its field"
            );
        }
        Ok(())
    }

    /// Builds a record from `(key, value)` pairs.
    fn from_options<I, K>(entries: I) -> Result<Self, RecordError>
    where
        I: IntoIterator<Item = (K, OptionValue)>,
        K: AsRef<str>,
    {
        let mut record = Self::default();
        for (key, value) in entries {
            record.set(key.as_ref(), value)?;
        }
        Ok(record)
    }
}

/// Declares a record struct together with its attribute lookup table.
macro_rules! option_record {
    (
        $(#[$meta:meta])*
        pub struct $record:ident {
            $( $(#[$field_meta:meta])* $field:ident: $ty:ty, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(default)]
        pub struct $record {
            $( $(#[$field_meta])* pub $field: $ty, )+
        }

        impl $record {
            pub const FIELD_NAMES: &'static [&'static str] = &[$(stringify!($field)),+];
        }

        impl $crate::record::OptionRecord for $record {
            const NAME: &'static str = stringify!($record);

            fn field_names() -> Vec<&'static str> {
                Self::FIELD_NAMES.to_vec()
            }

            fn field_mut(
                &mut self,
                attribute: &str,
            ) -> Option<&mut dyn $crate::record::OptionField> {
                match attribute {
                    $( stringify!($field) => Some(&mut self.$field), )+
                    _ => None,
                }
            }
        }

        // Only fields that differ from their defaults are shown.
        impl std::fmt::Debug for $record {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let mut debug = f.debug_struct(stringify!($record));
                $(
                    if self.$field != <$ty>::default() {
                        debug.field(stringify!($field), &self.$field);
                    }
                )+
                debug.finish_non_exhaustive()
            }
        }
    };
}

pub(crate) use option_record;
