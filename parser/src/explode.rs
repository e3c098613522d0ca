//! Groups indexed keys into sparse arrays.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tmux_options_core::{OptionKey, OptionValue, SparseArray};
use tracing::warn;

use crate::lines::FlatOptions;

/// Exploded options: base name (inheritance marker kept) → value.
pub type OptionMap = BTreeMap<String, OptionValue>;

/// Settings for [`explode_arrays`].
///
/// # Examples
///
/// ```
/// use tmux_options_parser::ParseConfig;
///
/// let config = ParseConfig::default();
/// assert!(!config.force_array);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseConfig {
    /// Wrap every unindexed value as index 0 of an array.
    pub force_array: bool,
}

impl ParseConfig {
    pub fn force_array() -> Self {
        Self { force_array: true }
    }
}

/// Groups `name[index]` keys into one [`SparseArray`] per name.
///
/// Unindexed keys pass through as scalars. A key whose suffix cannot be
/// parsed is logged and stored as a scalar under its raw text.
pub fn explode_arrays(flat: FlatOptions, config: &ParseConfig) -> OptionMap {
    let mut options = OptionMap::new();

    for (raw_key, raw_value) in flat {
        let value = OptionValue::from_raw(raw_value);

        let key = match OptionKey::parse(&raw_key) {
            Ok(key) => key,
            Err(err) => {
                warn!(key = %raw_key, error = %err, "Storing malformed option key as a scalar");
                options.insert(raw_key.trim().to_string(), value);
                continue;
            }
        };

        let Some(index) = key.index else {
            let value = if config.force_array {
                OptionValue::Array(SparseArray::from([(0, value)]))
            } else {
                value
            };
            options.insert(key.map_key(), value);
            continue;
        };

        let slot = options
            .entry(key.map_key())
            .or_insert_with(|| OptionValue::Array(SparseArray::new()));
        match slot {
            OptionValue::Array(array) => {
                array.insert(index, value);
            }
            scalar => {
                warn!(
                    key = %raw_key,
                    previous = scalar.kind(),
                    "Indexed key replaces an unindexed value of the same name"
                );
                *scalar = OptionValue::Array(SparseArray::from([(index, value)]));
            }
        }
    }

    options
}
