//! Index-sparse sequences for array-valued options and hooks.
//!
//! tmux reports array options as `name[index] value` lines whose indices
//! need not be contiguous (`command-alias[0]`, `command-alias[5]`). A
//! [`SparseArray`] keeps exactly the indices it was given and always yields
//! values in ascending index order.

use std::collections::BTreeMap;
use std::ops::Index;

use serde::de::{Error as _, Unexpected};
use serde::{Deserialize, Deserializer, Serialize};

/// Mapping from non-negative index to value, ordered by index.
///
/// # Examples
///
/// ```
/// use tmux_options_core::SparseArray;
///
/// let mut aliases = SparseArray::new();
/// aliases.insert(5, "choose-session=choose-tree -s");
/// aliases.insert(0, "split-pane=split-window");
///
/// assert_eq!(aliases.len(), 2);
/// assert_eq!(aliases.indices().collect::<Vec<_>>(), vec![0, 5]);
/// assert_eq!(
///     aliases.to_vec(),
///     vec!["split-pane=split-window", "choose-session=choose-tree -s"]
/// );
///
/// assert_eq!(aliases.append("info=show-messages -JT"), Some(6));
/// assert_eq!(aliases.get(6), Some(&"info=show-messages -JT"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent, bound(deserialize = "T: Deserialize<'de>"))]
pub struct SparseArray<T> {
    #[serde(deserialize_with = "index_keyed")]
    entries: BTreeMap<usize, T>,
}

/// Reads `{"index": value}` maps. Keys arrive as strings both from JSON and
/// from serde's buffered content inside untagged enums.
fn index_keyed<'de, D, T>(deserializer: D) -> Result<BTreeMap<usize, T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    BTreeMap::<String, T>::deserialize(deserializer)?
        .into_iter()
        .map(|(key, value)| match key.parse() {
            Ok(index) => Ok((index, value)),
            Err(_) => Err(D::Error::invalid_value(
                Unexpected::Str(&key),
                &"a non-negative array index",
            )),
        })
        .collect()
}

impl<T> Default for SparseArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SparseArray<T> {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Stores `value` at `index`, returning the value it replaced.
    pub fn insert(&mut self, index: usize, value: T) -> Option<T> {
        self.entries.insert(index, value)
    }

    /// Stores `value` one past the highest existing index (or at `0` when
    /// empty) and returns the index used.
    ///
    /// Returns `None` and leaves the sequence untouched when the highest
    /// index is already `usize::MAX`.
    pub fn append(&mut self, value: T) -> Option<usize> {
        let index = self.next_index()?;
        self.entries.insert(index, value);
        Some(index)
    }

    /// Index the next [`append`](Self::append) would use, if any.
    pub fn next_index(&self) -> Option<usize> {
        match self.entries.last_key_value() {
            Some((index, _)) => index.checked_add(1),
            None => Some(0),
        }
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.entries.get(&index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.entries.get_mut(&index)
    }

    pub fn remove(&mut self, index: usize) -> Option<T> {
        self.entries.remove(&index)
    }

    pub fn contains_index(&self, index: usize) -> bool {
        self.entries.contains_key(&index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Populated indices in ascending order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.keys().copied()
    }

    /// Values in ascending index order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.entries.values_mut()
    }

    /// `(index, value)` pairs in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> {
        self.entries.iter().map(|(index, value)| (*index, value))
    }

    /// Moves every entry of `other` into `self`, overwriting shared indices.
    pub fn extend_from(&mut self, other: SparseArray<T>) {
        self.entries.extend(other.entries);
    }

    /// Converts a sequence of one element type into another, keeping indices.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> SparseArray<U> {
        SparseArray {
            entries: self
                .entries
                .into_iter()
                .map(|(index, value)| (index, f(value)))
                .collect(),
        }
    }

    /// Like [`map`](Self::map), dropping entries for which `f` returns `None`.
    pub fn filter_map<U>(self, mut f: impl FnMut(usize, T) -> Option<U>) -> SparseArray<U> {
        SparseArray {
            entries: self
                .entries
                .into_iter()
                .filter_map(|(index, value)| f(index, value).map(|mapped| (index, mapped)))
                .collect(),
        }
    }
}

impl<T: Clone> SparseArray<T> {
    /// Values in ascending index order, without their indices.
    pub fn to_vec(&self) -> Vec<T> {
        self.entries.values().cloned().collect()
    }
}

impl<T> Index<usize> for SparseArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.entries[&index]
    }
}

impl<T> FromIterator<(usize, T)> for SparseArray<T> {
    fn from_iter<I: IntoIterator<Item = (usize, T)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<(usize, T)> for SparseArray<T> {
    fn extend<I: IntoIterator<Item = (usize, T)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl<T, const N: usize> From<[(usize, T); N]> for SparseArray<T> {
    fn from(entries: [(usize, T); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<T> IntoIterator for SparseArray<T> {
    type Item = (usize, T);
    type IntoIter = std::collections::btree_map::IntoIter<usize, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
