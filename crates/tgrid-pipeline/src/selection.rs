//! Key-based row selection.
//!
//! Selection is tracked as a set of row keys rather than flags on the records
//! themselves, so it survives re-sorting, re-filtering, and page changes.
//! When a unique-key column exists its value identifies the row; otherwise
//! the absolute row position stands in, which is only stable for as long as
//! the row set is.

use serde_json::Value;
use std::collections::HashSet;
use tgrid_core::{field_value, value_to_string};
use tgrid_core::value::is_null_or_empty;

/// Identity of one row for selection purposes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RowKey {
    /// Value of the unique-key column, as a string.
    Key(String),
    /// Positional fallback when no usable unique key exists.
    Index(usize),
}

/// Compute the selection key for a row.
///
/// Falls back to the position when no unique field is configured or the
/// row's key cell is missing or empty.
#[must_use]
pub fn row_key(record: &Value, unique_field: Option<&str>, index: usize) -> RowKey {
    if let Some(field) = unique_field {
        let cell = field_value(record, field);
        if !is_null_or_empty(cell) {
            if let Some(v) = cell {
                return RowKey::Key(value_to_string(v));
            }
        }
    }
    RowKey::Index(index)
}

/// Aggregate selection state over the displayed window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    /// No displayed row is selected (also the empty-window answer).
    None,
    /// Some but not all displayed rows are selected.
    Partial,
    /// Every displayed row is selected.
    All,
}

/// Set of selected row keys.
#[derive(Debug, Clone, Default)]
pub struct SelectionTracker {
    keys: HashSet<RowKey>,
}

impl SelectionTracker {
    /// Empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a key is selected.
    #[must_use]
    pub fn is_selected(&self, key: &RowKey) -> bool {
        self.keys.contains(key)
    }

    /// Flip one key; returns the new selected state.
    pub fn toggle(&mut self, key: RowKey) -> bool {
        if self.keys.remove(&key) {
            false
        } else {
            self.keys.insert(key);
            true
        }
    }

    /// Select one key.
    pub fn select(&mut self, key: RowKey) {
        self.keys.insert(key);
    }

    /// Deselect one key.
    pub fn deselect(&mut self, key: &RowKey) {
        self.keys.remove(key);
    }

    /// Select every given key.
    pub fn select_all<I: IntoIterator<Item = RowKey>>(&mut self, keys: I) {
        self.keys.extend(keys);
    }

    /// Deselect every given key.
    pub fn deselect_all<'a, I: IntoIterator<Item = &'a RowKey>>(&mut self, keys: I) {
        for key in keys {
            self.keys.remove(key);
        }
    }

    /// Drop the whole selection.
    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// Number of selected keys across all pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterate the selected keys (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &RowKey> {
        self.keys.iter()
    }

    /// Tri-state aggregate over a displayed window of keys.
    #[must_use]
    pub fn state_of<'a, I>(&self, displayed: I) -> SelectionState
    where
        I: IntoIterator<Item = &'a RowKey>,
    {
        let mut total = 0usize;
        let mut selected = 0usize;
        for key in displayed {
            total += 1;
            if self.keys.contains(key) {
                selected += 1;
            }
        }
        if total == 0 || selected == 0 {
            SelectionState::None
        } else if selected == total {
            SelectionState::All
        } else {
            SelectionState::Partial
        }
    }
}
