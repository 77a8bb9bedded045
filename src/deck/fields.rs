use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Editing affordance for a template field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Free-form text.
    Text,
    /// One value out of a fixed option list.
    Choice(&'static [&'static str]),
    /// Short items separated by a delimiter.
    List {
        /// Item separator.
        delimiter: char,
    },
}

/// Static schema for one template field.
///
/// `max_chars` is the editor contract: the authoring surface caps stored
/// values there. Renderers never re-validate length; an over-length value
/// flows through layout as-is.
#[derive(Clone, Copy, Debug)]
pub struct FieldSpec {
    /// Stable field key used in [`FieldValues`].
    pub key: &'static str,
    /// Human-facing label.
    pub label: &'static str,
    /// Editor-enforced cap on stored length.
    pub max_chars: usize,
    /// Hint text shown (and rendered) when the field is empty.
    pub placeholder: &'static str,
    /// Whether the editor offers multi-line input.
    pub multiline: bool,
    /// Editing affordance.
    pub kind: FieldKind,
}

impl FieldSpec {
    /// Single-line text field.
    pub const fn text(
        key: &'static str,
        label: &'static str,
        max_chars: usize,
        placeholder: &'static str,
    ) -> Self {
        Self {
            key,
            label,
            max_chars,
            placeholder,
            multiline: false,
            kind: FieldKind::Text,
        }
    }

    /// Multi-line text field.
    pub const fn multiline(
        key: &'static str,
        label: &'static str,
        max_chars: usize,
        placeholder: &'static str,
    ) -> Self {
        Self {
            key,
            label,
            max_chars,
            placeholder,
            multiline: true,
            kind: FieldKind::Text,
        }
    }

    /// Fixed-choice field.
    pub const fn choice(
        key: &'static str,
        label: &'static str,
        options: &'static [&'static str],
        placeholder: &'static str,
    ) -> Self {
        Self {
            key,
            label,
            max_chars: 24,
            placeholder,
            multiline: false,
            kind: FieldKind::Choice(options),
        }
    }

    /// Delimited list field.
    pub const fn list(
        key: &'static str,
        label: &'static str,
        max_chars: usize,
        placeholder: &'static str,
        delimiter: char,
    ) -> Self {
        Self {
            key,
            label,
            max_chars,
            placeholder,
            multiline: false,
            kind: FieldKind::List { delimiter },
        }
    }
}

/// Field values of one slide, keyed by field key.
///
/// Absent keys and blank values are interchangeable: [`FieldValues::get`]
/// reports neither. Renderers decide per field whether an empty value
/// falls back to the placeholder or drops out of the layout.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldValues(BTreeMap<String, String>);

impl FieldValues {
    /// Empty value set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Trimmed value under `key`, if it has any visible content.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// Trimmed value under `key`, or `fallback` when blank or absent.
    pub fn get_or<'a>(&'a self, key: &str, fallback: &'a str) -> &'a str {
        self.get(key).unwrap_or(fallback)
    }

    /// Store a value, replacing any previous one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Number of stored entries, blank or not.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate stored entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldValues {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/deck/fields.rs"]
mod tests;
