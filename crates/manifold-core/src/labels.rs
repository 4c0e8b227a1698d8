//! Label sets
//!
//! Kubernetes labels and annotations are string-to-string maps with unique
//! keys and no meaningful ordering. A `BTreeMap` gives us order-insensitive
//! equality for free and keeps serialization deterministic.

use std::collections::BTreeMap;

/// A set of labels (or annotations): key -> value, keys unique.
pub type LabelSet = BTreeMap<String, String>;

/// Compare a label set against an optional one, treating `None` as empty.
///
/// Wire objects omit empty label maps, so "no labels" and "empty labels"
/// must compare equal when deciding whether a selector collapses onto the
/// template's labels.
pub fn labels_match(labels: &LabelSet, other: Option<&LabelSet>) -> bool {
    match other {
        Some(other) => labels == other,
        None => labels.is_empty(),
    }
}
