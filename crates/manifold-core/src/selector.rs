//! Shorthand selectors
//!
//! A ReplicaSet-style controller carries a label selector that is either a
//! flat label match or a compiled match-expression string. The shorthand
//! form stores exactly one of the two; the enum makes the
//! "never both populated" invariant structural.

use serde::{Deserialize, Serialize};

use crate::labels::LabelSet;

/// A shorthand selector: either a plain label set or the opaque compiled
/// form of a selector containing match-expressions.
///
/// Serialized untagged: a map reads back as [`Selector::Explicit`], a string
/// as [`Selector::Expression`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Selector {
    /// Pure match-on-labels selector.
    Explicit(LabelSet),
    /// Opaque compiled selector text, produced and consumed only through
    /// the external expression compiler.
    Expression(String),
}

impl Selector {
    /// The selector's own label view: `Some` for an explicit selector,
    /// `None` for a compiled expression (no label set can be derived).
    pub fn labels(&self) -> Option<&LabelSet> {
        match self {
            Selector::Explicit(labels) => Some(labels),
            Selector::Expression(_) => None,
        }
    }

    /// True for an explicit selector with no labels at all. Converters drop
    /// such selectors from the shorthand instead of storing an empty map.
    pub fn is_empty(&self) -> bool {
        match self {
            Selector::Explicit(labels) => labels.is_empty(),
            Selector::Expression(text) => text.is_empty(),
        }
    }
}
