//! JSON descriptions of selector trees.
//!
//! A description is plain data that replays the builder calls:
//!
//! ```json
//! { "combine": {
//!     "left": { "compound": [ { "kind": "element", "value": "ul" } ] },
//!     "combinator": ">",
//!     "right": { "compound": [ { "kind": "element", "value": "li" },
//!                              { "kind": "pseudo_class", "value": "first-child" } ] }
//! } }
//! ```
//!
//! Building goes through the same validation as the fluent API, so a
//! description that breaks fragment order fails with the same error.

use serde::{Deserialize, Serialize};

use crate::combinator::Combinator;
use crate::error::SelectorError;
use crate::fragment::{ElementKind, Fragment};
use crate::selector::{Selector, SimpleSelector};

/// One fragment of a compound description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FragmentDescription {
    /// Fragment kind, in `snake_case` (`"pseudo_class"`).
    pub kind: ElementKind,
    /// Raw value, rendered according to `kind`.
    pub value: String,
}

/// A selector tree as data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub enum SelectorDescription {
    /// A compound selector; fragments are appended in list order.
    Compound(Vec<FragmentDescription>),
    /// Two descriptions joined by a combinator.
    Combine {
        /// Left operand.
        left: Box<SelectorDescription>,
        /// Combinator text: `" "`, `">"`, `"+"` or `"~"`.
        combinator: Combinator,
        /// Right operand.
        right: Box<SelectorDescription>,
    },
}

impl SelectorDescription {
    /// Decode a description from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::Description`] for malformed JSON, unknown
    /// kinds or fields, and invalid combinator text.
    pub fn from_json(text: &str) -> Result<Self, SelectorError> {
        serde_json::from_str(text).map_err(|e| SelectorError::Description(e.to_string()))
    }

    /// Encode the description as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::Description`] if serialization fails.
    pub fn to_json(&self) -> Result<String, SelectorError> {
        serde_json::to_string_pretty(self).map_err(|e| SelectorError::Description(e.to_string()))
    }

    /// Replay the description through the builder.
    ///
    /// # Errors
    ///
    /// Returns the first [`SelectorError::Order`] or
    /// [`SelectorError::Cardinality`] hit, walking left operands first.
    pub fn build(&self) -> Result<Selector, SelectorError> {
        match self {
            Self::Compound(fragments) => fragments
                .iter()
                .try_fold(SimpleSelector::new(), |selector, fragment| {
                    selector.append(fragment.kind, fragment.value.as_str())
                })
                .map(Selector::from),
            Self::Combine {
                left,
                combinator,
                right,
            } => Ok(left.build()?.combine(*combinator, right.build()?)),
        }
    }
}

impl From<&Fragment> for FragmentDescription {
    fn from(fragment: &Fragment) -> Self {
        Self {
            kind: fragment.kind(),
            value: fragment.value().to_string(),
        }
    }
}

impl From<&Selector> for SelectorDescription {
    fn from(selector: &Selector) -> Self {
        match selector {
            Selector::Simple(simple) => {
                Self::Compound(simple.fragments().iter().map(FragmentDescription::from).collect())
            }
            Selector::Combined(combined) => Self::Combine {
                left: Box::new(combined.left().into()),
                combinator: combined.combinator(),
                right: Box::new(combined.right().into()),
            },
        }
    }
}

impl Selector {
    /// Describe this selector as data. Building the result yields an equal
    /// selector.
    #[must_use]
    pub fn describe(&self) -> SelectorDescription {
        self.into()
    }
}
