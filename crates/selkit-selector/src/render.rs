//! Rendering options for selector serialization.

use serde::{Deserialize, Serialize};

use crate::combinator::Combinator;
use crate::error::SelectorError;

/// How the descendant combinator is written between two selectors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DescendantSpacing {
    /// The combinator's space is spliced between the usual padding, giving
    /// three spaces: `tr   td`. Existing consumers compare against this form.
    #[default]
    Spliced,
    /// A single space: `tr td`.
    Single,
}

/// Options controlling [`Selector::render`](crate::Selector::render).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOptions {
    /// Spacing for the descendant combinator.
    pub descendant: DescendantSpacing,
}

impl RenderOptions {
    /// Options rendering the descendant combinator as a single space.
    #[must_use]
    pub const fn single_space() -> Self {
        Self {
            descendant: DescendantSpacing::Single,
        }
    }

    /// Decode options from JSON, e.g. `{"descendant": "single"}`.
    /// Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::Description`] if the text is not valid JSON
    /// or names an unknown field or spacing.
    pub fn from_json(text: &str) -> Result<Self, SelectorError> {
        serde_json::from_str(text).map_err(|e| SelectorError::Description(e.to_string()))
    }

    /// Text written between the left and right operands of `combinator`.
    #[must_use]
    pub const fn joiner(self, combinator: Combinator) -> &'static str {
        match (combinator, self.descendant) {
            (Combinator::Descendant, DescendantSpacing::Spliced) => "   ",
            (Combinator::Descendant, DescendantSpacing::Single) => " ",
            (Combinator::Child, _) => " > ",
            (Combinator::NextSibling, _) => " + ",
            (Combinator::SubsequentSibling, _) => " ~ ",
        }
    }
}
