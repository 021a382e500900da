//! Errors raised while building a selector.

use thiserror::Error;

use crate::fragment::ElementKind;

/// Fragment order every compound selector must follow.
pub const REQUIRED_ORDER: &str = "element, id, class, attribute, pseudo-class, pseudo-element";

/// Error type for selector construction.
///
/// Errors are raised by the call that would break an invariant. The
/// selector being extended is consumed by that call, so a failed selector
/// cannot be used further.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// A fragment was appended after a fragment of a later kind.
    #[error(
        "{kind} cannot follow {previous}: fragments must appear in the order {}",
        REQUIRED_ORDER
    )]
    Order {
        /// Kind of the rejected fragment.
        kind: ElementKind,
        /// Kind of the most recently appended fragment.
        previous: ElementKind,
    },

    /// A second element or pseudo-element was appended.
    #[error("a compound selector may contain at most one {kind}")]
    Cardinality {
        /// The singleton kind that was repeated.
        kind: ElementKind,
    },

    /// Combinator text other than `" "`, `">"`, `"+"` or `"~"`.
    #[error("invalid combinator {0:?}: expected one of \" \", \">\", \"+\", \"~\"")]
    InvalidCombinator(String),

    /// A JSON selector description or render options could not be decoded.
    #[error("invalid selector description: {0}")]
    Description(String),
}
