//! Entry points for building selectors.
//!
//! Each function returns a fresh, self-contained value; nothing is shared
//! between calls, so unrelated selectors can be built from any thread.

use crate::combinator::Combinator;
use crate::fragment::ElementKind;
use crate::selector::{Selector, SimpleSelector};

/// Start a selector with a type selector: `div`.
#[must_use]
pub fn element(value: impl Into<String>) -> SimpleSelector {
    SimpleSelector::seeded(ElementKind::Element, value)
}

/// Start a selector with an ID selector: `#main`.
#[must_use]
pub fn id(value: impl Into<String>) -> SimpleSelector {
    SimpleSelector::seeded(ElementKind::Id, value)
}

/// Start a selector with a class selector: `.container`.
#[must_use]
pub fn class(value: impl Into<String>) -> SimpleSelector {
    SimpleSelector::seeded(ElementKind::Class, value)
}

/// Start a selector with an attribute selector: `[href]`.
#[must_use]
pub fn attr(value: impl Into<String>) -> SimpleSelector {
    SimpleSelector::seeded(ElementKind::Attribute, value)
}

/// Start a selector with a pseudo-class: `:hover`.
#[must_use]
pub fn pseudo_class(value: impl Into<String>) -> SimpleSelector {
    SimpleSelector::seeded(ElementKind::PseudoClass, value)
}

/// Start a selector with a pseudo-element: `::before`.
#[must_use]
pub fn pseudo_element(value: impl Into<String>) -> SimpleSelector {
    SimpleSelector::seeded(ElementKind::PseudoElement, value)
}

/// Join two selectors with a combinator.
///
/// Combination is structural: `combine(combine(a, +, b), ~, c)` renders
/// `a + b ~ c` and is a different tree from `combine(a, +, combine(b, ~, c))`,
/// though both render the same text.
///
/// ```
/// use selkit_selector::{Combinator, combine, element, id};
///
/// let list = combine(id("nav"), Combinator::Child, element("li"));
/// assert_eq!(list.stringify(), "#nav > li");
/// ```
#[must_use]
pub fn combine(
    left: impl Into<Selector>,
    combinator: Combinator,
    right: impl Into<Selector>,
) -> Selector {
    left.into().combine(combinator, right)
}
