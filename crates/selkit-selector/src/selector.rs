//! Simple and combined selectors.
//!
//! A [`SimpleSelector`] accumulates fragments and validates them as they
//! arrive. A [`CombinedSelector`] joins two [`Selector`]s with a
//! [`Combinator`]. Neither is mutated by rendering.

use std::fmt;

use crate::combinator::Combinator;
use crate::error::SelectorError;
use crate::fragment::{ElementKind, Fragment};
use crate::render::RenderOptions;

/// A compound selector with no combinators, e.g. `div#main.container`.
///
/// Fragments are validated by a small state machine: the state is the rank
/// of the last appended fragment (0 when empty) and an append of rank `r` is
/// legal iff `r >= state`. Element and pseudo-element are additionally
/// limited to one occurrence each.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimpleSelector {
    fragments: Vec<Fragment>,
    /// Rank of the last appended fragment.
    state: u8,
}

impl SimpleSelector {
    /// Create an empty selector. It renders as the empty string.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fragments: Vec::new(),
            state: 0,
        }
    }

    /// Create a selector holding one fragment. Any single fragment is valid.
    pub(crate) fn seeded(kind: ElementKind, value: impl Into<String>) -> Self {
        Self {
            fragments: vec![Fragment::new(kind, value)],
            state: kind.rank(),
        }
    }

    /// Append a fragment of `kind`.
    ///
    /// # Errors
    ///
    /// - [`SelectorError::Cardinality`] if `kind` is element or
    ///   pseudo-element and one is already present, wherever it sits.
    /// - [`SelectorError::Order`] if `kind` ranks below the most recently
    ///   appended fragment.
    pub fn append(
        mut self,
        kind: ElementKind,
        value: impl Into<String>,
    ) -> Result<Self, SelectorError> {
        if kind.is_singleton() && self.fragments.iter().any(|f| f.kind() == kind) {
            return Err(SelectorError::Cardinality { kind });
        }
        if let Some(previous) = self.fragments.last().filter(|_| kind.rank() < self.state) {
            return Err(SelectorError::Order {
                kind,
                previous: previous.kind(),
            });
        }

        self.state = kind.rank();
        self.fragments.push(Fragment::new(kind, value));
        Ok(self)
    }

    /// Append a type selector: `div`.
    ///
    /// # Errors
    ///
    /// See [`SimpleSelector::append`].
    pub fn element(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.append(ElementKind::Element, value)
    }

    /// Append an ID selector: `#value`.
    ///
    /// # Errors
    ///
    /// See [`SimpleSelector::append`].
    pub fn id(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.append(ElementKind::Id, value)
    }

    /// Append a class selector: `.value`.
    ///
    /// # Errors
    ///
    /// See [`SimpleSelector::append`].
    pub fn class(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.append(ElementKind::Class, value)
    }

    /// Append an attribute selector: `[value]`.
    ///
    /// # Errors
    ///
    /// See [`SimpleSelector::append`].
    pub fn attr(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.append(ElementKind::Attribute, value)
    }

    /// Append a pseudo-class: `:value`.
    ///
    /// # Errors
    ///
    /// See [`SimpleSelector::append`].
    pub fn pseudo_class(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.append(ElementKind::PseudoClass, value)
    }

    /// Append a pseudo-element: `::value`.
    ///
    /// # Errors
    ///
    /// See [`SimpleSelector::append`].
    pub fn pseudo_element(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.append(ElementKind::PseudoElement, value)
    }

    /// The fragments in append order.
    #[must_use]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Number of fragments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Whether no fragment has been appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Rank of the last appended fragment, 0 when empty.
    #[must_use]
    pub const fn last_rank(&self) -> u8 {
        self.state
    }

    /// Render the fragments in append order with no separators.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SimpleSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fragments.iter().try_for_each(|fragment| write!(f, "{fragment}"))
    }
}

/// Two selectors joined by a combinator. Built only by
/// [`combine`](crate::combine) or [`Selector::combine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinedSelector {
    left: Box<Selector>,
    combinator: Combinator,
    right: Box<Selector>,
}

impl CombinedSelector {
    /// The left operand.
    #[must_use]
    pub fn left(&self) -> &Selector {
        &self.left
    }

    /// The combinator joining the operands.
    #[must_use]
    pub const fn combinator(&self) -> Combinator {
        self.combinator
    }

    /// The right operand.
    #[must_use]
    pub fn right(&self) -> &Selector {
        &self.right
    }
}

/// Either a compound selector or a combination of two selectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// A compound selector.
    Simple(SimpleSelector),
    /// Two selectors joined by a combinator.
    Combined(CombinedSelector),
}

impl Selector {
    /// Join `self` and `right` with `combinator`. Both operands are moved
    /// into the new node.
    #[must_use]
    pub fn combine(self, combinator: Combinator, right: impl Into<Self>) -> Self {
        Self::Combined(CombinedSelector {
            left: Box::new(self),
            combinator,
            right: Box::new(right.into()),
        })
    }

    /// Check if this is a compound selector (no combinators).
    #[must_use]
    pub const fn is_simple(&self) -> bool {
        matches!(self, Self::Simple(_))
    }

    /// Render with the default options. The descendant combinator is
    /// written as three spaces, the others as ` > `, ` + `, ` ~ `.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.to_string()
    }

    /// Render with explicit options.
    #[must_use]
    pub fn render(&self, options: RenderOptions) -> String {
        Rendered {
            selector: self,
            options,
        }
        .to_string()
    }

    fn write_with(&self, f: &mut fmt::Formatter<'_>, options: RenderOptions) -> fmt::Result {
        match self {
            Self::Simple(simple) => write!(f, "{simple}"),
            Self::Combined(combined) => {
                combined.left.write_with(f, options)?;
                f.write_str(options.joiner(combined.combinator))?;
                combined.right.write_with(f, options)
            }
        }
    }
}

/// A selector paired with the options to render it with.
struct Rendered<'a> {
    selector: &'a Selector,
    options: RenderOptions,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.selector.write_with(f, self.options)
    }
}

impl From<SimpleSelector> for Selector {
    fn from(simple: SimpleSelector) -> Self {
        Self::Simple(simple)
    }
}

impl From<CombinedSelector> for Selector {
    fn from(combined: CombinedSelector) -> Self {
        Self::Combined(combined)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_with(f, RenderOptions::default())
    }
}
