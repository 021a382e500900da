//! Selector fragments: the six kinds of sub-part a compound selector is
//! assembled from, and their fixed ordering ranks.

use std::fmt;

use selkit_common::warning::warn_once;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// The kind of a selector fragment.
///
/// Variants are declared in rank order: within one compound selector, a
/// fragment may never follow a fragment of a later kind.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    /// Type selector, rendered as the bare value.
    ///
    /// Example: `div`
    Element,
    /// ID selector, rendered as `#value`.
    ///
    /// Example: `#main`
    Id,
    /// Class selector, rendered as `.value`.
    ///
    /// Example: `.container`
    Class,
    /// Attribute selector, rendered as `[value]`. The value carries the
    /// whole condition, operator and quotes included.
    ///
    /// Example: `[href$=".png"]`
    Attribute,
    /// Pseudo-class, rendered as `:value`.
    ///
    /// Example: `:nth-of-type(even)`
    PseudoClass,
    /// Pseudo-element, rendered as `::value`.
    ///
    /// Example: `::before`
    PseudoElement,
}

impl ElementKind {
    /// Fixed precedence of this kind, from 1 (element) to 6 (pseudo-element).
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Element => 1,
            Self::Id => 2,
            Self::Class => 3,
            Self::Attribute => 4,
            Self::PseudoClass => 5,
            Self::PseudoElement => 6,
        }
    }

    /// Whether a compound selector may hold at most one fragment of this kind.
    #[must_use]
    pub const fn is_singleton(self) -> bool {
        matches!(self, Self::Element | Self::PseudoElement)
    }

    /// Text placed before and after the raw value when rendering.
    const fn affixes(self) -> (&'static str, &'static str) {
        match self {
            Self::Element => ("", ""),
            Self::Id => ("#", ""),
            Self::Class => (".", ""),
            Self::Attribute => ("[", "]"),
            Self::PseudoClass => (":", ""),
            Self::PseudoElement => ("::", ""),
        }
    }
}

/// One sub-part of a compound selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    kind: ElementKind,
    value: String,
}

impl Fragment {
    /// Create a fragment from a raw value.
    ///
    /// The value is stored as given. Input that builds but is probably a
    /// mistake (see [`suspicious_value`]) is reported through
    /// [`warn_once`].
    #[must_use]
    pub fn new(kind: ElementKind, value: impl Into<String>) -> Self {
        let value = value.into();
        if let Some(reason) = suspicious_value(kind, &value) {
            warn_once("selector", &format!("{kind} value {value:?} {reason}"));
        }
        Self { kind, value }
    }

    /// The fragment's kind.
    #[must_use]
    pub const fn kind(&self) -> ElementKind {
        self.kind
    }

    /// The raw value, without prefix or brackets.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Shorthand for `self.kind().rank()`.
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.kind.rank()
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (prefix, suffix) = self.kind.affixes();
        write!(f, "{prefix}{}{suffix}", self.value)
    }
}

/// Explain why `value` is legal but unlikely to render what the caller meant.
fn suspicious_value(kind: ElementKind, value: &str) -> Option<&'static str> {
    if value.is_empty() {
        return Some("is empty");
    }
    match kind {
        ElementKind::Element | ElementKind::Id | ElementKind::Class
            if value.chars().any(char::is_whitespace) =>
        {
            Some("contains whitespace")
        }
        ElementKind::Attribute if value.starts_with('[') || value.ends_with(']') => {
            Some("already has brackets")
        }
        ElementKind::PseudoClass | ElementKind::PseudoElement if value.starts_with(':') => {
            Some("already starts with ':'")
        }
        _ => None,
    }
}
