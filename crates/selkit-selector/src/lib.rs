//! Validated builder for CSS selector strings.
//!
//! # Scope
//!
//! This crate implements:
//! - **Fragments** - type, ID, class, attribute, pseudo-class and
//!   pseudo-element parts with fixed ordering ranks
//! - **Compound selectors** - fluent accumulation with order and
//!   cardinality validation
//! - **Combinators** - descendant, child, next-sibling and
//!   subsequent-sibling composition into selector trees
//! - **Serialization** - canonical text, with configurable descendant spacing
//! - **Descriptions** - JSON documents describing selector trees
//!
//! # Example
//!
//! ```
//! use selkit_selector::{Combinator, combine, element, id};
//!
//! # fn main() -> Result<(), selkit_selector::SelectorError> {
//! let header = element("div").id("main")?.class("container")?;
//! let link = element("a").attr(r#"href$=".png""#)?.pseudo_class("focus")?;
//! let selector = combine(header, Combinator::Child, link);
//! assert_eq!(selector.stringify(), r#"div#main.container > a[href$=".png"]:focus"#);
//! # Ok(())
//! # }
//! ```
//!
//! # Not Implemented
//!
//! - Parsing selector text
//! - Matching selectors against a document
//! - Specificity

/// Combinators joining two selectors.
pub mod combinator;
/// JSON descriptions of selector trees.
pub mod description;
/// Errors raised while building a selector.
pub mod error;
/// Builder entry points.
pub mod facade;
/// Selector fragments and their kinds.
pub mod fragment;
/// Serialization options.
pub mod render;
/// Simple and combined selectors.
pub mod selector;

// Re-exports for convenience
pub use combinator::Combinator;
pub use description::{FragmentDescription, SelectorDescription};
pub use error::{REQUIRED_ORDER, SelectorError};
pub use facade::{attr, class, combine, element, id, pseudo_class, pseudo_element};
pub use fragment::{ElementKind, Fragment};
pub use render::{DescendantSpacing, RenderOptions};
pub use selector::{CombinedSelector, Selector, SimpleSelector};
