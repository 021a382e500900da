//! Combinators joining two selectors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use crate::error::SelectorError;

/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
///
/// Serialized as its CSS text (`" "`, `">"`, `"+"`, `"~"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Combinator {
    /// `A B`: B is an arbitrary descendant of A.
    Descendant,
    /// `A > B`: B is a direct child of A.
    Child,
    /// `A + B`: B immediately follows A under the same parent.
    NextSibling,
    /// `A ~ B`: B follows A, not necessarily immediately, under the same parent.
    SubsequentSibling,
}

impl Combinator {
    /// The combinator's CSS character.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Descendant => ' ',
            Self::Child => '>',
            Self::NextSibling => '+',
            Self::SubsequentSibling => '~',
        }
    }

    /// The combinator's CSS text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<char> for Combinator {
    type Error = SelectorError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            ' ' => Ok(Self::Descendant),
            '>' => Ok(Self::Child),
            '+' => Ok(Self::NextSibling),
            '~' => Ok(Self::SubsequentSibling),
            other => Err(SelectorError::InvalidCombinator(other.to_string())),
        }
    }
}

impl FromStr for Combinator {
    type Err = SelectorError;

    /// Accepts exactly one combinator character. Padding is not trimmed, so
    /// `" > "` is rejected while `" "` is the descendant combinator.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(SelectorError::InvalidCombinator(s.to_string())),
        }
    }
}

impl TryFrom<String> for Combinator {
    type Error = SelectorError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Combinator> for String {
    fn from(c: Combinator) -> Self {
        c.as_str().to_string()
    }
}
