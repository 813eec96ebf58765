//! Defines enums & structs returned / shared by the counting search operations.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The search strategies this crate knows how to run & count.
/// Both share the same contract -- see [search()](super::search) -- differing only
/// in how many element-to-target comparisons they spend to reach an outcome.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SearchMode {
    /// front-to-back scan -- O(n) comparisons, works on any ordering, finds the first occurrence
    Linear,
    /// bisection over an internally sorted copy -- O(log(n)) comparisons;
    /// which of several duplicates gets hit is whichever the bisection lands on
    Binary,
}
impl SearchMode {
    /// verbose description for each enum element
    pub fn as_pretty_str(&self) -> &'static str {
        match self {
            Self::Linear => "linear (front-to-back scan)",
            Self::Binary => "binary (bisection over a sorted copy)",
        }
    }
}
impl FromStr for SearchMode {
    type Err = InvalidSearchMode;
    /// resolves the original string-typed mode names -- the only fallible seam of this crate
    fn from_str(mode_name: &str) -> Result<Self, Self::Err> {
        match mode_name {
            "linear" => Ok(Self::Linear),
            "binary" => Ok(Self::Binary),
            rejected => Err(InvalidSearchMode { rejected: rejected.to_string() }),
        }
    }
}
impl Display for SearchMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Linear => write!(f, "linear"),
            Self::Binary => write!(f, "binary"),
        }
    }
}

/// Raised when a mode name outside {`linear`, `binary`} is given to
/// [search_with_mode_name()](super::search_with_mode_name) or [SearchMode::from_str()]
/// -- carries the rejected value for diagnostic display.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct InvalidSearchMode {
    /// the mode name that got rejected
    pub rejected: String,
}
impl Display for InvalidSearchMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unsupported search mode '{}' -- supported modes are 'linear' & 'binary'", self.rejected)
    }
}
impl std::error::Error for InvalidSearchMode {}

/// What a search concluded. "Not found" is a first-class outcome here, never an error
/// -- callers interested only in the value may use [SearchOutcome::into_option()].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SearchOutcome<Element> {
    /// the matched element -- for [SearchMode::Linear], the first occurrence in scan order
    Found(Element),
    /// the target doesn't occur in the sequence
    NotFound,
}
impl<Element> SearchOutcome<Element> {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
    /// drops down to the plain nullable representation, for callers that don't care about the distinction
    pub fn into_option(self) -> Option<Element> {
        match self {
            Self::Found(element) => Some(element),
            Self::NotFound       => None,
        }
    }
}

/// The (outcome, comparison count) pair every search returns.\
/// `comparisons` counts every element-vs-target comparison actually performed, including
/// the final failed one(s) -- it is fully determined by the chosen [SearchMode] and the
/// sequence contents, so identical inputs always reproduce identical counts.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct SearchResult<Element> {
    pub outcome:     SearchOutcome<Element>,
    pub comparisons: u32,
}
impl<Element: Display> Display for SearchResult<Element> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.outcome {
            SearchOutcome::Found(element) => write!(f, "found {} after {} comparisons", element, self.comparisons),
            SearchOutcome::NotFound       => write!(f, "not found after {} comparisons", self.comparisons),
        }
    }
}
