//! # Identifiers
//!
//! Integer identifier assigned to matches by the repository.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a stored match.
///
/// Identifiers are handed out by the repository starting at 1 and are never
/// reused, even after the match they named has been deleted.
///
/// # Examples
///
/// ```
/// use match_tracker::domain::value_objects::MatchId;
///
/// let id: MatchId = "42".parse().unwrap();
/// assert_eq!(id.get(), 42);
/// assert_eq!(id.to_string(), "42");
/// assert!(MatchId::new(1) < MatchId::new(2));
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(transparent)]
pub struct MatchId(i64);

impl MatchId {
    /// The first identifier handed out by an empty repository.
    pub const FIRST: Self = Self(1);

    /// Wraps a raw integer.
    #[inline]
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw integer.
    #[inline]
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Returns the identifier following this one.
    #[inline]
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MatchId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self)
    }
}

impl From<i64> for MatchId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_signed_integers() {
        assert_eq!("7".parse::<MatchId>().unwrap(), MatchId::new(7));
        assert_eq!("+7".parse::<MatchId>().unwrap(), MatchId::new(7));
        assert_eq!("-3".parse::<MatchId>().unwrap(), MatchId::new(-3));
    }

    #[test]
    fn rejects_non_integers() {
        assert!("abc".parse::<MatchId>().is_err());
        assert!("1.5".parse::<MatchId>().is_err());
        assert!("".parse::<MatchId>().is_err());
        assert!(" 1".parse::<MatchId>().is_err());
    }

    #[test]
    fn next_is_strictly_greater() {
        let id = MatchId::FIRST;
        assert_eq!(id.next(), MatchId::new(2));
        assert!(id.next() > id);
    }

    #[test]
    fn serializes_as_plain_number() {
        assert_eq!(serde_json::to_string(&MatchId::new(12)).unwrap(), "12");
        let id: MatchId = serde_json::from_str("12").unwrap();
        assert_eq!(id, MatchId::new(12));
    }
}
