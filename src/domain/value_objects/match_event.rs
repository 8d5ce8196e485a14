//! # Match Events
//!
//! In-play statistic changes that can be recorded against a match.
//!
//! Each event maps to one `PATCH /api/matches/{id}/{event}` endpoint and knows
//! how to apply itself to a [`Match`](crate::domain::entities::Match).

use crate::domain::entities::Match;
use std::fmt;

/// A statistic change recorded during a match.
///
/// # Examples
///
/// ```
/// use match_tracker::domain::value_objects::MatchEvent;
///
/// assert_eq!(MatchEvent::YellowCard.path_segment(), "yellowcards");
/// assert_eq!(MatchEvent::YellowCard.to_string(), "YELLOW_CARD");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchEvent {
    /// A goal was scored.
    Goal,
    /// A yellow card was shown.
    YellowCard,
    /// A red card was shown.
    RedCard,
    /// The match went into extra time.
    ExtraTime,
}

impl MatchEvent {
    /// All events, in endpoint order.
    pub const ALL: [Self; 4] = [Self::Goal, Self::YellowCard, Self::RedCard, Self::ExtraTime];

    /// Returns the URL path segment addressing this event.
    #[must_use]
    pub const fn path_segment(self) -> &'static str {
        match self {
            Self::Goal => "goals",
            Self::YellowCard => "yellowcards",
            Self::RedCard => "redcards",
            Self::ExtraTime => "extratime",
        }
    }

    /// Applies the event to a match in place.
    ///
    /// Counters saturate instead of wrapping. Extra time only ever moves to
    /// `true`.
    pub fn apply(self, record: &mut Match) {
        match self {
            Self::Goal => record.goal_count = record.goal_count.saturating_add(1),
            Self::YellowCard => record.yellow_cards = record.yellow_cards.saturating_add(1),
            Self::RedCard => record.red_cards = record.red_cards.saturating_add(1),
            Self::ExtraTime => record.extra_time = true,
        }
    }
}

impl fmt::Display for MatchEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Goal => write!(f, "GOAL"),
            Self::YellowCard => write!(f, "YELLOW_CARD"),
            Self::RedCard => write!(f, "RED_CARD"),
            Self::ExtraTime => write!(f, "EXTRA_TIME"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Match {
        Match::new("Home", "Away", "2024-01-01")
    }

    #[test]
    fn path_segments_are_distinct() {
        let segments: Vec<&str> = MatchEvent::ALL.iter().map(|e| e.path_segment()).collect();
        assert_eq!(segments, vec!["goals", "yellowcards", "redcards", "extratime"]);
    }

    #[test]
    fn display_is_screaming_snake_case() {
        assert_eq!(MatchEvent::Goal.to_string(), "GOAL");
        assert_eq!(MatchEvent::ExtraTime.to_string(), "EXTRA_TIME");
    }

    #[test]
    fn apply_increments_only_its_counter() {
        let mut record = fixture();
        MatchEvent::YellowCard.apply(&mut record);
        MatchEvent::YellowCard.apply(&mut record);
        MatchEvent::RedCard.apply(&mut record);

        assert_eq!(record.goal_count, 0);
        assert_eq!(record.yellow_cards, 2);
        assert_eq!(record.red_cards, 1);
        assert!(!record.extra_time);
    }

    #[test]
    fn extra_time_is_idempotent() {
        let mut record = fixture();
        MatchEvent::ExtraTime.apply(&mut record);
        MatchEvent::ExtraTime.apply(&mut record);
        assert!(record.extra_time);
    }

    #[test]
    fn counters_saturate() {
        let mut record = fixture();
        record.goal_count = u32::MAX;
        MatchEvent::Goal.apply(&mut record);
        assert_eq!(record.goal_count, u32::MAX);
    }
}
