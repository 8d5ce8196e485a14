//! # Repository Traits
//!
//! Port definition for match persistence.
//!
//! Lookups that miss are reported through `Option`/`bool` rather than an
//! error type: a missing match is an ordinary outcome, and a mutation that
//! targets a missing match must leave the store untouched.
//!
//! # Examples
//!
//! ```
//! use match_tracker::domain::entities::Match;
//! use match_tracker::infrastructure::persistence::MatchRepository;
//! use match_tracker::infrastructure::persistence::in_memory::InMemoryMatchRepository;
//!
//! fn score_twice(repo: &impl MatchRepository) {
//!     let id = repo.create(Match::new("A", "B", "2024-01-01"));
//!     repo.register_goal(id);
//!     repo.register_goal(id);
//!     assert_eq!(repo.get(id).unwrap().goal_count, 2);
//! }
//!
//! score_twice(&InMemoryMatchRepository::new());
//! ```

use crate::domain::entities::Match;
use crate::domain::value_objects::{MatchEvent, MatchId};

/// Repository for [`Match`] records.
///
/// Every operation is atomic with respect to every other: readers never see
/// a half-applied mutation.
pub trait MatchRepository: Send + Sync + std::fmt::Debug {
    /// Returns a snapshot of every stored match. Order is unspecified.
    fn get_all(&self) -> Vec<Match>;

    /// Returns the match with the given id, if any.
    fn get(&self, id: MatchId) -> Option<Match>;

    /// Stores a new match and returns the id assigned to it.
    ///
    /// Any id carried by `record` is ignored.
    fn create(&self, record: Match) -> MatchId;

    /// Replaces the stored match with `record`, keeping `id`.
    ///
    /// Returns `false`, without storing anything, when `id` is unknown.
    fn update(&self, id: MatchId, record: Match) -> bool;

    /// Removes the match. Returns whether it existed.
    fn delete(&self, id: MatchId) -> bool;

    /// Applies `event` to the stored match. Returns whether it existed.
    fn apply_event(&self, id: MatchId, event: MatchEvent) -> bool;

    /// Returns the number of stored matches.
    fn count(&self) -> usize;

    /// Adds one goal to the match. Returns whether it existed.
    fn register_goal(&self, id: MatchId) -> bool {
        self.apply_event(id, MatchEvent::Goal)
    }

    /// Adds one yellow card to the match. Returns whether it existed.
    fn register_yellow_card(&self, id: MatchId) -> bool {
        self.apply_event(id, MatchEvent::YellowCard)
    }

    /// Adds one red card to the match. Returns whether it existed.
    fn register_red_card(&self, id: MatchId) -> bool {
        self.apply_event(id, MatchEvent::RedCard)
    }

    /// Marks the match as having gone to extra time. Returns whether it existed.
    fn set_extra_time(&self, id: MatchId) -> bool {
        self.apply_event(id, MatchEvent::ExtraTime)
    }
}
