//! # Value Objects
//!
//! Small immutable types with domain semantics.
//!
//! - [`MatchId`]: repository-assigned integer identifier
//! - [`MatchEvent`]: a statistic change (goal, card, extra time)

pub mod ids;
pub mod match_event;

pub use ids::MatchId;
pub use match_event::MatchEvent;
