//! # Match Tracker
//!
//! In-memory REST service for sports match records: teams, date, goals,
//! cards and extra time.
//!
//! ## Layers
//!
//! - [`domain`]: the [`Match`](domain::entities::Match) record, its id and
//!   the events that change its statistics
//! - [`infrastructure`]: the repository port and its in-memory adapter
//! - [`application`]: use cases and error types
//! - [`api`]: axum router and handlers
//!
//! ## Example
//!
//! ```
//! use match_tracker::domain::entities::Match;
//! use match_tracker::infrastructure::persistence::MatchRepository;
//! use match_tracker::infrastructure::persistence::in_memory::InMemoryMatchRepository;
//!
//! let repo = InMemoryMatchRepository::new();
//! let id = repo.create(Match::new("A", "B", "2024-01-01"));
//! assert!(repo.set_extra_time(id));
//! assert!(repo.get(id).unwrap().extra_time);
//! ```

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod settings;
pub mod telemetry;
