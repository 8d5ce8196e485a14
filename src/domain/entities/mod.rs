//! # Domain Entities
//!
//! - [`Match`]: a sports match with its running statistics

pub mod sports_match;

pub use sports_match::Match;
