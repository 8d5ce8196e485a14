//! # Application Services
//!
//! - [`MatchService`]: list, fetch, create, replace, delete and record events

pub mod match_service;

pub use match_service::MatchService;
