//! # Infrastructure Layer
//!
//! Storage adapters.

pub mod persistence;
