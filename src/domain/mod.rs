//! # Domain Layer
//!
//! Match records and the events that mutate them. Nothing in here knows about
//! storage or HTTP.

pub mod entities;
pub mod value_objects;
