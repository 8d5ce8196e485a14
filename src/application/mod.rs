//! # Application Layer
//!
//! Use cases that sit between the REST handlers and the repository.

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
