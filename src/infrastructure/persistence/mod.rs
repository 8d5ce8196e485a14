//! # Persistence Layer
//!
//! ## Repository Traits (Ports)
//!
//! - [`MatchRepository`]: storage for match records
//!
//! ## Implementations
//!
//! - `in_memory`: process-local storage; nothing survives a restart

pub mod in_memory;
pub mod traits;

pub use traits::MatchRepository;
