//! # In-Memory Repositories
//!
//! - [`InMemoryMatchRepository`]: match storage
//!
//! ## Thread Safety
//!
//! Storage is an `Arc<RwLock<..>>` (`parking_lot`): concurrent readers,
//! exclusive writers.

pub mod match_repository;

pub use match_repository::InMemoryMatchRepository;
