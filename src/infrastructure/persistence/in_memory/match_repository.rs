//! # In-Memory Match Repository
//!
//! [`MatchRepository`] backed by a `HashMap` behind a single reader-writer
//! lock.
//!
//! The map and the next-id counter live in the same locked struct, so id
//! assignment and insertion happen under one write guard. No guard is held
//! across an `.await`; every operation is a bounded map access.

use crate::domain::entities::Match;
use crate::domain::value_objects::{MatchEvent, MatchId};
use crate::infrastructure::persistence::traits::MatchRepository;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug)]
struct MatchStore {
    matches: HashMap<MatchId, Match>,
    next_id: MatchId,
}

impl Default for MatchStore {
    fn default() -> Self {
        Self {
            matches: HashMap::new(),
            next_id: MatchId::FIRST,
        }
    }
}

/// In-memory implementation of [`MatchRepository`].
///
/// Cloning is cheap and clones share the same storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMatchRepository {
    storage: Arc<RwLock<MatchStore>>,
}

impl InMemoryMatchRepository {
    /// Creates a new empty repository. The first match created gets id 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored matches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage.read().matches.len()
    }

    /// Returns true if no matches are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every match. The id counter keeps its value.
    pub fn clear(&self) {
        self.storage.write().matches.clear();
    }
}

impl MatchRepository for InMemoryMatchRepository {
    fn get_all(&self) -> Vec<Match> {
        let storage = self.storage.read();
        storage.matches.values().cloned().collect()
    }

    fn get(&self, id: MatchId) -> Option<Match> {
        let storage = self.storage.read();
        storage.matches.get(&id).cloned()
    }

    fn create(&self, record: Match) -> MatchId {
        let mut storage = self.storage.write();
        let id = storage.next_id;
        storage.matches.insert(id, record.with_id(id));
        storage.next_id = id.next();
        id
    }

    fn update(&self, id: MatchId, record: Match) -> bool {
        let mut storage = self.storage.write();
        match storage.matches.get_mut(&id) {
            Some(stored) => {
                *stored = record.with_id(id);
                true
            }
            None => false,
        }
    }

    fn delete(&self, id: MatchId) -> bool {
        let mut storage = self.storage.write();
        storage.matches.remove(&id).is_some()
    }

    fn apply_event(&self, id: MatchId, event: MatchEvent) -> bool {
        let mut storage = self.storage.write();
        match storage.matches.get_mut(&id) {
            Some(stored) => {
                stored.record(event);
                true
            }
            None => false,
        }
    }

    fn count(&self) -> usize {
        self.len()
    }
}
