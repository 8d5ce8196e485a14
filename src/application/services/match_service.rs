//! # Match Service
//!
//! Use cases over the match repository.
//!
//! Each call performs exactly one repository operation. Misses become
//! [`ApplicationError::MatchNotFound`] so the HTTP layer can map them to a
//! status code; the repository itself never fails.
//!
//! # Examples
//!
//! ```
//! use match_tracker::application::services::MatchService;
//! use match_tracker::domain::entities::Match;
//! use match_tracker::domain::value_objects::MatchEvent;
//! use match_tracker::infrastructure::persistence::in_memory::InMemoryMatchRepository;
//! use std::sync::Arc;
//!
//! let service = MatchService::new(Arc::new(InMemoryMatchRepository::new()));
//! let id = service.create_match(Match::new("A", "B", "2024-01-01"));
//! service.record_event(id, MatchEvent::Goal).unwrap();
//!
//! assert_eq!(service.get_match(id).unwrap().goal_count, 1);
//! ```

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::entities::Match;
use crate::domain::value_objects::{MatchEvent, MatchId};
use crate::infrastructure::persistence::MatchRepository;
use std::sync::Arc;
use tracing::{debug, info};

/// Application service for match records.
#[derive(Debug, Clone)]
pub struct MatchService {
    repository: Arc<dyn MatchRepository>,
}

impl MatchService {
    /// Creates a service over the given repository.
    #[must_use]
    pub fn new(repository: Arc<dyn MatchRepository>) -> Self {
        Self { repository }
    }

    /// Returns every stored match.
    #[must_use]
    pub fn list_matches(&self) -> Vec<Match> {
        let matches = self.repository.get_all();
        debug!(count = matches.len(), "listed matches");
        matches
    }

    /// Returns the match with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::MatchNotFound`] if no match has that id.
    pub fn get_match(&self, id: MatchId) -> ApplicationResult<Match> {
        self.repository
            .get(id)
            .ok_or_else(|| ApplicationError::not_found(id))
    }

    /// Stores a new match and returns its id.
    pub fn create_match(&self, record: Match) -> MatchId {
        let id = self.repository.create(record);
        info!(match_id = %id, "match created");
        id
    }

    /// Replaces every field of the stored match except its id.
    ///
    /// Fields the caller left out of the payload arrive here as zero values
    /// and overwrite what was stored.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::MatchNotFound`] if no match has that id.
    pub fn update_match(&self, id: MatchId, record: Match) -> ApplicationResult<()> {
        if !self.repository.update(id, record) {
            debug!(match_id = %id, "update of unknown match");
            return Err(ApplicationError::not_found(id));
        }
        info!(match_id = %id, "match updated");
        Ok(())
    }

    /// Deletes the match.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::MatchNotFound`] if no match has that id.
    pub fn delete_match(&self, id: MatchId) -> ApplicationResult<()> {
        if !self.repository.delete(id) {
            debug!(match_id = %id, "delete of unknown match");
            return Err(ApplicationError::not_found(id));
        }
        info!(match_id = %id, "match deleted");
        Ok(())
    }

    /// Records a goal, card or extra time against the match.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::MatchNotFound`] if no match has that id.
    pub fn record_event(&self, id: MatchId, event: MatchEvent) -> ApplicationResult<()> {
        if !self.repository.apply_event(id, event) {
            debug!(match_id = %id, %event, "event for unknown match");
            return Err(ApplicationError::not_found(id));
        }
        info!(match_id = %id, %event, "match event recorded");
        Ok(())
    }

    /// Returns the number of stored matches.
    #[must_use]
    pub fn match_count(&self) -> usize {
        self.repository.count()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::in_memory::InMemoryMatchRepository;

    fn service() -> (MatchService, InMemoryMatchRepository) {
        let repo = InMemoryMatchRepository::new();
        (MatchService::new(Arc::new(repo.clone())), repo)
    }

    #[test]
    fn create_then_get() {
        let (service, _) = service();
        let id = service.create_match(Match::new("A", "B", "2024-01-01"));
        let found = service.get_match(id).unwrap();
        assert_eq!(found.id, id);
        assert_eq!(service.match_count(), 1);
    }

    #[test]
    fn get_missing_is_not_found() {
        let (service, _) = service();
        let err = service.get_match(MatchId::new(1)).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn update_missing_is_not_found_and_stores_nothing() {
        let (service, repo) = service();
        let err = service
            .update_match(MatchId::new(4), Match::new("A", "B", "C"))
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(repo.is_empty());
    }

    #[test]
    fn delete_twice() {
        let (service, _) = service();
        let id = service.create_match(Match::new("A", "B", "C"));
        assert!(service.delete_match(id).is_ok());
        assert!(service.delete_match(id).unwrap_err().is_not_found());
        assert!(service.get_match(id).unwrap_err().is_not_found());
    }

    #[test]
    fn record_every_event() {
        let (service, _) = service();
        let id = service.create_match(Match::new("A", "B", "C"));
        for event in MatchEvent::ALL {
            service.record_event(id, event).unwrap();
        }

        let found = service.get_match(id).unwrap();
        assert_eq!(found.goal_count, 1);
        assert_eq!(found.yellow_cards, 1);
        assert_eq!(found.red_cards, 1);
        assert!(found.extra_time);
    }

    #[test]
    fn record_event_on_missing_match() {
        let (service, repo) = service();
        let err = service
            .record_event(MatchId::new(2), MatchEvent::Goal)
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(repo.is_empty());
    }

    #[test]
    fn list_returns_snapshot() {
        let (service, _) = service();
        service.create_match(Match::new("A", "B", "C"));
        service.create_match(Match::new("D", "E", "F"));
        assert_eq!(service.list_matches().len(), 2);
    }
}
