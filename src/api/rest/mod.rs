//! # REST API
//!
//! JSON endpoints over the match repository, served with axum.
//!
//! # Endpoints
//!
//! ## Matches
//! - `GET /api/matches` - List all matches
//! - `GET /api/matches/{id}` - Get match by ID
//! - `POST /api/matches` - Create match (`201`, `{"id": N}`)
//! - `PUT /api/matches/{id}` - Replace match
//! - `DELETE /api/matches/{id}` - Delete match
//!
//! ## Match events
//! - `PATCH /api/matches/{id}/goals`
//! - `PATCH /api/matches/{id}/yellowcards`
//! - `PATCH /api/matches/{id}/redcards`
//! - `PATCH /api/matches/{id}/extratime`
//!
//! ## Health
//! - `GET /api/health` - Health check endpoint
//!
//! Errors are plain-text bodies: `400` for a non-integer id or an
//! undecodable body, `404` for an unknown match.
//!
//! # Usage
//!
//! ```no_run
//! use match_tracker::api::rest::{create_router, AppState};
//! use match_tracker::infrastructure::persistence::in_memory::InMemoryMatchRepository;
//! use std::sync::Arc;
//!
//! # async fn run() -> std::io::Result<()> {
//! let state = Arc::new(AppState::new(Arc::new(InMemoryMatchRepository::new())));
//! let router = create_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8081").await?;
//! axum::serve(listener, router).await?;
//! # Ok(())
//! # }
//! ```

pub mod handlers;
pub mod routes;

pub use handlers::{AppState, CreateMatchResponse, HealthResponse, MatchPayload};
pub use routes::{cors_layer, create_router};
