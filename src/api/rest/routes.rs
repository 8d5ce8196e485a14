//! # Routes
//!
//! Router construction and HTTP middleware for the match API.

use super::handlers::{
    AppState, create_match, delete_match, get_match, health, list_matches, record_event,
    update_match,
};
use crate::domain::value_objects::MatchEvent;
use axum::Router;
use axum::extract::{Path, State};
use axum::http::{Method, header};
use axum::routing::{get, patch};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

/// Builds the CORS policy.
///
/// Any origin is accepted; the request origin is echoed back rather than
/// `*` because credentials are allowed.
#[must_use]
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}

/// Builds the application router with CORS and request tracing applied.
pub fn create_router(state: Arc<AppState>) -> Router {
    let mut router = Router::new()
        .route("/api/health", get(health))
        .route("/api/matches", get(list_matches).post(create_match))
        .route(
            "/api/matches/{id}",
            get(get_match).put(update_match).delete(delete_match),
        );

    for event in MatchEvent::ALL {
        let path = format!("/api/matches/{{id}}/{}", event.path_segment());
        router = router.route(
            &path,
            patch(move |state: State<Arc<AppState>>, id: Path<String>| async move {
                record_event(state, id, event)
            }),
        );
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state)
}
