//! # REST Handlers
//!
//! Request handlers, shared state and response bodies for the match API.
//!
//! Handlers only translate between HTTP and [`MatchService`]: parse the path
//! id, decode the body, call one service method, pick a status code.

use crate::application::error::ApplicationError;
use crate::application::services::MatchService;
use crate::domain::entities::Match;
use crate::domain::value_objects::{MatchEvent, MatchId};
use crate::infrastructure::persistence::MatchRepository;
use axum::Json;
use axum::body::Bytes;
use axum::extract::{FromRequest, Path, Request, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Shared state handed to every handler.
#[derive(Debug)]
pub struct AppState {
    /// Match use cases.
    pub matches: MatchService,
    /// When the state was built; used for uptime reporting.
    pub started_at: Instant,
}

impl AppState {
    /// Builds state over the given repository.
    #[must_use]
    pub fn new(repository: Arc<dyn MatchRepository>) -> Self {
        Self {
            matches: MatchService::new(repository),
            started_at: Instant::now(),
        }
    }
}

/// Body of a successful `POST /api/matches`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CreateMatchResponse {
    /// Id assigned to the new match.
    pub id: MatchId,
}

/// Body of `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Always `"ok"` while the process is serving.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Number of stored matches.
    pub matches: usize,
    /// Seconds since startup.
    pub uptime_seconds: u64,
}

/// A [`Match`] decoded from the raw request body.
///
/// The body is decoded whatever the `Content-Type` header says, using
/// [`Match::from_json_slice`]. Any decoder failure is reported as a 400
/// carrying the decoder's message.
#[derive(Debug)]
pub struct MatchPayload(pub Match);

impl<S> FromRequest<S> for MatchPayload
where
    S: Send + Sync,
{
    type Rejection = ApplicationError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApplicationError::malformed_body(rejection.body_text()))?;
        Match::from_json_slice(&body)
            .map(Self)
            .map_err(|err| ApplicationError::malformed_body(err.to_string()))
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidMatchId(_) | Self::MalformedBody(_) => StatusCode::BAD_REQUEST,
            Self::MatchNotFound(_) => StatusCode::NOT_FOUND,
        };
        debug!(status = status.as_u16(), error = ?self, "request rejected");
        (status, self.to_string()).into_response()
    }
}

fn parse_id(raw: &str) -> Result<MatchId, ApplicationError> {
    raw.parse().map_err(|_| ApplicationError::invalid_id(raw))
}

/// `GET /api/matches`
pub async fn list_matches(State(state): State<Arc<AppState>>) -> Json<Vec<Match>> {
    Json(state.matches.list_matches())
}

/// `GET /api/matches/{id}`
///
/// # Errors
///
/// 400 for a non-integer id, 404 if the match does not exist.
pub async fn get_match(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<Json<Match>, ApplicationError> {
    let id = parse_id(&raw_id)?;
    state.matches.get_match(id).map(Json)
}

/// `POST /api/matches`
///
/// # Errors
///
/// 400 if the body is not a valid match document.
pub async fn create_match(
    State(state): State<Arc<AppState>>,
    MatchPayload(record): MatchPayload,
) -> (StatusCode, Json<CreateMatchResponse>) {
    let id = state.matches.create_match(record);
    (StatusCode::CREATED, Json(CreateMatchResponse { id }))
}

/// `PUT /api/matches/{id}`
///
/// # Errors
///
/// 400 for a non-integer id or bad body, 404 if the match does not exist.
pub async fn update_match(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
    MatchPayload(record): MatchPayload,
) -> Result<StatusCode, ApplicationError> {
    let id = parse_id(&raw_id)?;
    state.matches.update_match(id, record)?;
    Ok(StatusCode::OK)
}

/// `DELETE /api/matches/{id}`
///
/// # Errors
///
/// 400 for a non-integer id, 404 if the match does not exist.
pub async fn delete_match(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApplicationError> {
    let id = parse_id(&raw_id)?;
    state.matches.delete_match(id)?;
    Ok(StatusCode::OK)
}

/// `PATCH /api/matches/{id}/{goals|yellowcards|redcards|extratime}`
///
/// Not a handler by itself: the router binds one [`MatchEvent`] per route.
///
/// # Errors
///
/// 400 for a non-integer id, 404 if the match does not exist.
pub fn record_event(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
    event: MatchEvent,
) -> Result<StatusCode, ApplicationError> {
    let id = parse_id(&raw_id)?;
    state.matches.record_event(id, event)?;
    Ok(StatusCode::OK)
}

/// `GET /api/health`
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        matches: state.matches.match_count(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_integers() {
        assert_eq!(parse_id("12").unwrap(), MatchId::new(12));
        assert_eq!(parse_id("-1").unwrap(), MatchId::new(-1));
    }

    #[test]
    fn parse_id_rejects_text() {
        let err = parse_id("twelve").unwrap_err();
        assert!(matches!(err, ApplicationError::InvalidMatchId(ref raw) if raw == "twelve"));
    }

    #[test]
    fn error_status_codes() {
        let resp = ApplicationError::invalid_id("x").into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = ApplicationError::malformed_body("EOF").into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = ApplicationError::not_found(MatchId::new(1)).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn create_response_shape() {
        let body = serde_json::to_value(CreateMatchResponse { id: MatchId::new(4) }).unwrap();
        assert_eq!(body, serde_json::json!({"id": 4}));
    }

    #[test]
    fn health_response_is_camel_case() {
        let body = serde_json::to_value(HealthResponse {
            status: "ok".to_string(),
            version: "0.1.0".to_string(),
            matches: 2,
            uptime_seconds: 10,
        })
        .unwrap();
        assert_eq!(body["uptimeSeconds"], 10);
    }
}
