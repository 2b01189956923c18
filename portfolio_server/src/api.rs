//! HTTP API for the portfolio contact form.
//!
//! # Endpoints
//!
//! - `GET /api/` - Health check
//! - `POST /api/contact` - Store a contact message
//! - `GET /api/contact?limit=N` - Newest messages first
//! - `GET /api/contact/{id}` - One message
//! - `PUT /api/contact/{id}/status?status=S` - Change review status
//! - `GET /api/stats` - Message counters

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    routing::{get, put},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use portfolio_core::{ContactRequest, ContactResponse, ErrorBody};

use crate::store::{ContactMessage, MessageStats, MessageStatus, MessageStore, StoreError};

pub const HEALTH_MESSAGE: &str = "Portfolio API is running";
pub const CONTACT_THANKS: &str = "Thank you for your message! I'll get back to you soon.";
pub const STATUS_UPDATED: &str = "Status updated successfully";
pub const NOT_FOUND: &str = "Message not found";
pub const INTERNAL_ERROR: &str = "Internal server error";

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    store: MessageStore,
    default_list_limit: usize,
}

impl AppState {
    pub fn new(store: MessageStore, default_list_limit: usize) -> Self {
        Self {
            store,
            default_list_limit,
        }
    }

    pub fn store(&self) -> &MessageStore {
        &self.store
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub message: String,
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    pub status: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusUpdateResponse {
    pub success: bool,
    pub message: String,
}

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ErrorBody>)>;

fn reject(status: StatusCode, detail: impl Into<String>) -> (StatusCode, Json<ErrorBody>) {
    (status, Json(ErrorBody::new(detail)))
}

fn internal(context: &str, err: StoreError) -> (StatusCode, Json<ErrorBody>) {
    error!("{context}: {err}");
    reject(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
}

// ============================================================================
// Validation
// ============================================================================

/// Loose structural check: one `@`, non-empty local part, dotted domain
/// with no empty labels, no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

fn validate(request: &ContactRequest) -> Result<(), String> {
    let required = [
        ("name", &request.name),
        ("subject", &request.subject),
        ("message", &request.message),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(format!("{field} must not be empty"));
        }
    }
    if !is_valid_email(&request.email) {
        return Err("value is not a valid email address".to_string());
    }
    Ok(())
}

// ============================================================================
// Handlers
// ============================================================================

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: HEALTH_MESSAGE.to_string(),
        status: "healthy".to_string(),
    })
}

async fn create_message(
    State(state): State<AppState>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> ApiResult<ContactResponse> {
    let Json(request) =
        payload.map_err(|rej| reject(StatusCode::UNPROCESSABLE_ENTITY, rej.body_text()))?;
    if let Err(detail) = validate(&request) {
        warn!(%detail, "rejected contact message");
        return Err(reject(StatusCode::UNPROCESSABLE_ENTITY, detail));
    }

    let message = ContactMessage::from_request(request, Utc::now());
    let stored = state
        .store
        .insert(message)
        .await
        .map_err(|err| internal("error saving contact message", err))?;
    info!(id = %stored.id, "contact message received");

    Ok(Json(ContactResponse {
        success: true,
        message: CONTACT_THANKS.to_string(),
        id: Some(stored.id),
    }))
}

async fn list_messages(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> ApiResult<Vec<ContactMessage>> {
    let Query(query) =
        query.map_err(|rej| reject(StatusCode::UNPROCESSABLE_ENTITY, rej.body_text()))?;
    let limit = query.limit.unwrap_or(state.default_list_limit);
    Ok(Json(state.store.list(limit).await))
}

async fn get_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<ContactMessage> {
    state
        .store
        .get(&id)
        .await
        .map(Json)
        .ok_or_else(|| reject(StatusCode::NOT_FOUND, NOT_FOUND))
}

async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    query: Result<Query<StatusQuery>, QueryRejection>,
) -> ApiResult<StatusUpdateResponse> {
    let Query(query) =
        query.map_err(|rej| reject(StatusCode::UNPROCESSABLE_ENTITY, rej.body_text()))?;
    let raw = query
        .status
        .ok_or_else(|| reject(StatusCode::UNPROCESSABLE_ENTITY, "status is required"))?;
    let status: MessageStatus = raw
        .parse()
        .map_err(|detail: String| reject(StatusCode::UNPROCESSABLE_ENTITY, detail))?;

    let updated = state
        .store
        .set_status(&id, status)
        .await
        .map_err(|err| internal("error updating message status", err))?;
    if !updated {
        return Err(reject(StatusCode::NOT_FOUND, NOT_FOUND));
    }
    Ok(Json(StatusUpdateResponse {
        success: true,
        message: STATUS_UPDATED.to_string(),
    }))
}

async fn stats(State(state): State<AppState>) -> Json<MessageStats> {
    Json(state.store.stats(Utc::now()).await)
}

// ============================================================================
// Router
// ============================================================================

/// Router with permissive CORS (the site is served from another origin) and
/// request tracing.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/", get(health_check))
        .route("/api/contact", get(list_messages).post(create_message))
        .route("/api/contact/{id}", get(get_message))
        .route("/api/contact/{id}/status", put(update_status))
        .route("/api/stats", get(stats))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("jane@example.com"));
        assert!(is_valid_email("first.last+tag@mail.example.co.in"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("jane@localhost"));
        assert!(!is_valid_email("jane@example..com"));
        assert!(!is_valid_email("jane doe@example.com"));
        assert!(!is_valid_email("a@b@example.com"));
    }

    #[test]
    fn blank_fields_fail_validation() {
        let mut request = ContactRequest {
            name: "Jane".into(),
            email: "jane@example.com".into(),
            subject: "Hi".into(),
            message: "Hello there".into(),
        };
        assert!(validate(&request).is_ok());

        request.subject = "   ".into();
        assert_eq!(
            validate(&request).unwrap_err(),
            "subject must not be empty"
        );
    }
}
