//! Axum route handlers for the Interview API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::machine::{transition, Event};
use crate::interview::session::QaRecord;
use crate::interview::store::SessionHandle;
use crate::interview::view::{render, render_summary_markdown, SessionView};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub name: String,
    pub entries: Vec<QaRecord>,
    pub markdown: String,
}

async fn find_session(state: &AppState, id: Uuid) -> Result<SessionHandle, AppError> {
    state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionView>) {
    let session = state.sessions.create().await;
    (StatusCode::CREATED, Json(render(&session)))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let handle = find_session(&state, id).await?;
    let session = handle.lock().await;
    Ok(Json(render(&session)))
}

/// POST /api/v1/sessions/:id/events
///
/// Applies one user action. The session stays locked for the whole action,
/// including the generator call; on error it is left as it was.
pub async fn handle_session_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(event): Json<Event>,
) -> Result<Json<SessionView>, AppError> {
    let handle = find_session(&state, id).await?;
    let mut session = handle.lock().await;

    info!(session_id = %id, stage = %session.stage, "Applying {}", event.kind());
    let next = transition(&session, event, state.generator.as_ref()).await?;
    *session = next;

    Ok(Json(render(&session)))
}

/// GET /api/v1/sessions/:id/summary
pub async fn handle_get_summary(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SummaryResponse>, AppError> {
    let handle = find_session(&state, id).await?;
    let session = handle.lock().await;

    if !session.interview_complete {
        return Err(AppError::Conflict(
            "The summary is available once the interview is finished".to_string(),
        ));
    }

    Ok(Json(SummaryResponse {
        name: session.name.clone(),
        entries: session.qa_summary.clone(),
        markdown: render_summary_markdown(&session.qa_summary),
    }))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_end_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.sessions.remove(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Session {id} not found")))
    }
}
