use axum::{
    Json,
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::debug;

use crate::{
    api::{app_state::AppState, dto::session_dto::*},
    error::AppError,
    services::session::Pagination,
};

/// 未命名会话的默认名称
const DEFAULT_SESSION_NAME: &str = "Untitled session";

/// 请求体可省略；一旦提供就必须是合法的 JSON
pub async fn create_session(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let request = parse_create_request(&body)?;
    let name = request
        .name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| DEFAULT_SESSION_NAME.to_string());
    debug!("Creating new session: {}", name);

    let info = state.session_service.create(&name).await?;
    state.metrics.record_session_created();

    let response = CreateSessionResponse {
        id: info.session.id,
        name: info.session.name,
        created_at: info.session.created_at,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

fn parse_create_request(body: &[u8]) -> Result<CreateSessionRequest, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(CreateSessionRequest::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| AppError::Validation(format!("invalid request body: {}", e)))
}

pub async fn list_sessions(
    State(state): State<AppState>,
    Query(params): Query<ListSessionsParams>,
) -> Result<impl IntoResponse, AppError> {
    debug!(
        "Listing sessions: page={:?}, page_size={:?}",
        params.page, params.page_size
    );

    let page = params.page.unwrap_or(1);
    let page_size = params.page_size.unwrap_or(20);

    let sessions = state
        .session_service
        .list(Pagination::new(page, page_size))
        .await?;
    let total = state.session_service.count().await?;

    let response = SessionListResponse {
        sessions: sessions.into_iter().map(SessionResponse::from).collect(),
        total,
        page,
        page_size,
    };

    Ok(Json(response))
}

pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Getting session summary: {}", id);

    let info = state
        .session_service
        .get(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Session not found: {}", id)))?;
    let summary = state.session_service.summary(&id).await?;

    Ok(Json(SessionSummaryResponse::new(info, summary)))
}

pub async fn end_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Ending session: {}", id);

    let info = state.session_service.end(&id).await?;
    state.metrics.record_session_ended();

    let response = EndSessionResponse {
        id,
        total_runs: info.total_runs,
        message: "Session ended, history cleared".to_string(),
    };

    Ok(Json(response))
}

#[derive(Debug, Deserialize, Default)]
pub struct ListSessionsParams {
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}
