use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::{debug, warn};

use crate::{
    api::{app_state::AppState, dto::simulation_dto::*},
    error::AppError,
    models::habit::HabitInput,
    services::{
        feedback::feedback_messages,
        report::{TrendSeries, history_rows},
    },
    storage::history::HistoryStore,
    validation::validate_request,
};

/// 在边界处校验输入，并统计被拒绝的次数
fn accept_input(state: &AppState, request: HabitInputRequest) -> Result<HabitInput, AppError> {
    if let Err(e) = validate_request(&request) {
        warn!("Rejected habit input: {}", e);
        state.metrics.record_invalid_input();
        return Err(e);
    }
    Ok(request.into())
}

pub async fn run_simulation(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(request): Json<HabitInputRequest>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Running simulation for session: {}", session_id);

    let input = accept_input(&state, request)?;
    let outcome = state.session_service.run(&session_id, input).await?;
    state.metrics.record_run();

    let response = RunSimulationResponse {
        feedback: outcome
            .feedback
            .iter()
            .map(|f| f.message().to_string())
            .collect(),
        record: outcome.record,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn list_runs(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Listing runs for session: {}", session_id);

    let history = load_history(&state, &session_id).await?;
    let runs = history_rows(&history);

    let response = HistoryResponse {
        session_id,
        total: runs.len(),
        runs,
    };

    Ok(Json(response))
}

pub async fn get_trends(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Getting trends for session: {}", session_id);

    let history = load_history(&state, &session_id).await?;

    let response = TrendsResponse {
        session_id,
        performance: TrendSeries::performance(&history),
        xp: TrendSeries::xp(&history),
    };

    Ok(Json(response))
}

/// 当前输入的反馈，不记录运行
pub async fn preview_feedback(
    State(state): State<AppState>,
    Json(request): Json<HabitInputRequest>,
) -> Result<impl IntoResponse, AppError> {
    let input = accept_input(&state, request)?;

    Ok(Json(FeedbackResponse {
        feedback: feedback_messages(&input),
    }))
}

/// 会话历史的只读副本
async fn load_history(state: &AppState, session_id: &str) -> Result<HistoryStore, AppError> {
    let records = state.session_service.history(session_id).await?;
    Ok(records.into_iter().collect())
}
