//! Simulation Routes
//!
//! 定义模拟运行、历史、趋势和反馈的 API 路由。

use crate::api::handlers::simulation_handler::*;
use axum::{
    Router,
    routing::{get, post},
};

use crate::api::app_state::AppState;

/// 创建模拟路由器
pub fn create_simulation_router() -> Router<AppState> {
    Router::new()
        .route(
            "/sessions/:id/runs",
            post(run_simulation).get(list_runs),
        )
        .route("/sessions/:id/trends", get(get_trends))
        .route("/feedback", post(preview_feedback))
}
