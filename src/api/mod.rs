//! API 模块
//!
//! 提供 REST API 支持。

pub mod app_state;
pub mod dto;
pub mod handlers;
pub mod routes;

use crate::api::app_state::AppState;
use crate::config::config::ServerConfig;
use crate::observability::metrics_middleware;
use axum::Router;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

pub fn create_router(app_state: AppState, server: &ServerConfig) -> Router {
    let api = Router::new()
        .merge(routes::session_routes::create_session_router())
        .merge(routes::simulation_routes::create_simulation_router());

    Router::new()
        .nest("/api/v1", api)
        .layer(axum::middleware::from_fn_with_state(
            app_state.metrics.clone(),
            metrics_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        // 超时返回 408
        .layer(TimeoutLayer::new(server.timeout()))
        // 界面外壳可能运行在其他源上
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
