use crate::observability::AppMetrics;
use crate::services::session::SessionService;
use std::sync::Arc;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Session service owning every session's history
    pub session_service: Arc<dyn SessionService>,
    /// Request and simulation counters
    pub metrics: Arc<AppMetrics>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("session_service", &"Arc<dyn SessionService>")
            .field("metrics", &self.metrics)
            .finish()
    }
}

impl AppState {
    /// Create new application state
    pub fn new(session_service: Box<dyn SessionService>, metrics: Arc<AppMetrics>) -> Self {
        Self {
            session_service: Arc::from(session_service),
            metrics,
        }
    }

    /// In-memory sessions with fresh metrics
    pub fn in_memory() -> Self {
        Self::new(
            crate::services::session::create_session_service(),
            Arc::new(AppMetrics::default()),
        )
    }
}
