//! 服务模块

pub mod feedback;
pub mod report;
pub mod scoring;
pub mod session;
pub mod simulation;

pub use feedback::{Feedback, feedback_messages, generate_feedback};
pub use report::{HistoryRow, SessionSummary, TrendPoint, TrendSeries};
pub use scoring::{compute_performance, compute_xp_and_level};
pub use session::{
    InMemorySessionService, Pagination, SessionInfo, SessionService, create_session_service,
};
pub use simulation::{SimulationOutcome, run_simulation, run_with_feedback};
