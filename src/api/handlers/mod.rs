//! Handlers 模块
//!
//! HTTP 请求处理程序。

pub mod session_handler;
pub mod simulation_handler;

pub use session_handler::*;
pub use simulation_handler::*;
