//! Routes 模块
//!
//! 定义 API 路由。

pub mod session_routes;
pub mod simulation_routes;
