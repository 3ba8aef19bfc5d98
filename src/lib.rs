//! Habitsim - 学生成功与健康模拟器
//!
//! 根据六项每日习惯计算表现分数和经验值/等级，并在会话范围内
//! 保留只追加的模拟历史，供界面展示表格和趋势。

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod observability;
pub mod services;
pub mod storage;
pub mod validation;
