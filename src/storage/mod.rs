//! 存储模块
//!
//! 会话范围内的内存存储，不跨进程持久化。

pub mod history;

pub use history::HistoryStore;
