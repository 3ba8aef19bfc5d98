//! 核心数据模型模块
//!
//! 定义 Habitsim 的核心数据结构：HabitInput, ResultRecord, Session。

pub mod habit;
pub mod result;
pub mod session;

pub use habit::{Breaks, HabitInput};
pub use result::ResultRecord;
pub use session::{Session, SessionStatus};
