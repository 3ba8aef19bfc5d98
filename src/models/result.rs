use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::habit::HabitInput;

/// 模拟结果记录
///
/// 每次运行产生一条，创建后不再修改，随会话结束一起销毁。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResultRecord {
    /// 会话内的运行序号（从 1 开始）
    pub run: u64,
    /// 原始输入副本
    pub input: HabitInput,
    /// 表现分数
    pub performance: f64,
    /// 经验值
    pub xp: f64,
    /// 等级
    pub level: u32,
    /// 记录时间
    pub recorded_at: DateTime<Utc>,
}

impl ResultRecord {
    /// 创建新记录
    pub fn new(run: u64, input: HabitInput, performance: f64, xp: f64, level: u32) -> Self {
        Self {
            run,
            input,
            performance,
            xp,
            level,
            recorded_at: Utc::now(),
        }
    }

    /// 计算结果是否与另一条记录相同（忽略序号和时间）
    pub fn same_outcome(&self, other: &ResultRecord) -> bool {
        self.input == other.input
            && self.performance == other.performance
            && self.xp == other.xp
            && self.level == other.level
    }
}
