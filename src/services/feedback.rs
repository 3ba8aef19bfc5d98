//! 反馈规则
//!
//! 将 [`HabitInput`] 映射为建议信息。每条规则独立判断，
//! 同一输入可能触发多条。

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::habit::HabitInput;

/// 一条反馈
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Feedback {
    /// study < 2
    StudyMore,
    /// sleep < 7
    SleepMore,
    /// stress > 7
    HighStress,
    /// attendance < 80
    LowAttendance,
    /// screen > 4
    ReduceScreenTime,
    /// study >= 3 且 sleep >= 7 且 stress <= 5
    BalancedRoutine,
}

impl Feedback {
    /// 按判断顺序排列的全部规则
    pub const ALL: [Feedback; 6] = [
        Feedback::StudyMore,
        Feedback::SleepMore,
        Feedback::HighStress,
        Feedback::LowAttendance,
        Feedback::ReduceScreenTime,
        Feedback::BalancedRoutine,
    ];

    /// 该规则是否对输入生效
    pub fn applies_to(self, input: &HabitInput) -> bool {
        match self {
            Feedback::StudyMore => input.study < 2.0,
            Feedback::SleepMore => input.sleep < 7.0,
            Feedback::HighStress => input.stress > 7,
            Feedback::LowAttendance => input.attendance < 80,
            Feedback::ReduceScreenTime => input.screen > 4.0,
            Feedback::BalancedRoutine => {
                input.study >= 3.0 && input.sleep >= 7.0 && input.stress <= 5
            }
        }
    }

    /// 展示文本
    pub fn message(self) -> &'static str {
        match self {
            Feedback::StudyMore => "Study more consistently.",
            Feedback::SleepMore => "Aim for at least 7 hours of sleep.",
            Feedback::HighStress => "Stress is high, try relaxation or breaks.",
            Feedback::LowAttendance => "Attendance is low, try to attend more classes.",
            Feedback::ReduceScreenTime => "Reduce screen time during study hours.",
            Feedback::BalancedRoutine => "Great routine! You are balancing your habits well.",
        }
    }

    /// 是否为正面鼓励（而非建议）
    pub fn is_positive(self) -> bool {
        matches!(self, Feedback::BalancedRoutine)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// 生效的规则，始终按 [`Feedback::ALL`] 的顺序，可能为空
pub fn generate_feedback(input: &HabitInput) -> Vec<Feedback> {
    Feedback::ALL
        .into_iter()
        .filter(|rule| rule.applies_to(input))
        .collect()
}

/// 生效规则的展示文本
pub fn feedback_messages(input: &HabitInput) -> Vec<String> {
    generate_feedback(input)
        .into_iter()
        .map(|f| f.message().to_string())
        .collect()
}
