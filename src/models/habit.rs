use serde::{Deserialize, Serialize};
use std::fmt;

/// 是否休息
///
/// 只有两个取值，分支在编译期即可穷尽检查。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Breaks {
    /// 有休息
    #[default]
    Yes,
    /// 没有休息
    No,
}

impl Breaks {
    /// 是否有休息
    pub fn taken(self) -> bool {
        matches!(self, Breaks::Yes)
    }
}

impl fmt::Display for Breaks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Breaks::Yes => f.write_str("yes"),
            Breaks::No => f.write_str("no"),
        }
    }
}

/// 每日习惯输入
///
/// 一次采样的六个值。取值范围由外壳负责校验，核心不再重复校验：
///
/// | 字段 | 类型 | 范围 |
/// |---|---|---|
/// | study | 小时 | 0.0 - 12.0 |
/// | sleep | 小时 | 0.0 - 12.0 |
/// | stress | 整数 | 1 - 10 |
/// | attendance | 百分比 | 0 - 100 |
/// | screen | 小时 | 0.0 - 10.0 |
/// | breaks | 枚举 | yes / no |
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HabitInput {
    /// 学习时长（小时）
    pub study: f64,
    /// 睡眠时长（小时）
    pub sleep: f64,
    /// 压力等级
    pub stress: u8,
    /// 出勤率（%）
    pub attendance: u8,
    /// 屏幕时间（小时）
    pub screen: f64,
    /// 是否休息
    pub breaks: Breaks,
}

impl HabitInput {
    /// 创建新输入
    pub fn new(
        study: f64,
        sleep: f64,
        stress: u8,
        attendance: u8,
        screen: f64,
        breaks: Breaks,
    ) -> Self {
        Self {
            study,
            sleep,
            stress,
            attendance,
            screen,
            breaks,
        }
    }
}

/// 默认值与交互界面滑块的初始位置一致
impl Default for HabitInput {
    fn default() -> Self {
        Self {
            study: 4.0,
            sleep: 7.0,
            stress: 4,
            attendance: 75,
            screen: 3.0,
            breaks: Breaks::Yes,
        }
    }
}
