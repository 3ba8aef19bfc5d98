//! 模拟 DTO
//!
//! 定义模拟运行、历史和趋势相关的请求和响应数据结构。

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::habit::{Breaks, HabitInput};
use crate::models::result::ResultRecord;
use crate::services::report::{HistoryRow, TrendSeries};

/// 习惯输入请求
///
/// 缺省字段取界面默认值，范围检查在进入核心之前完成。
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(default)]
pub struct HabitInputRequest {
    /// 学习时长（小时）
    #[validate(range(min = 0.0, max = 12.0))]
    pub study: f64,
    /// 睡眠时长（小时）
    #[validate(range(min = 0.0, max = 12.0))]
    pub sleep: f64,
    /// 压力等级
    #[validate(range(min = 1, max = 10))]
    pub stress: u8,
    /// 出勤率（%）
    #[validate(range(min = 0, max = 100))]
    pub attendance: u8,
    /// 屏幕时间（小时）
    #[validate(range(min = 0.0, max = 10.0))]
    pub screen: f64,
    /// 是否休息
    pub breaks: Breaks,
}

impl Default for HabitInputRequest {
    fn default() -> Self {
        HabitInput::default().into()
    }
}

impl From<HabitInput> for HabitInputRequest {
    fn from(input: HabitInput) -> Self {
        Self {
            study: input.study,
            sleep: input.sleep,
            stress: input.stress,
            attendance: input.attendance,
            screen: input.screen,
            breaks: input.breaks,
        }
    }
}

impl From<HabitInputRequest> for HabitInput {
    fn from(request: HabitInputRequest) -> Self {
        HabitInput::new(
            request.study,
            request.sleep,
            request.stress,
            request.attendance,
            request.screen,
            request.breaks,
        )
    }
}

/// 模拟运行响应
#[derive(Debug, Serialize, Deserialize)]
pub struct RunSimulationResponse {
    /// 新记录
    pub record: ResultRecord,
    /// 该输入的反馈
    pub feedback: Vec<String>,
}

/// 历史响应
#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryResponse {
    /// 会话 ID
    pub session_id: String,
    /// 按运行顺序排列的记录
    pub runs: Vec<HistoryRow>,
    /// 总数
    pub total: usize,
}

/// 趋势响应
#[derive(Debug, Serialize, Deserialize)]
pub struct TrendsResponse {
    /// 会话 ID
    pub session_id: String,
    /// 表现趋势
    pub performance: TrendSeries,
    /// 经验值趋势
    pub xp: TrendSeries,
}

/// 反馈响应
#[derive(Debug, Serialize, Deserialize)]
pub struct FeedbackResponse {
    /// 反馈列表
    pub feedback: Vec<String>,
}
