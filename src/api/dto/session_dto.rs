//! 会话 DTO
//!
//! 定义会话相关的请求和响应数据结构。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::result::ResultRecord;
use crate::services::report::{HistoryRow, SessionSummary, TrendSeries};
use crate::services::session::SessionInfo;

/// 创建会话请求
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct CreateSessionRequest {
    /// 会话名称
    pub name: Option<String>,
}

/// 创建会话响应
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateSessionResponse {
    /// 会话 ID
    pub id: String,
    /// 会话名称
    pub name: String,
    /// 创建时间
    pub created_at: DateTime<Utc>,
}

/// 会话响应
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    /// 会话 ID
    pub id: String,
    /// 会话名称
    pub name: String,
    /// 会话状态
    pub status: String,
    /// 创建时间
    pub created_at: DateTime<Utc>,
    /// 最后活跃时间
    pub last_active_at: DateTime<Utc>,
    /// 运行次数
    pub total_runs: usize,
}

impl From<SessionInfo> for SessionResponse {
    fn from(info: SessionInfo) -> Self {
        Self {
            id: info.session.id,
            name: info.session.name,
            status: format!("{:?}", info.session.status),
            created_at: info.session.created_at,
            last_active_at: info.session.last_active_at,
            total_runs: info.total_runs,
        }
    }
}

/// 会话列表响应
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionListResponse {
    /// 会话列表
    pub sessions: Vec<SessionResponse>,
    /// 总数
    pub total: u64,
    /// 当前页
    pub page: usize,
    /// 每页数量
    pub page_size: usize,
}

/// 会话结果汇总响应
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionSummaryResponse {
    /// 会话信息
    pub session: SessionResponse,
    /// 最近一次结果
    pub latest: Option<ResultRecord>,
    /// 历史为空时的提示
    pub message: Option<String>,
    /// 最近一次输入的反馈
    pub feedback: Vec<String>,
    /// 历史表格
    pub history: Vec<HistoryRow>,
    /// 表现趋势
    pub performance_trend: TrendSeries,
    /// 经验值趋势
    pub xp_trend: TrendSeries,
}

impl SessionSummaryResponse {
    pub fn new(info: SessionInfo, summary: SessionSummary) -> Self {
        Self {
            session: info.into(),
            latest: summary.latest,
            message: summary.message,
            feedback: summary
                .feedback
                .into_iter()
                .map(|f| f.message().to_string())
                .collect(),
            history: summary.history,
            performance_trend: summary.performance_trend,
            xp_trend: summary.xp_trend,
        }
    }
}

/// 结束会话响应
#[derive(Debug, Serialize, Deserialize)]
pub struct EndSessionResponse {
    /// 会话 ID
    pub id: String,
    /// 结束前的运行次数
    pub total_runs: usize,
    /// 消息
    pub message: String,
}
