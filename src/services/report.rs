//! 会话报告
//!
//! 将会话历史整理成界面需要展示的内容：最近结果、反馈、
//! 历史表格，以及按运行序号排列的两条趋势线。

use serde::{Deserialize, Serialize};

use crate::models::habit::Breaks;
use crate::models::result::ResultRecord;
use crate::services::feedback::{Feedback, generate_feedback};
use crate::storage::history::HistoryStore;

/// 历史为空时显示的提示
pub const EMPTY_HISTORY_MESSAGE: &str = "Run the simulation to see your performance.";

/// 历史表格的一行
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct HistoryRow {
    pub run: u64,
    pub study: f64,
    pub sleep: f64,
    pub stress: u8,
    pub attendance: u8,
    pub screen: f64,
    pub breaks: Breaks,
    pub performance: f64,
    #[serde(rename = "XP")]
    pub xp: f64,
    pub level: u32,
}

impl From<&ResultRecord> for HistoryRow {
    fn from(record: &ResultRecord) -> Self {
        Self {
            run: record.run,
            study: record.input.study,
            sleep: record.input.sleep,
            stress: record.input.stress,
            attendance: record.input.attendance,
            screen: record.input.screen,
            breaks: record.input.breaks,
            performance: record.performance,
            xp: record.xp,
            level: record.level,
        }
    }
}

/// 趋势线上的一个点
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TrendPoint {
    pub run: u64,
    pub value: f64,
}

/// 按运行顺序排列的数值序列
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendSeries {
    pub name: String,
    pub points: Vec<TrendPoint>,
}

impl TrendSeries {
    fn from_history(name: &str, history: &HistoryStore, value: impl Fn(&ResultRecord) -> f64) -> Self {
        Self {
            name: name.to_string(),
            points: history
                .all()
                .iter()
                .map(|r| TrendPoint {
                    run: r.run,
                    value: value(r),
                })
                .collect(),
        }
    }

    /// 表现分数趋势
    pub fn performance(history: &HistoryStore) -> Self {
        Self::from_history("Performance", history, |r| r.performance)
    }

    /// 经验值趋势
    pub fn xp(history: &HistoryStore) -> Self {
        Self::from_history("XP", history, |r| r.xp)
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// 单个会话的结果视图
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub latest: Option<ResultRecord>,
    pub message: Option<String>,
    pub feedback: Vec<Feedback>,
    pub history: Vec<HistoryRow>,
    pub performance_trend: TrendSeries,
    pub xp_trend: TrendSeries,
}

impl SessionSummary {
    /// 生成汇总，反馈基于最近一次运行的输入
    pub fn from_history(history: &HistoryStore) -> Self {
        let latest = history.latest().cloned();
        let feedback = latest
            .as_ref()
            .map(|r| generate_feedback(&r.input))
            .unwrap_or_default();
        let message = latest
            .is_none()
            .then(|| EMPTY_HISTORY_MESSAGE.to_string());

        Self {
            latest,
            message,
            feedback,
            history: history_rows(history),
            performance_trend: TrendSeries::performance(history),
            xp_trend: TrendSeries::xp(history),
        }
    }
}

/// 按运行顺序排列的表格行
pub fn history_rows(history: &HistoryStore) -> Vec<HistoryRow> {
    history.all().iter().map(HistoryRow::from).collect()
}
