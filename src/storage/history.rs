//! 会话历史存储
//!
//! 由单个会话独占的 [`ResultRecord`] 序列，只追加，按插入顺序排列，
//! 没有淘汰也没有上限。

use crate::models::result::ResultRecord;

/// 会话历史
#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    records: Vec<ResultRecord>,
}

impl HistoryStore {
    /// 创建空历史
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一条记录到末尾
    pub fn append(&mut self, record: ResultRecord) {
        self.records.push(record);
    }

    /// 按插入顺序返回全部记录（只读）
    pub fn all(&self) -> &[ResultRecord] {
        &self.records
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 记录数量
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// 最近一条记录
    pub fn latest(&self) -> Option<&ResultRecord> {
        self.records.last()
    }

    /// 下一次运行的序号
    pub fn next_run(&self) -> u64 {
        self.records.len() as u64 + 1
    }
}

impl FromIterator<ResultRecord> for HistoryStore {
    fn from_iter<I: IntoIterator<Item = ResultRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
