use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 会话状态
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum SessionStatus {
    /// 活跃状态
    #[default]
    Active,
    /// 已结束
    Ended,
}

/// 会话实体
///
/// 一次交互会话的元数据。模拟历史只在会话存活期间保留。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// 会话唯一标识
    pub id: String,

    /// 会话名称
    pub name: String,

    /// 会话创建时间
    pub created_at: DateTime<Utc>,

    /// 最后活跃时间
    pub last_active_at: DateTime<Utc>,

    /// 会话状态
    pub status: SessionStatus,
}

impl Session {
    /// 创建新会话
    pub fn new(name: &str) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            created_at: now,
            last_active_at: now,
            status: SessionStatus::Active,
        }
    }

    /// 更新最后活跃时间
    pub fn touch(&mut self) {
        self.last_active_at = Utc::now();
    }

    /// 结束会话
    pub fn end(&mut self) {
        self.status = SessionStatus::Ended;
        self.touch();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_create() {
        let session = Session::new("Morning routine");
        assert_eq!(session.name, "Morning routine");
        assert_eq!(session.status, SessionStatus::Active);
        assert!(!session.id.is_empty());
        assert_eq!(session.created_at, session.last_active_at);
    }

    #[test]
    fn test_session_end() {
        let mut session = Session::new("s");
        session.end();
        assert_eq!(session.status, SessionStatus::Ended);
        assert!(session.last_active_at >= session.created_at);
    }
}
