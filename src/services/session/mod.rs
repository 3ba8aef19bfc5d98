//! 会话服务
//!
//! 管理多个相互隔离的交互会话。每个会话独占一份模拟历史，
//! 同一会话内的运行通过会话锁串行执行。

use async_trait::async_trait;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::error::{AppError, Result};
use crate::models::habit::HabitInput;
use crate::models::result::ResultRecord;
use crate::models::session::Session;
use crate::services::report::SessionSummary;
use crate::services::simulation::{SimulationOutcome, run_with_feedback};
use crate::storage::history::HistoryStore;

/// 分页参数
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    /// 页码（从 1 开始）
    pub page: usize,
    /// 每页数量
    pub page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, 20)
    }
}

impl Pagination {
    /// 创建新分页参数
    pub fn new(page: usize, page_size: usize) -> Self {
        Self { page, page_size }
    }

    /// 计算偏移量
    pub fn offset(&self) -> usize {
        (self.page.saturating_sub(1)) * self.page_size
    }

    /// 检查分页参数是否有效
    pub fn is_valid(&self) -> bool {
        self.page > 0 && self.page_size > 0
    }
}

/// 会话及其运行数
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionInfo {
    pub session: Session,
    pub total_runs: usize,
}

/// 会话服务 trait
#[async_trait]
pub trait SessionService: Send + Sync {
    /// 创建会话（历史为空）
    async fn create(&self, name: &str) -> Result<SessionInfo>;

    /// 根据 ID 获取会话
    async fn get(&self, id: &str) -> Result<Option<SessionInfo>>;

    /// 列出会话（按创建时间排序）
    async fn list(&self, pagination: Pagination) -> Result<Vec<SessionInfo>>;

    /// 统计会话数量
    async fn count(&self) -> Result<u64>;

    /// 运行一次模拟并追加到该会话的历史
    async fn run(&self, id: &str, input: HabitInput) -> Result<SimulationOutcome>;

    /// 按运行顺序返回历史
    async fn history(&self, id: &str) -> Result<Vec<ResultRecord>>;

    /// 会话结果汇总
    async fn summary(&self, id: &str) -> Result<SessionSummary>;

    /// 结束会话，丢弃其历史
    async fn end(&self, id: &str) -> Result<SessionInfo>;
}

/// 单个会话的状态
#[derive(Debug)]
struct SessionState {
    session: Session,
    history: HistoryStore,
}

impl SessionState {
    fn info(&self) -> SessionInfo {
        SessionInfo {
            session: self.session.clone(),
            total_runs: self.history.len(),
        }
    }
}

/// 内存会话服务实现
#[derive(Debug, Default)]
pub struct InMemorySessionService {
    sessions: DashMap<String, Arc<Mutex<SessionState>>>,
}

impl InMemorySessionService {
    /// 创建新的服务实例
    pub fn new() -> Self {
        Self::default()
    }

    /// 取出会话句柄，不在 await 期间持有 map 的引用
    fn state(&self, id: &str) -> Result<Arc<Mutex<SessionState>>> {
        self.sessions
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| AppError::NotFound(format!("Session not found: {}", id)))
    }
}

#[async_trait]
impl SessionService for InMemorySessionService {
    async fn create(&self, name: &str) -> Result<SessionInfo> {
        let state = SessionState {
            session: Session::new(name),
            history: HistoryStore::new(),
        };
        let info = state.info();

        self.sessions
            .insert(info.session.id.clone(), Arc::new(Mutex::new(state)));
        info!(session_id = %info.session.id, "Session created");

        Ok(info)
    }

    async fn get(&self, id: &str) -> Result<Option<SessionInfo>> {
        match self.state(id) {
            Ok(state) => Ok(Some(state.lock().await.info())),
            Err(AppError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn list(&self, pagination: Pagination) -> Result<Vec<SessionInfo>> {
        if !pagination.is_valid() {
            return Err(AppError::Validation(
                "page and page_size must be greater than 0".to_string(),
            ));
        }

        let states: Vec<_> = self
            .sessions
            .iter()
            .map(|entry| entry.value().clone())
            .collect();

        let mut infos = Vec::with_capacity(states.len());
        for state in states {
            infos.push(state.lock().await.info());
        }
        infos.sort_by(|a, b| {
            a.session
                .created_at
                .cmp(&b.session.created_at)
                .then_with(|| a.session.id.cmp(&b.session.id))
        });

        Ok(infos
            .into_iter()
            .skip(pagination.offset())
            .take(pagination.page_size)
            .collect())
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.sessions.len() as u64)
    }

    async fn run(&self, id: &str, input: HabitInput) -> Result<SimulationOutcome> {
        let state = self.state(id)?;
        let mut state = state.lock().await;

        let outcome = run_with_feedback(&mut state.history, input);
        state.session.touch();
        debug!(session_id = %id, run = outcome.record.run, "Simulation appended to session");

        Ok(outcome)
    }

    async fn history(&self, id: &str) -> Result<Vec<ResultRecord>> {
        let state = self.state(id)?;
        let state = state.lock().await;
        Ok(state.history.all().to_vec())
    }

    async fn summary(&self, id: &str) -> Result<SessionSummary> {
        let state = self.state(id)?;
        let state = state.lock().await;
        Ok(SessionSummary::from_history(&state.history))
    }

    async fn end(&self, id: &str) -> Result<SessionInfo> {
        let (_, state) = self
            .sessions
            .remove(id)
            .ok_or_else(|| AppError::NotFound(format!("Session not found: {}", id)))?;

        let mut state = state.lock().await;
        let total_runs = state.history.len();
        state.session.end();
        state.history = HistoryStore::new();
        info!(session_id = %id, total_runs, "Session ended");

        Ok(SessionInfo {
            session: state.session.clone(),
            total_runs,
        })
    }
}

/// 创建会话服务
pub fn create_session_service() -> Box<dyn SessionService> {
    Box::new(InMemorySessionService::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::habit::Breaks;
    use crate::models::session::SessionStatus;

    #[test]
    fn test_pagination_offset() {
        let pagination = Pagination::new(1, 20);
        assert_eq!(pagination.offset(), 0);

        let pagination = Pagination::new(3, 10);
        assert_eq!(pagination.offset(), 20);
    }

    #[test]
    fn test_pagination_invalid() {
        assert!(!Pagination::new(0, 20).is_valid());
        assert!(!Pagination::new(1, 0).is_valid());
        assert!(Pagination::default().is_valid());
    }

    #[tokio::test]
    async fn test_new_session_has_empty_history() {
        let service = InMemorySessionService::new();
        let info = service.create("first").await.unwrap();

        assert_eq!(info.total_runs, 0);
        assert!(service.history(&info.session.id).await.unwrap().is_empty());
        assert_eq!(service.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let service = InMemorySessionService::new();
        let a = service.create("a").await.unwrap().session.id;
        let b = service.create("b").await.unwrap().session.id;

        service.run(&a, HabitInput::default()).await.unwrap();
        service.run(&a, HabitInput::default()).await.unwrap();
        service
            .run(&b, HabitInput::new(0.0, 0.0, 10, 0, 10.0, Breaks::No))
            .await
            .unwrap();

        assert_eq!(service.history(&a).await.unwrap().len(), 2);
        let history_b = service.history(&b).await.unwrap();
        assert_eq!(history_b.len(), 1);
        assert_eq!(history_b[0].run, 1);
        assert_eq!(history_b[0].performance, 0.0);
    }

    #[tokio::test]
    async fn test_concurrent_runs_are_serialized() {
        let service = Arc::new(InMemorySessionService::new());
        let id = service.create("busy").await.unwrap().session.id;

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let service = service.clone();
                let id = id.clone();
                tokio::spawn(async move { service.run(&id, HabitInput::default()).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let runs: Vec<u64> = service
            .history(&id)
            .await
            .unwrap()
            .iter()
            .map(|r| r.run)
            .collect();
        assert_eq!(runs, (1..=16).collect::<Vec<u64>>());
    }

    #[tokio::test]
    async fn test_unknown_session() {
        let service = InMemorySessionService::new();

        assert!(service.get("missing").await.unwrap().is_none());
        assert!(matches!(
            service.run("missing", HabitInput::default()).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.end("missing").await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_end_session_drops_history() {
        let service = InMemorySessionService::new();
        let id = service.create("done").await.unwrap().session.id;
        service.run(&id, HabitInput::default()).await.unwrap();

        let ended = service.end(&id).await.unwrap();

        assert_eq!(ended.session.status, SessionStatus::Ended);
        assert_eq!(ended.total_runs, 1);
        assert!(service.get(&id).await.unwrap().is_none());
        assert_eq!(service.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_list_paginates_in_creation_order() {
        let service = InMemorySessionService::new();
        for name in ["one", "two", "three"] {
            service.create(name).await.unwrap();
        }

        let all = service.list(Pagination::default()).await.unwrap();
        assert_eq!(all.len(), 3);

        let page = service.list(Pagination::new(2, 2)).await.unwrap();
        assert_eq!(page.len(), 1);

        assert!(service.list(Pagination::new(0, 2)).await.is_err());
    }
}
