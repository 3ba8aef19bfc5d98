//! 模拟控制器
//!
//! 编排一次运行：计算分数，生成记录，追加到会话历史并返回记录。
//! 这里不检查输入范围，由调用方在运行前校验。

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::habit::HabitInput;
use crate::models::result::ResultRecord;
use crate::services::feedback::{Feedback, generate_feedback};
use crate::services::scoring::{compute_performance, compute_xp_and_level};
use crate::storage::history::HistoryStore;

/// 运行记录及其输入对应的反馈
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationOutcome {
    pub record: ResultRecord,
    pub feedback: Vec<Feedback>,
}

/// 运行一次模拟并把结果追加到 `history`
///
/// 相同输入不去重，每次调用都会追加新记录。
pub fn run_simulation(history: &mut HistoryStore, input: HabitInput) -> ResultRecord {
    let performance = compute_performance(&input);
    let (xp, level) = compute_xp_and_level(&input);

    let record = ResultRecord::new(history.next_run(), input, performance, xp, level);
    history.append(record.clone());

    debug!(
        run = record.run,
        performance, xp, level, "Simulation run recorded"
    );

    record
}

/// [`run_simulation`] 并附带同一输入的反馈
pub fn run_with_feedback(history: &mut HistoryStore, input: HabitInput) -> SimulationOutcome {
    let record = run_simulation(history, input);
    let feedback = generate_feedback(&record.input);
    SimulationOutcome { record, feedback }
}
