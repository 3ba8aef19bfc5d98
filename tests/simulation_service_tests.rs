// Integration tests for the simulation core and session service
//
// Tests cover:
// - Scoring scenarios for the default and worst-case inputs
// - Feedback rule ordering
// - History append/read semantics through the controller
// - Session isolation through the service

use habitsim::models::{Breaks, HabitInput};
use habitsim::services::{
    Feedback, InMemorySessionService, SessionService, SessionSummary, compute_performance,
    compute_xp_and_level, generate_feedback, run_simulation,
};
use habitsim::storage::HistoryStore;

fn default_input() -> HabitInput {
    HabitInput::new(4.0, 7.0, 4, 75, 3.0, Breaks::Yes)
}

fn worst_input() -> HabitInput {
    HabitInput::new(0.0, 0.0, 10, 0, 10.0, Breaks::No)
}

// ============ Scoring ============

#[test]
fn test_default_input_scores() {
    let input = default_input();
    assert!((compute_performance(&input) - 29.35).abs() < 1e-9);

    let (xp, level) = compute_xp_and_level(&input);
    assert!((xp - 131.5).abs() < 1e-9);
    assert_eq!(level, 1);
}

#[test]
fn test_worst_input_is_clamped() {
    let input = worst_input();
    assert_eq!(compute_performance(&input), 0.0);

    let (xp, level) = compute_xp_and_level(&input);
    assert_eq!(xp, 0.0);
    assert_eq!(level, 0);
}

// ============ Feedback ============

#[test]
fn test_worst_input_feedback() {
    let feedback = generate_feedback(&worst_input());
    assert_eq!(
        feedback,
        vec![
            Feedback::StudyMore,
            Feedback::SleepMore,
            Feedback::HighStress,
            Feedback::LowAttendance,
            Feedback::ReduceScreenTime,
        ]
    );
    assert!(feedback.iter().all(|f| !f.is_positive()));
}

// ============ History ============

#[test]
fn test_first_run_populates_history() {
    let mut history = HistoryStore::new();
    assert!(history.is_empty());

    let record = run_simulation(&mut history, default_input());

    assert_eq!(history.len(), 1);
    assert_eq!(history.all(), &[record]);
}

#[test]
fn test_repeated_runs_append_twice() {
    let mut history = HistoryStore::new();
    run_simulation(&mut history, default_input());
    let before = history.len();

    let a = run_simulation(&mut history, worst_input());
    let b = run_simulation(&mut history, worst_input());

    assert_eq!(history.len(), before + 2);
    assert_eq!(a.performance, b.performance);
    assert_eq!(a.xp, b.xp);
    assert_eq!(a.level, b.level);

    let summary = SessionSummary::from_history(&history);
    assert_eq!(summary.latest.map(|r| r.run), Some(3));
    assert_eq!(summary.performance_trend.points.len(), 3);
}

// ============ Sessions ============

#[tokio::test]
async fn test_sessions_keep_separate_histories() {
    let service = InMemorySessionService::new();
    let morning = service.create("morning").await.unwrap().session.id;
    let evening = service.create("evening").await.unwrap().session.id;

    service.run(&morning, default_input()).await.unwrap();
    let outcome = service.run(&evening, worst_input()).await.unwrap();

    assert_eq!(outcome.record.run, 1);
    assert_eq!(outcome.feedback.len(), 5);

    let summary = service.summary(&morning).await.unwrap();
    assert_eq!(summary.history.len(), 1);
    assert_eq!(
        summary.feedback,
        vec![Feedback::LowAttendance, Feedback::BalancedRoutine]
    );

    service.end(&morning).await.unwrap();
    assert!(service.history(&morning).await.is_err());
    assert_eq!(service.history(&evening).await.unwrap().len(), 1);
}
