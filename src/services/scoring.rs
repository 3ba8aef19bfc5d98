//! 评分引擎
//!
//! 根据 [`HabitInput`] 计算有下界的表现分数，以及游戏化的经验值/等级。
//! 权重固定，不可配置。

use crate::models::habit::HabitInput;

/// 有休息时的表现加分
const PERFORMANCE_BREAK_BONUS: f64 = 5.0;

/// 有休息时的经验值加成
const XP_BREAK_BONUS: f64 = 15.0;

/// 无休息时的经验值加成
const XP_NO_BREAK_BONUS: f64 = 5.0;

/// 每级所需经验值
const XP_PER_LEVEL: f64 = 100.0;

/// 保留两位小数
///
/// 按二进制浮点数的精确值舍入，而不是先乘以 100 再取整：
/// 4.925 实际存储为 4.92499999...，结果是 4.92。
pub fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

/// 截断到 0，`-0.0` 也归为 0
fn clamp_zero(value: f64) -> f64 {
    if value > 0.0 { value } else { 0.0 }
}

/// 原始加权表现分（未舍入、未截断）
pub fn raw_performance(input: &HabitInput) -> f64 {
    let bonus = if input.breaks.taken() {
        PERFORMANCE_BREAK_BONUS
    } else {
        0.0
    };

    input.study * 0.30 + input.sleep * 0.25 + f64::from(input.attendance) * 0.30
        - input.screen * 0.10
        - f64::from(input.stress) * 0.20
        + bonus
}

/// 表现分数，保留两位小数，最小为 0
pub fn compute_performance(input: &HabitInput) -> f64 {
    clamp_zero(round2(raw_performance(input)))
}

/// 原始经验值（未舍入、未截断）
pub fn raw_xp(input: &HabitInput) -> f64 {
    let bonus = if input.breaks.taken() {
        XP_BREAK_BONUS
    } else {
        XP_NO_BREAK_BONUS
    };

    input.study * 10.0 + input.sleep * 8.0 + (f64::from(input.attendance) / 10.0) * 5.0
        - input.screen * 3.0
        - f64::from(input.stress) * 2.0
        + bonus
}

/// 经验值和等级
///
/// 等级先由*未截断*的经验值向下整除得到，之后经验值（两位小数）
/// 和等级再各自截断到 0。顺序不能调换。
pub fn compute_xp_and_level(input: &HabitInput) -> (f64, u32) {
    let xp = raw_xp(input);
    let level = (xp / XP_PER_LEVEL).floor();

    let xp = clamp_zero(round2(xp));
    // 输入范围有界，转换不会截断
    let level = level.max(0.0) as u32;

    (xp, level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::habit::Breaks;
    use rstest::rstest;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_default_input_performance() {
        let input = HabitInput::new(4.0, 7.0, 4, 75, 3.0, Breaks::Yes);
        assert_close(compute_performance(&input), 29.35);
    }

    #[test]
    fn test_default_input_xp_and_level() {
        let input = HabitInput::new(4.0, 7.0, 4, 75, 3.0, Breaks::Yes);
        let (xp, level) = compute_xp_and_level(&input);
        assert_close(xp, 131.5);
        assert_eq!(level, 1);
    }

    #[test]
    fn test_worst_input_clamps_performance_to_zero() {
        let input = HabitInput::new(0.0, 0.0, 10, 0, 10.0, Breaks::No);
        assert_close(raw_performance(&input), -3.0);
        assert_eq!(compute_performance(&input), 0.0);
    }

    #[test]
    fn test_negative_xp_clamps_xp_and_level() {
        // 原始经验值 -30 - 20 + 5 = -45，floor(-0.45) = -1
        let input = HabitInput::new(0.0, 0.0, 10, 0, 10.0, Breaks::No);
        assert_close(raw_xp(&input), -45.0);
        assert_eq!((raw_xp(&input) / 100.0).floor(), -1.0);

        let (xp, level) = compute_xp_and_level(&input);
        assert_eq!(xp, 0.0);
        assert_eq!(level, 0);
    }

    #[rstest]
    #[case(HabitInput::new(12.0, 12.0, 1, 100, 0.0, Breaks::Yes), 41.4, 279.0, 2)]
    #[case(HabitInput::new(0.0, 0.0, 1, 0, 0.0, Breaks::No), 0.0, 3.0, 0)]
    #[case(HabitInput::new(2.5, 6.0, 7, 90, 4.5, Breaks::No), 27.4, 95.5, 0)]
    #[case(HabitInput::new(10.0, 8.0, 2, 100, 1.0, Breaks::Yes), 39.5, 222.0, 2)]
    #[case(HabitInput::new(0.0, 0.5, 1, 0, 0.0, Breaks::Yes), 4.92, 17.0, 0)]
    #[case(HabitInput::new(0.0, 1.5, 1, 0, 0.0, Breaks::Yes), 5.17, 25.0, 0)]
    #[case(HabitInput::new(1.5, 2.5, 3, 7, 0.5, Breaks::Yes), 7.53, 46.0, 0)]
    fn test_scoring_table(
        #[case] input: HabitInput,
        #[case] performance: f64,
        #[case] xp: f64,
        #[case] level: u32,
    ) {
        assert_close(compute_performance(&input), performance);
        let (actual_xp, actual_level) = compute_xp_and_level(&input);
        assert_close(actual_xp, xp);
        assert_eq!(actual_level, level);
    }

    #[test]
    fn test_round2_uses_exact_binary_value() {
        // 4.925 和 5.175 的二进制值都略小于字面量
        assert_eq!(round2(4.925), 4.92);
        assert_eq!(round2(5.175), 5.17);
        assert_eq!(round2(0.0499999999999999), 0.05);
        assert_eq!(round2(29.35), 29.35);
        assert_eq!(round2(-0.2), -0.2);
    }

    #[test]
    fn test_small_negative_clamps_to_positive_zero() {
        assert!(clamp_zero(round2(-0.001)).is_sign_positive());
        assert_eq!(clamp_zero(-3.0), 0.0);
        assert_eq!(clamp_zero(4.92), 4.92);
    }

    #[test]
    fn test_level_is_floor_of_raw_xp() {
        // 原始经验值 99.5 和 104.5 分别位于第一级两侧
        let below = HabitInput::new(3.0, 7.0, 4, 75, 7.0, Breaks::No);
        let (xp, level) = compute_xp_and_level(&below);
        assert!(xp < 100.0);
        assert_eq!(level, 0);

        let above = HabitInput::new(3.5, 7.0, 4, 75, 7.0, Breaks::No);
        let (xp, level) = compute_xp_and_level(&above);
        assert!(xp >= 100.0);
        assert_eq!(level, 1);
    }

    #[test]
    fn test_results_never_negative_over_grid() {
        for study in [0.0, 0.5, 6.0, 12.0] {
            for sleep in [0.0, 3.5, 12.0] {
                for stress in [1u8, 5, 10] {
                    for attendance in [0u8, 50, 100] {
                        for screen in [0.0, 5.0, 10.0] {
                            for breaks in [Breaks::Yes, Breaks::No] {
                                let input =
                                    HabitInput::new(study, sleep, stress, attendance, screen, breaks);

                                let performance = compute_performance(&input);
                                assert!(performance >= 0.0);
                                let raw = raw_performance(&input);
                                if raw >= 0.0 {
                                    assert!((performance - raw).abs() <= 0.005 + 1e-9);
                                    let cents = performance * 100.0;
                                    assert!((cents - cents.round()).abs() < 1e-6);
                                }

                                let (xp, level) = compute_xp_and_level(&input);
                                assert!(xp >= 0.0);
                                let floored = (raw_xp(&input) / 100.0).floor();
                                assert_eq!(f64::from(level), floored.max(0.0));
                            }
                        }
                    }
                }
            }
        }
    }
}
