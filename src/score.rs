//! Wellness score engine
//!
//! Incremental model: a fixed award for the first check-in of each calendar
//! day, a separate award for a completed reframe action, with the weekly
//! score clamped to [0, 100] after every adjustment.

use chrono::NaiveDate;

use crate::store::ScoreState;

/// Awarded once per calendar day, on the first check-in.
pub const DAILY_CHECKIN_POINTS: u32 = 3;
/// Awarded for each reframe whose next action was started.
pub const COMPLETED_ACTION_POINTS: u32 = 5;
/// Upper clamp for the weekly score.
pub const WEEKLY_MAX: u32 = 100;

/// Applies the daily check-in rules for `today`.
///
/// On the first check-in of a new calendar day: the streak increments by 1
/// when `today` is exactly one day after the last check date, otherwise it
/// resets to 1; the daily points are awarded. A repeat check-in on the same
/// day changes nothing. Returns true when the day advanced.
pub fn register_check_in(score: &mut ScoreState, today: NaiveDate) -> bool {
    if score.last_check_date == Some(today) {
        return false;
    }

    let consecutive = score
        .last_check_date
        .map_or(false, |last| today == last + chrono::Days::new(1));
    score.streak_days = if consecutive { score.streak_days + 1 } else { 1 };
    score.last_check_date = Some(today);
    add_points(score, DAILY_CHECKIN_POINTS);
    true
}

/// Awards the completed-action points. Not day-limited.
pub fn register_completed_action(score: &mut ScoreState) {
    add_points(score, COMPLETED_ACTION_POINTS);
}

fn add_points(score: &mut ScoreState, delta: u32) {
    score.weekly = score.weekly.saturating_add(delta).min(WEEKLY_MAX);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_first_ever_check_in_starts_streak() {
        let mut score = ScoreState::default();
        assert!(register_check_in(&mut score, day(2024, 3, 4)));
        assert_eq!(score.streak_days, 1);
        assert_eq!(score.weekly, DAILY_CHECKIN_POINTS);
        assert_eq!(score.last_check_date, Some(day(2024, 3, 4)));
    }

    #[test]
    fn test_consecutive_days_increment_streak_by_one() {
        let mut score = ScoreState::default();
        register_check_in(&mut score, day(2024, 3, 4));
        register_check_in(&mut score, day(2024, 3, 5));
        assert_eq!(score.streak_days, 2);
        assert_eq!(score.weekly, 2 * DAILY_CHECKIN_POINTS);
    }

    #[test]
    fn test_gap_resets_streak_to_one() {
        let mut score = ScoreState::default();
        register_check_in(&mut score, day(2024, 3, 4));
        register_check_in(&mut score, day(2024, 3, 5));
        // Three-day gap.
        register_check_in(&mut score, day(2024, 3, 8));
        assert_eq!(score.streak_days, 1);
    }

    #[test]
    fn test_same_day_repeat_is_a_no_op() {
        let mut score = ScoreState::default();
        register_check_in(&mut score, day(2024, 3, 4));
        assert!(!register_check_in(&mut score, day(2024, 3, 4)));
        assert_eq!(score.streak_days, 1);
        assert_eq!(score.weekly, DAILY_CHECKIN_POINTS);
    }

    #[test]
    fn test_month_boundary_counts_as_consecutive() {
        let mut score = ScoreState::default();
        register_check_in(&mut score, day(2024, 2, 29));
        register_check_in(&mut score, day(2024, 3, 1));
        assert_eq!(score.streak_days, 2);
    }

    #[test]
    fn test_weekly_never_leaves_bounds() {
        let mut score = ScoreState::default();
        for _ in 0..50 {
            register_completed_action(&mut score);
        }
        assert_eq!(score.weekly, WEEKLY_MAX);

        // Stays clamped when the daily award lands on a full score too.
        register_check_in(&mut score, day(2024, 3, 4));
        assert_eq!(score.weekly, WEEKLY_MAX);
    }
}
