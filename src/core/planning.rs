use chrono::{Datelike, NaiveDate};
use tracing::debug;

/// Monthly amount needed to reach `goal_amount` by `target_date`.
///
/// Returns `None` for blank or unparseable inputs, and for targets that are not
/// at least one calendar month ahead of `today`.
pub fn monthly_contribution(goal_amount: &str, target_date: &str, today: NaiveDate) -> Option<f64> {
    if goal_amount.trim().is_empty() || target_date.trim().is_empty() {
        return None;
    }

    let goal: f64 = goal_amount.trim().parse().ok()?;
    if goal.is_nan() {
        return None;
    }
    let target = NaiveDate::parse_from_str(target_date.trim(), "%Y-%m-%d").ok()?;
    if target <= today {
        debug!("Target date {target} is not after {today}");
        return None;
    }

    let months = (target.year() - today.year()) * 12 + target.month() as i32 - today.month() as i32;
    if months <= 0 {
        return None;
    }

    Some(goal / months as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_monthly_contribution() {
        let today = day(2024, 1, 15);
        assert_eq!(
            monthly_contribution("12000", "2025-01-01", today),
            Some(1000.0)
        );
    }

    #[test]
    fn test_same_month_target_has_no_contribution() {
        let today = day(2024, 1, 15);
        assert_eq!(monthly_contribution("5000", "2024-01-31", today), None);
    }

    #[test]
    fn test_past_or_invalid_inputs() {
        let today = day(2024, 6, 1);
        assert_eq!(monthly_contribution("5000", "2023-01-01", today), None);
        assert_eq!(monthly_contribution("", "2030-01-01", today), None);
        assert_eq!(monthly_contribution("lots", "2030-01-01", today), None);
        assert_eq!(monthly_contribution("5000", "someday", today), None);
        assert_eq!(monthly_contribution("5000", "", today), None);
    }
}
