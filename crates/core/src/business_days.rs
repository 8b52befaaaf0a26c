//! Business-day arithmetic for hour logging and completion estimates.
//!
//! A business day is Monday through Friday. No holiday calendar is applied.
//!
//! Note the asymmetry between the two primitives:
//! [`business_days_between`] includes `start` itself, while
//! [`add_business_days`] starts counting on the day *after* `start`.
//! [`estimate_completion`] compensates by advancing `needed - 1` days, so a
//! project starting on a business day finishes on its `needed`-th working day.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Length of a working day used to convert planned hours into days.
pub const WORKDAY_HOURS: f64 = 9.0;

/// Whether `date` falls on Monday..Friday.
pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Every business day in the closed interval `[start, end]`, ascending.
///
/// Returns an empty vector when `end < start`.
pub fn business_days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start
        .iter_days()
        .take_while(|d| *d <= end)
        .filter(|d| is_business_day(*d))
        .collect()
}

/// The date `n` business days after `start`, not counting `start` itself.
///
/// `n = 0` returns `start` unchanged, even on a weekend. Returns `None` when
/// the result lies past the last representable date.
///
/// Runs in constant time: whole weeks are added as 7 calendar days each and
/// only the remaining `n % 5` days are stepped.
pub fn add_business_days(start: NaiveDate, n: u32) -> Option<NaiveDate> {
    if n == 0 {
        return Some(start);
    }
    // Counting from a weekend day lands where counting from the Friday before does.
    let anchor = match start.weekday() {
        Weekday::Sat => start.checked_sub_days(Days::new(1))?,
        Weekday::Sun => start.checked_sub_days(Days::new(2))?,
        _ => start,
    };
    let mut date = anchor.checked_add_days(Days::new(u64::from(n / 5) * 7))?;
    for _ in 0..n % 5 {
        date = next_business_day(date)?;
    }
    Some(date)
}

fn next_business_day(date: NaiveDate) -> Option<NaiveDate> {
    let days = match date.weekday() {
        Weekday::Fri => 3,
        Weekday::Sat => 2,
        _ => 1,
    };
    date.checked_add_days(Days::new(days))
}

/// Number of full or partial working days needed to cover `planned_hours`.
///
/// Non-positive and non-finite budgets need no days.
pub fn business_days_needed(planned_hours: f64) -> u32 {
    if !planned_hours.is_finite() || planned_hours <= 0.0 {
        return 0;
    }
    // `as` saturates at u32::MAX.
    (planned_hours / WORKDAY_HOURS).ceil() as u32
}

/// Estimated completion date for a budget of `planned_hours` starting at `start`.
pub fn estimate_completion(start: NaiveDate, planned_hours: f64) -> Option<NaiveDate> {
    let needed = business_days_needed(planned_hours);
    add_business_days(start, needed.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    // -----------------------------------------------------------------------
    // business_days_between
    // -----------------------------------------------------------------------

    #[test]
    fn full_work_week_is_five_days() {
        let days = business_days_between(d(2024, 1, 1), d(2024, 1, 5));
        assert_eq!(
            days,
            vec![
                d(2024, 1, 1),
                d(2024, 1, 2),
                d(2024, 1, 3),
                d(2024, 1, 4),
                d(2024, 1, 5)
            ]
        );
    }

    #[test]
    fn weekend_is_skipped() {
        let days = business_days_between(d(2024, 1, 5), d(2024, 1, 8));
        assert_eq!(days, vec![d(2024, 1, 5), d(2024, 1, 8)]);
    }

    #[test]
    fn weekend_only_range_is_empty() {
        assert!(business_days_between(d(2024, 1, 6), d(2024, 1, 7)).is_empty());
    }

    #[test]
    fn reversed_range_is_empty() {
        assert!(business_days_between(d(2024, 1, 10), d(2024, 1, 1)).is_empty());
    }

    #[test]
    fn single_weekday_contains_itself() {
        assert_eq!(
            business_days_between(d(2024, 1, 3), d(2024, 1, 3)),
            vec![d(2024, 1, 3)]
        );
    }

    #[test]
    fn single_weekend_day_is_empty() {
        assert!(business_days_between(d(2024, 1, 6), d(2024, 1, 6)).is_empty());
    }

    #[test]
    fn length_matches_span_minus_weekends() {
        let base = d(2023, 12, 20);
        for offset in 0..14 {
            let start = base + chrono::Duration::days(offset);
            for span in 0..40 {
                let end = start + chrono::Duration::days(span);
                let days = business_days_between(start, end);

                let weekend = start
                    .iter_days()
                    .take((span + 1) as usize)
                    .filter(|d| d.weekday().number_from_monday() > 5)
                    .count();
                assert_eq!(days.len(), (span + 1) as usize - weekend);
                assert!(days.windows(2).all(|w| w[0] < w[1]));
                assert!(days.iter().all(|d| *d >= start && *d <= end));
            }
        }
    }

    // -----------------------------------------------------------------------
    // add_business_days
    // -----------------------------------------------------------------------

    #[test]
    fn zero_days_returns_start() {
        assert_eq!(add_business_days(d(2024, 1, 3), 0), Some(d(2024, 1, 3)));
        assert_eq!(add_business_days(d(2024, 1, 6), 0), Some(d(2024, 1, 6)));
    }

    #[test]
    fn counting_excludes_start() {
        assert_eq!(add_business_days(d(2024, 1, 1), 1), Some(d(2024, 1, 2)));
    }

    #[test]
    fn friday_plus_one_is_monday() {
        assert_eq!(add_business_days(d(2024, 1, 5), 1), Some(d(2024, 1, 8)));
    }

    #[test]
    fn saturday_plus_one_is_monday() {
        assert_eq!(add_business_days(d(2024, 1, 6), 1), Some(d(2024, 1, 8)));
    }

    #[test]
    fn monday_plus_five_is_next_monday() {
        assert_eq!(add_business_days(d(2024, 1, 1), 5), Some(d(2024, 1, 8)));
    }

    /// Day-by-day reference walk.
    fn walk(start: NaiveDate, n: u32) -> Option<NaiveDate> {
        if n == 0 {
            return Some(start);
        }
        start
            .iter_days()
            .skip(1)
            .filter(|d| is_business_day(*d))
            .nth(n as usize - 1)
    }

    #[test]
    fn matches_day_by_day_walk() {
        let base = d(2023, 12, 25);
        for offset in 0..14 {
            let start = base + chrono::Duration::days(offset);
            for n in 0..60u32 {
                assert_eq!(add_business_days(start, n), walk(start, n), "{start} + {n}");
            }
        }
    }

    #[test]
    fn huge_budgets_do_not_walk() {
        let started = std::time::Instant::now();

        // 5e8 hours needs 55_555_556 working days.
        let far = estimate_completion(d(2024, 1, 1), 5.0e8).unwrap();
        assert!(is_business_day(far));
        assert!(far.year() > 200_000);

        assert_eq!(add_business_days(d(2024, 1, 1), u32::MAX), None);
        assert_eq!(estimate_completion(d(2024, 1, 1), 1.0e12), None);

        assert!(started.elapsed() < std::time::Duration::from_millis(200));
    }

    #[test]
    fn whole_weeks_keep_the_weekday() {
        assert_eq!(add_business_days(d(2024, 1, 3), 10), Some(d(2024, 1, 17)));
        assert_eq!(add_business_days(d(2024, 1, 7), 5), Some(d(2024, 1, 12)));
    }

    #[test]
    fn advances_exactly_n_weekdays() {
        let start = d(2024, 2, 28);
        for n in 0..30u32 {
            let end = add_business_days(start, n).unwrap();
            let counted = business_days_between(start.succ_opt().unwrap(), end).len();
            assert_eq!(counted as u32, n);
        }
    }

    // -----------------------------------------------------------------------
    // Estimation
    // -----------------------------------------------------------------------

    #[test]
    fn needed_days_rounds_up() {
        assert_eq!(business_days_needed(20.0), 3);
        assert_eq!(business_days_needed(18.0), 2);
        assert_eq!(business_days_needed(0.5), 1);
    }

    #[test]
    fn needed_days_for_empty_budget() {
        assert_eq!(business_days_needed(0.0), 0);
        assert_eq!(business_days_needed(-4.0), 0);
        assert_eq!(business_days_needed(f64::NAN), 0);
    }

    #[test]
    fn estimate_after_three_day_shift() {
        // Project originally starting Monday 2024-01-01, shifted by +3 days.
        let new_start = d(2024, 1, 4);
        assert_eq!(
            estimate_completion(new_start, 20.0),
            add_business_days(new_start, 2)
        );
        assert_eq!(estimate_completion(new_start, 20.0), Some(d(2024, 1, 8)));
    }

    #[test]
    fn estimate_with_zero_budget_is_start() {
        assert_eq!(estimate_completion(d(2024, 1, 1), 0.0), Some(d(2024, 1, 1)));
    }
}
