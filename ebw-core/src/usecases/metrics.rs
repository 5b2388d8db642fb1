use super::prelude::*;

/// Length of the rolling comparison windows.
pub const METRICS_WINDOW: Duration = Duration::days(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngagementMetrics {
    /// Cases whose `updated_at` lies within the last 30 days.
    pub cases_updated_last_30_days: usize,
    /// Month-over-month growth of update revisions, integer percent.
    pub mom_growth_in_case_updates: i64,
    /// Month-over-month growth of case occurrence dates, integer percent.
    pub mom_new_cases_growth: i64,
    /// Month-over-month growth of case creations, integer percent.
    pub mom_cases_growth: i64,
}

/// Percentage change between two window counts, rounded to an integer.
///
/// An empty previous window with a non-empty current window counts as
/// +100%; two empty windows as 0%.
pub fn month_over_month_growth(previous: usize, current: usize) -> i64 {
    if previous == 0 {
        return if current == 0 { 0 } else { 100 };
    }
    let ratio = (current as f64 - previous as f64) / previous as f64;
    (ratio * 100.0).round() as i64
}

/// Read-only dashboard metrics over two adjacent 30-day windows
/// ending at `now`.
pub fn engagement_metrics<R>(repo: &R, now: Timestamp) -> Result<EngagementMetrics>
where
    R: CaseRepo + CaseRevisionRepo,
{
    let window_start = now - METRICS_WINDOW;
    let previous_start = window_start - METRICS_WINDOW;

    let cases_updated_last_30_days = repo.count_cases_updated_since(window_start)?;

    let current = repo.count_update_revisions_between(window_start, now)?;
    let previous = repo.count_update_revisions_between(previous_start, window_start)?;
    let mom_growth_in_case_updates = month_over_month_growth(previous, current);

    let current = repo.count_cases_dated_between(window_start, now)?;
    let previous = repo.count_cases_dated_between(previous_start, window_start)?;
    let mom_new_cases_growth = month_over_month_growth(previous, current);

    let current = repo.count_cases_created_between(window_start, now)?;
    let previous = repo.count_cases_created_between(previous_start, window_start)?;
    let mom_cases_growth = month_over_month_growth(previous, current);

    Ok(EngagementMetrics {
        cases_updated_last_30_days,
        mom_growth_in_case_updates,
        mom_new_cases_growth,
        mom_cases_growth,
    })
}
