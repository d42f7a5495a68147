//! Hours accounting: weekly totals, overtime, and the weekly cap.

use serde::{Deserialize, Serialize};

use crate::models::{DailyHours, Shift, ShiftStatus, Timesheet};
use crate::rules::shift_times::resolve_shift_times;
use crate::utils::leading_number;

pub const DEFAULT_WEEKLY_LIMIT: f64 = 40.0;
pub const DEFAULT_OVERTIME_THRESHOLD: f64 = 40.0;

pub const HOUR_STEP: f64 = 0.5;
pub const MAX_DAILY_HOURS: f64 = 24.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoursPolicy {
    pub weekly_limit: f64,
    pub overtime_threshold: f64,
}

impl Default for HoursPolicy {
    fn default() -> Self {
        Self {
            weekly_limit: DEFAULT_WEEKLY_LIMIT,
            overtime_threshold: DEFAULT_OVERTIME_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySummary {
    pub total_hours: f64,
    pub regular_hours: f64,
    pub overtime_hours: f64,
    pub remaining_hours: f64,
    pub exceeds_limit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelfSelection {
    pub allowed: bool,
    pub shift_hours: f64,
    pub projected_hours: f64,
    pub remaining_hours: f64,
}

/// Reads one daily entry. Anything that does not start with a number counts
/// as zero hours.
pub fn parse_hours(raw: &str) -> f64 {
    leading_number(raw).unwrap_or(0.0)
}

pub fn total_weekly_hours(daily_hours: &DailyHours) -> f64 {
    daily_hours.values().iter().map(|raw| parse_hours(raw)).sum()
}

pub fn overtime_hours(total: f64, threshold: f64) -> f64 {
    (total - threshold).max(0.0)
}

pub fn would_exceed_weekly_limit(current_hours: f64, shift_hours: f64, weekly_limit: f64) -> bool {
    current_hours + shift_hours > weekly_limit
}

pub fn remaining_weekly_hours(current_hours: f64, weekly_limit: f64) -> f64 {
    (weekly_limit - current_hours).max(0.0)
}

fn clamp_daily(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, MAX_DAILY_HOURS)
    } else {
        0.0
    }
}

pub fn step_up(value: f64) -> f64 {
    clamp_daily(value + HOUR_STEP)
}

pub fn step_down(value: f64) -> f64 {
    clamp_daily(value - HOUR_STEP)
}

/// Free-text hour entry, rounded to the nearest half hour and clamped to a day.
pub fn normalize_entry(text: &str) -> f64 {
    let rounded = (parse_hours(text) / HOUR_STEP).round() * HOUR_STEP;
    clamp_daily(rounded)
}

pub fn weekly_summary(timesheet: &Timesheet, policy: &HoursPolicy) -> WeeklySummary {
    let total_hours = timesheet.total_hours();
    let overtime = overtime_hours(total_hours, policy.overtime_threshold);

    WeeklySummary {
        total_hours,
        regular_hours: total_hours - overtime,
        overtime_hours: overtime,
        remaining_hours: remaining_weekly_hours(total_hours, policy.weekly_limit),
        exceeds_limit: total_hours > policy.weekly_limit,
    }
}

pub fn period_total(timesheets: &[Timesheet]) -> f64 {
    timesheets.iter().map(Timesheet::total_hours).sum()
}

/// Hours already committed through shifts that are still going ahead.
pub fn scheduled_hours(shifts: &[Shift]) -> f64 {
    shifts
        .iter()
        .filter(|shift| shift.status != ShiftStatus::Cancelled)
        .map(|shift| resolve_shift_times(&shift.shift_type).duration_hours)
        .sum()
}

/// Whether a staff member may pick up a shift without breaking the weekly
/// cap. There is no override: a shift that would exceed the cap is refused.
pub fn check_self_selection(
    current_hours: f64,
    shift_type: &str,
    policy: &HoursPolicy,
) -> SelfSelection {
    let shift_hours = resolve_shift_times(shift_type).duration_hours;
    let allowed = !would_exceed_weekly_limit(current_hours, shift_hours, policy.weekly_limit);

    if !allowed {
        log::info!(
            "Self-selection refused: {} + {} hours exceeds weekly limit of {}",
            current_hours,
            shift_hours,
            policy.weekly_limit
        );
    }

    SelfSelection {
        allowed,
        shift_hours,
        projected_hours: current_hours + shift_hours,
        remaining_hours: remaining_weekly_hours(current_hours, policy.weekly_limit),
    }
}
