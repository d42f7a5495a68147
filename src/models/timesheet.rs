use chrono::{DateTime, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::macros::string_enum;
use crate::rules::hours;

/// One week of hours for one staff member. The weekly total is always derived
/// from `daily_hours` and never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Timesheet {
    pub id: Uuid,
    pub staff_id: Uuid,
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub daily_hours: DailyHours,
    pub status: TimesheetStatus,
    pub manager_notes: Option<String>,
    pub submitted_at: Option<DateTime<Utc>>,
    pub reviewed_at: Option<DateTime<Utc>>,
}

impl Timesheet {
    pub fn new_draft(staff_id: Uuid, week_start: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            staff_id,
            week_start,
            week_end: week_start + chrono::Days::new(6),
            daily_hours: DailyHours::default(),
            status: TimesheetStatus::Draft,
            manager_notes: None,
            submitted_at: None,
            reviewed_at: None,
        }
    }

    pub fn total_hours(&self) -> f64 {
        hours::total_weekly_hours(&self.daily_hours)
    }
}

string_enum! {
    #[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
    pub enum TimesheetStatus {
        #[default]
        Draft => "draft",
        PendingManagerApproval => "pending_manager_approval",
        Approved => "approved",
        Rejected => "rejected",
    }
}

impl TimesheetStatus {
    /// Staff may only change hours while the sheet is a draft or was sent back.
    pub fn is_staff_editable(&self) -> bool {
        matches!(self, TimesheetStatus::Draft | TimesheetStatus::Rejected)
    }
}

/// Raw hour entries keyed by lowercase English weekday. Values are kept as the
/// strings the staff member typed; parsing happens in `rules::hours`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DailyHours {
    pub monday: String,
    pub tuesday: String,
    pub wednesday: String,
    pub thursday: String,
    pub friday: String,
    pub saturday: String,
    pub sunday: String,
}

impl DailyHours {
    pub fn get(&self, day: Weekday) -> &str {
        match day {
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
            Weekday::Sun => &self.sunday,
        }
    }

    pub fn set(&mut self, day: Weekday, value: impl Into<String>) {
        let slot = match day {
            Weekday::Mon => &mut self.monday,
            Weekday::Tue => &mut self.tuesday,
            Weekday::Wed => &mut self.wednesday,
            Weekday::Thu => &mut self.thursday,
            Weekday::Fri => &mut self.friday,
            Weekday::Sat => &mut self.saturday,
            Weekday::Sun => &mut self.sunday,
        };
        *slot = value.into();
    }

    pub fn values(&self) -> [&str; 7] {
        [
            &self.monday,
            &self.tuesday,
            &self.wednesday,
            &self.thursday,
            &self.friday,
            &self.saturday,
            &self.sunday,
        ]
    }
}

/// Parses a lowercase English weekday name as used for `dailyHours` keys.
pub fn weekday_from_key(key: &str) -> Option<Weekday> {
    match key.trim().to_lowercase().as_str() {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

string_enum! {
    #[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
    pub enum TimesheetAction {
        Submit => "submit",
        Approve => "approve",
        Reject => "reject",
    }
}
