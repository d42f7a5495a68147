use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::macros::string_enum;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    pub id: Uuid,
    /// Coarse label (`day`, `evening`, `night`) but not restricted to those.
    pub shift_type: String,
    pub date: NaiveDate,
    pub hourly_rate: f64,
    pub staff_required: u32,
    pub assignment_status: AssignmentStatus,
    pub status: ShiftStatus,
}

string_enum! {
    #[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
    pub enum ShiftStatus {
        #[default]
        Open => "open",
        Assigned => "assigned",
        Cancelled => "cancelled",
        Completed => "completed",
    }
}

string_enum! {
    #[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
    pub enum AssignmentStatus {
        #[default]
        Unassigned => "none",
        Assigned => "assigned",
        Accepted => "accepted",
    }
}

string_enum! {
    /// Classification of a shift by its start time.
    #[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
    pub enum ShiftKind {
        Day => "day",
        Evening => "evening",
        Night => "night",
    }
}
