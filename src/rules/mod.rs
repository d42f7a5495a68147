//! The compliance and scheduling rules engine. Everything in here is a pure
//! function of its arguments; callers pass the current instant explicitly.

pub mod certification_workflow;
pub mod hours;
pub mod matcher;
pub mod shift_times;
pub mod timesheet_workflow;

pub use hours::{HoursPolicy, SelfSelection, WeeklySummary};
pub use matcher::ComplianceRules;
pub use shift_times::ShiftTimes;
