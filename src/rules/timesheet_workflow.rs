//! Timesheet approval state machine.
//!
//! ```text
//! draft --submit--> pending_manager_approval --approve--> approved
//!                     |               ^
//!                   reject          submit
//!                     v               |
//!                   rejected ---------+
//! ```
//!
//! Resubmitting a rejected sheet moves the same sheet back to pending; no new
//! timesheet is created.

use chrono::{DateTime, Utc, Weekday};

use crate::error::WorkflowError;
use crate::models::{Timesheet, TimesheetAction, TimesheetStatus};
use crate::rules::hours::normalize_entry;

pub fn next_status(
    current: TimesheetStatus,
    action: TimesheetAction,
) -> Result<TimesheetStatus, WorkflowError> {
    use TimesheetAction::*;
    use TimesheetStatus::*;

    match (current, action) {
        (Draft | Rejected, Submit) => Ok(PendingManagerApproval),
        (PendingManagerApproval, Approve) => Ok(Approved),
        (PendingManagerApproval, Reject) => Ok(Rejected),
        (from, action) => Err(WorkflowError::InvalidTransition {
            entity: "timesheet",
            from: from.to_string(),
            to: action.to_string(),
        }),
    }
}

/// Applies `action` to the timesheet. Manager notes are kept on approve and
/// reject and cleared on resubmission.
pub fn apply(
    mut timesheet: Timesheet,
    action: TimesheetAction,
    notes: Option<String>,
    now: DateTime<Utc>,
) -> Result<Timesheet, WorkflowError> {
    let next = next_status(timesheet.status, action)?;

    match action {
        TimesheetAction::Submit => {
            timesheet.submitted_at = Some(now);
            timesheet.reviewed_at = None;
            timesheet.manager_notes = None;
        }
        TimesheetAction::Approve | TimesheetAction::Reject => {
            timesheet.reviewed_at = Some(now);
            timesheet.manager_notes = notes.filter(|n| !n.trim().is_empty());
        }
    }

    log::info!(
        "Timesheet {} moved from {} to {}",
        timesheet.id,
        timesheet.status,
        next
    );
    timesheet.status = next;

    Ok(timesheet)
}

/// Records a staff hour entry for one day, snapped to the half-hour grid.
pub fn set_daily_hours(
    timesheet: &mut Timesheet,
    day: Weekday,
    entry: &str,
) -> Result<f64, WorkflowError> {
    if !timesheet.status.is_staff_editable() {
        return Err(WorkflowError::NotEditable(timesheet.status));
    }

    let hours = normalize_entry(entry);
    timesheet.daily_hours.set(day, hours.to_string());
    Ok(hours)
}
