//! Canonical shift windows and start-time classification.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use uuid::Uuid;

use crate::models::{Shift, ShiftKind, ShiftStatus};
use crate::utils::{hhmm, leading_number};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShiftTimes {
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    #[serde(with = "hhmm")]
    pub end: NaiveTime,
    pub duration_hours: f64,
}

fn window(start_hour: u32, end_hour: u32, duration_hours: f64) -> ShiftTimes {
    ShiftTimes {
        start: NaiveTime::from_hms_opt(start_hour, 0, 0).unwrap_or_default(),
        end: NaiveTime::from_hms_opt(end_hour, 0, 0).unwrap_or_default(),
        duration_hours,
    }
}

/// Looks up the canonical window for a shift-type label. Labels other than
/// `day`, `evening` and `night` get the 8 hour midnight fallback.
pub fn resolve_shift_times(shift_type: &str) -> ShiftTimes {
    match shift_type {
        "day" => window(7, 19, 12.0),
        // evening and night share one window in the current rota
        "evening" => window(19, 7, 12.0),
        "night" => window(19, 7, 12.0),
        other => {
            log::debug!("Unrecognized shift type {:?}, using fallback window", other);
            window(0, 0, 8.0)
        }
    }
}

/// Classifies a `"HH:MM"` start time by its leading hour digits, so `"9am"` and
/// `"08h30"` read as 9 and 8. Empty input is a day shift; an hour that cannot
/// be read is treated as night.
pub fn classify_shift_type(start_time: &str) -> ShiftKind {
    let start_time = start_time.trim();
    if start_time.is_empty() {
        return ShiftKind::Day;
    }

    let hour = start_time
        .split(':')
        .next()
        .and_then(|h| leading_number(h.trim()))
        .map(f64::trunc);

    match hour {
        Some(h) if (7.0..19.0).contains(&h) => ShiftKind::Day,
        Some(h) if (19.0..23.0).contains(&h) => ShiftKind::Evening,
        _ => ShiftKind::Night,
    }
}

/// Start and end of a shift on `date`. The end is start plus duration, so
/// overnight windows finish on the following day.
pub fn shift_window(shift_type: &str, date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let times = resolve_shift_times(shift_type);
    let start = date.and_time(times.start);
    let minutes = (times.duration_hours * 60.0).round() as i64;
    (start, start + Duration::minutes(minutes))
}

pub fn shifts_overlap(a: &Shift, b: &Shift) -> bool {
    let (a_start, a_end) = shift_window(&a.shift_type, a.date);
    let (b_start, b_end) = shift_window(&b.shift_type, b.date);
    a_start < b_end && b_start < a_end
}

/// Double bookings among shifts that are still going ahead, as id pairs in
/// input order. Cancelled shifts never collide.
pub fn overlapping_pairs(shifts: &[Shift]) -> Vec<(Uuid, Uuid)> {
    let active: Vec<&Shift> = shifts
        .iter()
        .filter(|shift| shift.status != ShiftStatus::Cancelled)
        .collect();

    let mut pairs = Vec::new();
    for (i, a) in active.iter().enumerate() {
        for b in &active[i + 1..] {
            if shifts_overlap(a, b) {
                pairs.push((a.id, b.id));
            }
        }
    }
    pairs
}

/// Staffing cost of a shift at its hourly rate, across all required staff.
pub fn estimated_shift_cost(shift: &Shift) -> f64 {
    let hours = resolve_shift_times(&shift.shift_type).duration_hours;
    shift.hourly_rate * hours * f64::from(shift.staff_required)
}
