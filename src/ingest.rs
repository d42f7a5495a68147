//! Normalization of upstream records into domain types.
//!
//! Upstream data mixes camelCase and snake_case field names, sends numbers as
//! strings and leaves fields null. Everything is reconciled here, once, so the
//! rules engine only ever sees clean domain values.

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::error::IngestError;
use crate::models::{
    Certification, DailyHours, Shift, Timesheet, VerificationStatus, weekday_from_key,
};
use crate::utils::leading_number;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCertification {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default, rename = "type", alias = "certType", alias = "cert_type")]
    pub cert_type: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, alias = "verification_status")]
    pub verification_status: Option<String>,
    #[serde(default, alias = "is_valid")]
    pub is_valid: Option<bool>,
    #[serde(default, alias = "expiry_date")]
    pub expiry_date: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawShift {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default, alias = "shift_type")]
    pub shift_type: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default, alias = "hourly_rate")]
    pub hourly_rate: Option<Value>,
    #[serde(default, alias = "staff_required")]
    pub staff_required: Option<Value>,
    #[serde(default, alias = "assignment_status")]
    pub assignment_status: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTimesheet {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default, alias = "staff_id", alias = "userId", alias = "user_id")]
    pub staff_id: Option<Uuid>,
    #[serde(default, alias = "week_start")]
    pub week_start: Option<String>,
    #[serde(default, alias = "week_end")]
    pub week_end: Option<String>,
    #[serde(default, alias = "daily_hours")]
    pub daily_hours: BTreeMap<String, Value>,
    #[serde(default, alias = "total_hours")]
    pub total_hours: Option<Value>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, alias = "manager_notes")]
    pub manager_notes: Option<String>,
    #[serde(default, alias = "submitted_at")]
    pub submitted_at: Option<DateTime<Utc>>,
    #[serde(default, alias = "reviewed_at")]
    pub reviewed_at: Option<DateTime<Utc>>,
}

fn parse_status<T: FromStr + Default>(record: &str, raw: Option<&str>) -> T {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => T::default(),
        Some(value) => value.parse().unwrap_or_else(|_| {
            log::warn!("{} has unknown status {:?}, using the initial state", record, value);
            T::default()
        }),
    }
}

fn lenient_number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => leading_number(s),
        _ => None,
    }
}

/// Accepts `YYYY-MM-DD` or anything starting with it (timestamps).
fn parse_date(
    record: &'static str,
    field: &'static str,
    raw: Option<&str>,
) -> Result<NaiveDate, IngestError> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(IngestError::MissingField { record, field })?;

    raw.get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
        .ok_or_else(|| IngestError::InvalidValue {
            record,
            field,
            value: raw.to_string(),
        })
}

/// Expiry dates come as RFC 3339 timestamps or plain dates (read as midnight
/// UTC). Blank means no expiry.
pub fn parse_expiry(raw: Option<&str>) -> Result<Option<DateTime<Utc>>, IngestError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Some(timestamp.with_timezone(&Utc)));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(Some(naive.and_utc()));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| Some(midnight.and_utc()))
        .ok_or_else(|| IngestError::InvalidValue {
            record: "certification",
            field: "expiryDate",
            value: raw.to_string(),
        })
}

impl RawCertification {
    pub fn into_domain(self) -> Result<Certification, IngestError> {
        let expiry_date = parse_expiry(self.expiry_date.as_deref())?;
        let verification_status: VerificationStatus =
            parse_status("certification", self.verification_status.as_deref());

        Ok(Certification {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            cert_type: self.cert_type.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            verification_status,
            is_valid: self.is_valid.unwrap_or(false),
            expiry_date,
        })
    }
}

/// Normalizes a staff member's certifications for compliance checks. A record
/// whose expiry cannot be read is treated as expired, so it is left out: it
/// could neither satisfy an item nor count as expiring.
pub fn certifications(raw: Vec<RawCertification>) -> Vec<Certification> {
    raw.into_iter()
        .filter_map(|record| match record.into_domain() {
            Ok(cert) => Some(cert),
            Err(err) => {
                log::warn!("{}, treating certification as expired", err);
                None
            }
        })
        .collect()
}

impl RawShift {
    pub fn into_domain(self) -> Result<Shift, IngestError> {
        let date = parse_date("shift", "date", self.date.as_deref())?;
        let staff_required = lenient_number(self.staff_required.as_ref())
            .filter(|n| *n >= 0.0)
            .map_or(1, |n| n.round() as u32);

        Ok(Shift {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            shift_type: self.shift_type.unwrap_or_default(),
            date,
            hourly_rate: lenient_number(self.hourly_rate.as_ref()).unwrap_or(0.0),
            staff_required,
            assignment_status: parse_status("shift", self.assignment_status.as_deref()),
            status: parse_status("shift", self.status.as_deref()),
        })
    }
}

impl RawTimesheet {
    pub fn into_domain(self) -> Result<Timesheet, IngestError> {
        let staff_id = self.staff_id.ok_or(IngestError::MissingField {
            record: "timesheet",
            field: "staffId",
        })?;
        let week_start = parse_date("timesheet", "weekStart", self.week_start.as_deref())?;
        let week_end = match self.week_end.as_deref() {
            Some(raw) if !raw.trim().is_empty() => {
                parse_date("timesheet", "weekEnd", Some(raw))?
            }
            _ => week_start + chrono::Days::new(6),
        };

        let mut daily_hours = DailyHours::default();
        for (key, value) in &self.daily_hours {
            let Some(day) = weekday_from_key(key) else {
                log::warn!("Ignoring unknown weekday key {:?} in timesheet", key);
                continue;
            };
            let entry = match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Null => String::new(),
                other => {
                    log::warn!("Ignoring non-numeric hours {} for {}", other, key);
                    String::new()
                }
            };
            daily_hours.set(day, entry);
        }

        let timesheet = Timesheet {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            staff_id,
            week_start,
            week_end,
            daily_hours,
            status: parse_status("timesheet", self.status.as_deref()),
            manager_notes: self.manager_notes,
            submitted_at: self.submitted_at,
            reviewed_at: self.reviewed_at,
        };

        if let Some(reported) = lenient_number(self.total_hours.as_ref()) {
            let computed = timesheet.total_hours();
            if reported != 0.0 && (reported - computed).abs() > f64::EPSILON {
                log::warn!(
                    "Timesheet {} reported {} hours but its daily entries add up to {}; using the daily entries",
                    timesheet.id,
                    reported,
                    computed
                );
            }
        }

        Ok(timesheet)
    }
}
