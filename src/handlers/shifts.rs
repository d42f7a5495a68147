use actix_web::{HttpResponse, web};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::handlers::shared::ApiResponse;
use crate::ingest::RawShift;
use crate::models::{Shift, ShiftKind};
use crate::rules::hours::scheduled_hours;
use crate::rules::shift_times::{
    classify_shift_type, estimated_shift_cost, overlapping_pairs, resolve_shift_times,
    shift_window,
};

#[derive(Debug, Deserialize)]
pub struct ClassifyQuery {
    #[serde(default)]
    pub start: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyResponse {
    pub shift_type: ShiftKind,
}

#[derive(Debug, Deserialize)]
pub struct ShiftPlanRequest {
    #[serde(default)]
    pub shifts: Vec<RawShift>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedShift {
    pub id: Uuid,
    pub shift_type: String,
    pub starts_at: NaiveDateTime,
    pub ends_at: NaiveDateTime,
    pub duration_hours: f64,
    pub estimated_cost: f64,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftPlanResponse {
    pub shifts: Vec<PlannedShift>,
    pub scheduled_hours: f64,
    pub overlaps: Vec<(Uuid, Uuid)>,
}

/// Canonical start, end and duration for a shift-type label
pub async fn get_shift_times(path: web::Path<String>) -> Result<HttpResponse, AppError> {
    Ok(ApiResponse::ok(resolve_shift_times(&path.into_inner())))
}

pub async fn classify_start_time(
    query: web::Query<ClassifyQuery>,
) -> Result<HttpResponse, AppError> {
    Ok(ApiResponse::ok(ClassifyResponse {
        shift_type: classify_shift_type(&query.start),
    }))
}

/// Windows, costs and double bookings for one staff member's shifts
pub async fn plan_shifts(input: web::Json<ShiftPlanRequest>) -> Result<HttpResponse, AppError> {
    let shifts = input
        .into_inner()
        .shifts
        .into_iter()
        .map(RawShift::into_domain)
        .collect::<Result<Vec<Shift>, _>>()?;

    let planned = shifts
        .iter()
        .map(|shift| {
            let (starts_at, ends_at) = shift_window(&shift.shift_type, shift.date);
            PlannedShift {
                id: shift.id,
                shift_type: shift.shift_type.clone(),
                starts_at,
                ends_at,
                duration_hours: resolve_shift_times(&shift.shift_type).duration_hours,
                estimated_cost: estimated_shift_cost(shift),
            }
        })
        .collect();

    let overlaps = overlapping_pairs(&shifts);

    if !overlaps.is_empty() {
        log::warn!("Shift plan contains {} overlapping pair(s)", overlaps.len());
    }

    Ok(ApiResponse::ok(ShiftPlanResponse {
        shifts: planned,
        scheduled_hours: scheduled_hours(&shifts),
        overlaps,
    }))
}
