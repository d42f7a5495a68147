use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::error::AppError;
use crate::handlers::shared::ApiResponse;
use crate::ingest::RawTimesheet;
use crate::models::Timesheet;
use crate::rules::hours::{
    check_self_selection, normalize_entry, period_total, step_down, step_up, weekly_summary,
};

#[derive(Debug, Deserialize)]
pub struct SummaryRequest {
    pub timesheet: RawTimesheet,
}

#[derive(Debug, Deserialize)]
pub struct PeriodRequest {
    #[serde(default)]
    pub timesheets: Vec<RawTimesheet>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodResponse {
    pub weeks: usize,
    pub total_hours: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelfSelectionRequest {
    #[serde(alias = "current_hours")]
    pub current_hours: f64,
    #[serde(alias = "shift_type")]
    pub shift_type: String,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StepDirection {
    Up,
    Down,
    Set,
}

#[derive(Debug, Deserialize)]
pub struct StepRequest {
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub text: Option<String>,
    pub direction: StepDirection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StepResponse {
    pub value: f64,
}

/// Weekly totals, overtime and remaining allowance for a timesheet
pub async fn get_weekly_summary(
    state: web::Data<AppState>,
    input: web::Json<SummaryRequest>,
) -> Result<HttpResponse, AppError> {
    let timesheet = input.into_inner().timesheet.into_domain()?;
    Ok(ApiResponse::ok(weekly_summary(&timesheet, &state.hours_policy)))
}

pub async fn get_period_total(input: web::Json<PeriodRequest>) -> Result<HttpResponse, AppError> {
    let timesheets = input
        .into_inner()
        .timesheets
        .into_iter()
        .map(RawTimesheet::into_domain)
        .collect::<Result<Vec<Timesheet>, _>>()?;

    Ok(ApiResponse::ok(PeriodResponse {
        weeks: timesheets.len(),
        total_hours: period_total(&timesheets),
    }))
}

/// Whether picking up a shift keeps the staff member within the weekly cap
pub async fn check_shift_self_selection(
    state: web::Data<AppState>,
    input: web::Json<SelfSelectionRequest>,
) -> Result<HttpResponse, AppError> {
    if !input.current_hours.is_finite() || input.current_hours < 0.0 {
        return Err(AppError::BadRequest(
            "currentHours must be a non-negative number".to_string(),
        ));
    }

    let decision = check_self_selection(input.current_hours, &input.shift_type, &state.hours_policy);
    Ok(ApiResponse::ok(decision))
}

/// Hour-entry widget arithmetic: half-hour steps clamped to one day
pub async fn step_hours(input: web::Json<StepRequest>) -> Result<HttpResponse, AppError> {
    let value = match input.direction {
        StepDirection::Up => step_up(input.value),
        StepDirection::Down => step_down(input.value),
        StepDirection::Set => normalize_entry(input.text.as_deref().unwrap_or_default()),
    };

    Ok(ApiResponse::ok(StepResponse { value }))
}
