use actix_web::{HttpRequest, HttpResponse, web};
use chrono::Utc;
use serde::Deserialize;

use crate::error::AppError;
use crate::handlers::shared::ApiResponse;
use crate::ingest::RawTimesheet;
use crate::middleware::CorrelationIdExt;
use crate::models::{TimesheetAction, weekday_from_key};
use crate::rules::timesheet_workflow;

#[derive(Debug, Deserialize)]
pub struct TransitionRequest {
    pub timesheet: RawTimesheet,
    pub action: TimesheetAction,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EditHoursRequest {
    pub timesheet: RawTimesheet,
    pub day: String,
    pub entry: String,
}

/// Submit, approve or reject a timesheet
pub async fn transition_timesheet(
    input: web::Json<TransitionRequest>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let request = input.into_inner();
    let timesheet = request.timesheet.into_domain()?;

    log::info!(
        "Timesheet {} {} requested correlation_id={}",
        timesheet.id,
        request.action,
        req.correlation_id().unwrap_or_default()
    );

    let updated = timesheet_workflow::apply(timesheet, request.action, request.notes, Utc::now())?;

    Ok(ApiResponse::ok(updated))
}

/// Staff edit of a single day's hours
pub async fn edit_daily_hours(input: web::Json<EditHoursRequest>) -> Result<HttpResponse, AppError> {
    let request = input.into_inner();
    let day = weekday_from_key(&request.day)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown weekday '{}'", request.day)))?;

    let mut timesheet = request.timesheet.into_domain()?;
    timesheet_workflow::set_daily_hours(&mut timesheet, day, &request.entry)?;

    Ok(ApiResponse::ok(timesheet))
}
