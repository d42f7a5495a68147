use actix_web::{HttpResponse, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::error::AppError;
use crate::handlers::shared::{ApiResponse, evaluation_time};
use crate::ingest::{self, RawCertification};
use crate::models::{ItemStatus, find_mandatory_item, mandatory_items};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceRequest {
    #[serde(default)]
    pub certifications: Vec<RawCertification>,
    #[serde(default, alias = "as_of")]
    pub as_of: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemCheckResponse {
    pub key: String,
    pub label: String,
    pub satisfied: bool,
    pub expiring: bool,
    pub status: ItemStatus,
}

/// List the mandatory document catalog
pub async fn get_mandatory_items() -> Result<HttpResponse, AppError> {
    Ok(ApiResponse::ok(mandatory_items()))
}

/// Missing and expiring-soon items for one staff member's certifications
pub async fn get_compliance_status(
    state: web::Data<AppState>,
    input: web::Json<ComplianceRequest>,
) -> Result<HttpResponse, AppError> {
    let request = input.into_inner();
    let now = evaluation_time(request.as_of);
    let certs = ingest::certifications(request.certifications);

    let result = state
        .compliance_rules
        .compliance_status(mandatory_items(), &certs, now);

    Ok(ApiResponse::ok(result))
}

pub async fn check_mandatory_item(
    state: web::Data<AppState>,
    path: web::Path<String>,
    input: web::Json<ComplianceRequest>,
) -> Result<HttpResponse, AppError> {
    let key = path.into_inner();
    let item = find_mandatory_item(&key)
        .ok_or_else(|| AppError::NotFound(format!("Mandatory item '{}' not found", key)))?;

    let request = input.into_inner();
    let now = evaluation_time(request.as_of);
    let certs = ingest::certifications(request.certifications);
    let rules = &state.compliance_rules;

    Ok(ApiResponse::ok(ItemCheckResponse {
        key: item.key.to_string(),
        label: item.label.to_string(),
        satisfied: rules.is_satisfied(item, &certs, now),
        expiring: rules.is_expiring_soon(item, &certs, now),
        status: rules.item_status(item, &certs, now),
    }))
}
