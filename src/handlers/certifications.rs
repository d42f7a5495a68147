use actix_web::HttpResponse;
use actix_web::web;
use serde::Deserialize;

use crate::error::AppError;
use crate::handlers::shared::ApiResponse;
use crate::ingest::RawCertification;
use crate::models::VerificationStatus;
use crate::rules::certification_workflow::transition_verification;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationRequest {
    pub certification: RawCertification,
    pub status: VerificationStatus,
}

/// Admin verification decision on an uploaded document
pub async fn update_verification_status(
    input: web::Json<VerificationRequest>,
) -> Result<HttpResponse, AppError> {
    let request = input.into_inner();
    let certification = request.certification.into_domain()?;
    let certification = transition_verification(certification, request.status)?;

    let message = format!("Certification is now {}", certification.verification_status);
    Ok(HttpResponse::Ok().json(ApiResponse::success_with_message(
        certification,
        &message,
    )))
}
