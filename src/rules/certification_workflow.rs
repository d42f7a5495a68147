use crate::error::WorkflowError;
use crate::models::{Certification, VerificationStatus};

/// Admin-initiated verification change. `is_valid` follows the new status so
/// the two fields agree after every transition. Expiry never changes status.
pub fn transition_verification(
    mut cert: Certification,
    to: VerificationStatus,
) -> Result<Certification, WorkflowError> {
    use VerificationStatus::*;

    let is_valid = match (cert.verification_status, to) {
        (Pending, Verified) => true,
        (Pending, Rejected) | (Verified, Pending) => false,
        (from, to) => {
            return Err(WorkflowError::InvalidTransition {
                entity: "certification",
                from: from.to_string(),
                to: to.to_string(),
            });
        }
    };

    log::info!(
        "Certification {} ({}) moved from {} to {}",
        cert.id,
        cert.cert_type,
        cert.verification_status,
        to
    );

    cert.verification_status = to;
    cert.is_valid = is_valid;
    Ok(cert)
}
