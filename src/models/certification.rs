use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::macros::string_enum;

/// A compliance document held by a staff member, already normalized at the
/// ingestion boundary (see `crate::ingest`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub id: Uuid,
    /// Free-text category code such as `dbs_check`. Casing and spacing vary.
    #[serde(rename = "type")]
    pub cert_type: String,
    pub title: String,
    pub verification_status: VerificationStatus,
    /// Stored independently of `verification_status`; the two can disagree.
    pub is_valid: bool,
    pub expiry_date: Option<DateTime<Utc>>,
}

impl Certification {
    /// A freshly uploaded document: pending and not yet valid.
    pub fn uploaded(cert_type: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            cert_type: cert_type.into(),
            title: title.into(),
            verification_status: VerificationStatus::Pending,
            is_valid: false,
            expiry_date: None,
        }
    }

    pub fn with_expiry(mut self, expiry_date: DateTime<Utc>) -> Self {
        self.expiry_date = Some(expiry_date);
        self
    }

    pub fn is_verified(&self) -> bool {
        self.verification_status == VerificationStatus::Verified && self.is_valid
    }
}

string_enum! {
    #[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
    pub enum VerificationStatus {
        #[default]
        Pending => "pending",
        Verified => "verified",
        Rejected => "rejected",
    }
}
