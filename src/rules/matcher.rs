//! Certification matching against the mandatory-document catalog.
//!
//! Type matching is deliberately loose: a certification matches an item when
//! its normalized type or title contains one of the item's type strings, or is
//! contained in one. An empty type or title is contained in every string and
//! therefore matches every item.

use chrono::{DateTime, Duration, Utc};

use crate::models::{Certification, ComplianceResult, ItemStatus, MandatoryItem, mandatory_items};

pub const DEFAULT_EXPIRY_WARNING_DAYS: i64 = 30;

/// Matching rules parameterised by the "expiring soon" window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComplianceRules {
    pub warning_window_days: i64,
}

impl Default for ComplianceRules {
    fn default() -> Self {
        Self {
            warning_window_days: DEFAULT_EXPIRY_WARNING_DAYS,
        }
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

pub fn is_type_match(item: &MandatoryItem, cert: &Certification) -> bool {
    let cert_type = normalize(&cert.cert_type);
    let cert_title = normalize(&cert.title);

    item.type_strings.iter().any(|candidate| {
        let candidate = normalize(candidate);
        cert_type.contains(candidate.as_str())
            || cert_title.contains(candidate.as_str())
            || candidate.contains(cert_type.as_str())
            || candidate.contains(cert_title.as_str())
    })
}

/// Verified, flagged valid and not past its expiry date at `now`.
pub fn is_currently_valid(cert: &Certification, now: DateTime<Utc>) -> bool {
    cert.is_verified() && cert.expiry_date.is_none_or(|expiry| expiry > now)
}

impl ComplianceRules {
    pub fn new(warning_window_days: i64) -> Self {
        Self {
            warning_window_days,
        }
    }

    pub fn warning_deadline(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now + Duration::days(self.warning_window_days)
    }

    fn satisfying<'a>(
        &self,
        item: &'a MandatoryItem,
        certs: &'a [Certification],
        now: DateTime<Utc>,
    ) -> impl Iterator<Item = &'a Certification> + 'a {
        certs
            .iter()
            .filter(move |cert| is_type_match(item, cert) && is_currently_valid(cert, now))
    }

    pub fn is_satisfied(
        &self,
        item: &MandatoryItem,
        certs: &[Certification],
        now: DateTime<Utc>,
    ) -> bool {
        self.satisfying(item, certs, now).next().is_some()
    }

    /// True when the item is satisfied and at least one satisfying
    /// certification expires on or before the warning deadline.
    pub fn is_expiring_soon(
        &self,
        item: &MandatoryItem,
        certs: &[Certification],
        now: DateTime<Utc>,
    ) -> bool {
        let deadline = self.warning_deadline(now);
        self.satisfying(item, certs, now)
            .any(|cert| cert.expiry_date.is_some_and(|expiry| expiry <= deadline))
    }

    pub fn item_status(
        &self,
        item: &MandatoryItem,
        certs: &[Certification],
        now: DateTime<Utc>,
    ) -> ItemStatus {
        if !self.is_satisfied(item, certs, now) {
            ItemStatus::Missing
        } else if self.is_expiring_soon(item, certs, now) {
            ItemStatus::Expiring
        } else {
            ItemStatus::Satisfied
        }
    }

    pub fn compliance_status(
        &self,
        items: &[MandatoryItem],
        certs: &[Certification],
        now: DateTime<Utc>,
    ) -> ComplianceResult {
        let mut result = ComplianceResult::default();

        for item in items {
            match self.item_status(item, certs, now) {
                ItemStatus::Missing => result.missing.push(item.label.to_string()),
                ItemStatus::Expiring => result.expiring.push(item.label.to_string()),
                ItemStatus::Satisfied => {}
            }
        }

        log::debug!(
            "Compliance evaluated over {} certifications: {} missing, {} expiring",
            certs.len(),
            result.missing.len(),
            result.expiring.len()
        );

        result
    }

    /// No catalog item is missing. Expiring items still count as compliant.
    pub fn is_fully_compliant(&self, certs: &[Certification], now: DateTime<Utc>) -> bool {
        mandatory_items()
            .iter()
            .all(|item| self.is_satisfied(item, certs, now))
    }
}

pub fn is_satisfied(item: &MandatoryItem, certs: &[Certification], now: DateTime<Utc>) -> bool {
    ComplianceRules::default().is_satisfied(item, certs, now)
}

pub fn is_expiring_soon(
    item: &MandatoryItem,
    certs: &[Certification],
    now: DateTime<Utc>,
) -> bool {
    ComplianceRules::default().is_expiring_soon(item, certs, now)
}

pub fn compliance_status(
    items: &[MandatoryItem],
    certs: &[Certification],
    now: DateTime<Utc>,
) -> ComplianceResult {
    ComplianceRules::default().compliance_status(items, certs, now)
}
