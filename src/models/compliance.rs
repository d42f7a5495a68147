use serde::{Deserialize, Serialize};

use super::macros::string_enum;

/// Derived on every request and never stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceResult {
    pub missing: Vec<String>,
    pub expiring: Vec<String>,
}

impl ComplianceResult {
    pub fn is_compliant(&self) -> bool {
        self.missing.is_empty()
    }
}

string_enum! {
    #[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
    pub enum ItemStatus {
        Missing => "missing",
        Expiring => "expiring",
        Satisfied => "satisfied",
    }
}
