pub mod config;
pub mod error;
pub mod handlers;
pub mod ingest;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod rules;
pub mod utils;

pub use config::Config;
pub use error::AppError;
pub use rules::{ComplianceRules, HoursPolicy};

pub struct AppState {
    pub config: Config,
    pub compliance_rules: ComplianceRules,
    pub hours_policy: HoursPolicy,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            compliance_rules: config.compliance_rules(),
            hours_policy: config.hours_policy(),
            config,
        }
    }
}
