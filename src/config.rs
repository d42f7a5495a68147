use anyhow::Result;
use std::env;
use std::str::FromStr;

use crate::rules::{ComplianceRules, HoursPolicy};
use crate::rules::hours::{DEFAULT_OVERTIME_THRESHOLD, DEFAULT_WEEKLY_LIMIT};
use crate::rules::matcher::DEFAULT_EXPIRY_WARNING_DAYS;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub client_base_url: String,
    pub weekly_hours_limit: f64,
    pub overtime_threshold: f64,
    pub expiry_warning_days: i64,
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

// Unparseable values fall back to the default rather than failing startup.
fn parsed_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(default)
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Self::from_env_only()
    }

    /// Load configuration from environment variables only (without loading .env files)
    /// This is useful for testing where you want to control the environment directly
    pub fn from_env_only() -> Result<Self> {
        let config = Config {
            host: var_or("HOST", "127.0.0.1"),
            port: parsed_or("PORT", 8080),
            environment: var_or("ENVIRONMENT", "development"),
            client_base_url: var_or("BASE_URL", "http://localhost:3000"),
            weekly_hours_limit: parsed_or("WEEKLY_HOURS_LIMIT", DEFAULT_WEEKLY_LIMIT),
            overtime_threshold: parsed_or("OVERTIME_THRESHOLD", DEFAULT_OVERTIME_THRESHOLD),
            expiry_warning_days: parsed_or("EXPIRY_WARNING_DAYS", DEFAULT_EXPIRY_WARNING_DAYS),
        };

        if config.weekly_hours_limit <= 0.0 || !config.weekly_hours_limit.is_finite() {
            anyhow::bail!(
                "WEEKLY_HOURS_LIMIT must be a positive number, got {}",
                config.weekly_hours_limit
            );
        }
        if config.expiry_warning_days < 0 {
            anyhow::bail!(
                "EXPIRY_WARNING_DAYS must not be negative, got {}",
                config.expiry_warning_days
            );
        }

        Ok(config)
    }

    pub fn test_config() -> Self {
        Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            environment: "test".to_string(),
            client_base_url: "http://localhost:3000".to_string(),
            weekly_hours_limit: DEFAULT_WEEKLY_LIMIT,
            overtime_threshold: DEFAULT_OVERTIME_THRESHOLD,
            expiry_warning_days: DEFAULT_EXPIRY_WARNING_DAYS,
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn hours_policy(&self) -> HoursPolicy {
        HoursPolicy {
            weekly_limit: self.weekly_hours_limit,
            overtime_threshold: self.overtime_threshold,
        }
    }

    pub fn compliance_rules(&self) -> ComplianceRules {
        ComplianceRules::new(self.expiry_warning_days)
    }
}
