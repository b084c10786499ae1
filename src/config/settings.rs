//! User settings for BudgetPro
//!
//! Starting balances for the simulation, timing of the UI, audit logging,
//! and the optional sign-in account.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::paths::BudgetProPaths;
use crate::error::BudgetProError;
use crate::models::Money;

/// Sign-in account. When both fields are set the login screen checks the
/// password against the hash; otherwise any email/password is accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Argon2 PHC string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
}

impl AuthSettings {
    pub fn is_configured(&self) -> bool {
        self.email.is_some() && self.password_hash.is_some()
    }
}

/// User settings for BudgetPro
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when formatting amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Salary the simulation starts with
    #[serde(default = "default_salary")]
    pub starting_salary: Money,

    /// Credit limit the simulation starts with
    #[serde(default = "default_credit_limit")]
    pub starting_credit_limit: Money,

    /// How long the splash screen stays up (milliseconds)
    #[serde(default = "default_splash_duration_ms")]
    pub splash_duration_ms: u64,

    /// Event loop tick rate (milliseconds)
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Whether ledger changes and sign-ins are written to the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,

    #[serde(default)]
    pub auth: AuthSettings,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_salary() -> Money {
    Money::from_dollars(5000)
}

fn default_credit_limit() -> Money {
    Money::from_dollars(8000)
}

fn default_splash_duration_ms() -> u64 {
    3000
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            starting_salary: default_salary(),
            starting_credit_limit: default_credit_limit(),
            splash_duration_ms: default_splash_duration_ms(),
            tick_rate_ms: default_tick_rate_ms(),
            audit_enabled: default_audit_enabled(),
            auth: AuthSettings::default(),
        }
    }
}

impl Settings {
    pub fn splash_duration(&self) -> Duration {
        Duration::from_millis(self.splash_duration_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(10))
    }

    /// Format an amount with the configured currency symbol
    pub fn format_money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &BudgetProPaths) -> Result<Self, BudgetProError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                BudgetProError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                BudgetProError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgetProPaths) -> Result<(), BudgetProError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            BudgetProError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            BudgetProError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
