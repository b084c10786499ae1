//! Custom error types for BudgetPro
//!
//! Validation failures and invalid navigation states are recoverable and
//! carried by their own enums; `BudgetProError` wraps them together with the
//! I/O and configuration failures of the application shell.

use thiserror::Error;

use crate::models::{InvestmentId, Money};

/// Rejected user input. The mutation that produced it is always a no-op.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Expense category was empty or blank
    #[error("Category cannot be empty")]
    EmptyCategory,

    /// Amount text is not a plain decimal number
    #[error("Invalid amount: '{0}'")]
    InvalidAmount(String),

    /// Amount parsed but is zero or negative
    #[error("Amount must be greater than zero (got {0})")]
    NonPositiveAmount(Money),

    /// Credit bill payment larger than what is owed
    #[error("Payment of {requested} exceeds outstanding credit of {outstanding}")]
    ExceedsOutstanding { requested: Money, outstanding: Money },

    /// Investment amount outside the product's range
    #[error("Amount {amount} is outside the allowed range {min} - {max}")]
    OutOfRange { amount: Money, min: Money, max: Money },

    /// Accepting the amount would push a ledger total past `LedgerState::MAX_TOTAL`
    #[error("Amount {0} is too large for this ledger")]
    TooLarge(Money),

    /// A required form field was left empty
    #[error("{0} is required")]
    MissingField(&'static str),

    /// New password and its confirmation differ
    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// A screen was reached without the data it renders from
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidStateError {
    #[error("No investment selected for {screen}")]
    NoInvestmentSelected { screen: &'static str },

    #[error("Investment not found: {0}")]
    InvestmentNotFound(InvestmentId),
}

/// The main error type for BudgetPro operations
#[derive(Error, Debug)]
pub enum BudgetProError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Rejected input
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Navigation reached a screen without its data
    #[error("Invalid state: {0}")]
    InvalidState(#[from] InvalidStateError),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Credential hashing or verification errors
    #[error("Authentication error: {0}")]
    Auth(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl BudgetProError {
    /// Create a "not found" error for investments
    pub fn investment_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Investment",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::InvalidState(InvalidStateError::InvestmentNotFound(_))
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for BudgetProError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetProError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for BudgetPro operations
pub type BudgetProResult<T> = Result<T, BudgetProError>;
