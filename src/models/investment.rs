//! Investment catalog model
//!
//! Investments are read-only products supplied by a catalog. The purchase
//! fields exist on the type but are never filled in by this application.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::InvestmentId;
use super::money::Money;
use crate::error::ValidationError;

/// Risk tier of an investment product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
        }
    }
}

/// Lifecycle of an investment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InvestmentStatus {
    #[default]
    Available,
    Purchased,
    Completed,
}

impl fmt::Display for InvestmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => write!(f, "Available"),
            Self::Purchased => write!(f, "Purchased"),
            Self::Completed => write!(f, "Completed"),
        }
    }
}

/// One point of an investment's performance history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPoint {
    /// Period label (e.g., "Jan")
    pub period: String,
    /// Index value for the period
    pub value: f64,
}

impl HistoricalPoint {
    pub fn new(period: impl Into<String>, value: f64) -> Self {
        Self {
            period: period.into(),
            value,
        }
    }
}

/// A catalog investment product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Investment {
    pub id: InvestmentId,

    pub name: String,

    /// Product type label (e.g., "Bond Fund")
    #[serde(rename = "type")]
    pub kind: String,

    pub description: String,

    pub risk_level: RiskLevel,

    /// Expected yearly return in percent
    pub expected_return: f64,

    pub min_investment: Money,

    pub max_investment: Money,

    /// Performance history, oldest first
    pub historical_data: Vec<HistoricalPoint>,

    #[serde(default)]
    pub status: InvestmentStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_amount: Option<Money>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_value: Option<Money>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profit_loss: Option<Money>,
}

impl Investment {
    /// Whether an amount falls inside the product's investment range
    pub fn accepts(&self, amount: Money) -> bool {
        amount >= self.min_investment && amount <= self.max_investment
    }

    /// Change between the first and last historical values, in percent
    pub fn historical_change(&self) -> Option<f64> {
        let first = self.historical_data.first()?.value;
        let last = self.historical_data.last()?.value;
        if first == 0.0 {
            return None;
        }
        Some((last - first) / first * 100.0)
    }
}

/// A validated purchase amount together with its projected outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurchaseQuote {
    pub investment_id: InvestmentId,
    pub amount: Money,
    pub projected_value: Money,
    pub projected_profit: Money,
}

impl PurchaseQuote {
    /// Validate `amount_text` against the investment's range and project
    /// one year at the expected return.
    pub fn new(investment: &Investment, amount_text: &str) -> Result<Self, ValidationError> {
        let amount = Money::parse(amount_text)
            .map_err(|_| ValidationError::InvalidAmount(amount_text.to_string()))?;

        if !amount.is_positive() {
            return Err(ValidationError::NonPositiveAmount(amount));
        }

        if !investment.accepts(amount) {
            return Err(ValidationError::OutOfRange {
                amount,
                min: investment.min_investment,
                max: investment.max_investment,
            });
        }

        let profit_cents = (amount.cents() as f64 * investment.expected_return / 100.0).round();
        let projected_profit = Money::from_cents(profit_cents as i64);

        Ok(Self {
            investment_id: investment.id,
            amount,
            projected_value: amount + projected_profit,
            projected_profit,
        })
    }
}
