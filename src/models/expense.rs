//! Expense model
//!
//! A single spending entry paid either from salary or on the credit card.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;

/// How an expense was paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Salary,
    Credit,
}

impl PaymentMethod {
    /// Parse payment method from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "salary" | "s" | "cash" => Some(Self::Salary),
            "credit" | "c" | "card" | "credit_card" => Some(Self::Credit),
            _ => None,
        }
    }

    /// The other payment method
    pub fn toggled(self) -> Self {
        match self {
            Self::Salary => Self::Credit,
            Self::Credit => Self::Salary,
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Salary => write!(f, "Salary"),
            Self::Credit => write!(f, "Credit Card"),
        }
    }
}

/// Cosmetic icon shown next to an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseIcon {
    Coffee,
    Car,
    Home,
    Shopping,
    Smartphone,
}

impl ExpenseIcon {
    /// Every icon, in a fixed order
    pub const ALL: [ExpenseIcon; 5] = [
        Self::Coffee,
        Self::Car,
        Self::Home,
        Self::Shopping,
        Self::Smartphone,
    ];

    /// Terminal glyph for this icon
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Coffee => "☕",
            Self::Car => "🚗",
            Self::Home => "🏠",
            Self::Shopping => "🛍",
            Self::Smartphone => "📱",
        }
    }
}

impl fmt::Display for ExpenseIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Coffee => write!(f, "coffee"),
            Self::Car => write!(f, "car"),
            Self::Home => write!(f, "home"),
            Self::Shopping => write!(f, "shopping"),
            Self::Smartphone => write!(f, "smartphone"),
        }
    }
}

/// A recorded expense. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Free-text category label (e.g., "Groceries")
    pub category: String,

    /// Amount spent, always positive
    pub amount: Money,

    /// Display icon
    pub icon: ExpenseIcon,

    /// Where the money came from
    pub payment_method: PaymentMethod,

    /// When the expense was recorded
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense with a fresh ID
    pub fn new(
        category: impl Into<String>,
        amount: Money,
        payment_method: PaymentMethod,
        icon: ExpenseIcon,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            category: category.into(),
            amount,
            icon,
            payment_method,
            created_at: Utc::now(),
        }
    }

    pub fn is_credit(&self) -> bool {
        self.payment_method == PaymentMethod::Credit
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.category, self.amount, self.payment_method)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_method_parse() {
        assert_eq!(PaymentMethod::parse("salary"), Some(PaymentMethod::Salary));
        assert_eq!(PaymentMethod::parse("Credit"), Some(PaymentMethod::Credit));
        assert_eq!(PaymentMethod::parse("card"), Some(PaymentMethod::Credit));
        assert_eq!(PaymentMethod::parse("bitcoin"), None);
    }

    #[test]
    fn test_payment_method_toggle() {
        assert_eq!(PaymentMethod::Salary.toggled(), PaymentMethod::Credit);
        assert_eq!(PaymentMethod::Credit.toggled(), PaymentMethod::Salary);
    }

    #[test]
    fn test_expense_serialization() {
        let expense = Expense::new(
            "Café",
            Money::from_dollars(50),
            PaymentMethod::Salary,
            ExpenseIcon::Coffee,
        );
        let json = serde_json::to_value(&expense).unwrap();
        assert_eq!(json["payment_method"], "salary");
        assert_eq!(json["icon"], "coffee");
        assert_eq!(json["amount"], 5000);
    }
}
