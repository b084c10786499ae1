//! Core data models for BudgetPro
//!
//! Money, expenses, the ledger state, and the investment catalog entries.

pub mod expense;
pub mod ids;
pub mod investment;
pub mod ledger;
pub mod money;

pub use expense::{Expense, ExpenseIcon, PaymentMethod};
pub use ids::{ExpenseId, InvestmentId};
pub use investment::{HistoricalPoint, Investment, InvestmentStatus, PurchaseQuote, RiskLevel};
pub use ledger::LedgerState;
pub use money::Money;
