//! BudgetPro - Terminal personal-finance simulator
//!
//! This library provides the core of BudgetPro, a single-session demo that
//! tracks spending from a monthly salary against spending on a credit card,
//! warns when funds run low, and lets the user browse and "buy" mock
//! investment products. Nothing but settings and the audit log is persisted.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Settings and path management
//! - `error`: Custom error types
//! - `models`: Money, expenses, investments and the ledger state
//! - `services`: Screen navigator, ledger, metrics, catalog and sign-in
//! - `audit`: Audit logging system
//! - `display`: Text and table formatting for the CLI
//! - `cli`: Command handlers
//! - `tui`: Full-screen terminal interface
//!
//! # Example
//!
//! ```rust
//! use budgetpro::models::{Money, PaymentMethod};
//! use budgetpro::services::LedgerService;
//!
//! let mut ledger = LedgerService::new(Money::from_dollars(5000), Money::from_dollars(8000));
//! ledger.add_expense("Groceries", "150.00", PaymentMethod::Salary).unwrap();
//!
//! let metrics = ledger.metrics();
//! assert_eq!(metrics.remaining_salary, Money::from_dollars(4850));
//! assert!(!metrics.is_low_funds);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod tui;

pub use error::{BudgetProError, BudgetProResult};
