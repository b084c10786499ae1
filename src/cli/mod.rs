//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod audit;
pub mod auth;
pub mod investment;
pub mod simulate;

pub use audit::handle_audit_command;
pub use auth::{handle_auth_command, AuthCommands};
pub use investment::{handle_investment_command, InvestmentCommands};
pub use simulate::{handle_simulate_command, parse_budget_amount, SimulateArgs};
