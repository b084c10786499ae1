//! Display formatting for terminal output
//!
//! Plain-text and table renderings of the catalog and the ledger, used by
//! the CLI commands.

pub mod investment;
pub mod summary;

pub use investment::{format_investment_details, format_investment_list};
pub use summary::{format_expense_table, format_ledger_summary};
