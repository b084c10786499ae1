//! Modal dialogs for the TUI

pub mod expense;
pub mod help;
pub mod payment;
