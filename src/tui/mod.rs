//! Terminal User Interface module
//!
//! Full-screen BudgetPro client built on ratatui: splash, sign-in forms,
//! the budget dashboard and the investment screens.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
