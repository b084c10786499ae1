//! Configuration module for BudgetPro
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::BudgetProPaths;
pub use settings::{AuthSettings, Settings};
