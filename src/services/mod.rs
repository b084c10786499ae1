//! Business logic layer for BudgetPro
//!
//! The services sit between the models and the user interfaces: the
//! navigator drives screen changes, the ledger service applies validated
//! mutations, metrics are derived on demand, and the catalog and
//! authenticator are pluggable collaborators.

pub mod auth;
pub mod catalog;
pub mod ledger;
pub mod metrics;
pub mod navigator;

pub use auth::{authenticator_from_settings, Authenticator, Credentials, DemoAuthenticator};
pub use catalog::{InvestmentCatalog, StaticCatalog};
pub use ledger::{CyclingIconPicker, IconPicker, LedgerService, RandomIconPicker};
pub use metrics::{DerivedMetrics, UsagePair};
pub use navigator::{NavEvent, Navigator, Screen, SplashTimer, DEFAULT_SPLASH_DELAY};
