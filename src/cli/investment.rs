//! Investment CLI commands
//!
//! Read-only access to the investment catalog.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_investment_details, format_investment_list};
use crate::error::{BudgetProError, BudgetProResult};
use crate::models::{InvestmentId, PurchaseQuote};
use crate::services::InvestmentCatalog;

/// Investment catalog commands
#[derive(Subcommand)]
pub enum InvestmentCommands {
    /// List all available investments
    #[command(alias = "ls")]
    List,

    /// Show details for one investment
    Show {
        /// Investment ID (e.g. 3 or inv-3)
        id: String,
    },

    /// Project the one-year value of a purchase without making it
    Quote {
        /// Investment ID
        id: String,
        /// Amount to invest
        amount: String,
    },
}

/// Handle investment commands
pub fn handle_investment_command(
    settings: &Settings,
    catalog: &dyn InvestmentCatalog,
    cmd: InvestmentCommands,
) -> BudgetProResult<()> {
    let currency = settings.currency_symbol.as_str();

    match cmd {
        InvestmentCommands::List => {
            println!("{}", format_investment_list(catalog.investments(), currency));
        }
        InvestmentCommands::Show { id } => {
            let investment = catalog
                .get(parse_id(&id)?)
                .ok_or_else(|| BudgetProError::investment_not_found(&id))?;
            print!("{}", format_investment_details(investment, currency));
        }
        InvestmentCommands::Quote { id, amount } => {
            let investment = catalog
                .get(parse_id(&id)?)
                .ok_or_else(|| BudgetProError::investment_not_found(&id))?;
            let quote = PurchaseQuote::new(investment, &amount)?;

            println!("Quote for {}", investment.name);
            println!("  Invested:        {}", settings.format_money(quote.amount));
            println!(
                "  Value in 1 year: {}",
                settings.format_money(quote.projected_value)
            );
            println!(
                "  Projected gain:  {}",
                settings.format_money(quote.projected_profit)
            );
        }
    }

    Ok(())
}

fn parse_id(id: &str) -> BudgetProResult<InvestmentId> {
    id.parse()
        .map_err(|_| BudgetProError::investment_not_found(id))
}
