//! Non-interactive ledger simulation
//!
//! Replays a list of expenses and credit bill payments against a fresh
//! ledger and prints the resulting metrics.

use clap::Args;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::settings::Settings;
use crate::display::format_ledger_summary;
use crate::error::{BudgetProError, BudgetProResult, ValidationError};
use crate::models::{LedgerState, Money, PaymentMethod};
use crate::services::{CyclingIconPicker, LedgerService};

/// Arguments for `budgetpro simulate`
#[derive(Args, Debug, Default)]
pub struct SimulateArgs {
    /// Monthly salary (defaults to the configured starting salary)
    #[arg(long)]
    pub salary: Option<String>,

    /// Credit card limit (defaults to the configured starting limit)
    #[arg(long)]
    pub credit_limit: Option<String>,

    /// Expense as CATEGORY:AMOUNT[:salary|credit], repeatable
    #[arg(short, long = "expense", value_name = "CAT:AMOUNT[:METHOD]")]
    pub expenses: Vec<String>,

    /// Credit bill payment, repeatable. Applied after all expenses.
    #[arg(short, long = "pay", value_name = "AMOUNT")]
    pub payments: Vec<String>,

    /// Print metrics as JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}

/// A parsed `--expense` argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseSpec {
    pub category: String,
    pub amount: String,
    pub method: PaymentMethod,
}

impl ExpenseSpec {
    /// Parse `CATEGORY:AMOUNT[:METHOD]`; the method defaults to salary
    pub fn parse(spec: &str) -> BudgetProResult<Self> {
        let mut parts = spec.splitn(3, ':');
        let category = parts.next().unwrap_or_default();
        let amount = parts
            .next()
            .ok_or_else(|| BudgetProError::Config(format!("Expected CAT:AMOUNT, got '{}'", spec)))?;
        let method = match parts.next() {
            Some(m) => PaymentMethod::parse(m).ok_or_else(|| {
                BudgetProError::Config(format!(
                    "Unknown payment method '{}'. Use 'salary' or 'credit'",
                    m
                ))
            })?,
            None => PaymentMethod::Salary,
        };

        Ok(Self {
            category: category.to_string(),
            amount: amount.to_string(),
            method,
        })
    }
}

/// Parse an optional salary or limit override, falling back to `default`
pub fn parse_budget_amount(text: Option<&str>, default: Money) -> BudgetProResult<Money> {
    match text {
        None => Ok(default),
        Some(text) => {
            let amount = Money::parse(text)
                .map_err(|_| ValidationError::InvalidAmount(text.to_string()))?;
            if amount.is_negative() {
                return Err(ValidationError::NonPositiveAmount(amount).into());
            }
            Ok(amount)
        }
    }
}

/// Run the simulation and return the final ledger
pub fn run_simulation(settings: &Settings, args: &SimulateArgs) -> BudgetProResult<LedgerService> {
    let salary = parse_budget_amount(args.salary.as_deref(), settings.starting_salary)?;
    let credit_limit = parse_budget_amount(args.credit_limit.as_deref(), settings.starting_credit_limit)?;

    let specs = args
        .expenses
        .iter()
        .map(|s| ExpenseSpec::parse(s))
        .collect::<BudgetProResult<Vec<_>>>()?;

    let mut ledger = LedgerService::with_picker(
        LedgerState::new(salary, credit_limit),
        CyclingIconPicker::default(),
    );

    for spec in &specs {
        ledger.add_expense(&spec.category, &spec.amount, spec.method)?;
    }
    for payment in &args.payments {
        ledger.pay_credit_bill(payment)?;
    }

    Ok(ledger)
}

/// Handle `budgetpro simulate`
pub fn handle_simulate_command(
    settings: &Settings,
    audit: Option<&AuditLogger>,
    args: SimulateArgs,
) -> BudgetProResult<()> {
    let ledger = run_simulation(settings, &args)?;
    let metrics = ledger.metrics();

    if let Some(logger) = audit {
        for expense in ledger.state().expenses() {
            logger.log(&AuditEntry::create(
                EntityType::Expense,
                expense.id.to_string(),
                Some(expense.category.clone()),
                expense,
            ))?;
        }
        if ledger.state().credit_bill_paid().is_positive() {
            logger.log(&AuditEntry::update(
                EntityType::CreditBill,
                "credit-bill",
                &Money::zero(),
                &ledger.state().credit_bill_paid(),
                Some(format!("simulated {} payment(s)", args.payments.len())),
            ))?;
        }
    }

    if args.json {
        let json = serde_json::to_string_pretty(&metrics)
            .map_err(|e| BudgetProError::Json(e.to_string()))?;
        println!("{}", json);
    } else {
        print!(
            "{}",
            format_ledger_summary(ledger.state(), &metrics, &settings.currency_symbol)
        );
    }

    Ok(())
}
