//! Ledger summary formatting
//!
//! Renders a ledger and its derived metrics as plain text for the
//! `simulate` command.

use tabled::{
    settings::{object::Columns, Alignment, Style},
    Table, Tabled,
};

use crate::models::{Expense, LedgerState};
use crate::services::DerivedMetrics;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Paid with")]
    method: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format expenses in entry order
pub fn format_expense_table(expenses: &[Expense], currency: &str) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.".to_string();
    }

    let rows = expenses.iter().enumerate().map(|(i, e)| ExpenseRow {
        index: i + 1,
        category: e.category.clone(),
        method: e.payment_method.to_string(),
        amount: e.amount.format_with_symbol(currency),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::new(3..), Alignment::right());
    table.to_string()
}

/// Format the full ledger summary
pub fn format_ledger_summary(state: &LedgerState, metrics: &DerivedMetrics, currency: &str) -> String {
    let money = |m: crate::models::Money| m.format_with_symbol(currency);
    let mut output = String::new();

    output.push_str("Budget Summary\n");
    output.push_str("==============\n\n");

    output.push_str(&format_expense_table(state.expenses(), currency));
    output.push_str("\n\n");

    output.push_str(&format!("Salary:              {:>12}\n", money(state.salary)));
    output.push_str(&format!(
        "  Spent from salary: {:>12}\n",
        money(metrics.salary_expenses)
    ));
    output.push_str(&format!(
        "  Credit bill paid:  {:>12}\n",
        money(state.credit_bill_paid())
    ));
    output.push_str(&format!(
        "  Remaining:         {:>12}  ({}% used)\n",
        money(metrics.remaining_salary),
        metrics.salary_usage.percent()
    ));
    output.push('\n');
    output.push_str(&format!("Credit limit:        {:>12}\n", money(state.credit_limit)));
    output.push_str(&format!(
        "  Spent on credit:   {:>12}\n",
        money(metrics.credit_expenses)
    ));
    output.push_str(&format!(
        "  Outstanding:       {:>12}\n",
        money(state.outstanding_credit())
    ));
    output.push_str(&format!(
        "  Available:         {:>12}  ({}% used)\n",
        money(metrics.available_credit),
        metrics.credit_usage.percent()
    ));

    let reasons = metrics.low_funds_reasons(state.salary, state.credit_limit);
    if !reasons.is_empty() {
        output.push_str(&format!("\nWARNING: Low funds ({})\n", reasons.join(", ")));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, PaymentMethod};
    use crate::services::{CyclingIconPicker, LedgerService};

    fn ledger() -> LedgerService {
        LedgerService::with_picker(
            LedgerState::new(Money::from_dollars(5000), Money::from_dollars(8000)),
            CyclingIconPicker::default(),
        )
    }

    #[test]
    fn test_empty_summary() {
        let service = ledger();
        let output = format_ledger_summary(service.state(), &service.metrics(), "$");
        assert!(output.contains("No expenses recorded."));
        assert!(output.contains("$5000.00"));
        assert!(output.contains("$8000.00"));
        assert!(!output.contains("WARNING"));
    }

    #[test]
    fn test_summary_with_expenses() {
        let mut service = ledger();
        service
            .add_expense("Groceries", "150.00", PaymentMethod::Salary)
            .unwrap();
        service
            .add_expense("Laptop", "1200.00", PaymentMethod::Credit)
            .unwrap();

        let output = format_ledger_summary(service.state(), &service.metrics(), "$");
        assert!(output.contains("Groceries"));
        assert!(output.contains("Credit Card"));
        assert!(output.contains("$4850.00"));
        assert!(output.contains("$6800.00"));
    }

    #[test]
    fn test_summary_warns_on_low_funds() {
        let mut service = ledger();
        service
            .add_expense("Rent", "4500.00", PaymentMethod::Salary)
            .unwrap();

        let output = format_ledger_summary(service.state(), &service.metrics(), "$");
        assert!(output.contains("WARNING: Low funds (less than 20% of salary left)"));
    }
}
