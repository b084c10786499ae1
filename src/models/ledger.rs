//! Ledger state
//!
//! Salary, credit limit, the expense list and the running credit-bill offset.
//! The two mutations validate everything before touching state, so a failed
//! call leaves the ledger exactly as it was.

use serde::{Deserialize, Serialize};

use super::expense::{Expense, ExpenseIcon, PaymentMethod};
use super::money::Money;
use crate::error::ValidationError;

/// In-memory ledger for one session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerState {
    /// Monthly salary
    pub salary: Money,

    /// Credit card limit
    pub credit_limit: Money,

    /// Expenses in insertion order
    expenses: Vec<Expense>,

    /// Part of the credit bill already paid out of salary
    credit_bill_paid: Money,
}

impl LedgerState {
    /// Ceiling for the sum of all expenses and for the paid bill total.
    /// Derived metrics combine at most two such totals with the salary or
    /// limit, so they stay within `i64`.
    pub const MAX_TOTAL: Money = Money::from_cents(i64::MAX / 4);

    /// Create an empty ledger. Negative inputs are clamped to zero.
    pub fn new(salary: Money, credit_limit: Money) -> Self {
        Self {
            salary: salary.floor_zero(),
            credit_limit: credit_limit.floor_zero(),
            expenses: Vec::new(),
            credit_bill_paid: Money::zero(),
        }
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn credit_bill_paid(&self) -> Money {
        self.credit_bill_paid
    }

    /// Sum of expenses paid with the given method
    pub fn total_by_method(&self, method: PaymentMethod) -> Money {
        self.expenses
            .iter()
            .filter(|e| e.payment_method == method)
            .map(|e| e.amount)
            .sum()
    }

    /// Total credit card spending. Paying the bill does not reduce it.
    pub fn outstanding_credit(&self) -> Money {
        self.total_by_method(PaymentMethod::Credit)
    }

    /// Record a new expense
    pub fn add_expense(
        &mut self,
        category: &str,
        amount_text: &str,
        method: PaymentMethod,
        icon: ExpenseIcon,
    ) -> Result<&Expense, ValidationError> {
        let category = category.trim();
        if category.is_empty() {
            return Err(ValidationError::EmptyCategory);
        }

        let amount = parse_positive(amount_text)?;

        let spent: Money = self.expenses.iter().map(|e| e.amount).sum();
        within_max_total(spent, amount)?;

        self.expenses
            .push(Expense::new(category, amount, method, icon));
        Ok(&self.expenses[self.expenses.len() - 1])
    }

    /// Pay part of the credit bill from salary. Returns the amount paid.
    pub fn pay_credit_bill(&mut self, amount_text: &str) -> Result<Money, ValidationError> {
        let amount = parse_positive(amount_text)?;

        let outstanding = self.outstanding_credit();
        if amount > outstanding {
            return Err(ValidationError::ExceedsOutstanding {
                requested: amount,
                outstanding,
            });
        }

        self.credit_bill_paid = within_max_total(self.credit_bill_paid, amount)?;
        Ok(amount)
    }
}

fn within_max_total(total: Money, amount: Money) -> Result<Money, ValidationError> {
    total
        .checked_add(amount)
        .filter(|sum| *sum <= LedgerState::MAX_TOTAL)
        .ok_or(ValidationError::TooLarge(amount))
}

fn parse_positive(amount_text: &str) -> Result<Money, ValidationError> {
    let amount = Money::parse(amount_text)
        .map_err(|_| ValidationError::InvalidAmount(amount_text.to_string()))?;

    if !amount.is_positive() {
        return Err(ValidationError::NonPositiveAmount(amount));
    }

    Ok(amount)
}
