//! Derived ledger metrics
//!
//! Everything here is a pure function of `LedgerState` and is recomputed on
//! each call; nothing is cached between reads.

use serde::Serialize;

use crate::models::{LedgerState, Money, PaymentMethod};

/// Consumed vs. free portion of a budget, for gauges and charts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UsagePair {
    /// Amount consumed. Can exceed the limit.
    pub used: Money,
    /// What is left, floored at zero when overspent
    pub free: Money,
}

impl UsagePair {
    pub fn new(used: Money, limit: Money) -> Self {
        Self {
            used,
            free: (limit - used).floor_zero(),
        }
    }

    /// Consumed share in `[0, 1]`; zero when there is nothing to measure
    pub fn fraction(&self) -> f64 {
        let used = self.used.floor_zero().cents() as f64;
        let total = used + self.free.cents() as f64;
        if total <= 0.0 {
            return 0.0;
        }
        (used / total).clamp(0.0, 1.0)
    }

    /// Consumed share as a whole percentage
    pub fn percent(&self) -> u16 {
        (self.fraction() * 100.0).round() as u16
    }
}

/// Summary numbers the dashboard renders from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DerivedMetrics {
    pub salary_expenses: Money,
    pub credit_expenses: Money,
    pub remaining_salary: Money,
    pub available_credit: Money,
    pub is_low_funds: bool,
    pub salary_usage: UsagePair,
    pub credit_usage: UsagePair,
}

impl DerivedMetrics {
    /// Compute all metrics from the current ledger
    pub fn compute(state: &LedgerState) -> Self {
        let salary_expenses = state.total_by_method(PaymentMethod::Salary);
        let credit_expenses = state.total_by_method(PaymentMethod::Credit);
        let paid = state.credit_bill_paid();

        let remaining_salary = state.salary - salary_expenses - paid;
        let available_credit = state.credit_limit - credit_expenses;

        Self {
            salary_expenses,
            credit_expenses,
            remaining_salary,
            available_credit,
            is_low_funds: is_low_funds(
                remaining_salary,
                state.salary,
                credit_expenses,
                state.credit_limit,
            ),
            salary_usage: UsagePair::new(salary_expenses + paid, state.salary),
            credit_usage: UsagePair::new(credit_expenses, state.credit_limit),
        }
    }

    /// Whether the salary side alone triggers the warning
    pub fn salary_is_low(&self, salary: Money) -> bool {
        below_fifth(self.remaining_salary, salary)
    }

    /// Whether the credit side alone triggers the warning
    pub fn credit_is_high(&self, credit_limit: Money) -> bool {
        above_four_fifths(self.credit_expenses, credit_limit)
    }

    /// Human-readable causes of the low-funds flag; empty when it is clear
    pub fn low_funds_reasons(&self, salary: Money, credit_limit: Money) -> Vec<&'static str> {
        let mut reasons = Vec::new();
        if self.salary_is_low(salary) {
            reasons.push("less than 20% of salary left");
        }
        if self.credit_is_high(credit_limit) {
            reasons.push("over 80% of credit limit used");
        }
        reasons
    }
}

/// `remaining < 0.2 * salary` or `credit > 0.8 * limit`, evaluated in cents
pub fn is_low_funds(remaining: Money, salary: Money, credit: Money, limit: Money) -> bool {
    below_fifth(remaining, salary) || above_four_fifths(credit, limit)
}

fn below_fifth(value: Money, of: Money) -> bool {
    (value.cents() as i128) * 5 < of.cents() as i128
}

fn above_four_fifths(value: Money, of: Money) -> bool {
    (value.cents() as i128) * 5 > (of.cents() as i128) * 4
}
