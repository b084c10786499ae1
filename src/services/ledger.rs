//! Ledger service
//!
//! Wraps `LedgerState` with the icon selection strategy used for new
//! expenses and exposes the metrics read by the views.

use uuid::Uuid;

use crate::error::ValidationError;
use crate::models::{Expense, ExpenseIcon, LedgerState, Money, PaymentMethod};

use super::metrics::DerivedMetrics;

/// Chooses the cosmetic icon for a new expense
pub trait IconPicker {
    fn pick(&mut self) -> ExpenseIcon;
}

impl<F> IconPicker for F
where
    F: FnMut() -> ExpenseIcon,
{
    fn pick(&mut self) -> ExpenseIcon {
        self()
    }
}

/// Picks an icon uniformly at random
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIconPicker;

impl IconPicker for RandomIconPicker {
    fn pick(&mut self) -> ExpenseIcon {
        // v4 UUIDs carry 122 random bits; one byte is plenty here
        let byte = Uuid::new_v4().as_bytes()[0] as usize;
        ExpenseIcon::ALL[byte % ExpenseIcon::ALL.len()]
    }
}

/// Walks through the icons in order
#[derive(Debug, Default, Clone, Copy)]
pub struct CyclingIconPicker {
    next: usize,
}

impl IconPicker for CyclingIconPicker {
    fn pick(&mut self) -> ExpenseIcon {
        let icon = ExpenseIcon::ALL[self.next % ExpenseIcon::ALL.len()];
        self.next = self.next.wrapping_add(1);
        icon
    }
}

/// Service for ledger mutations and reads
pub struct LedgerService {
    state: LedgerState,
    icons: Box<dyn IconPicker>,
}

impl LedgerService {
    /// Create a service over an empty ledger with random icons
    pub fn new(salary: Money, credit_limit: Money) -> Self {
        Self::with_picker(LedgerState::new(salary, credit_limit), RandomIconPicker)
    }

    /// Create a service with a specific icon strategy
    pub fn with_picker(state: LedgerState, icons: impl IconPicker + 'static) -> Self {
        Self {
            state,
            icons: Box::new(icons),
        }
    }

    pub fn state(&self) -> &LedgerState {
        &self.state
    }

    /// Recompute the derived metrics from the current state
    pub fn metrics(&self) -> DerivedMetrics {
        DerivedMetrics::compute(&self.state)
    }

    /// Add an expense. On error the ledger is unchanged.
    pub fn add_expense(
        &mut self,
        category: &str,
        amount_text: &str,
        method: PaymentMethod,
    ) -> Result<&Expense, ValidationError> {
        let icon = self.icons.pick();
        self.state.add_expense(category, amount_text, method, icon)
    }

    /// Pay part of the credit bill from salary. On error the ledger is unchanged.
    pub fn pay_credit_bill(&mut self, amount_text: &str) -> Result<Money, ValidationError> {
        self.state.pay_credit_bill(amount_text)
    }
}

impl std::fmt::Debug for LedgerService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LedgerService")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> LedgerService {
        LedgerService::with_picker(
            LedgerState::new(Money::from_dollars(5000), Money::from_dollars(8000)),
            CyclingIconPicker::default(),
        )
    }

    #[test]
    fn test_cycling_picker_assigns_icons_in_order() {
        let mut service = service();
        for _ in 0..6 {
            service
                .add_expense("Item", "1", PaymentMethod::Salary)
                .unwrap();
        }
        let icons: Vec<_> = service.state().expenses().iter().map(|e| e.icon).collect();
        assert_eq!(
            icons,
            [
                ExpenseIcon::Coffee,
                ExpenseIcon::Car,
                ExpenseIcon::Home,
                ExpenseIcon::Shopping,
                ExpenseIcon::Smartphone,
                ExpenseIcon::Coffee,
            ]
        );
    }

    #[test]
    fn test_closure_picker() {
        let mut service = LedgerService::with_picker(
            LedgerState::new(Money::from_dollars(100), Money::zero()),
            || ExpenseIcon::Car,
        );
        let expense = service
            .add_expense("Fuel", "20", PaymentMethod::Salary)
            .unwrap();
        assert_eq!(expense.icon, ExpenseIcon::Car);
    }

    #[test]
    fn test_random_picker_stays_in_set() {
        let mut picker = RandomIconPicker;
        for _ in 0..50 {
            assert!(ExpenseIcon::ALL.contains(&picker.pick()));
        }
    }

    #[test]
    fn test_metrics_follow_mutations() {
        let mut service = service();
        service
            .add_expense("Café", "50", PaymentMethod::Salary)
            .unwrap();
        assert_eq!(service.metrics().remaining_salary, Money::from_dollars(4950));

        service
            .add_expense("Laptop", "6500", PaymentMethod::Credit)
            .unwrap();
        assert!(service.metrics().is_low_funds);

        service.pay_credit_bill("1000").unwrap();
        assert_eq!(service.metrics().remaining_salary, Money::from_dollars(3950));
        assert!(service.metrics().is_low_funds);
    }

    #[test]
    fn test_failed_add_leaves_state() {
        let mut service = service();
        let before = service.state().clone();
        assert_eq!(
            service
                .add_expense("", "10", PaymentMethod::Salary)
                .unwrap_err(),
            ValidationError::EmptyCategory
        );
        assert_eq!(service.state(), &before);
    }
}
