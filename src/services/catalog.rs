//! Investment catalog
//!
//! The application ships with four mock products. Views and the CLI go
//! through the `InvestmentCatalog` trait so another source can be plugged in.

use crate::models::{
    HistoricalPoint, Investment, InvestmentId, InvestmentStatus, Money, RiskLevel,
};

/// Read-only source of investment products
pub trait InvestmentCatalog {
    /// All products, in display order
    fn investments(&self) -> &[Investment];

    /// Look up a product by ID
    fn get(&self, id: InvestmentId) -> Option<&Investment> {
        self.investments().iter().find(|i| i.id == id)
    }

    /// Product at a display position
    fn at(&self, index: usize) -> Option<&Investment> {
        self.investments().get(index)
    }

    fn len(&self) -> usize {
        self.investments().len()
    }

    fn is_empty(&self) -> bool {
        self.investments().is_empty()
    }
}

/// Catalog backed by an in-memory list
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    investments: Vec<Investment>,
}

impl StaticCatalog {
    pub fn new(investments: Vec<Investment>) -> Self {
        Self { investments }
    }

    /// The built-in mock products
    pub fn builtin() -> Self {
        Self::new(vec![
            product(
                1,
                "Treasury Savings Bond",
                "Government Bond",
                "Capital-protected government bond paying a fixed coupon. \
                 Suited for emergency reserves and short horizons.",
                RiskLevel::Low,
                4.5,
                (100, 10_000),
                [100.0, 100.4, 100.8, 101.1, 101.5, 101.9],
            ),
            product(
                2,
                "Global Index Fund",
                "Index Fund",
                "Broad market fund tracking developed-market equities with \
                 low fees and quarterly rebalancing.",
                RiskLevel::Medium,
                8.2,
                (250, 25_000),
                [100.0, 103.2, 101.7, 105.9, 108.4, 110.1],
            ),
            product(
                3,
                "Real Estate Income Trust",
                "REIT",
                "Portfolio of commercial properties distributing rental \
                 income monthly. Moderately sensitive to interest rates.",
                RiskLevel::Medium,
                6.8,
                (500, 20_000),
                [100.0, 101.5, 102.9, 101.8, 104.2, 105.6],
            ),
            product(
                4,
                "Emerging Tech Growth",
                "Equity Fund",
                "Concentrated fund of early-stage technology companies. \
                 High volatility with strong long-term upside.",
                RiskLevel::High,
                14.5,
                (1_000, 50_000),
                [100.0, 112.4, 96.3, 118.7, 109.2, 127.5],
            ),
        ])
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl InvestmentCatalog for StaticCatalog {
    fn investments(&self) -> &[Investment] {
        &self.investments
    }
}

const PERIODS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

#[allow(clippy::too_many_arguments)]
fn product(
    id: u32,
    name: &str,
    kind: &str,
    description: &str,
    risk_level: RiskLevel,
    expected_return: f64,
    (min, max): (i64, i64),
    history: [f64; 6],
) -> Investment {
    Investment {
        id: InvestmentId::new(id),
        name: name.to_string(),
        kind: kind.to_string(),
        description: description.to_string(),
        risk_level,
        expected_return,
        min_investment: Money::from_dollars(min),
        max_investment: Money::from_dollars(max),
        historical_data: PERIODS
            .iter()
            .zip(history)
            .map(|(period, value)| HistoricalPoint::new(*period, value))
            .collect(),
        status: InvestmentStatus::Available,
        purchase_amount: None,
        purchase_date: None,
        current_value: None,
        profit_loss: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_four_products() {
        let catalog = StaticCatalog::builtin();
        assert_eq!(catalog.len(), 4);
        assert!(catalog
            .investments()
            .iter()
            .all(|i| i.status == InvestmentStatus::Available));
    }

    #[test]
    fn test_builtin_ids_unique_and_ranges_valid() {
        let catalog = StaticCatalog::builtin();
        let mut ids: Vec<_> = catalog.investments().iter().map(|i| i.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());

        for investment in catalog.investments() {
            assert!(investment.min_investment < investment.max_investment);
            assert_eq!(investment.historical_data.len(), 6);
        }
    }

    #[test]
    fn test_lookup() {
        let catalog = StaticCatalog::builtin();
        assert_eq!(
            catalog.get(InvestmentId::new(4)).map(|i| i.risk_level),
            Some(RiskLevel::High)
        );
        assert!(catalog.get(InvestmentId::new(99)).is_none());
        assert_eq!(catalog.at(0).map(|i| i.id), Some(InvestmentId::new(1)));
    }
}
