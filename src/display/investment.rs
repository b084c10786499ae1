//! Investment display formatting
//!
//! Formats catalog products for terminal output in table and detail views.

use tabled::{
    settings::{object::Columns, Alignment, Style},
    Table, Tabled,
};

use crate::models::Investment;

#[derive(Tabled)]
struct InvestmentRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Risk")]
    risk: String,
    #[tabled(rename = "Return")]
    expected_return: String,
    #[tabled(rename = "Min")]
    min: String,
    #[tabled(rename = "Max")]
    max: String,
}

/// Format the catalog as a table
pub fn format_investment_list(investments: &[Investment], currency: &str) -> String {
    if investments.is_empty() {
        return "No investments available.".to_string();
    }

    let rows = investments.iter().map(|inv| InvestmentRow {
        id: inv.id.to_string(),
        name: inv.name.clone(),
        kind: inv.kind.clone(),
        risk: inv.risk_level.to_string(),
        expected_return: format!("{:.1}%", inv.expected_return),
        min: inv.min_investment.format_with_symbol(currency),
        max: inv.max_investment.format_with_symbol(currency),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::new(4..), Alignment::right());
    table.to_string()
}

/// Scale history values onto block characters
fn sparkline(values: &[f64]) -> String {
    const BLOCKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    values
        .iter()
        .map(|v| {
            if span <= f64::EPSILON {
                BLOCKS[3]
            } else {
                let idx = ((v - min) / span * (BLOCKS.len() - 1) as f64).round() as usize;
                BLOCKS[idx.min(BLOCKS.len() - 1)]
            }
        })
        .collect()
}

/// Format a single product with its history
pub fn format_investment_details(inv: &Investment, currency: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Investment: {}\n", inv.name));
    output.push_str(&format!("  ID:              {}\n", inv.id));
    output.push_str(&format!("  Type:            {}\n", inv.kind));
    output.push_str(&format!("  Risk:            {}\n", inv.risk_level));
    output.push_str(&format!(
        "  Expected return: {:.1}% per year\n",
        inv.expected_return
    ));
    output.push_str(&format!(
        "  Invest between:  {} and {}\n",
        inv.min_investment.format_with_symbol(currency),
        inv.max_investment.format_with_symbol(currency)
    ));
    output.push_str(&format!("  Status:          {}\n", inv.status));
    output.push_str(&format!("\n  {}\n", inv.description));

    if !inv.historical_data.is_empty() {
        let values: Vec<f64> = inv.historical_data.iter().map(|p| p.value).collect();
        output.push_str("\nHistory:\n");
        output.push_str(&format!("  {}", sparkline(&values)));
        if let Some(change) = inv.historical_change() {
            output.push_str(&format!("  ({:+.1}%)", change));
        }
        output.push('\n');
        for point in &inv.historical_data {
            output.push_str(&format!("  {:<6}{:>8.1}\n", point.period, point.value));
        }
    }

    output
}
