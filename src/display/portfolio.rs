//! Portfolio and checkup formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::checkup::Checkup;
use crate::models::{Investment, Money};

#[derive(Tabled)]
struct InvestmentRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Expected Return")]
    expected_return: String,
    #[tabled(rename = "Risk")]
    risk: String,
}

/// Format the investment portfolio with a total line
pub fn format_portfolio(investments: &[Investment], symbol: &str) -> String {
    if investments.is_empty() {
        return "No investments recorded.".to_string();
    }

    let rows = investments.iter().map(|inv| InvestmentRow {
        id: inv.id.to_string(),
        kind: inv.kind.clone(),
        amount: inv.amount.format_with_symbol(symbol),
        expected_return: format!("{}%", inv.expected_return),
        risk: inv.risk.to_string(),
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());

    let total: Money = investments.iter().map(|inv| inv.amount).sum();
    format!(
        "{}\nTotal Invested: {}",
        table,
        total.format_with_symbol(symbol)
    )
}

/// Format a checkup result
pub fn format_checkup(checkup: &Checkup, symbol: &str) -> String {
    format!(
        "=== Financial Checkup ===\n  Taxable Income: {}\n  Deductions:     {}\n  Estimated Tax:  {}\n",
        checkup.taxable_income.format_with_symbol(symbol),
        checkup.deductions.format_with_symbol(symbol),
        checkup.estimated_tax.format_with_symbol(symbol),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InvestmentId, RiskLevel};

    #[test]
    fn test_format_portfolio() {
        let investments = vec![
            Investment::new(InvestmentId::new(1), "PPF", Money::from_units(1500), 7.1, RiskLevel::Low),
            Investment::new(InvestmentId::new(2), "Stocks", Money::from_units(500), 14.0, RiskLevel::High),
        ];

        let output = format_portfolio(&investments, "₹");
        assert!(output.contains("PPF"));
        assert!(output.contains("Stocks"));
        assert!(output.contains("7.1%"));
        assert!(output.contains("High"));
        assert!(output.contains("Total Invested: ₹2000.00"));
    }

    #[test]
    fn test_format_empty_portfolio() {
        assert_eq!(format_portfolio(&[], "₹"), "No investments recorded.");
    }

    #[test]
    fn test_format_checkup() {
        let checkup = Checkup {
            taxable_income: Money::from_units(1000),
            deductions: Money::from_units(20),
            estimated_tax: Money::from_units(294),
        };
        let output = format_checkup(&checkup, "$");
        assert!(output.contains("Taxable Income: $1000.00"));
        assert!(output.contains("Deductions:     $20.00"));
        assert!(output.contains("Estimated Tax:  $294.00"));
    }
}
