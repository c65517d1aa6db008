//! Account display formatting
//!
//! Dashboard and budget views for a single account.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::transaction::format_transaction_register;
use crate::models::{Budget, BudgetStatus, Dashboard};

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Limit")]
    limit: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Status")]
    status: String,
}

fn status_label(status: BudgetStatus) -> String {
    match status {
        BudgetStatus::WithinLimit => "OK".to_string(),
        BudgetStatus::NearLimit { percent } => format!("Near limit ({}%)", percent),
        BudgetStatus::Exceeded => "EXCEEDED".to_string(),
    }
}

/// Format budgets as a table with their current status
pub fn format_budget_table(budgets: &[Budget], symbol: &str) -> String {
    if budgets.is_empty() {
        return "No budgets set.".to_string();
    }

    let rows = budgets.iter().map(|b| BudgetRow {
        id: b.id.to_string(),
        category: b.category.clone(),
        limit: b.limit.format_with_symbol(symbol),
        spent: b.spent.format_with_symbol(symbol),
        remaining: b.remaining().format_with_symbol(symbol),
        status: status_label(b.status()),
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());
    table.to_string()
}

/// Format the account dashboard: totals, recent activity, budgets
pub fn format_dashboard(dashboard: &Dashboard<'_>, symbol: &str, date_format: &str) -> String {
    let mut output = String::new();

    output.push_str("=== Financial Dashboard ===\n");
    output.push_str(&format!(
        "  Current Balance: {}\n",
        dashboard.balance.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Total Income:    {}\n",
        dashboard.total_income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Total Expenses:  {}\n",
        dashboard.total_expenses.format_with_symbol(symbol)
    ));

    output.push('\n');
    output.push_str("Recent Transactions:\n");
    output.push_str(&format_transaction_register(
        dashboard.recent_transactions,
        symbol,
        date_format,
    ));

    output.push('\n');
    output.push_str("Budgets:\n");
    output.push_str(&format_budget_table(dashboard.budgets, symbol));
    output.push('\n');

    output
}
