//! Transaction display formatting
//!
//! Register views of an account's ledger.

use crate::models::Transaction;

/// Format a single transaction for display (register row)
pub fn format_transaction_row(txn: &Transaction, symbol: &str, date_format: &str) -> String {
    let category = if txn.category.is_empty() {
        "(uncategorized)".to_string()
    } else {
        txn.category.clone()
    };

    format!(
        "{:>4} {} {:20} {:>8} {:>12}",
        txn.id.get(),
        txn.date.format(date_format),
        truncate(&category, 20),
        txn.kind.to_string(),
        txn.signed_amount().format_with_symbol(symbol)
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_register(
    transactions: &[Transaction],
    symbol: &str,
    date_format: &str,
) -> String {
    if transactions.is_empty() {
        return "No transactions recorded.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>4} {:10} {:20} {:>8} {:>12}\n",
        "#", "Date", "Category", "Kind", "Amount"
    ));
    output.push_str(&"-".repeat(59));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, symbol, date_format));
        output.push('\n');
    }

    output
}

/// Truncate a string to a maximum number of characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
