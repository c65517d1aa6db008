//! Account model
//!
//! The ledger: an ordered list of transactions, running totals, and the
//! budgets that watch expense categories.

use serde::{Deserialize, Serialize};

use super::budget::{Budget, BudgetStatus};
use super::ids::{AccountId, BudgetId, TransactionId};
use super::money::Money;
use super::notification::{codes, Notification};
use super::transaction::{Transaction, TransactionKind};
use crate::notify::NotificationSink;

/// Number of transactions shown on the dashboard
pub const RECENT_TRANSACTIONS: usize = 5;

/// A user's ledger
///
/// `balance == total_income - total_expenses` holds after every mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    balance: Money,
    total_income: Money,
    total_expenses: Money,
    transactions: Vec<Transaction>,
    budgets: Vec<Budget>,
}

/// Read-only view of an account for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard<'a> {
    pub balance: Money,
    pub total_income: Money,
    pub total_expenses: Money,
    /// The most recent transactions, oldest first
    pub recent_transactions: &'a [Transaction],
    pub budgets: &'a [Budget],
}

impl Account {
    /// Create an empty account
    pub fn new(id: AccountId) -> Self {
        Self {
            id,
            balance: Money::zero(),
            total_income: Money::zero(),
            total_expenses: Money::zero(),
            transactions: Vec::new(),
            budgets: Vec::new(),
        }
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn total_income(&self) -> Money {
        self.total_income
    }

    pub fn total_expenses(&self) -> Money {
        self.total_expenses
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    /// Record income and announce it
    ///
    /// Amounts are not validated; zero or negative income is recorded as is.
    pub fn add_income<S: NotificationSink + ?Sized>(
        &mut self,
        amount: Money,
        category: impl Into<String>,
        sink: &mut S,
    ) -> TransactionId {
        self.total_income += amount;
        self.balance += amount;
        let id = self.record(amount, category.into(), TransactionKind::Income);

        tracing::debug!(account = %self.id, txn = %id, amount = %amount, "income recorded");
        sink.deliver(&Notification::new(
            codes::INCOME_ADDED,
            format!("Income added: {}", amount),
        ));
        id
    }

    /// Record an expense and feed it to every budget for the category
    ///
    /// The balance may go negative. An expense in a category without a
    /// budget is recorded but not tracked. Returns the transaction id and
    /// the status reported by each matching budget, in budget order.
    pub fn add_expense<S: NotificationSink + ?Sized>(
        &mut self,
        amount: Money,
        category: impl Into<String>,
        sink: &mut S,
    ) -> (TransactionId, Vec<(BudgetId, BudgetStatus)>) {
        let category = category.into();
        self.total_expenses += amount;
        self.balance -= amount;
        let id = self.record(amount, category.clone(), TransactionKind::Expense);

        tracing::debug!(account = %self.id, txn = %id, amount = %amount, category = %category, "expense recorded");

        let statuses = self
            .budgets
            .iter_mut()
            .filter(|b| b.category == category)
            .map(|b| (b.id, b.track_expense(amount, &mut *sink)))
            .collect();

        (id, statuses)
    }

    /// Add a spending cap for a category
    ///
    /// Categories are not deduplicated: a second budget for the same
    /// category is an independent cap that also receives matching expenses.
    pub fn add_budget(&mut self, limit: Money, category: impl Into<String>) -> BudgetId {
        let id = BudgetId::next_after(self.budgets.len());
        let budget = Budget::new(id, limit, category);
        tracing::debug!(account = %self.id, budget = %id, category = %budget.category, limit = %limit, "budget created");
        self.budgets.push(budget);
        id
    }

    pub fn budget(&self, id: BudgetId) -> Option<&Budget> {
        self.budgets.iter().find(|b| b.id == id)
    }

    pub fn budget_mut(&mut self, id: BudgetId) -> Option<&mut Budget> {
        self.budgets.iter_mut().find(|b| b.id == id)
    }

    /// All budgets watching a category, in creation order
    pub fn budgets_for<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Budget> + 'a {
        self.budgets.iter().filter(move |b| b.category == category)
    }

    /// Snapshot of totals, the last few transactions, and all budgets
    pub fn dashboard(&self) -> Dashboard<'_> {
        let start = self.transactions.len().saturating_sub(RECENT_TRANSACTIONS);
        Dashboard {
            balance: self.balance,
            total_income: self.total_income,
            total_expenses: self.total_expenses,
            recent_transactions: &self.transactions[start..],
            budgets: &self.budgets,
        }
    }

    fn record(&mut self, amount: Money, category: String, kind: TransactionKind) -> TransactionId {
        let id = TransactionId::next_after(self.transactions.len());
        self.transactions
            .push(Transaction::new(id, amount, category, kind));
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NullSink;

    fn assert_balanced(account: &Account) {
        assert_eq!(
            account.balance(),
            account.total_income() - account.total_expenses()
        );
    }

    #[test]
    fn test_new_account_is_empty() {
        let account = Account::new(AccountId::new(1));
        assert_eq!(account.balance(), Money::zero());
        assert!(account.transactions().is_empty());
        assert!(account.budgets().is_empty());
    }

    #[test]
    fn test_add_income_updates_totals_and_notifies() {
        let mut account = Account::new(AccountId::new(1));
        let mut events: Vec<Notification> = Vec::new();
        let id = account.add_income(Money::from_units(2500), "Salary", &mut events);

        assert_eq!(id, TransactionId::new(1));
        assert_eq!(account.balance(), Money::from_units(2500));
        assert_eq!(account.total_income(), Money::from_units(2500));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, 500);
        assert_eq!(events[0].message, "Income added: 2500.00");
        assert!(account.transactions()[0].is_income());
    }

    #[test]
    fn test_expense_can_overdraw() {
        let mut account = Account::new(AccountId::new(1));
        let mut events: Vec<Notification> = Vec::new();
        account.add_income(Money::from_units(10), "Gift", &mut events);
        account.add_expense(Money::from_units(25), "Food", &mut events);

        assert_eq!(account.balance(), Money::from_units(-15));
        assert_eq!(account.total_expenses(), Money::from_units(25));
        // untracked expenses raise nothing
        assert_eq!(events.len(), 1);
        assert_balanced(&account);
    }

    #[test]
    fn test_balance_invariant_holds_after_every_call() {
        let mut account = Account::new(AccountId::new(1));
        let mut sink = NullSink;
        let amounts = [120, -5, 0, 3000, 47, 999, -250];

        for (i, units) in amounts.iter().enumerate() {
            if i % 2 == 0 {
                account.add_income(Money::from_units(*units), "In", &mut sink);
            } else {
                account.add_expense(Money::from_units(*units), "Out", &mut sink);
            }
            assert_balanced(&account);
        }
    }

    #[test]
    fn test_transaction_ids_are_sequential_across_kinds() {
        let mut account = Account::new(AccountId::new(1));
        let mut sink = NullSink;
        account.add_expense(Money::from_units(1), "A", &mut sink);
        account.add_income(Money::from_units(1), "B", &mut sink);
        account.add_expense(Money::from_units(1), "C", &mut sink);
        account.add_income(Money::from_units(1), "D", &mut sink);

        let ids: Vec<u32> = account.transactions().iter().map(|t| t.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_expense_routes_to_matching_budget_only() {
        let mut account = Account::new(AccountId::new(1));
        let food = account.add_budget(Money::from_units(100), "Food");
        let rent = account.add_budget(Money::from_units(1000), "Rent");
        let mut events: Vec<Notification> = Vec::new();

        let (_, statuses) = account.add_expense(Money::from_units(80), "Food", &mut events);

        assert_eq!(statuses, vec![(food, BudgetStatus::NearLimit { percent: 80 })]);
        assert_eq!(account.budget(food).unwrap().spent, Money::from_units(80));
        assert_eq!(account.budget(rent).unwrap().spent, Money::zero());
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_category_match_is_case_sensitive() {
        let mut account = Account::new(AccountId::new(1));
        let food = account.add_budget(Money::from_units(100), "Food");
        let (_, statuses) = account.add_expense(Money::from_units(90), "food", &mut NullSink);

        assert!(statuses.is_empty());
        assert_eq!(account.budget(food).unwrap().spent, Money::zero());
    }

    #[test]
    fn test_duplicate_category_budgets_both_track() {
        let mut account = Account::new(AccountId::new(1));
        let first = account.add_budget(Money::from_units(100), "Food");
        let second = account.add_budget(Money::from_units(500), "Food");
        let mut events: Vec<Notification> = Vec::new();

        let (_, statuses) = account.add_expense(Money::from_units(90), "Food", &mut events);

        assert_eq!(first, BudgetId::new(1));
        assert_eq!(second, BudgetId::new(2));
        assert_eq!(statuses.len(), 2);
        assert_eq!(account.budget(first).unwrap().spent, Money::from_units(90));
        assert_eq!(account.budget(second).unwrap().spent, Money::from_units(90));
        assert_eq!(account.budgets_for("Food").count(), 2);
        // only the tighter cap crosses its threshold
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, 201);
    }

    #[test]
    fn test_dashboard_shows_last_five_in_order() {
        let mut account = Account::new(AccountId::new(1));
        let mut sink = NullSink;
        for i in 1..=7 {
            account.add_income(Money::from_units(i), format!("c{}", i), &mut sink);
        }

        let dash = account.dashboard();
        let ids: Vec<u32> = dash.recent_transactions.iter().map(|t| t.id.get()).collect();
        assert_eq!(ids, vec![3, 4, 5, 6, 7]);
        assert_eq!(dash.total_income, Money::from_units(28));
        assert_eq!(dash.balance, Money::from_units(28));
    }

    #[test]
    fn test_dashboard_with_few_transactions() {
        let mut account = Account::new(AccountId::new(1));
        account.add_budget(Money::from_units(50), "Fuel");
        account.add_expense(Money::from_units(10), "Fuel", &mut NullSink);
        account.add_income(Money::from_units(20), "Refund", &mut NullSink);

        let dash = account.dashboard();
        assert_eq!(dash.recent_transactions.len(), 2);
        assert_eq!(dash.recent_transactions[0].category, "Fuel");
        assert_eq!(dash.budgets.len(), 1);
        assert_eq!(dash.total_expenses, Money::from_units(10));
    }

    #[test]
    fn test_adjust_through_account() {
        let mut account = Account::new(AccountId::new(1));
        let id = account.add_budget(Money::from_units(100), "Food");
        let mut events: Vec<Notification> = Vec::new();
        account.add_expense(Money::from_units(120), "Food", &mut events);

        account
            .budget_mut(id)
            .unwrap()
            .adjust(Money::from_units(200), &mut events);

        let budget = account.budget(id).unwrap();
        assert_eq!(budget.limit, Money::from_units(200));
        assert_eq!(budget.spent, Money::from_units(120));
        assert!(account.budget_mut(BudgetId::new(9)).is_none());
    }
}
