//! Interactive shell
//!
//! Drives one authenticated user through the main menu, reading answers
//! line by line from any `BufRead` and writing prompts to any `Write`, so
//! the whole loop can be exercised with in-memory buffers.

use std::fmt;
use std::io::{BufRead, Write};

use crate::auth::UserProfile;
use crate::checkup::financial_checkup;
use crate::config::Settings;
use crate::display;
use crate::error::{FinanceError, FinanceResult};
use crate::models::{BudgetId, Money, RiskLevel};
use crate::notify::NotificationSink;

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddIncome,
    AddExpense,
    CreateBudget,
    AddInvestment,
    UpdateProfile,
    AdjustBudget,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::AddIncome,
        MenuChoice::AddExpense,
        MenuChoice::CreateBudget,
        MenuChoice::AddInvestment,
        MenuChoice::UpdateProfile,
        MenuChoice::AdjustBudget,
        MenuChoice::Exit,
    ];

    pub fn number(self) -> u8 {
        match self {
            Self::AddIncome => 1,
            Self::AddExpense => 2,
            Self::CreateBudget => 3,
            Self::AddInvestment => 4,
            Self::UpdateProfile => 5,
            Self::AdjustBudget => 6,
            Self::Exit => 7,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let n: u8 = s.trim().parse().ok()?;
        Self::ALL.into_iter().find(|c| c.number() == n)
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::AddIncome => "Add Income",
            Self::AddExpense => "Add Expense",
            Self::CreateBudget => "Create Budget",
            Self::AddInvestment => "Add Investment",
            Self::UpdateProfile => "Update Profile",
            Self::AdjustBudget => "Adjust Budget",
            Self::Exit => "Exit",
        };
        write!(f, "{}", label)
    }
}

/// Line-oriented shell over an input and an output stream
pub struct Session<'a, R, W> {
    input: R,
    output: W,
    settings: &'a Settings,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(input: R, output: W, settings: &'a Settings) -> Self {
        Self {
            input,
            output,
            settings,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print a label and read one trimmed line; `None` at end of input
    pub fn prompt(&mut self, label: &str) -> FinanceResult<Option<String>> {
        write!(self.output, "{}", label).map_err(shell_error)?;
        self.output.flush().map_err(shell_error)?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(shell_error)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompt until `parse` accepts the answer; `None` at end of input
    fn prompt_parsed<T>(
        &mut self,
        label: &str,
        what: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> FinanceResult<Option<T>> {
        loop {
            let Some(answer) = self.prompt(label)? else {
                return Ok(None);
            };
            match parse(&answer) {
                Some(value) => return Ok(Some(value)),
                None => self.say(&format!("Invalid {}: '{}'. Please try again.", what, answer))?,
            }
        }
    }

    fn prompt_amount(&mut self, label: &str) -> FinanceResult<Option<Money>> {
        let label = format!("{}{}", label, self.settings.currency_symbol);
        self.prompt_parsed(&label, "amount", |s| Money::parse(s).ok())
    }

    fn say(&mut self, text: &str) -> FinanceResult<()> {
        writeln!(self.output, "{}", text).map_err(shell_error)
    }

    /// Print the dashboard, portfolio and checkup for a profile
    pub fn show_overview<K, S>(
        &mut self,
        profile: &UserProfile<K>,
        sink: &mut S,
    ) -> FinanceResult<()>
    where
        S: NotificationSink + ?Sized,
    {
        let symbol = self.settings.currency_symbol.clone();
        let dashboard = display::format_dashboard(
            &profile.account().dashboard(),
            &symbol,
            &self.settings.date_format,
        );
        self.say(&dashboard)?;

        self.say("Investment Portfolio:")?;
        self.say(&display::format_portfolio(profile.investments(), &symbol))?;
        self.say("")?;

        let checkup = financial_checkup(profile, sink);
        self.say(&display::format_checkup(&checkup, &symbol))
    }

    fn show_menu(&mut self) -> FinanceResult<()> {
        self.say("MAIN MENU")?;
        for choice in MenuChoice::ALL {
            self.say(&format!("{}. {}", choice.number(), choice))?;
        }
        Ok(())
    }

    /// Run the main menu until the user exits or input ends
    pub fn run<K, S>(&mut self, profile: &mut UserProfile<K>, sink: &mut S) -> FinanceResult<()>
    where
        K: fmt::Display,
        S: NotificationSink + ?Sized,
    {
        self.say(&display::format_profile(profile))?;

        loop {
            self.show_overview(profile, sink)?;
            self.show_menu()?;

            let Some(choice) = self.prompt_parsed("Choice: ", "choice", MenuChoice::parse)? else {
                break;
            };
            tracing::debug!(%choice, "menu selection");

            self.say("")?;
            self.say(&choice.to_string())?;

            let completed = match choice {
                MenuChoice::Exit => break,
                MenuChoice::AddIncome => self.add_income(profile, sink)?,
                MenuChoice::AddExpense => self.add_expense(profile, sink)?,
                MenuChoice::CreateBudget => self.create_budget(profile)?,
                MenuChoice::AddInvestment => self.add_investment(profile, sink)?,
                MenuChoice::UpdateProfile => self.update_profile(profile, sink)?,
                MenuChoice::AdjustBudget => self.adjust_budget(profile, sink)?,
            };

            if !completed {
                break;
            }
        }

        self.say("Thank you for using PocketLedger!")
    }

    // Each action returns Ok(false) when input ended mid-prompt.

    fn add_income<K, S>(&mut self, profile: &mut UserProfile<K>, sink: &mut S) -> FinanceResult<bool>
    where
        S: NotificationSink + ?Sized,
    {
        let Some(amount) = self.prompt_amount("Amount: ")? else {
            return Ok(false);
        };
        let Some(category) = self.prompt("Category: ")? else {
            return Ok(false);
        };
        profile.account_mut().add_income(amount, category, sink);
        Ok(true)
    }

    fn add_expense<K, S>(&mut self, profile: &mut UserProfile<K>, sink: &mut S) -> FinanceResult<bool>
    where
        S: NotificationSink + ?Sized,
    {
        let Some(amount) = self.prompt_amount("Amount: ")? else {
            return Ok(false);
        };
        let Some(category) = self.prompt("Category: ")? else {
            return Ok(false);
        };
        profile.account_mut().add_expense(amount, category, sink);
        Ok(true)
    }

    fn create_budget<K>(&mut self, profile: &mut UserProfile<K>) -> FinanceResult<bool> {
        let Some(category) = self.prompt("Category: ")? else {
            return Ok(false);
        };
        let Some(limit) = self.prompt_amount("Monthly Limit: ")? else {
            return Ok(false);
        };
        let id = profile.account_mut().add_budget(limit, category);
        self.say(&format!("Created budget {}", id))?;
        Ok(true)
    }

    fn add_investment<K, S>(
        &mut self,
        profile: &mut UserProfile<K>,
        sink: &mut S,
    ) -> FinanceResult<bool>
    where
        S: NotificationSink + ?Sized,
    {
        let Some(kind) = self.prompt("Type (FD/Stocks/Mutual Funds/PPF/ELSS): ")? else {
            return Ok(false);
        };
        let Some(amount) = self.prompt_amount("Amount: ")? else {
            return Ok(false);
        };
        let Some(expected_return) =
            self.prompt_parsed("Expected Returns (%): ", "percentage", |s| s.parse::<f64>().ok())?
        else {
            return Ok(false);
        };
        let Some(risk) =
            self.prompt_parsed("Risk Level (Low/Medium/High): ", "risk level", RiskLevel::parse)?
        else {
            return Ok(false);
        };
        profile.add_investment(kind, amount, expected_return, risk, sink);
        Ok(true)
    }

    fn update_profile<K, S>(
        &mut self,
        profile: &mut UserProfile<K>,
        sink: &mut S,
    ) -> FinanceResult<bool>
    where
        S: NotificationSink + ?Sized,
    {
        let Some(name) = self.prompt("New Name: ")? else {
            return Ok(false);
        };
        let Some(email) = self.prompt("New Email: ")? else {
            return Ok(false);
        };
        profile.update_profile(name, email, sink);
        Ok(true)
    }

    fn adjust_budget<K, S>(
        &mut self,
        profile: &mut UserProfile<K>,
        sink: &mut S,
    ) -> FinanceResult<bool>
    where
        S: NotificationSink + ?Sized,
    {
        let Some(id) =
            self.prompt_parsed("Budget ID: ", "budget id", |s| s.parse::<BudgetId>().ok())?
        else {
            return Ok(false);
        };
        let Some(limit) = self.prompt_amount("New Limit: ")? else {
            return Ok(false);
        };

        match profile.account_mut().budget_mut(id) {
            Some(budget) => budget.adjust(limit, sink),
            None => self.say(&FinanceError::budget_not_found(id.to_string()).to_string())?,
        }
        Ok(true)
    }
}

fn shell_error(err: std::io::Error) -> FinanceError {
    FinanceError::Shell(err.to_string())
}
