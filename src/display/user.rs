//! User directory and profile formatting

use std::fmt;

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::auth::{AuthDirectory, UserProfile};

#[derive(Tabled)]
struct UserRow {
    #[tabled(rename = "User ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
}

/// Format all registered users as a table, in id order
pub fn format_user_list<K>(directory: &AuthDirectory<K>) -> String
where
    K: Ord + Clone + fmt::Display,
{
    if directory.is_empty() {
        return "No users registered.".to_string();
    }

    let rows = directory.users().map(|user| UserRow {
        id: user.id().to_string(),
        name: user.name().to_string(),
        email: user.email().to_string(),
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());
    table.to_string()
}

/// Format the identity section of a profile
pub fn format_profile<K: fmt::Display>(profile: &UserProfile<K>) -> String {
    let mut output = String::new();
    output.push_str(&format!("Welcome, {}!\n", profile.name()));
    output.push_str(&format!("  User ID:     {}\n", profile.id()));
    output.push_str(&format!("  Email:       {}\n", profile.email()));
    output.push_str(&format!("  Account:     {}\n", profile.account().id));
    output.push_str(&format!(
        "  Investments: {}\n",
        profile.investments().len()
    ));
    output
}
