//! Non-interactive subcommands

use clap::Subcommand;

use crate::auth::AuthDirectory;
use crate::config::{LedgerPaths, Settings};
use crate::display::format_user_list;
use crate::notify::JournalEntry;

/// Subcommands that run instead of the interactive shell
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List registered users
    Users,

    /// Show current configuration and paths
    Config,

    /// Show the most recent journaled notifications
    Journal {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },
}

/// Render the `users` listing
pub fn users_report(directory: &AuthDirectory<u32>) -> String {
    format!("Registered Users:\n{}\n", format_user_list(directory))
}

/// Render the `config` report
pub fn config_report(paths: &LedgerPaths, settings: &Settings) -> String {
    let mut output = String::new();
    output.push_str("PocketLedger Configuration\n");
    output.push_str("==========================\n");
    output.push_str(&format!("Base directory:   {}\n", paths.base_dir().display()));
    output.push_str(&format!("Settings file:    {}\n", paths.settings_file().display()));
    output.push_str(&format!("Journal file:     {}\n", paths.journal_file().display()));
    let roster = settings
        .roster_path(paths)
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(built-in demo users)".to_string());
    output.push_str(&format!("Roster:           {}\n", roster));
    output.push('\n');
    output.push_str("Settings:\n");
    output.push_str(&format!("  Currency symbol:  {}\n", settings.currency_symbol));
    output.push_str(&format!("  Date format:      {}\n", settings.date_format));
    output.push_str(&format!("  Journal enabled:  {}\n", settings.journal_enabled));
    output
}

/// Render journal entries, oldest first
pub fn journal_report(entries: &[JournalEntry]) -> String {
    if entries.is_empty() {
        return "No notifications journaled yet.\n".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        let session = entry.session.as_deref().unwrap_or("-");
        output.push_str(&format!(
            "{} {:>8} {:>4}  {}\n",
            entry.recorded_at.format("%Y-%m-%d %H:%M:%S"),
            session,
            entry.notification.id,
            entry.notification.message
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{bootstrap, Roster};
    use crate::models::Notification;
    use crate::notify::{JournalSink, NotificationSink};
    use tempfile::TempDir;

    #[test]
    fn test_users_report() {
        let roster = Roster::demo();
        let dir = bootstrap(&roster.users).unwrap();
        let output = users_report(&dir);
        assert!(output.starts_with("Registered Users:"));
        assert!(output.contains("ravi@pocketledger.dev"));
    }

    #[test]
    fn test_config_report() {
        let temp = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp.path().to_path_buf());
        let output = config_report(&paths, &Settings::default());

        assert!(output.contains("notifications.log"));
        assert!(output.contains("(built-in demo users)"));
        assert!(output.contains("Journal enabled:  true"));
    }

    #[test]
    fn test_journal_report() {
        let temp = TempDir::new().unwrap();
        let mut sink = JournalSink::new(temp.path().join("notifications.log")).for_session("user-3");
        assert_eq!(
            journal_report(&sink.read_all().unwrap()),
            "No notifications journaled yet.\n"
        );

        sink.deliver(&Notification::new(101, "Budget exceeded for Rent!"));
        let output = journal_report(&sink.read_recent(10).unwrap());
        assert!(output.contains("user-3"));
        assert!(output.contains(" 101  Budget exceeded for Rent!"));
    }
}
