//! Login arguments and prompting
//!
//! Any field not given on the command line is asked for interactively.
//! The password prompt is hidden when stdin is a terminal.

use clap::Args;
use std::io::{BufRead, IsTerminal, Write};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::session::Session;
use crate::error::{FinanceError, FinanceResult};

/// Login flags shared by the interactive shell
#[derive(Args, Debug, Default, Clone)]
pub struct LoginArgs {
    /// User ID to log in as
    #[arg(short = 'u', long)]
    pub user_id: Option<u32>,

    /// Email registered for the user
    #[arg(short, long)]
    pub email: Option<String>,

    /// Password (prompted for when omitted)
    #[arg(short, long, env = "POCKETLEDGER_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

/// Completed login answers
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct LoginRequest {
    pub user_id: u32,
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("user_id", &self.user_id)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Fill in missing login fields; `None` if input ends first
pub fn resolve_login<R: BufRead, W: Write>(
    args: &LoginArgs,
    session: &mut Session<'_, R, W>,
) -> FinanceResult<Option<LoginRequest>> {
    let user_id = match args.user_id {
        Some(id) => id,
        None => loop {
            let Some(answer) = session.prompt("Enter User ID: ")? else {
                return Ok(None);
            };
            match answer.parse() {
                Ok(id) => break id,
                Err(_) => tracing::debug!(%answer, "non-numeric user id entered"),
            }
        },
    };

    let email = match &args.email {
        Some(email) => email.clone(),
        None => match session.prompt("Email: ")? {
            Some(email) => email,
            None => return Ok(None),
        },
    };

    let password = match &args.password {
        Some(password) => password.clone(),
        None if std::io::stdin().is_terminal() => rpassword::prompt_password("Password: ")
            .map_err(|e| FinanceError::Shell(format!("Failed to read password: {}", e)))?,
        None => match session.prompt("Password: ")? {
            Some(password) => password,
            None => return Ok(None),
        },
    };

    Ok(Some(LoginRequest {
        user_id,
        email,
        password,
    }))
}
