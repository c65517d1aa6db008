use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use pocketledger::auth::{bootstrap, Roster};
use pocketledger::cli::{
    config_report, journal_report, resolve_login, users_report, Commands, LoginArgs, Session,
};
use pocketledger::config::{LedgerPaths, Settings};
use pocketledger::display::format_user_list;
use pocketledger::logging::init_tracing;
use pocketledger::notify::{ConsoleSink, JournalSink, NotificationSink, Tee};

#[derive(Parser)]
#[command(
    name = "pocketledger",
    version,
    about = "Personal finance ledger for the terminal",
    long_about = "PocketLedger tracks income, expenses, category budgets and an \
                  investment portfolio for a small set of predefined users, with \
                  budget alerts and a simple tax checkup."
)]
struct Cli {
    /// Roster file (JSON or YAML) defining the users
    #[arg(short, long, global = true)]
    roster: Option<PathBuf>,

    /// Do not append notifications to the journal file
    #[arg(long)]
    no_journal: bool,

    #[command(flatten)]
    login: LoginArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing();

    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_init(&paths)?;

    match cli.command {
        Some(Commands::Config) => {
            print!("{}", config_report(&paths, &settings));
            return Ok(ExitCode::SUCCESS);
        }
        Some(Commands::Journal { limit }) => {
            let entries = JournalSink::new(paths.journal_file()).read_recent(limit)?;
            print!("{}", journal_report(&entries));
            return Ok(ExitCode::SUCCESS);
        }
        _ => {}
    }

    let roster = match cli.roster.clone().or_else(|| settings.roster_path(&paths)) {
        Some(path) => Roster::load(&path)
            .with_context(|| format!("Could not load roster {}", path.display()))?,
        None => Roster::demo(),
    };
    let mut directory = bootstrap(&roster.users)?;
    drop(roster);

    if let Some(Commands::Users) = cli.command {
        print!("{}", users_report(&directory));
        return Ok(ExitCode::SUCCESS);
    }

    println!("Welcome to PocketLedger");
    println!();
    println!("Registered Users:");
    println!("{}", format_user_list(&directory));
    println!();
    println!("Login to Continue");

    let mut session = Session::new(io::stdin().lock(), io::stdout(), &settings);

    let Some(login) = resolve_login(&cli.login, &mut session)? else {
        println!();
        println!("Authentication Failed!");
        return Ok(ExitCode::FAILURE);
    };

    let Some(profile) = directory.authenticate(&login.user_id, &login.email, &login.password)
    else {
        println!();
        println!("Authentication Failed!");
        return Ok(ExitCode::FAILURE);
    };
    println!();

    let console = ConsoleSink::stdout().with_date_format(settings.date_format.clone());
    let mut sink: Box<dyn NotificationSink> = if settings.journal_enabled && !cli.no_journal {
        paths.ensure_directories()?;
        let journal = JournalSink::new(paths.journal_file())
            .for_session(format!("user-{}", login.user_id));
        Box::new(Tee::new(console, journal))
    } else {
        Box::new(console)
    };

    session.run(profile, sink.as_mut())?;

    Ok(ExitCode::SUCCESS)
}
