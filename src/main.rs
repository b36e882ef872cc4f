//! Saffron - Persian language-learning progression tracker
//!
//! CLI entry point.

use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Utc;
use clap::{Parser, Subcommand};

use saffron::cli::{
    CompleteCommand, HomeCommand, LevelsCommand, LoginCommand, LogoutCommand, SignupCommand,
    VocabCommand,
};
use saffron::config::Config;
use saffron::content::QuizItem;
use saffron::error::{Result, SaffronError};
use saffron::storage::{FileAccountStore, SessionPointer};

/// Saffron - Persian language-learning progression tracker
#[derive(Parser)]
#[command(name = "saffron")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new learner account and start a session
    Signup {
        /// Display name
        name: String,
        /// Contact handle (unique, case-insensitive)
        email: String,
        /// Password
        password: String,
        /// Output as JSON
        #[arg(long, short)]
        json: bool,
    },

    /// Log in and reconcile the activity streak
    Login {
        /// Contact handle
        email: String,
        /// Password
        password: String,
        /// Output as JSON
        #[arg(long, short)]
        json: bool,
    },

    /// End the active session
    Logout {
        /// Output as JSON
        #[arg(long, short)]
        json: bool,
    },

    /// Show progress and the leaderboard
    Home {
        /// Account id (defaults to the active session)
        #[arg(long)]
        account: Option<String>,
        /// Output as JSON
        #[arg(long, short)]
        json: bool,
    },

    /// Record a completed practice stage
    Complete {
        /// Level the stage belongs to
        #[arg(long)]
        level: u32,
        /// Stage number (1-10; out-of-range values are clamped)
        #[arg(long)]
        stage: u8,
        /// Experience earned
        #[arg(long)]
        xp: u32,
        /// Path to the quiz items JSON produced by the content provider
        /// ("-" for stdin); items without word metadata are fine
        #[arg(long)]
        quiz: Option<PathBuf>,
        /// Account id (defaults to the active session)
        #[arg(long)]
        account: Option<String>,
        /// Output as JSON
        #[arg(long, short)]
        json: bool,
    },

    /// List the vocabulary ledger
    Vocab {
        /// Filter by word text, transliteration or meaning
        filter: Option<String>,
        /// Account id (defaults to the active session)
        #[arg(long)]
        account: Option<String>,
        /// Output as JSON
        #[arg(long, short)]
        json: bool,
    },

    /// Show curriculum progress
    Levels {
        /// Account id (defaults to the active session)
        #[arg(long)]
        account: Option<String>,
        /// Output as JSON
        #[arg(long, short)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            if err.is_user_error() {
                ExitCode::from(1)
            } else {
                ExitCode::from(2)
            }
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load();
    let store = FileAccountStore::new()?;
    let pointer = SessionPointer::new()?;

    match cli.command {
        Commands::Signup {
            name,
            email,
            password,
            json,
        } => {
            let cmd = SignupCommand::new(store, pointer);
            let output = cmd.run(&name, &email, &password)?;
            print!("{}", cmd.format_output(&output, json));
        }

        Commands::Login {
            email,
            password,
            json,
        } => {
            let cmd = LoginCommand::new(store, pointer);
            let output = cmd.run(&email, &password, Utc::now())?;
            print!("{}", cmd.format_output(&output, json));
        }

        Commands::Logout { json } => {
            let cmd = LogoutCommand::new(pointer);
            let output = cmd.run()?;
            print!("{}", cmd.format_output(&output, json));
        }

        Commands::Home { account, json } => {
            let account_id = pointer.resolve(account.as_deref())?;
            let cmd = HomeCommand::new(store, config);
            let output = cmd.run(&account_id)?;
            print!("{}", cmd.format_output(&output, json));
        }

        Commands::Complete {
            level,
            stage,
            xp,
            quiz,
            account,
            json,
        } => {
            let account_id = pointer.resolve(account.as_deref())?;
            let items = match quiz {
                Some(path) => read_quiz_items(&path)?,
                None => Vec::new(),
            };
            let cmd = CompleteCommand::new(store);
            let output = cmd.run_with_quiz(&account_id, level, stage, xp, &items, Utc::now())?;
            print!("{}", cmd.format_output(&output, json));
        }

        Commands::Vocab {
            filter,
            account,
            json,
        } => {
            let account_id = pointer.resolve(account.as_deref())?;
            let cmd = VocabCommand::new(store);
            let output = cmd.run(&account_id, filter.as_deref())?;
            print!("{}", cmd.format_output(&output, json));
        }

        Commands::Levels { account, json } => {
            let account_id = pointer.resolve(account.as_deref())?;
            let cmd = LevelsCommand::new(store);
            let output = cmd.run(&account_id)?;
            print!("{}", cmd.format_output(&output, json));
        }
    }

    Ok(())
}

/// Read provider quiz items from a file, or stdin when the path is "-".
fn read_quiz_items(path: &PathBuf) -> Result<Vec<QuizItem>> {
    let content = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| SaffronError::storage(path, e))?;
        buffer
    } else {
        fs::read_to_string(path).map_err(|e| SaffronError::storage(path, e))?
    };

    let items: Vec<QuizItem> = serde_json::from_str(&content)?;
    Ok(items)
}
