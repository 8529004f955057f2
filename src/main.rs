use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use finance_tracker::cli::{handle_calc_command, run_shell, CalcArgs};
use finance_tracker::config::{FinancePaths, Settings};
use finance_tracker::logging::{init_tracing, LogTarget};
use finance_tracker::services::{FinanceSession, UpdatePolicy};

#[derive(Parser)]
#[command(
    name = "finance",
    version,
    about = "Personal income, budget and savings calculator",
    long_about = "Finance Tracker records an income, a budget ceiling, a savings goal \
                  and a list of categorized expenses, then reports the remaining \
                  budget, the savings progress and whether the goal is reached."
)]
struct Cli {
    /// Keep recorded expenses when income, budget or goal is updated
    #[arg(long, global = true)]
    carry_expenses: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive terminal form (default)
    #[command(alias = "ui")]
    Tui,

    /// Read commands line by line from stdin or a script
    Shell {
        /// Script file to run instead of stdin
        #[arg(long)]
        script: Option<PathBuf>,
    },

    /// Compute results for one set of figures and expenses
    Calc(CalcArgs),

    /// Write the default configuration file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = FinancePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let log_target = match cli.command {
        None | Some(Commands::Tui) => LogTarget::File(paths.log_file()),
        Some(_) => LogTarget::Stderr,
    };
    init_tracing(&settings.log_level, log_target)?;

    let mut session = FinanceSession::from_settings(&settings);
    if cli.carry_expenses {
        session.set_policy(UpdatePolicy::Preserve);
    }

    match cli.command {
        None | Some(Commands::Tui) => {
            finance_tracker::tui::run_tui(session)?;
        }
        Some(Commands::Shell { script }) => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            match script {
                Some(path) => {
                    let file = File::open(&path)
                        .with_context(|| format!("Failed to open script {}", path.display()))?;
                    run_shell(&mut session, BufReader::new(file), &mut out, false)?;
                }
                None => {
                    let stdin = io::stdin();
                    let interactive = stdin.is_terminal();
                    run_shell(&mut session, stdin.lock(), &mut out, interactive)?;
                }
            }
        }
        Some(Commands::Calc(args)) => {
            let stdout = io::stdout();
            handle_calc_command(&mut session, args, &mut stdout.lock())?;
        }
        Some(Commands::Init) => {
            println!("Initializing Finance Tracker at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Settings written to {}", paths.settings_file().display());
            println!("Run 'finance' to open the form or 'finance shell' for the line shell.");
        }
        Some(Commands::Config) => {
            println!("Finance Tracker Configuration");
            println!("=============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Log file:         {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Carry expenses:   {}", settings.carry_expenses_on_update);
            println!("  Log level:        {}", settings.log_level);
            println!("  Update policy:    {:?}", session.policy());
        }
    }

    Ok(())
}
