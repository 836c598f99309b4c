use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use fundcheck::cli::{
    handle_account_command, handle_check_command, handle_history_command, AccountCommands,
    CheckArgs, CheckOutcome, HistoryArgs,
};
use fundcheck::config::{FundcheckPaths, Settings, DATA_DIR_ENV};
use fundcheck::history::HistoryLog;
use fundcheck::storage::{self, AccountStore};

#[derive(Parser)]
#[command(
    name = "fundcheck",
    version,
    about = "Check whether an account holds enough funds for a transfer",
    long_about = "fundcheck keeps a small set of named accounts and tells you, \
                  before you move money, whether an account can cover a transfer \
                  and by how much it falls short if not."
)]
struct Cli {
    /// Directory holding settings, accounts and history
    #[arg(long, global = true, env = DATA_DIR_ENV, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a transfer amount is covered
    Check(CheckArgs),

    /// Account management commands
    #[command(subcommand)]
    Account(AccountCommands),

    /// Show recent changes to accounts
    History(HistoryArgs),

    /// Create the data directory with default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let data_dir = cli.data_dir;

    let Some(command) = cli.command else {
        println!("fundcheck - transfer balance checks");
        println!();
        println!("Run 'fundcheck --help' for usage information.");
        println!("Run 'fundcheck check 100 --account Checking' to check a transfer.");
        return Ok(());
    };

    match command {
        Commands::Check(args) => {
            let (settings, store) = if args.needs_store() {
                let paths = FundcheckPaths::resolve(data_dir)?;
                let store = AccountStore::open(paths.accounts_file())?;
                (Settings::load(&paths)?, Some(store))
            } else {
                // A literal balance works without any data directory
                let settings = match FundcheckPaths::resolve(data_dir) {
                    Ok(paths) => Settings::load(&paths)?,
                    Err(_) => Settings::default(),
                };
                (settings, None)
            };

            let strict = args.strict || settings.strict_checks;
            let outcome = handle_check_command(store.as_ref(), &settings, &args)?;
            if strict && outcome == CheckOutcome::Insufficient {
                std::process::exit(1);
            }
        }
        Commands::Account(cmd) => {
            let paths = FundcheckPaths::resolve(data_dir)?;
            let settings = Settings::load(&paths)?;
            let mut store = AccountStore::open(paths.accounts_file())?;
            let history = HistoryLog::new(paths.history_file());
            handle_account_command(&mut store, &history, &settings, cmd)?;
        }
        Commands::History(args) => {
            let paths = FundcheckPaths::resolve(data_dir)?;
            let settings = Settings::load(&paths)?;
            let store = AccountStore::open(paths.accounts_file())?;
            let history = HistoryLog::new(paths.history_file());
            handle_history_command(&store, &history, &settings, &args)?;
        }
        Commands::Init => {
            let paths = FundcheckPaths::resolve(data_dir)?;
            if storage::initialize(&paths)? {
                println!("Initialized fundcheck at: {}", paths.root().display());
            } else {
                println!("Already initialized at: {}", paths.root().display());
            }
            println!("Run 'fundcheck account create <NAME> --balance <AMOUNT>' to add an account.");
        }
        Commands::Config => {
            let paths = FundcheckPaths::resolve(data_dir)?;
            let settings = Settings::load(&paths)?;
            println!("fundcheck Configuration");
            println!("=======================");
            println!("Data directory:  {}", paths.root().display());
            println!("Accounts file:   {}", paths.accounts_file().display());
            println!("History file:    {}", paths.history_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Decimal places:  {}", settings.decimal_places);
            println!("  Strict checks:   {}", settings.strict_checks);
        }
    }

    Ok(())
}
