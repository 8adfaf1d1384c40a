use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use spendlog::cli::{handle_budget_command, handle_config_command, handle_init_command, Session};
use spendlog::config::{logging, paths::SpendPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "spendlog",
    version,
    about = "Terminal-based personal expense ledger",
    long_about = "spendlog records expenses for the current session, shows totals \
                  by category and saves the ledger to a CSV file."
)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive ledger session (default)
    Session {
        /// CSV file that `save` writes to
        #[arg(short, long, env = "SPENDLOG_EXPORT")]
        output: Option<PathBuf>,
    },

    /// Show the estimated reference budget
    Budget,

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = SpendPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    logging::init(cli.verbose, &settings.log_level);

    let command = cli.command.unwrap_or_else(|| Commands::Session {
        output: std::env::var_os("SPENDLOG_EXPORT").map(PathBuf::from),
    });

    match command {
        Commands::Session { output } => {
            let export_path = output.unwrap_or_else(|| settings.export_file.clone());
            let interactive = io::stdin().is_terminal();
            let stdin = io::stdin();

            let mut session = Session::new(stdin.lock(), io::stdout(), settings)
                .with_export_path(export_path)
                .with_prompts(interactive);
            session.run()?;
        }
        Commands::Budget => handle_budget_command(),
        Commands::Init => handle_init_command(&paths, &settings)?,
        Commands::Config => handle_config_command(&paths, &settings),
    }

    Ok(())
}
