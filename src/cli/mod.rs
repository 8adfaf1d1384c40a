//! CLI command handlers
//!
//! This module bridges terminal input with the ledger core: the interactive
//! session plus the one-shot commands dispatched from `main`.

pub mod session;

pub use session::{AddFields, Command, Session};

use crate::config::{paths::SpendPaths, settings::Settings};
use crate::display::format_budget_table;
use crate::error::LedgerResult;

/// Print the reference budget table
pub fn handle_budget_command() {
    print!("{}", format_budget_table());
}

/// Show current configuration and paths
pub fn handle_config_command(paths: &SpendPaths, settings: &Settings) {
    println!("spendlog Configuration");
    println!("======================");
    println!("Config directory: {}", paths.base_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!("Initialized:      {}", paths.is_initialized());
    println!();
    println!("Settings:");
    println!("  Currency symbol: {}", settings.currency_symbol);
    println!("  Export file:     {}", settings.export_file.display());
    println!("  Chart width:     {}", settings.chart_width);
    println!("  Log level:       {}", settings.log_level);
}

/// Write the settings file with the current (or default) values
pub fn handle_init_command(paths: &SpendPaths, settings: &Settings) -> LedgerResult<()> {
    println!("Initializing spendlog at: {}", paths.base_dir().display());
    settings.save(paths)?;
    println!("Settings written to {}", paths.settings_file().display());
    Ok(())
}
