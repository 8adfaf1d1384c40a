//! Interactive ledger session
//!
//! A line-oriented shell over one in-memory [`Ledger`]. It reads commands
//! from any `BufRead` and writes results to any `Write`, so the same code
//! drives the terminal and the tests.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::config::Settings;
use crate::display::{
    format_budget_table, format_category_chart, format_expense_line, format_expense_table,
};
use crate::error::{LedgerError, LedgerResult};
use crate::export::export_to_path;
use crate::models::{validate, DATE_FORMAT};
use crate::reports::Totals;
use crate::storage::Ledger;

const HELP: &str = "\
Commands:
  add [category;amount;date]  Record an expense (prompts when no fields are given)
  total                       Show total spent and per-category subtotals
  save [path]                 Export all expenses to CSV
  delete                      Remove the most recently added expense
  list                        Show all expenses
  budget                      Show the estimated reference budget
  chart                       Show spending by category
  help                        Show this help
  quit                        Leave the session
";

/// Raw form fields for an expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddFields {
    pub category: String,
    pub amount: String,
    /// `None` means today's date
    pub date: Option<String>,
}

/// A parsed session command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `add` with inline fields, or `None` to prompt for them
    Add(Option<AddFields>),
    Total,
    Save(Option<PathBuf>),
    Delete,
    List,
    Budget,
    Chart,
    Help,
    Quit,
    /// Blank line
    Nothing,
}

impl Command {
    /// Parse one input line
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Self::Nothing);
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_lowercase().as_str() {
            "add" if rest.is_empty() => Ok(Self::Add(None)),
            "add" => parse_add_fields(rest).map(|fields| Self::Add(Some(fields))),
            "total" => Ok(Self::Total),
            "save" if rest.is_empty() => Ok(Self::Save(None)),
            "save" => Ok(Self::Save(Some(PathBuf::from(rest)))),
            "delete" => Ok(Self::Delete),
            "list" => Ok(Self::List),
            "budget" => Ok(Self::Budget),
            "chart" => Ok(Self::Chart),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            _ => Err(format!(
                "Unknown command '{}'. Type 'help' for commands.",
                verb
            )),
        }
    }
}

fn parse_add_fields(rest: &str) -> Result<AddFields, String> {
    let parts: Vec<&str> = rest.split(';').collect();
    match parts.as_slice() {
        [category, amount] => Ok(AddFields {
            category: category.to_string(),
            amount: amount.to_string(),
            date: None,
        }),
        [category, amount, date] => Ok(AddFields {
            category: category.to_string(),
            amount: amount.to_string(),
            date: Some(date.to_string()),
        }),
        _ => Err("Usage: add <category>;<amount>[;<date>]".to_string()),
    }
}

/// One interactive session owning one ledger
pub struct Session<R, W> {
    input: R,
    output: W,
    ledger: Ledger,
    settings: Settings,
    export_path: PathBuf,
    today: NaiveDate,
    prompts: bool,
    unsaved: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session with an empty ledger
    pub fn new(input: R, output: W, settings: Settings) -> Self {
        let export_path = settings.export_file.clone();
        Self {
            input,
            output,
            ledger: Ledger::new(),
            settings,
            export_path,
            today: chrono::Local::now().date_naive(),
            prompts: false,
            unsaved: false,
        }
    }

    /// Override where `save` writes without an explicit path
    pub fn with_export_path(mut self, path: PathBuf) -> Self {
        self.export_path = path;
        self
    }

    /// Override the date used for blank date input
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Show the command prompt and form labels (for a terminal)
    pub fn with_prompts(mut self, prompts: bool) -> Self {
        self.prompts = prompts;
        self
    }

    /// The session's ledger
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Run until `quit` or end of input
    pub fn run(&mut self) -> LedgerResult<()> {
        if self.prompts {
            writeln!(self.output, "spendlog - type 'help' for commands.")?;
        }

        loop {
            let Some(line) = self.prompt("> ")? else {
                break;
            };

            match Command::parse(&line) {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(command)?,
                Err(message) => writeln!(self.output, "{}", message)?,
            }
        }

        if self.unsaved && !self.ledger.is_empty() {
            writeln!(
                self.output,
                "Warning: {} unsaved expense(s) discarded.",
                self.ledger.len()
            )?;
        }

        Ok(())
    }

    /// Execute a single command
    pub fn execute(&mut self, command: Command) -> LedgerResult<()> {
        match command {
            Command::Add(fields) => self.add(fields),
            Command::Total => self.total(),
            Command::Save(path) => self.save(path),
            Command::Delete => self.delete(),
            Command::List => {
                let table =
                    format_expense_table(&self.ledger.all(), &self.settings.currency_symbol);
                write!(self.output, "{}", table)?;
                Ok(())
            }
            Command::Budget => {
                write!(self.output, "{}", format_budget_table())?;
                Ok(())
            }
            Command::Chart => self.chart(),
            Command::Help => {
                write!(self.output, "{}", HELP)?;
                Ok(())
            }
            Command::Quit | Command::Nothing => Ok(()),
        }
    }

    fn add(&mut self, fields: Option<AddFields>) -> LedgerResult<()> {
        let fields = match fields {
            Some(fields) => fields,
            None => match self.read_form()? {
                Some(fields) => fields,
                None => return Ok(()),
            },
        };

        let date = fields
            .date
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| self.today.format(DATE_FORMAT).to_string());

        match validate(&fields.category, &fields.amount, &date) {
            Ok(expense) => {
                self.ledger.append(expense);
                self.unsaved = true;
                writeln!(self.output, "Expense added successfully!")?;
            }
            Err(err) => {
                warn!(error = %err, "rejected expense input");
                writeln!(self.output, "Invalid input: {}", err)?;
            }
        }

        Ok(())
    }

    /// Collect the three form fields; `None` if input ends midway
    fn read_form(&mut self) -> LedgerResult<Option<AddFields>> {
        let Some(category) = self.prompt("Category: ")? else {
            return Ok(None);
        };
        let Some(amount) = self.prompt("Amount: ")? else {
            return Ok(None);
        };
        let date_label = format!("Date [{}]: ", self.today.format(DATE_FORMAT));
        let Some(date) = self.prompt(&date_label)? else {
            return Ok(None);
        };

        Ok(Some(AddFields {
            category,
            amount,
            date: Some(date),
        }))
    }

    fn total(&mut self) -> LedgerResult<()> {
        let totals = Totals::from_expenses(&self.ledger.all());
        write!(
            self.output,
            "{}",
            totals.format_terminal(&self.settings.currency_symbol)
        )?;
        Ok(())
    }

    fn save(&mut self, path: Option<PathBuf>) -> LedgerResult<()> {
        let path = path.unwrap_or_else(|| self.export_path.clone());

        match export_to_path(&self.ledger.all(), &path) {
            Ok(rows) => {
                self.unsaved = false;
                info!(rows, "session saved");
                writeln!(self.output, "Expenses saved to {}", path.display())?;
            }
            Err(LedgerError::EmptyLedger) => {
                writeln!(self.output, "No expenses to save.")?;
            }
            Err(err) => {
                writeln!(self.output, "Failed to save expenses: {}", err)?;
            }
        }

        Ok(())
    }

    fn delete(&mut self) -> LedgerResult<()> {
        match self.ledger.remove_last() {
            Ok(expense) => {
                self.unsaved = true;
                writeln!(
                    self.output,
                    "Deleted last expense: {}",
                    format_expense_line(&expense, &self.settings.currency_symbol)
                )?;
            }
            Err(LedgerError::EmptyLedger) => {
                writeln!(self.output, "No expenses to delete.")?;
            }
            Err(err) => return Err(err),
        }
        Ok(())
    }

    fn chart(&mut self) -> LedgerResult<()> {
        let totals = Totals::from_expenses(&self.ledger.all());
        match format_category_chart(
            &totals,
            self.settings.chart_width,
            &self.settings.currency_symbol,
        ) {
            Some(chart) => write!(self.output, "{}", chart)?,
            None => writeln!(self.output, "No expenses available to display.")?,
        }
        Ok(())
    }

    /// Print `label` (in prompt mode) and read one line; `None` at EOF
    fn prompt(&mut self, label: &str) -> LedgerResult<Option<String>> {
        if self.prompts {
            write!(self.output, "{}", label)?;
            self.output.flush()?;
        }

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}
