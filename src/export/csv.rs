//! CSV Export functionality
//!
//! Writes the ledger as `Category,Amount,Date` rows in insertion order.

use std::io::Write;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::{LedgerError, LedgerResult};
use crate::models::Expense;
use crate::storage::write_atomic;

/// Fixed header row of the export file
pub const HEADER: [&str; 3] = ["Category", "Amount", "Date"];

/// Write expenses as CSV to any writer
///
/// Fields are written verbatim. The `csv` writer quotes a category only when
/// it contains a comma, quote or line break.
pub fn export_ledger_csv<W: Write>(expenses: &[Expense], writer: &mut W) -> LedgerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(HEADER).map_err(write_failure)?;

    for expense in expenses {
        let amount = expense.amount().to_string();
        let date = expense.date_string();
        csv_writer
            .write_record([expense.category(), amount.as_str(), date.as_str()])
            .map_err(write_failure)?;
    }

    csv_writer
        .flush()
        .map_err(|e| LedgerError::WriteFailure(e.to_string()))?;

    Ok(())
}

/// Export a ledger snapshot to `destination`, replacing any existing file
///
/// Fails with `EmptyLedger` before touching the filesystem when there is
/// nothing to export. Returns the number of rows written.
pub fn export_to_path<P: AsRef<Path>>(expenses: &[Expense], destination: P) -> LedgerResult<usize> {
    let destination = destination.as_ref();

    if expenses.is_empty() {
        return Err(LedgerError::EmptyLedger);
    }

    debug!(path = %destination.display(), rows = expenses.len(), "exporting ledger");

    match write_atomic(destination, |writer| export_ledger_csv(expenses, writer)) {
        Ok(()) => {
            info!(path = %destination.display(), rows = expenses.len(), "ledger exported");
            Ok(expenses.len())
        }
        Err(err) => {
            warn!(path = %destination.display(), error = %err, "ledger export failed");
            Err(err)
        }
    }
}

fn write_failure(err: csv::Error) -> LedgerError {
    LedgerError::WriteFailure(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::validate;
    use crate::storage::Ledger;
    use std::fs;
    use tempfile::TempDir;

    fn sample_ledger() -> Ledger {
        let ledger = Ledger::new();
        ledger.append(validate("Rent", "900", "2024-01-05").unwrap());
        ledger.append(validate("Food", "42.5", "2024-01-06").unwrap());
        ledger
    }

    #[test]
    fn test_export_ledger_csv() {
        let ledger = sample_ledger();

        let mut csv_output = Vec::new();
        export_ledger_csv(&ledger.all(), &mut csv_output).unwrap();

        let csv_string = String::from_utf8(csv_output).unwrap();
        assert_eq!(
            csv_string,
            "Category,Amount,Date\nRent,900.0,2024-01-05\nFood,42.5,2024-01-06\n"
        );
    }

    #[test]
    fn test_quotes_commas_and_quotes() {
        let expenses = vec![
            validate("Food, drinks", "3", "2024-01-01").unwrap(),
            validate("The \"good\" stuff", "4", "2024-01-02").unwrap(),
        ];

        let mut csv_output = Vec::new();
        export_ledger_csv(&expenses, &mut csv_output).unwrap();

        let csv_string = String::from_utf8(csv_output).unwrap();
        assert!(csv_string.contains("\"Food, drinks\",3.0,2024-01-01\n"));
        assert!(csv_string.contains("\"The \"\"good\"\" stuff\",4.0,2024-01-02\n"));
    }

    #[test]
    fn test_export_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.csv");
        let expenses = vec![
            validate("Rent", "900", "2024-01-05").unwrap(),
            validate("Food, drinks", "0.1", "2024-01-06").unwrap(),
            validate("Food", "19.99", "2024-02-29").unwrap(),
        ];

        let rows = export_to_path(&expenses, &path).unwrap();
        assert_eq!(rows, 3);

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), HEADER);

        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), expenses.len());
        for (record, expense) in records.iter().zip(&expenses) {
            let reread = validate(&record[0], &record[1], &record[2]).unwrap();
            assert_eq!(&reread, expense);
        }
    }

    #[test]
    fn test_export_empty_ledger_creates_no_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.csv");

        let result = export_to_path(&[], &path);

        assert_eq!(result, Err(LedgerError::EmptyLedger));
        assert!(!path.exists());
    }

    #[test]
    fn test_export_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.csv");
        fs::write(&path, "Category,Amount,Date\nOld,1.0,2020-01-01\nOlder,2.0,2020-01-02\n").unwrap();

        let ledger = sample_ledger();
        export_to_path(&ledger.all(), &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(!contents.contains("Old"));
        assert_eq!(contents.lines().count(), 3);
    }

    #[test]
    fn test_export_write_failure_keeps_ledger() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("no-such-dir").join("expenses.csv");
        let ledger = sample_ledger();
        let before = ledger.all();

        let result = export_to_path(&ledger.all(), &path);

        match result {
            Err(LedgerError::WriteFailure(detail)) => assert!(detail.contains("expenses.csv")),
            other => panic!("expected write failure, got {:?}", other),
        }
        assert_eq!(ledger.all(), before);
    }
}
