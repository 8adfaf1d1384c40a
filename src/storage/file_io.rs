//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't leave a half-written file behind
//! on failure.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::LedgerError;

/// Write a file atomically (write to temp, then rename)
///
/// `write` receives a buffered writer over a sibling temp file. The
/// destination is only replaced once everything was written, flushed and
/// synced; on any failure the temp file is removed and the destination is
/// left as it was. All failures are reported as `WriteFailure`.
pub fn write_atomic<P, F>(path: P, write: F) -> Result<(), LedgerError>
where
    P: AsRef<Path>,
    F: FnOnce(&mut BufWriter<File>) -> Result<(), LedgerError>,
{
    let path = path.as_ref();
    let temp_path = temp_path_for(path);

    let file = File::create(&temp_path).map_err(|e| {
        LedgerError::WriteFailure(format!("Failed to create {}: {}", path.display(), e))
    })?;

    let result = write_and_sync(file, write, path);
    if let Err(err) = result {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }

    fs::rename(&temp_path, path).map_err(|e| {
        // Try to clean up temp file if rename fails
        let _ = fs::remove_file(&temp_path);
        LedgerError::WriteFailure(format!("Failed to replace {}: {}", path.display(), e))
    })?;

    Ok(())
}

fn write_and_sync<F>(file: File, write: F, path: &Path) -> Result<(), LedgerError>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<(), LedgerError>,
{
    let mut writer = BufWriter::new(file);
    write(&mut writer)?;

    writer.flush().map_err(|e| {
        LedgerError::WriteFailure(format!("Failed to flush {}: {}", path.display(), e))
    })?;

    // Sync to disk before rename
    writer.get_ref().sync_all().map_err(|e| {
        LedgerError::WriteFailure(format!("Failed to sync {}: {}", path.display(), e))
    })?;

    Ok(())
}

/// Temp file in the same directory (important for atomic rename)
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
