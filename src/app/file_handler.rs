//! File system helpers for the application layer.
//!
//! Validates the edge list path and opens or writes the files the run
//! produces. Uses the logging macros from the parent `app` module.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Error as IoError, Write};
use std::path::Path;

use super::error::AppError;
use super::verbose_eprintln;

/// Checks that `edges_file` exists and is a regular file.
///
/// # Errors
/// Returns `AppError::InvalidPath` if the path is missing or not a file.
pub fn validate_edge_file(edges_file: &Path, quiet_mode: bool) -> Result<(), AppError> {
    if !edges_file.exists() {
        let error_msg = format!("File not found: {}", edges_file.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::InvalidPath(error_msg));
    }
    if !edges_file.is_file() {
        let error_msg = format!("Path is not a file: {}", edges_file.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::InvalidPath(error_msg));
    }
    Ok(())
}

/// Writes `content` to `file_path`, creating or truncating it, and flushes
/// before returning.
pub fn write_content_to_file(file_path: &Path, content: &[u8]) -> Result<(), IoError> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(file_path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(content)?;
    writer.flush()?;
    Ok(())
}

/// Opens a fresh buffered writer for the graph details log.
/// The caller owns flushing; the buffer is also flushed on drop.
pub fn init_graph_log_writer(file_path: &Path) -> Result<BufWriter<File>, IoError> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(file_path)?;
    Ok(BufWriter::new(file))
}
