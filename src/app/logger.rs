use once_cell::sync::Lazy;
use std::fmt::Arguments;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Error as IoError, Write};
use std::path::Path;
use std::sync::Mutex;

// Global static logger instance
static LOGGER: Lazy<Mutex<Option<BufWriter<File>>>> = Lazy::new(|| Mutex::new(None));

/// Initializes the global logger to write to the specified file path.
/// The file is created if missing and truncated otherwise.
pub fn init_global_logger(log_file_path: &Path) -> Result<(), IoError> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_file_path)?;
    let writer = BufWriter::new(file);
    let mut logger_guard = LOGGER
        .lock()
        .map_err(|_| IoError::other("logger mutex poisoned"))?;
    *logger_guard = Some(writer);
    Ok(())
}

/// Writes a verbose message to the global logger.
/// Messages are dropped while the logger is uninitialized.
pub fn log_verbose_message_args(args: Arguments<'_>) {
    write_line("", args);
}

/// Writes a verbose error message to the global logger.
pub fn log_verbose_error_args(args: Arguments<'_>) {
    write_line("ERROR: ", args);
}

fn write_line(prefix: &str, args: Arguments<'_>) {
    match LOGGER.lock() {
        Ok(mut logger_guard) => {
            if let Some(writer) = logger_guard.as_mut() {
                if writeln!(writer, "{}{}", prefix, args).is_err() {
                    eprintln!("Fallback (log write failed): {}{}", prefix, args);
                }
            }
        }
        Err(_) => eprintln!("Fallback (logger mutex error): {}{}", prefix, args),
    }
}

/// Flushes buffered log output to disk.
pub fn flush_global_logger() -> Result<(), IoError> {
    let mut logger_guard = LOGGER
        .lock()
        .map_err(|_| IoError::other("logger mutex poisoned"))?;
    match logger_guard.as_mut() {
        Some(writer) => writer.flush(),
        None => Ok(()),
    }
}
