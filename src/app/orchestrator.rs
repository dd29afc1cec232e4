//! Main application orchestrator.
//!
//! Coordinates one run:
//! 1. Initializes logging.
//! 2. Validates the edge list path.
//! 3. Loads the edge list and builds the cave graph.
//! 4. Dumps the adjacency structure to the graph details log.
//! 5. Enumerates paths in the selected visit mode.
//! 6. Writes the report to stdout or to the requested output file.
//!
//! Verbose logging and the path listing are controlled by `quiet`.

use super::cli::Cli;
use super::error::AppError;
use super::file_handler;
use super::logger;
use super::processing;
use super::{verbose_eprintln, verbose_println};
use crate::path::{self, VisitMode};
use std::io::Write;

/// Runs the main application logic based on parsed command-line arguments.
///
/// # Errors
/// Returns `AppError` if the edge list cannot be read, the cave system is
/// invalid, or the report cannot be written.
pub fn run_app(cli: Cli) -> Result<(), AppError> {
    let quiet_mode = cli.quiet;
    let mode = VisitMode::from_relaxed(cli.relaxed);

    if !quiet_mode {
        if let Err(e) = logger::init_global_logger(&cli.log_file) {
            // Verbose file logging is unavailable, but the run itself can continue.
            eprintln!(
                "Warning: Failed to initialize verbose logger ({}): {}. Verbose file logging will be unavailable.",
                cli.log_file.display(),
                e
            );
        } else {
            verbose_println!(
                quiet_mode,
                "Verbose logging initialized to {}",
                cli.log_file.display()
            );
        }
    }

    let result = run_pipeline(&cli, mode);
    if let Err(e) = &result {
        verbose_eprintln!(quiet_mode, "[ERROR] Run aborted: {}", e);
    }

    if !quiet_mode {
        if let Err(e) = logger::flush_global_logger() {
            eprintln!(
                "[WARNING] Failed to perform final flush of {}: {}",
                cli.log_file.display(),
                e
            );
        }
    }
    result
}

fn run_pipeline(cli: &Cli, mode: VisitMode) -> Result<(), AppError> {
    let quiet_mode = cli.quiet;
    file_handler::validate_edge_file(&cli.edges_file, quiet_mode)?;

    verbose_println!(
        quiet_mode,
        "\n============================================================"
    );
    verbose_println!(quiet_mode, "Processing File: {}", cli.edges_file.display());
    verbose_println!(
        quiet_mode,
        "============================================================"
    );

    let graph = processing::load_cave_graph(&cli.edges_file, quiet_mode)?;

    if !quiet_mode {
        match file_handler::init_graph_log_writer(&cli.graph_log) {
            Ok(mut writer) => processing::log_graph_details(&graph, quiet_mode, &mut writer),
            Err(e) => verbose_eprintln!(
                quiet_mode,
                "[WARNING] Failed to open graph details log ({}): {}. Graph details will not be logged.",
                cli.graph_log.display(),
                e
            ),
        }
    }

    let summary = processing::explore_paths(&graph, mode, quiet_mode);

    let mut report = Vec::new();
    path::write_report(&graph, &summary, !quiet_mode, &mut report)?;

    match &cli.output {
        Some(output_path) => {
            file_handler::write_content_to_file(output_path, &report)?;
            verbose_println!(
                quiet_mode,
                "\n[INFO] Report written to {}",
                output_path.display()
            );
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(&report)?;
            handle.flush()?;
        }
    }
    Ok(())
}
