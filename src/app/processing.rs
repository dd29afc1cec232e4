//! The load, build and explore steps of a single run.

use super::error::AppError;
use super::{verbose_eprintln, verbose_println};
use crate::edge_loader;
use crate::graph::CaveGraph;
use crate::path::{CavePath, PathExplorer, PathSummary, VisitMode};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Reads the edge list and builds the cave graph from it.
///
/// # Errors
/// Returns `AppError` if the file cannot be read, holds no records, or
/// describes an invalid cave system.
pub fn load_cave_graph(edges_file: &Path, quiet_mode: bool) -> Result<CaveGraph, AppError> {
    verbose_println!(quiet_mode, "\n[STEP 1] Loading edge list...");
    let records = edge_loader::load_edges_from_file(edges_file)?;
    verbose_println!(quiet_mode, "   => Read {} edge record(s).", records.len());

    verbose_println!(quiet_mode, "\n[STEP 2] Building cave graph...");
    let graph = CaveGraph::from_edges(&records).map_err(|e| {
        verbose_eprintln!(quiet_mode, "[ERROR] Invalid cave system: {}", e);
        e
    })?;
    let small = graph.caves().filter(|(_, cave)| cave.is_small()).count();
    verbose_println!(
        quiet_mode,
        "   => {} cave(s): {} small, {} large.",
        graph.cave_count(),
        small,
        graph.cave_count() - small
    );
    Ok(graph)
}

/// Dumps the adjacency structure to the graph details log.
/// A failed write is logged and otherwise ignored.
pub fn log_graph_details(
    graph: &CaveGraph,
    quiet_mode: bool,
    graph_log_writer: &mut BufWriter<File>,
) {
    if let Err(e) = graph
        .write_adjacency(&mut *graph_log_writer)
        .and_then(|_| graph_log_writer.flush())
    {
        verbose_eprintln!(quiet_mode, "[WARNING] Failed to write graph details: {}", e);
    }
}

/// Runs the path enumeration and logs its summary.
pub fn explore_paths(graph: &CaveGraph, mode: VisitMode, quiet_mode: bool) -> PathSummary {
    verbose_println!(
        quiet_mode,
        "\n[STEP 3] Enumerating paths ({:?} mode, revisit budget {})...",
        mode,
        mode.revisit_budget()
    );
    let summary = PathExplorer::enumerate(graph, mode);
    verbose_println!(quiet_mode, "   => Total paths: {}", summary.total_count);
    verbose_println!(
        quiet_mode,
        "   => Paths with <= 1 small cave visits: {}",
        summary.restricted_count
    );
    verbose_println!(
        quiet_mode,
        "   => Paths without a repeated small cave: {}",
        summary.single_visit_count
    );
    if let Some(longest) = summary.paths.iter().map(CavePath::cave_count).max() {
        verbose_println!(quiet_mode, "   => Longest path visits {} cave(s).", longest);
    }
    summary
}
