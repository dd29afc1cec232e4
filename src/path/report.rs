//! Renders an enumeration result for the console or an output file.

use std::io::Write;

use super::explorer::PathSummary;
use crate::graph::CaveGraph;

/// Writes the report to `writer`.
///
/// When `list_paths` is set every path is written first, one per line as
/// comma-separated cave names in discovery order. The two summary counts
/// always follow.
pub fn write_report(
    graph: &CaveGraph,
    summary: &PathSummary,
    list_paths: bool,
    writer: &mut dyn Write,
) -> std::io::Result<()> {
    if list_paths {
        for path in &summary.paths {
            writeln!(writer, "{}", path.display(graph))?;
        }
    }
    writeln!(writer, "Total paths: {}", summary.total_count)?;
    writeln!(
        writer,
        "Paths with <= 1 small cave visits: {}",
        summary.restricted_count
    )?;
    Ok(())
}
