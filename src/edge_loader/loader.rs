use std::fs;
use std::path::Path;

use super::error::EdgeLoaderError;

//─────────────────────────────────────────────────────────────────────────────

/// Loads an edge list from a file, one `A-B` record per line.
pub fn load_edges_from_file(file_path: &Path) -> Result<Vec<String>, EdgeLoaderError> {
    let display = file_path.display().to_string();
    let file_content = fs::read_to_string(file_path)
        .map_err(|e| EdgeLoaderError::ReadFile(display.clone(), e))?;

    let records = collect_records(&file_content);
    if records.is_empty() {
        return Err(EdgeLoaderError::NoEdgesFound(display));
    }
    Ok(records)
}

/// Trims every line and drops the blank ones. Record syntax is left to the graph.
fn collect_records(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
