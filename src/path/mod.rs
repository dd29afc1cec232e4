// explorer module
mod explorer;
// report module
pub mod report;

#[cfg(test)]
mod verify;


//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the explorer module.
//─────────────────────────────────────────────────────────────────────────────
pub use explorer::{CavePath, PathExplorer, PathSummary, VisitMode};
pub use report::write_report;
