// cave_graph module
mod cave_graph;
// error module
mod error;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the graph module.
//─────────────────────────────────────────────────────────────────────────────
pub use cave_graph::{CaveGraph, CaveId};
pub use error::GraphError;
