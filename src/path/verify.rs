//! Re-walks finished paths against the adjacency structure.

use std::collections::HashMap;

use super::explorer::CavePath;
use crate::graph::{CaveGraph, CaveId};

/// A single rule broken by a path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathViolation {
    Empty,
    WrongFirst(CaveId),
    WrongLast(CaveId),
    /// Caves follow `end` on the path.
    StrayCaves { after_end: usize },
    MissingArc { from: CaveId, to: CaveId },
    /// Repeated small-cave visits exceed the budget.
    RevisitsExceeded { used: usize, budget: usize },
}

/// Returns every violation found on `path`; an empty list means the path is valid.
pub fn verify_path(graph: &CaveGraph, path: &CavePath, revisit_budget: usize) -> Vec<PathViolation> {
    let caves = path.caves();
    let (Some(&first), Some(&last)) = (caves.first(), caves.last()) else {
        return vec![PathViolation::Empty];
    };

    let mut violations = Vec::new();
    if first != graph.start() {
        violations.push(PathViolation::WrongFirst(first));
    }
    if last != graph.end() {
        violations.push(PathViolation::WrongLast(last));
    }
    if let Some(pos) = caves.iter().position(|&c| c == graph.end()) {
        if pos + 1 < caves.len() {
            violations.push(PathViolation::StrayCaves {
                after_end: caves.len() - pos - 1,
            });
        }
    }
    for pair in caves.windows(2) {
        if !graph.has_arc(pair[0], pair[1]) {
            violations.push(PathViolation::MissingArc {
                from: pair[0],
                to: pair[1],
            });
        }
    }

    let mut small_counts: HashMap<CaveId, usize> = HashMap::new();
    for &cave in caves.iter().filter(|&&c| graph.is_small(c)) {
        *small_counts.entry(cave).or_default() += 1;
    }
    let used: usize = small_counts.values().map(|n| n - 1).sum();
    if used > revisit_budget {
        violations.push(PathViolation::RevisitsExceeded {
            used,
            budget: revisit_budget,
        });
    }
    violations
}

/// Verifies every path, pairing each failing path index with its violations.
pub fn verify_all(
    graph: &CaveGraph,
    paths: &[CavePath],
    revisit_budget: usize,
) -> Vec<(usize, Vec<PathViolation>)> {
    paths
        .iter()
        .enumerate()
        .map(|(i, p)| (i, verify_path(graph, p, revisit_budget)))
        .filter(|(_, v)| !v.is_empty())
        .collect()
}
