use std::collections::HashSet;

use crate::graph::{CaveGraph, CaveId};

/// How often a small cave may be entered along one path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisitMode {
    /// Every small cave is visited at most once.
    Strict,
    /// A single small cave may be visited twice; all others at most once.
    Relaxed,
}

impl VisitMode {
    pub fn from_relaxed(relaxed: bool) -> Self {
        if relaxed {
            VisitMode::Relaxed
        } else {
            VisitMode::Strict
        }
    }

    /// Number of repeated small-cave visits a path may spend.
    pub fn revisit_budget(self) -> usize {
        match self {
            VisitMode::Strict => 0,
            VisitMode::Relaxed => 1,
        }
    }
}

/// One complete route from `start` to `end`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CavePath {
    caves: Vec<CaveId>,
}

impl CavePath {
    #[cfg(test)]
    pub(crate) fn from_caves(caves: Vec<CaveId>) -> Self {
        Self { caves }
    }

    #[cfg(test)]
    pub(crate) fn caves(&self) -> &[CaveId] {
        &self.caves
    }

    /// Number of caves on the path, `start` and `end` included.
    pub fn cave_count(&self) -> usize {
        self.caves.len()
    }

    pub fn names<'g>(&self, graph: &'g CaveGraph) -> Vec<&'g str> {
        self.caves.iter().map(|&id| graph.name(id)).collect()
    }

    /// Comma-separated cave names, e.g. `start,A,b,end`.
    pub fn display(&self, graph: &CaveGraph) -> String {
        self.names(graph).join(",")
    }

    /// Counts visits to small caves other than `start` and `end`.
    pub fn small_visits(&self, graph: &CaveGraph) -> usize {
        self.caves
            .iter()
            .filter(|&&id| id != graph.start() && id != graph.end() && graph.is_small(id))
            .count()
    }

    /// True if some small cave occurs more than once.
    pub fn has_repeated_small(&self, graph: &CaveGraph) -> bool {
        let mut seen = HashSet::new();
        self.caves
            .iter()
            .filter(|&&id| graph.is_small(id))
            .any(|&id| !seen.insert(id))
    }
}

/// Result of one enumeration run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathSummary {
    /// Paths in discovery order.
    pub paths: Vec<CavePath>,
    pub total_count: usize,
    /// Paths with at most one visit to a small cave other than `start`/`end`.
    pub restricted_count: usize,
    /// Paths on which no small cave is visited twice.
    pub single_visit_count: usize,
}

impl PathSummary {
    fn new(graph: &CaveGraph, paths: Vec<CavePath>) -> Self {
        let restricted_count = paths.iter().filter(|p| p.small_visits(graph) <= 1).count();
        let single_visit_count = paths.iter().filter(|p| !p.has_repeated_small(graph)).count();
        Self {
            total_count: paths.len(),
            restricted_count,
            single_visit_count,
            paths,
        }
    }
}

/// Traversal state owned by a single branch of the search.
struct Frame {
    cave: CaveId,
    path: Vec<CaveId>,
    visited_small: HashSet<CaveId>,
    revisits_left: usize,
}

/// `PathExplorer` is responsible for finding all start-to-end paths in a `CaveGraph`.
pub struct PathExplorer;

impl PathExplorer {
    /// Enumerates every path allowed by `mode`.
    pub fn enumerate(graph: &CaveGraph, mode: VisitMode) -> PathSummary {
        Self::enumerate_with_budget(graph, mode.revisit_budget())
    }

    /// Enumerates every path on which small caves are re-entered at most
    /// `revisit_budget` times in total.
    pub fn enumerate_with_budget(graph: &CaveGraph, revisit_budget: usize) -> PathSummary {
        let paths = Self::traverse(graph, revisit_budget);
        PathSummary::new(graph, paths)
    }

    /// Depth-first search over an explicit stack.
    ///
    /// Each frame carries its own copy of the path prefix, the visited set and
    /// the remaining budget, so sibling branches never observe each other.
    /// Neighbours are pushed in reverse so they are popped in insertion order,
    /// which makes the discovery order identical to a recursive walk.
    fn traverse(graph: &CaveGraph, revisit_budget: usize) -> Vec<CavePath> {
        let end = graph.end();
        let mut all_paths: Vec<CavePath> = Vec::new();
        let mut stack: Vec<Frame> = vec![Frame {
            cave: graph.start(),
            path: Vec::new(),
            visited_small: HashSet::new(),
            revisits_left: revisit_budget,
        }];

        while let Some(Frame {
            cave,
            mut path,
            visited_small,
            revisits_left,
        }) = stack.pop()
        {
            path.push(cave);
            if cave == end {
                all_paths.push(CavePath { caves: path });
                continue;
            }

            for &neighbor in graph.neighbors(cave).iter().rev() {
                if neighbor == end {
                    stack.push(Frame {
                        cave: neighbor,
                        path: path.clone(),
                        visited_small: HashSet::new(),
                        revisits_left,
                    });
                    continue;
                }

                let small = graph.is_small(neighbor);
                let repeat = small && visited_small.contains(&neighbor);
                if repeat && revisits_left == 0 {
                    continue;
                }

                let mut visited = visited_small.clone();
                if small && !repeat {
                    visited.insert(neighbor);
                }
                stack.push(Frame {
                    cave: neighbor,
                    path: path.clone(),
                    visited_small: visited,
                    revisits_left: if repeat { revisits_left - 1 } else { revisits_left },
                });
            }
        }
        all_paths
    }
}
