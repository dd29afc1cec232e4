// cave_graph.rs
// ──────────────────────────────────────────────────────────────────────────────
// Adjacency structure over named caves.  Caves live in an arena and refer to
// their neighbours by index, so the (cyclic) graph needs no shared ownership.
// Arcs touching `start` always point away from it and arcs touching `end`
// always point into it.
// ──────────────────────────────────────────────────────────────────────────────
use std::collections::HashMap;
use std::io::Write;

use super::error::GraphError;

/// Name of the cave every path departs from.
const START_CAVE: &str = "start";
/// Name of the cave every path arrives at.
const END_CAVE: &str = "end";

/// Represents a unique identifier for a cave in the graph.
pub type CaveId = usize;

/// A single named cave and its outgoing arcs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cave {
    name: String,
    small: bool,
    neighbors: Vec<CaveId>,
}

impl Cave {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            small: is_small_name(name),
            neighbors: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Small caves are the ones whose name starts with a lowercase letter.
    pub fn is_small(&self) -> bool {
        self.small
    }

    /// Outgoing arcs in insertion order.
    pub fn neighbors(&self) -> &[CaveId] {
        &self.neighbors
    }
}

fn is_small_name(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_lowercase)
}

/// Splits an edge record of the form `A-B` into its two cave names.
fn parse_edge(record: &str) -> Result<(&str, &str), GraphError> {
    let malformed = |reason: &str| GraphError::MalformedEdge {
        record: record.to_string(),
        reason: reason.to_string(),
    };

    let (from, to) = record
        .split_once('-')
        .ok_or_else(|| malformed("missing '-' separator"))?;
    if to.contains('-') {
        return Err(malformed("more than one '-' separator"));
    }
    if from.is_empty() || to.is_empty() {
        return Err(malformed("cave names must not be empty"));
    }
    Ok((from, to))
}

/// Immutable cave system with a designated `start` and `end`.
#[derive(Clone, Debug)]
pub struct CaveGraph {
    caves: Vec<Cave>,
    start: CaveId,
    end: CaveId,
}

impl CaveGraph {
    /// Builds the graph from `A-B` edge records.
    ///
    /// Caves are created on first mention. Arcs out of `start` and into `end`
    /// are stored one way only; every other edge is stored in both directions.
    ///
    /// # Errors
    /// Returns `GraphError` if a record is malformed, if `start` or `end` is
    /// never mentioned, or if two large caves reachable from `start` are
    /// connected.
    pub fn from_edges<I, S>(records: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = GraphBuilder::default();
        for record in records {
            let (from, to) = parse_edge(record.as_ref())?;
            builder.link(from, to)?;
        }
        builder.finish()
    }

    pub fn start(&self) -> CaveId {
        self.start
    }

    pub fn end(&self) -> CaveId {
        self.end
    }

    /// Number of caves in the graph.
    pub fn cave_count(&self) -> usize {
        self.caves.len()
    }

    /// Returns the cave with the given id, if any.
    pub fn cave(&self, id: CaveId) -> Option<&Cave> {
        self.caves.get(id)
    }

    #[cfg(test)]
    pub(crate) fn lookup(&self, name: &str) -> Option<CaveId> {
        self.caves.iter().position(|cave| cave.name == name)
    }

    /// Iterates over `(id, cave)` pairs in creation order.
    pub fn caves(&self) -> impl Iterator<Item = (CaveId, &Cave)> {
        self.caves.iter().enumerate()
    }

    /// Outgoing arcs of `id`; empty for an unknown id.
    pub fn neighbors(&self, id: CaveId) -> &[CaveId] {
        self.cave(id).map(Cave::neighbors).unwrap_or(&[])
    }

    /// Name of `id`; empty for an unknown id.
    pub fn name(&self, id: CaveId) -> &str {
        self.cave(id).map(Cave::name).unwrap_or("")
    }

    pub fn is_small(&self, id: CaveId) -> bool {
        self.cave(id).is_some_and(Cave::is_small)
    }

    /// True if an arc `from -> to` is stored.
    #[cfg(test)]
    pub(crate) fn has_arc(&self, from: CaveId, to: CaveId) -> bool {
        self.neighbors(from).contains(&to)
    }

    /// Writes every cave with its size class and outgoing arcs.
    pub fn write_adjacency(&self, writer: &mut dyn Write) -> std::io::Result<()> {
        writeln!(writer, "=== CAVE GRAPH ===")?;
        writeln!(writer, "Caves: {}", self.caves.len())?;
        writeln!(writer)?;
        for (id, cave) in self.caves() {
            let size = if cave.is_small() { "small" } else { "large" };
            let targets: Vec<&str> = cave.neighbors().iter().map(|&n| self.name(n)).collect();
            writeln!(writer, "Cave {} '{}' ({})", id, cave.name(), size)?;
            writeln!(writer, "  -> [{}]", targets.join(", "))?;
        }
        Ok(())
    }
}

/// Accumulates caves and arcs until `start` and `end` can be resolved.
#[derive(Default)]
struct GraphBuilder {
    caves: Vec<Cave>,
    index: HashMap<String, CaveId>,
}

impl GraphBuilder {
    fn intern(&mut self, name: &str) -> CaveId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = self.caves.len();
        self.caves.push(Cave::new(name));
        self.index.insert(name.to_string(), id);
        id
    }

    fn link(&mut self, from: &str, to: &str) -> Result<(), GraphError> {
        if from == to && (from == START_CAVE || from == END_CAVE) {
            return Err(GraphError::MalformedEdge {
                record: format!("{}-{}", from, to),
                reason: format!("'{}' cannot connect to itself", from),
            });
        }
        let from_id = self.intern(from);
        let to_id = self.intern(to);

        if from == START_CAVE || to == END_CAVE {
            self.add_arc(from_id, to_id);
        } else if to == START_CAVE || from == END_CAVE {
            self.add_arc(to_id, from_id);
        } else {
            self.add_arc(from_id, to_id);
            self.add_arc(to_id, from_id);
        }
        Ok(())
    }

    // Repeated edge records produce parallel arcs.
    fn add_arc(&mut self, from: CaveId, to: CaveId) {
        self.caves[from].neighbors.push(to);
    }

    /// Rejects a large cave reachable from `start` that has an arc to another
    /// large cave (itself included). Such a pair admits endless walks.
    fn check_large_pairs(&self, start: CaveId) -> Result<(), GraphError> {
        let mut seen = vec![false; self.caves.len()];
        let mut stack = vec![start];
        seen[start] = true;

        while let Some(id) = stack.pop() {
            let cave = &self.caves[id];
            for &next in cave.neighbors() {
                if !cave.is_small() && !self.caves[next].is_small() {
                    return Err(GraphError::AdjacentLargeCaves(
                        cave.name().to_string(),
                        self.caves[next].name().to_string(),
                    ));
                }
                if !seen[next] {
                    seen[next] = true;
                    stack.push(next);
                }
            }
        }
        Ok(())
    }

    fn finish(self) -> Result<CaveGraph, GraphError> {
        let start = *self.index.get(START_CAVE).ok_or(GraphError::MissingStart)?;
        let end = *self.index.get(END_CAVE).ok_or(GraphError::MissingEnd)?;
        self.check_large_pairs(start)?;
        Ok(CaveGraph {
            caves: self.caves,
            start,
            end,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(graph: &CaveGraph, id: CaveId) -> Vec<&str> {
        graph.neighbors(id).iter().map(|&n| graph.name(n)).collect()
    }

    #[test]
    fn parse_edge_splits_on_hyphen() {
        assert_eq!(parse_edge("start-A").unwrap(), ("start", "A"));
        assert_eq!(parse_edge("kj-HN").unwrap(), ("kj", "HN"));
    }

    #[test]
    fn parse_edge_rejects_malformed_records() {
        for record in ["startA", "a-b-c", "-b", "a-", "-"] {
            assert!(
                matches!(parse_edge(record), Err(GraphError::MalformedEdge { .. })),
                "{record} should be rejected"
            );
        }
    }

    #[test]
    fn small_caves_are_lowercase() {
        let graph = CaveGraph::from_edges(["start-A", "A-b", "b-end"]).unwrap();
        assert!(graph.is_small(graph.start()));
        assert!(graph.is_small(graph.end()));
        assert!(graph.is_small(graph.lookup("b").unwrap()));
        assert!(!graph.is_small(graph.lookup("A").unwrap()));
    }

    #[test]
    fn arcs_never_enter_start_or_leave_end() {
        // Edges listed in both orientations around start and end.
        let graph =
            CaveGraph::from_edges(["A-start", "start-b", "end-A", "b-end", "A-b"]).unwrap();
        let (start, end) = (graph.start(), graph.end());

        assert_eq!(names(&graph, start), vec!["A", "b"]);
        assert!(graph.neighbors(end).is_empty());
        for (id, _) in graph.caves() {
            assert!(!graph.has_arc(id, start));
        }
        assert_eq!(names(&graph, graph.lookup("A").unwrap()), vec!["end", "b"]);
        assert_eq!(names(&graph, graph.lookup("b").unwrap()), vec!["end", "A"]);
    }

    #[test]
    fn interior_edges_are_bidirectional_in_insertion_order() {
        let graph = CaveGraph::from_edges([
            "start-A", "start-b", "A-c", "A-b", "b-d", "A-end", "b-end",
        ])
        .unwrap();
        assert_eq!(names(&graph, graph.lookup("A").unwrap()), vec!["c", "b", "end"]);
        assert_eq!(names(&graph, graph.lookup("b").unwrap()), vec!["A", "d", "end"]);
        assert_eq!(names(&graph, graph.lookup("c").unwrap()), vec!["A"]);
        assert_eq!(names(&graph, graph.lookup("d").unwrap()), vec!["b"]);
    }

    #[test]
    fn repeated_edges_add_parallel_arcs() {
        let graph = CaveGraph::from_edges(["start-A", "A-b", "A-b", "b-end"]).unwrap();
        assert_eq!(names(&graph, graph.lookup("A").unwrap()), vec!["b", "b"]);
        assert_eq!(names(&graph, graph.lookup("b").unwrap()), vec!["A", "A", "end"]);
    }

    #[test]
    fn missing_start_or_end_is_rejected() {
        assert_eq!(
            CaveGraph::from_edges(["A-b", "b-end"]).unwrap_err(),
            GraphError::MissingStart
        );
        assert_eq!(
            CaveGraph::from_edges(["start-A", "A-b"]).unwrap_err(),
            GraphError::MissingEnd
        );
        assert_eq!(
            CaveGraph::from_edges(Vec::<String>::new()).unwrap_err(),
            GraphError::MissingStart
        );
    }

    #[test]
    fn adjacent_large_caves_are_rejected() {
        let err = CaveGraph::from_edges(["start-A", "A-B", "B-end"]).unwrap_err();
        assert_eq!(err, GraphError::AdjacentLargeCaves("A".into(), "B".into()));
        assert!(CaveGraph::from_edges(["start-A", "A-A", "A-end"]).is_err());
    }

    #[test]
    fn unreachable_large_pairs_are_accepted() {
        let graph = CaveGraph::from_edges(["start-A", "A-end", "X-Y", "Y-Y"]).unwrap();
        assert_eq!(graph.cave_count(), 5);
        assert_eq!(names(&graph, graph.lookup("X").unwrap()), vec!["Y"]);

        // Reaching the pair through end does not make it reachable from start.
        assert!(CaveGraph::from_edges(["start-a", "a-end", "end-X", "X-Y"]).is_ok());
    }

    #[test]
    fn start_and_end_self_loops_are_rejected() {
        for record in ["start-start", "end-end"] {
            let err = CaveGraph::from_edges(["start-A", "A-end", record]).unwrap_err();
            assert!(matches!(err, GraphError::MalformedEdge { .. }));
        }
    }

    #[test]
    fn malformed_record_aborts_construction() {
        let err = CaveGraph::from_edges(["start-A", "Aend"]).unwrap_err();
        assert!(matches!(err, GraphError::MalformedEdge { .. }));
    }

    #[test]
    fn adjacency_dump_lists_every_cave() {
        let graph = CaveGraph::from_edges(["start-A", "A-end"]).unwrap();
        let mut out = Vec::new();
        graph.write_adjacency(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Caves: 3"));
        assert!(text.contains("Cave 0 'start' (small)"));
        assert!(text.contains("Cave 1 'A' (large)"));
        assert!(text.contains("  -> [end]"));
    }
}
