use std::collections::HashMap;

use miette::Result;
use petgraph::visit::EdgeRef;

use crate::graph::WaitForGraph;

/// Detector for finding a deadlock cycle in a wait-for graph
///
/// Runs a depth-first search with recursion-stack tracking. The first back
/// edge found closes a cycle, which is reconstructed through parent pointers
/// and stored; the search stops there.
pub struct CycleDetector {
    cycle: Option<WaitCycle>,
}

/// One concrete deadlock cycle
///
/// The path is a forward traversal of wait edges whose first and last
/// elements are the same process, e.g. `[2, 0, 1, 2]` for P2 → P0 → P1 → P2.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitCycle {
    path: Vec<usize>,
}

impl WaitCycle {
    fn new(path: Vec<usize>) -> Self {
        debug_assert!(path.len() >= 2);
        debug_assert_eq!(path.first(), path.last());
        Self { path }
    }

    /// The cycle as an ordered sequence of process ids, first == last
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// The distinct processes caught in the cycle, sorted by id
    pub fn processes(&self) -> Vec<usize> {
        let mut processes: Vec<usize> = self.path[..self.path.len() - 1].to_vec();
        processes.sort_unstable();
        processes.dedup();
        processes
    }

    /// The wait edges along the cycle, in traversal order
    pub fn edges(&self) -> Vec<(usize, usize)> {
        self.path.windows(2).map(|w| (w[0], w[1])).collect()
    }

    /// Number of processes in the cycle
    pub fn len(&self) -> usize {
        self.path.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Per-run search state, discarded when detection finishes
struct SearchState {
    /// Successor lists per node, in edge insertion order
    succ: Vec<Vec<usize>>,
    /// Nodes entered by any search so far
    visited: Vec<bool>,
    /// Nodes whose exploration frame is currently open
    on_stack: Vec<bool>,
    /// Tree-edge discovery parents, for path reconstruction only
    parent: HashMap<usize, usize>,
}

impl SearchState {
    fn new(graph: &WaitForGraph) -> Self {
        let n = graph.node_count();
        let mut succ = vec![Vec::new(); n];
        for edge in graph.edge_references() {
            succ[edge.source().index()].push(edge.target().index());
        }
        Self {
            succ,
            visited: vec![false; n],
            on_stack: vec![false; n],
            parent: HashMap::new(),
        }
    }

    /// Explore one DFS tree rooted at `root`, returning the first cycle found
    ///
    /// Uses an explicit stack of (node, next-successor-index) frames instead
    /// of recursion, so depth is not bounded by the call stack. A frame is
    /// popped only after all its successors were tried, which is also the
    /// moment its node leaves the recursion path.
    fn explore(&mut self, root: usize) -> Option<WaitCycle> {
        self.visited[root] = true;
        self.on_stack[root] = true;
        let mut stack: Vec<(usize, usize)> = vec![(root, 0)];

        while let Some(frame) = stack.last_mut() {
            let node = frame.0;
            if frame.1 < self.succ[node].len() {
                let next = self.succ[node][frame.1];
                frame.1 += 1;

                if !self.visited[next] {
                    // Tree edge: record discovery and descend
                    self.parent.insert(next, node);
                    self.visited[next] = true;
                    self.on_stack[next] = true;
                    stack.push((next, 0));
                } else if self.on_stack[next] {
                    // Back edge to an ancestor on the active path
                    return Some(self.reconstruct(node, next));
                }
                // Otherwise a cross/forward edge into a finished node: skip
            } else {
                self.on_stack[node] = false;
                stack.pop();
            }
        }

        None
    }

    /// Rebuild the cycle closed by the back edge `curr` → `ancestor`
    ///
    /// Collects `curr` and its parent chain up to the ancestor inclusive,
    /// appends `curr` to close the loop, then reverses so the result reads as
    /// a forward traversal: `[curr, ancestor, ..., curr]`.
    fn reconstruct(&self, curr: usize, ancestor: usize) -> WaitCycle {
        let mut path = vec![curr];
        let mut node = curr;
        while node != ancestor {
            node = self.parent[&node];
            path.push(node);
        }
        path.push(curr);
        path.reverse();
        WaitCycle::new(path)
    }
}

impl Default for CycleDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl CycleDetector {
    /// Create a new cycle detector
    pub fn new() -> Self {
        Self { cycle: None }
    }

    /// Search the graph for a wait-for cycle
    ///
    /// Every unvisited node from 0 to N-1 is tried as a search root, so
    /// disconnected components are covered. The graph is never mutated; all
    /// search state lives in this call. Re-running on the same graph yields
    /// the same result.
    pub fn detect(&mut self, graph: &WaitForGraph) -> Result<()> {
        let mut state = SearchState::new(graph);

        self.cycle = None;
        for root in 0..graph.node_count() {
            if state.visited[root] {
                continue;
            }
            if let Some(cycle) = state.explore(root) {
                self.cycle = Some(cycle);
                break;
            }
        }

        Ok(())
    }

    /// The detected cycle, if the last run found one
    pub fn cycle(&self) -> Option<&WaitCycle> {
        self.cycle.as_ref()
    }

    /// Whether the last run found a deadlock
    pub fn has_deadlock(&self) -> bool {
        self.cycle.is_some()
    }
}
