//! Core graph types
//!
//! The wait-for graph is a petgraph `DiGraph` whose node indices coincide
//! with process ids: process `i` is always node `NodeIndex::new(i)`, because
//! the builder adds nodes in id order before any edge.

use petgraph::graph::DiGraph;

use crate::utils::string::process_label;

/// The directed wait-for graph over process indices
pub type WaitForGraph = DiGraph<ProcessNode, WaitEdge>;

/// A process node in the wait-for graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessNode {
    pub id: usize,
    pub label: String,
}

impl ProcessNode {
    pub fn new(id: usize) -> Self {
        Self {
            id,
            label: process_label(id),
        }
    }
}

/// A wait edge: process `from` is blocked waiting on process `to`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitEdge {
    pub from: usize,
    pub to: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_node_label() {
        let node = ProcessNode::new(7);
        assert_eq!(node.id, 7);
        assert_eq!(node.label, "P7");
    }
}
