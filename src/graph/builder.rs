use miette::{Result, WrapErr};
use petgraph::graph::NodeIndex;

use super::types::{ProcessNode, WaitEdge, WaitForGraph};
use crate::description::GraphDescription;

/// Builder for constructing wait-for graphs
///
/// Creates one node per process id and one directed edge per wait entry,
/// preserving the description's edge order so cycle detection stays
/// deterministic for a given input.
pub struct WaitGraphBuilder {
    graph: WaitForGraph,
}

impl Default for WaitGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl WaitGraphBuilder {
    /// Create a new wait-for graph builder
    pub fn new() -> Self {
        Self {
            graph: WaitForGraph::new(),
        }
    }

    /// Build the graph from a description, validating it first
    ///
    /// Nodes are added in id order, so `NodeIndex::new(i)` is process `i`.
    /// The description's wait edges are added in input order.
    pub fn build_from_description(&mut self, description: &GraphDescription) -> Result<()> {
        description
            .validate()
            .wrap_err("Refusing to build a graph from an invalid description")?;

        for id in 0..description.processes {
            self.graph.add_node(ProcessNode::new(id));
        }

        for wait in &description.waits {
            self.graph.add_edge(
                NodeIndex::new(wait.from),
                NodeIndex::new(wait.to),
                WaitEdge {
                    from: wait.from,
                    to: wait.to,
                },
            );
        }

        Ok(())
    }

    /// Get the constructed graph
    pub fn graph(&self) -> &WaitForGraph {
        &self.graph
    }
}
