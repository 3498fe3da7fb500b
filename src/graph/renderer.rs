use std::collections::HashSet;
use std::io::Write;

use miette::Result;
use petgraph::visit::EdgeRef;

use super::types::WaitForGraph;
use crate::detector::WaitCycle;
use crate::error::GridlockError;

// Blue-Orange accessible palette; cycle members get the orange pair
mod colors {
    pub const NORMAL_NODE_FILL: &str = "#E3F2FD"; // Light blue
    pub const NORMAL_NODE_STROKE: &str = "#1976D2"; // Medium blue
    pub const CYCLE_NODE_FILL: &str = "#FFF3E0"; // Light orange
    pub const CYCLE_NODE_STROKE: &str = "#F57C00"; // Vibrant orange
    pub const NORMAL_EDGE: &str = "#64B5F6"; // Soft blue
    pub const CYCLE_EDGE: &str = "#FF6500"; // Deep orange
}

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(GridlockError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(GridlockError::from)
    };
}

/// Renders the wait-for graph in textual and diagram formats
pub struct GraphRenderer {
    highlight_cycle: bool,
}

impl GraphRenderer {
    pub fn new(highlight_cycle: bool) -> Self {
        Self { highlight_cycle }
    }

    fn cycle_nodes(&self, cycle: Option<&WaitCycle>) -> HashSet<usize> {
        if !self.highlight_cycle {
            return HashSet::new();
        }
        cycle
            .map(|c| c.processes().into_iter().collect())
            .unwrap_or_default()
    }

    fn cycle_edges(&self, cycle: Option<&WaitCycle>) -> HashSet<(usize, usize)> {
        if !self.highlight_cycle {
            return HashSet::new();
        }
        cycle
            .map(|c| c.edges().into_iter().collect())
            .unwrap_or_default()
    }

    /// Plain-text listing of each process and what it waits on
    pub fn render_ascii(
        &self,
        graph: &WaitForGraph,
        cycle: Option<&WaitCycle>,
        output: &mut dyn Write,
    ) -> Result<()> {
        if graph.node_count() == 0 {
            writeln_out!(output, "No processes to visualize")?;
            return Ok(());
        }

        writeln_out!(output, "\nWait-For Graph\n")?;

        let in_cycle = self.cycle_nodes(cycle);

        for node_idx in graph.node_indices() {
            let node = &graph[node_idx];
            if in_cycle.contains(&node.id) {
                writeln_out!(output, "{} ⚠️  DEADLOCKED", node.label)?;
            } else {
                writeln_out!(output, "{}", node.label)?;
            }

            let targets: Vec<String> = graph
                .edges(node_idx)
                .map(|edge| graph[edge.target()].label.clone())
                .collect();

            if targets.is_empty() {
                writeln_out!(output, "  └── (not waiting on anyone)")?;
            } else {
                // petgraph iterates outgoing edges newest-first; restore
                // input order for display
                let ordered: Vec<String> = targets.into_iter().rev().collect();
                writeln_out!(output, "  └── waits on: {}", ordered.join(", "))?;
            }
        }

        Ok(())
    }

    /// Graphviz DOT output
    ///
    /// Requests the `circo` engine so processes are laid out on a circle,
    /// which keeps small wait-for rings readable.
    pub fn render_dot(
        &self,
        graph: &WaitForGraph,
        cycle: Option<&WaitCycle>,
        output: &mut dyn Write,
    ) -> Result<()> {
        let in_cycle = self.cycle_nodes(cycle);
        let cycle_edges = self.cycle_edges(cycle);

        writeln_out!(output, "digraph waitfor {{")?;
        writeln_out!(output, "    layout=circo;")?;
        writeln_out!(
            output,
            "    node [shape=circle style=filled fillcolor=\"{}\" color=\"{}\"];",
            colors::NORMAL_NODE_FILL,
            colors::NORMAL_NODE_STROKE
        )?;

        for node_idx in graph.node_indices() {
            let node = &graph[node_idx];
            if in_cycle.contains(&node.id) {
                writeln_out!(
                    output,
                    "    \"{}\" [fillcolor=\"{}\" color=\"{}\" penwidth=2.0];",
                    node.label,
                    colors::CYCLE_NODE_FILL,
                    colors::CYCLE_NODE_STROKE
                )?;
            } else {
                writeln_out!(output, "    \"{}\";", node.label)?;
            }
        }

        for edge in graph.edge_references() {
            let from = &graph[edge.source()];
            let to = &graph[edge.target()];
            if cycle_edges.contains(&(from.id, to.id)) {
                writeln_out!(
                    output,
                    "    \"{}\" -> \"{}\" [color=\"{}\" penwidth=2.0];",
                    from.label,
                    to.label,
                    colors::CYCLE_EDGE
                )?;
            } else {
                writeln_out!(
                    output,
                    "    \"{}\" -> \"{}\" [color=\"{}\"];",
                    from.label,
                    to.label,
                    colors::NORMAL_EDGE
                )?;
            }
        }

        writeln_out!(output, "}}")?;
        Ok(())
    }

    /// Mermaid flowchart output, suitable for embedding in Markdown
    pub fn render_mermaid(
        &self,
        graph: &WaitForGraph,
        cycle: Option<&WaitCycle>,
        output: &mut dyn Write,
    ) -> Result<()> {
        let in_cycle = self.cycle_nodes(cycle);
        let cycle_edges = self.cycle_edges(cycle);

        writeln_out!(output, "graph LR")?;

        for node_idx in graph.node_indices() {
            let node = &graph[node_idx];
            writeln_out!(output, "    {}(({}))", node.label, node.label)?;
        }

        let mut cycle_link_indices: Vec<usize> = Vec::new();
        for (i, edge) in graph.edge_references().enumerate() {
            let from = &graph[edge.source()];
            let to = &graph[edge.target()];
            writeln_out!(output, "    {} --> {}", from.label, to.label)?;
            if cycle_edges.contains(&(from.id, to.id)) {
                cycle_link_indices.push(i);
            }
        }

        writeln_out!(
            output,
            "    classDef deadlocked fill:{},stroke:{},stroke-width:2px;",
            colors::CYCLE_NODE_FILL,
            colors::CYCLE_NODE_STROKE
        )?;

        if !in_cycle.is_empty() {
            let members: Vec<String> = graph
                .node_indices()
                .filter(|&idx| in_cycle.contains(&graph[idx].id))
                .map(|idx| graph[idx].label.clone())
                .collect();
            writeln_out!(output, "    class {} deadlocked;", members.join(","))?;
        }

        for link in cycle_link_indices {
            writeln_out!(
                output,
                "    linkStyle {} stroke:{},stroke-width:2px;",
                link,
                colors::CYCLE_EDGE
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::description::GraphDescription;
    use crate::detector::CycleDetector;
    use crate::graph::WaitGraphBuilder;

    fn deadlocked_graph() -> (WaitGraphBuilder, CycleDetector) {
        let mut description = GraphDescription::new(3);
        description.add_wait(0, 1);
        description.add_wait(1, 2);
        description.add_wait(2, 0);

        let mut builder = WaitGraphBuilder::new();
        builder.build_from_description(&description).unwrap();

        let mut detector = CycleDetector::new();
        detector.detect(builder.graph()).unwrap();
        (builder, detector)
    }

    fn render_to_string<F>(render: F) -> String
    where
        F: FnOnce(&mut dyn Write) -> Result<()>,
    {
        let mut output = Cursor::new(Vec::new());
        render(&mut output).unwrap();
        String::from_utf8(output.into_inner()).unwrap()
    }

    #[test]
    fn test_dot_marks_cycle_members() {
        let (builder, detector) = deadlocked_graph();
        let renderer = GraphRenderer::new(true);

        let dot = render_to_string(|out| {
            renderer.render_dot(builder.graph(), detector.cycle(), out)
        });

        assert!(dot.contains("digraph waitfor"));
        assert!(dot.contains("layout=circo"));
        assert!(dot.contains("\"P0\" -> \"P1\""));
        assert!(dot.contains(colors::CYCLE_EDGE));
    }

    #[test]
    fn test_dot_without_highlighting() {
        let (builder, detector) = deadlocked_graph();
        let renderer = GraphRenderer::new(false);

        let dot = render_to_string(|out| {
            renderer.render_dot(builder.graph(), detector.cycle(), out)
        });

        assert!(!dot.contains(colors::CYCLE_EDGE));
        assert!(!dot.contains(colors::CYCLE_NODE_FILL));
    }

    #[test]
    fn test_mermaid_structure() {
        let (builder, detector) = deadlocked_graph();
        let renderer = GraphRenderer::new(true);

        let mermaid = render_to_string(|out| {
            renderer.render_mermaid(builder.graph(), detector.cycle(), out)
        });

        assert!(mermaid.contains("graph LR"));
        assert!(mermaid.contains("P0((P0))"));
        assert!(mermaid.contains("P0 --> P1"));
        assert!(mermaid.contains("class P0,P1,P2 deadlocked;"));
        assert!(mermaid.contains("linkStyle"));
    }

    #[test]
    fn test_ascii_lists_waits() {
        let (builder, detector) = deadlocked_graph();
        let renderer = GraphRenderer::new(true);

        let ascii = render_to_string(|out| {
            renderer.render_ascii(builder.graph(), detector.cycle(), out)
        });

        assert!(ascii.contains("P0 ⚠️  DEADLOCKED"));
        assert!(ascii.contains("waits on: P1"));
    }

    #[test]
    fn test_ascii_empty_graph() {
        let builder = WaitGraphBuilder::new();
        let renderer = GraphRenderer::new(true);

        let ascii = render_to_string(|out| renderer.render_ascii(builder.graph(), None, out));

        assert!(ascii.contains("No processes to visualize"));
    }
}
