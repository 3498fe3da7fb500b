//! # Wait-For Graph Module
//!
//! Builds and renders the directed wait-for graph over process indices.
//!
//! ## Components
//!
//! - **WaitGraphBuilder**: constructs the graph from a validated
//!   [`GraphDescription`](crate::description::GraphDescription)
//! - **ProcessNode** / **WaitEdge**: node and edge weights
//! - **GraphRenderer**: renders the graph as ASCII, DOT, or Mermaid, with
//!   optional deadlock-cycle highlighting
//!
//! ## Example
//!
//! ```
//! use gridlock::description::GraphDescription;
//! use gridlock::graph::WaitGraphBuilder;
//!
//! # fn main() -> miette::Result<()> {
//! let mut description = GraphDescription::new(2);
//! description.add_wait(0, 1);
//!
//! let mut builder = WaitGraphBuilder::new();
//! builder.build_from_description(&description)?;
//!
//! assert_eq!(builder.graph().node_count(), 2);
//! assert_eq!(builder.graph().edge_count(), 1);
//! # Ok(())
//! # }
//! ```

mod builder;
mod renderer;
mod types;

pub use builder::WaitGraphBuilder;
pub use renderer::GraphRenderer;
pub use types::{ProcessNode, WaitEdge, WaitForGraph};
