//! # Deadlock Detection Module
//!
//! Finds wait-for cycles with a depth-first search that tracks the active
//! recursion path. A node is `visited` once any search has entered it and
//! `on_stack` exactly while its exploration frame is open; an edge into an
//! on-stack node is a back edge and closes a cycle. Parent pointers recorded
//! on tree edges reconstruct the cycle path. Runs in O(V + E) over the whole
//! graph and reports the first cycle found in traversal order.
//!
//! ## Key Components
//!
//! - **CycleDetector**: runs the search and holds the result
//! - **WaitCycle**: one concrete deadlock cycle, first process == last
//!
//! ## Example
//!
//! ```
//! use gridlock::description::GraphDescription;
//! use gridlock::detector::CycleDetector;
//! use gridlock::graph::WaitGraphBuilder;
//!
//! # fn main() -> miette::Result<()> {
//! // P0 waits on P1, P1 waits on P0: a deadlock
//! let mut description = GraphDescription::new(2);
//! description.add_wait(0, 1);
//! description.add_wait(1, 0);
//!
//! let mut builder = WaitGraphBuilder::new();
//! builder.build_from_description(&description)?;
//!
//! let mut detector = CycleDetector::new();
//! detector.detect(builder.graph())?;
//!
//! assert!(detector.has_deadlock());
//! let cycle = detector.cycle().expect("cycle was just detected");
//! assert_eq!(cycle.path().first(), cycle.path().last());
//! # Ok(())
//! # }
//! ```

mod detector_impl;

pub use detector_impl::*;
