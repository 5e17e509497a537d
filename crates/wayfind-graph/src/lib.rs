//! **wayfind-graph** — weighted directed graph store.
//!
//! Nodes are dense indices in `0..node_count`; callers keep their own mapping
//! from indices to domain objects (tiles, rooms, waypoints). Each node owns an
//! adjacency list of outgoing [`Edge`]s, and the pair `(from, to)` identifies
//! at most one edge: inserting it again overwrites the weight.
//!
//! The graph is built once from a node count and an edge list, then only
//! grows or re-weights edges through [`Graph::set_edge`]. Searching lives in
//! the `wayfind-paths` crate.

mod error;
mod graph;

pub use error::EdgeError;
pub use graph::{Cost, Edge, Graph, NodeId};
