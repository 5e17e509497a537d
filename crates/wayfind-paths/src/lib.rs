//! Shortest-path search over weighted directed graphs.
//!
//! The search is a label-setting (Dijkstra) pass from a single source with an
//! optional inclusive ceiling on total path cost:
//!
//! - **Shortest path** with early exit at the target ([`PathFinder::find_path`])
//! - **Distance map** of every node reachable within the ceiling
//!   ([`PathFinder::distance_map`])
//!
//! Two interchangeable selection strategies are available through
//! [`Strategy`]: the plain O(V²) linear scan and a binary-heap queue. Both
//! settle nodes in the same order (smallest distance, then lowest index), so
//! they return identical paths.
//!
//! Searches run over anything implementing [`Network`]; the
//! [`Graph`](wayfind_graph::Graph) store implements it out of the box. A
//! [`PathFinder`] holds no per-search state and never mutates the network.

mod error;
mod finder;
mod heap;
mod labels;
mod options;
mod path;
mod scan;
mod traits;

pub use error::SearchError;
pub use finder::PathFinder;
pub use options::{NO_LIMIT, SearchOptions, Strategy, UNREACHABLE};
pub use path::{Path, path_cost};
pub use traits::Network;

pub use wayfind_graph::{Cost, Edge, Graph, NodeId};
