//! Hex-grid topology for the wayfind demos.
//!
//! Builds a hexagonal terrain board, turns it into the `(from, to, weight)`
//! edge list the graph store consumes, and draws routes back onto the board.

pub mod board;
pub mod hex;

pub use board::{HexBoard, Terrain};
pub use hex::HexCoord;
