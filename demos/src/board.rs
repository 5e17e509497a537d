//! A hexagonal board of terrain tiles, flattened into a weighted graph.

use std::collections::HashMap;

use rand::{Rng, RngExt};
use wayfind_graph::{Cost, EdgeError, Graph, NodeId};

use crate::hex::{self, HexCoord};

/// Tile type; the cost is paid when stepping onto the tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Terrain {
    Plain,
    Forest,
    Hills,
    Water,
}

impl Terrain {
    /// Entry cost, or `None` for impassable tiles.
    pub fn cost(self) -> Option<Cost> {
        match self {
            Terrain::Plain => Some(1),
            Terrain::Forest => Some(2),
            Terrain::Hills => Some(4),
            Terrain::Water => None,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Terrain::Plain => '.',
            Terrain::Forest => '"',
            Terrain::Hills => '^',
            Terrain::Water => '~',
        }
    }

    /// Weighted random terrain, mostly open ground.
    pub fn random(rng: &mut impl Rng) -> Self {
        match rng.random_range(0..100u32) {
            0..55 => Terrain::Plain,
            55..75 => Terrain::Forest,
            75..88 => Terrain::Hills,
            _ => Terrain::Water,
        }
    }
}

/// Hexagon-shaped board centred on the origin.
///
/// Every tile gets a dense node index in [`hex::disk`] order, which is how
/// the board maps between coordinates and graph nodes.
pub struct HexBoard {
    radius: i32,
    cells: Vec<HexCoord>,
    terrain: Vec<Terrain>,
    index: HashMap<HexCoord, NodeId>,
}

impl HexBoard {
    /// Build a board of the given radius, asking `terrain_at` for each tile.
    pub fn from_fn(radius: i32, mut terrain_at: impl FnMut(HexCoord) -> Terrain) -> Self {
        let cells = hex::disk(HexCoord::ZERO, radius.max(0));
        let terrain = cells.iter().map(|&c| terrain_at(c)).collect();
        let index = cells.iter().enumerate().map(|(i, &c)| (c, i)).collect();
        Self {
            radius: radius.max(0),
            cells,
            terrain,
            index,
        }
    }

    /// Random board. The west and east corners are kept passable so they can
    /// serve as route endpoints.
    pub fn generate(radius: i32, rng: &mut impl Rng) -> Self {
        let (west, east) = Self::corners(radius);
        Self::from_fn(radius, |c| {
            if c == west || c == east {
                Terrain::Plain
            } else {
                Terrain::random(&mut *rng)
            }
        })
    }

    /// The westmost and eastmost tiles of a board with this radius.
    pub fn corners(radius: i32) -> (HexCoord, HexCoord) {
        let radius = radius.max(0);
        (HexCoord::new(-radius, 0), HexCoord::new(radius, 0))
    }

    #[inline]
    pub fn radius(&self) -> i32 {
        self.radius
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn node(&self, c: HexCoord) -> Option<NodeId> {
        self.index.get(&c).copied()
    }

    pub fn coord(&self, node: NodeId) -> Option<HexCoord> {
        self.cells.get(node).copied()
    }

    pub fn terrain(&self, c: HexCoord) -> Option<Terrain> {
        self.node(c).map(|n| self.terrain[n])
    }

    /// Directed edges between adjacent passable tiles, weighted by the
    /// destination's entry cost.
    pub fn edges(&self) -> Vec<(NodeId, NodeId, Cost)> {
        let mut edges = Vec::new();
        for (from, &c) in self.cells.iter().enumerate() {
            if self.terrain[from].cost().is_none() {
                continue;
            }
            for n in c.neighbors() {
                let Some(to) = self.node(n) else {
                    continue;
                };
                if let Some(weight) = self.terrain[to].cost() {
                    edges.push((from, to, weight));
                }
            }
        }
        edges
    }

    pub fn graph(&self) -> Result<Graph, EdgeError> {
        Graph::from_edges(self.len(), self.edges())
    }

    /// ASCII picture of the board with `route` drawn over it: `S` and `E`
    /// mark the endpoints, `*` the tiles in between.
    pub fn render(&self, route: &[NodeId]) -> String {
        let mut marks: HashMap<NodeId, char> = route.iter().map(|&n| (n, '*')).collect();
        if let (Some(&first), Some(&last)) = (route.first(), route.last()) {
            marks.insert(first, 'S');
            marks.insert(last, 'E');
        }

        let rad = self.radius;
        let mut out = String::new();
        for r in -rad..=rad {
            out.extend(std::iter::repeat_n(' ', r.unsigned_abs() as usize));
            let lo = (-rad).max(-r - rad);
            let hi = rad.min(-r + rad);
            for q in lo..=hi {
                let Some(node) = self.node(HexCoord::new(q, r)) else {
                    continue;
                };
                let ch = marks
                    .get(&node)
                    .copied()
                    .unwrap_or_else(|| self.terrain[node].glyph());
                out.push(ch);
                if q < hi {
                    out.push(' ');
                }
            }
            out.push('\n');
        }
        out
    }
}
