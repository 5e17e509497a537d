//! Axial hex coordinates and shape enumeration.
//!
//! Coordinates are pointy-top axial `(q, r)`; the implicit cube coordinate is
//! `s = -q - r`.

use std::fmt;
use std::ops::{Add, Mul, Sub};

/// A hex cell in axial coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HexCoord {
    pub q: i32,
    pub r: i32,
}

/// The six neighbour offsets, counter-clockwise starting east.
pub const DIRECTIONS: [HexCoord; 6] = [
    HexCoord::new(1, 0),
    HexCoord::new(1, -1),
    HexCoord::new(0, -1),
    HexCoord::new(-1, 0),
    HexCoord::new(-1, 1),
    HexCoord::new(0, 1),
];

impl HexCoord {
    pub const ZERO: Self = Self::new(0, 0);

    #[inline]
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    #[inline]
    pub const fn s(self) -> i32 {
        -self.q - self.r
    }

    /// Number of steps between two cells.
    pub fn distance(self, other: Self) -> i32 {
        ((self.q - other.q).abs() + (self.r - other.r).abs() + (self.s() - other.s()).abs()) / 2
    }

    /// The six adjacent cells, in [`DIRECTIONS`] order.
    pub fn neighbors(self) -> [HexCoord; 6] {
        DIRECTIONS.map(|d| self + d)
    }
}

impl fmt::Display for HexCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}

impl Add for HexCoord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.q + rhs.q, self.r + rhs.r)
    }
}

impl Sub for HexCoord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.q - rhs.q, self.r - rhs.r)
    }
}

impl Mul<i32> for HexCoord {
    type Output = Self;
    #[inline]
    fn mul(self, k: i32) -> Self {
        Self::new(self.q * k, self.r * k)
    }
}

// ---------------------------------------------------------------------------
// Shapes
// ---------------------------------------------------------------------------

/// Cells exactly `radius` steps from `center`. A zero radius yields the
/// center alone.
pub fn ring(center: HexCoord, radius: i32) -> Vec<HexCoord> {
    if radius <= 0 {
        return vec![center];
    }
    let mut cells = Vec::with_capacity(6 * radius as usize);
    let mut hex = center + DIRECTIONS[4] * radius;
    for dir in DIRECTIONS {
        for _ in 0..radius {
            cells.push(hex);
            hex = hex + dir;
        }
    }
    cells
}

/// Every cell within `radius` steps of `center`, column by column.
pub fn disk(center: HexCoord, radius: i32) -> Vec<HexCoord> {
    let mut cells = Vec::new();
    for dq in -radius..=radius {
        let lo = (-radius).max(-dq - radius);
        let hi = radius.min(-dq + radius);
        for dr in lo..=hi {
            cells.push(center + HexCoord::new(dq, dr));
        }
    }
    cells
}

/// A `width` x `height` parallelogram in axial space.
pub fn rectangle(top_left: HexCoord, width: i32, height: i32) -> Vec<HexCoord> {
    let mut cells = Vec::new();
    for dq in 0..width {
        for dr in 0..height {
            cells.push(top_left + HexCoord::new(dq, dr));
        }
    }
    cells
}

/// Cells on the straight line from `a` to `b`, both included.
pub fn line(a: HexCoord, b: HexCoord) -> Vec<HexCoord> {
    let n = a.distance(b);
    if n == 0 {
        return vec![a];
    }
    (0..=n)
        .map(|i| lerp_round(a, b, f64::from(i) / f64::from(n)))
        .collect()
}

fn lerp_round(a: HexCoord, b: HexCoord, t: f64) -> HexCoord {
    let q = f64::from(a.q) + f64::from(b.q - a.q) * t;
    let r = f64::from(a.r) + f64::from(b.r - a.r) * t;
    cube_round(q, r)
}

/// Round fractional axial coordinates to the nearest cell, fixing up the
/// component with the largest rounding error so `q + r + s == 0` holds.
/// Exact halves round to even.
pub fn cube_round(qf: f64, rf: f64) -> HexCoord {
    let sf = -qf - rf;
    let (mut q, mut r, s) = (qf.round_ties_even(), rf.round_ties_even(), sf.round_ties_even());
    let (dq, dr, ds) = ((q - qf).abs(), (r - rf).abs(), (s - sf).abs());
    if dq > dr && dq > ds {
        q = -r - s;
    } else if dr > ds {
        r = -q - s;
    }
    HexCoord::new(q as i32, r as i32)
}
