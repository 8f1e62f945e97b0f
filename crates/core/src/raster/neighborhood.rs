//! Shared neighbor offset tables
//!
//! Erosion, dilation, labeling, contour tracing and the majority filter all
//! step through neighbors using these tables; none of them declares its own.

/// 4-connected offsets `(dr, dc)` in visiting order: up, right, down, left
pub const FOUR_NEIGHBORS: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// 8-connected offsets `(dr, dc)` in row-major order, centre excluded
pub const EIGHT_NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// All eight neighbors in clockwise screen order (rows grow downward),
/// starting east. Border following indexes directions into this table.
pub const CLOCKWISE_NEIGHBORS: [(isize, isize); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// Determines which neighbors of a pixel are considered connected to it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connectivity {
    /// N, E, S and W neighbors
    Four,
    /// All eight surrounding neighbors
    Eight,
}

impl Connectivity {
    /// Neighbor offsets for this connectivity
    pub fn offsets(&self) -> &'static [(isize, isize)] {
        match self {
            Connectivity::Four => &FOUR_NEIGHBORS,
            Connectivity::Eight => &EIGHT_NEIGHBORS,
        }
    }
}

/// Offset a `(row, col)` position, returning `None` when it leaves the grid
#[inline]
pub fn step(
    row: usize,
    col: usize,
    (dr, dc): (isize, isize),
    rows: usize,
    cols: usize,
) -> Option<(usize, usize)> {
    let nr = row as isize + dr;
    let nc = col as isize + dc;
    if super::in_bounds(nr, nc, rows, cols) {
        Some((nr as usize, nc as usize))
    } else {
        None
    }
}
