//! External contour extraction
//!
//! Hole filling needs the outer boundary of every foreground region that is
//! not itself sitting inside another region's hole. [`ContourTracer`] is the
//! seam for that; [`BorderFollower`] is the built-in implementation.
//!
//! Foreground is any nonzero pixel, connected through all eight neighbors.

use morphkit_core::raster::{step, CLOCKWISE_NEIGHBORS, EIGHT_NEIGHBORS, FOUR_NEIGHBORS};
use morphkit_core::Raster;

/// Index of west in [`CLOCKWISE_NEIGHBORS`]
const WEST: usize = 4;

/// A closed polyline of `(row, col)` vertices; the last vertex connects back
/// to the first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Contour {
    pub points: Vec<(usize, usize)>,
}

impl Contour {
    pub fn new(points: Vec<(usize, usize)>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consecutive vertex pairs, including the closing edge
    pub fn edges(&self) -> impl Iterator<Item = ((usize, usize), (usize, usize))> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }
}

/// Extracts the external boundary contours of a raster's foreground
pub trait ContourTracer {
    fn external_contours(&self, raster: &Raster<u8>) -> Vec<Contour>;
}

/// How traced boundary pixels are reduced to contour vertices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChainApproximation {
    /// Keep every boundary pixel
    None,
    /// Drop pixels in the middle of straight horizontal, vertical or diagonal runs
    #[default]
    Simple,
}

/// Moore-neighborhood border following over 8-connected components
///
/// A component is external when it touches the grid edge or is 4-adjacent
/// to background that reaches the grid edge; components nested inside a hole
/// are skipped. Each external component yields one contour, starting at its
/// first pixel in row-major order and running counterclockwise as displayed.
#[derive(Debug, Clone, Copy, Default)]
pub struct BorderFollower {
    pub approximation: ChainApproximation,
}

impl BorderFollower {
    pub fn new(approximation: ChainApproximation) -> Self {
        Self { approximation }
    }
}

impl ContourTracer for BorderFollower {
    fn external_contours(&self, raster: &Raster<u8>) -> Vec<Contour> {
        let outside = outside_background(raster);
        let (rows, cols) = raster.shape();

        foreground_components(raster)
            .into_iter()
            .filter(|pixels| {
                pixels.iter().any(|&(r, c)| {
                    r == 0
                        || c == 0
                        || r + 1 == rows
                        || c + 1 == cols
                        || FOUR_NEIGHBORS.iter().any(|&off| {
                            step(r, c, off, rows, cols)
                                .is_some_and(|(nr, nc)| outside[nr * cols + nc])
                        })
                })
            })
            .map(|pixels| {
                let boundary = trace_border(raster, pixels[0]);
                let points = match self.approximation {
                    ChainApproximation::None => boundary,
                    ChainApproximation::Simple => compress_chain(boundary),
                };
                Contour::new(points)
            })
            .collect()
    }
}

fn is_foreground(raster: &Raster<u8>, row: isize, col: isize) -> bool {
    raster.get_or(row, col, 0) != 0
}

/// 8-connected foreground components, each listed from its row-major first pixel
fn foreground_components(raster: &Raster<u8>) -> Vec<Vec<(usize, usize)>> {
    let (rows, cols) = raster.shape();
    let mut seen = vec![false; rows * cols];
    let mut components = Vec::new();

    for row in 0..rows {
        for col in 0..cols {
            if seen[row * cols + col] || unsafe { raster.get_unchecked(row, col) } == 0 {
                continue;
            }
            seen[row * cols + col] = true;
            let mut pixels = vec![(row, col)];
            let mut stack = vec![(row, col)];
            while let Some((r, c)) = stack.pop() {
                for &off in EIGHT_NEIGHBORS.iter() {
                    if let Some((nr, nc)) = step(r, c, off, rows, cols) {
                        let idx = nr * cols + nc;
                        if !seen[idx] && unsafe { raster.get_unchecked(nr, nc) } != 0 {
                            seen[idx] = true;
                            pixels.push((nr, nc));
                            stack.push((nr, nc));
                        }
                    }
                }
            }
            components.push(pixels);
        }
    }
    components
}

/// Background pixels 4-connected to the grid edge
fn outside_background(raster: &Raster<u8>) -> Vec<bool> {
    let (rows, cols) = raster.shape();
    let mut outside = vec![false; rows * cols];
    let mut stack = Vec::new();

    for row in 0..rows {
        for col in 0..cols {
            let on_edge = row == 0 || col == 0 || row + 1 == rows || col + 1 == cols;
            if on_edge && unsafe { raster.get_unchecked(row, col) } == 0 {
                outside[row * cols + col] = true;
                stack.push((row, col));
            }
        }
    }

    while let Some((r, c)) = stack.pop() {
        for &off in FOUR_NEIGHBORS.iter() {
            if let Some((nr, nc)) = step(r, c, off, rows, cols) {
                let idx = nr * cols + nc;
                if !outside[idx] && unsafe { raster.get_unchecked(nr, nc) } == 0 {
                    outside[idx] = true;
                    stack.push((nr, nc));
                }
            }
        }
    }
    outside
}

fn offset(from: (usize, usize), dir: usize) -> (isize, isize) {
    let (dr, dc) = CLOCKWISE_NEIGHBORS[dir];
    (from.0 as isize + dr, from.1 as isize + dc)
}

fn direction(from: (usize, usize), to: (usize, usize)) -> usize {
    let delta = (
        to.0 as isize - from.0 as isize,
        to.1 as isize - from.1 as isize,
    );
    CLOCKWISE_NEIGHBORS
        .iter()
        .position(|&d| d == delta)
        .unwrap_or(WEST)
}

/// Follow the outer border starting at a component's row-major first pixel
///
/// The west neighbor of `start` is background by construction. Tracing ends
/// when the walk returns to `start` about to step onto the same second pixel
/// it started with.
fn trace_border(raster: &Raster<u8>, start: (usize, usize)) -> Vec<(usize, usize)> {
    let first = (0..8)
        .map(|k| (WEST + k) % 8)
        .map(|dir| offset(start, dir))
        .find(|&(r, c)| is_foreground(raster, r, c));
    let Some((fr, fc)) = first else {
        return vec![start];
    };
    let first = (fr as usize, fc as usize);

    let mut points = Vec::new();
    let mut prev = first;
    let mut current = start;
    loop {
        points.push(current);
        let back = direction(current, prev);
        let next = (1..=8)
            .map(|k| (back + 8 - k) % 8)
            .map(|dir| offset(current, dir))
            .find(|&(r, c)| is_foreground(raster, r, c))
            .map(|(r, c)| (r as usize, c as usize))
            .unwrap_or(prev);
        if next == start && current == first {
            break;
        }
        prev = current;
        current = next;
    }
    points
}

/// Keep only the vertices where the chain changes direction
fn compress_chain(points: Vec<(usize, usize)>) -> Vec<(usize, usize)> {
    let n = points.len();
    if n < 3 {
        return points;
    }
    let delta = |a: (usize, usize), b: (usize, usize)| {
        (b.0 as isize - a.0 as isize, b.1 as isize - a.1 as isize)
    };
    (0..n)
        .filter(|&i| {
            let p = points[(i + n - 1) % n];
            let q = points[i];
            let s = points[(i + 1) % n];
            delta(p, q) != delta(q, s)
        })
        .map(|i| points[i])
        .collect()
}
