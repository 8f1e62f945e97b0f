//! Connected-component labeling
//!
//! Partitions a raster into maximal 4-connected regions of equal value.
//! Regions seeded on a zero pixel carry tag 0 (background); all others carry
//! tag 1 (foreground), so regions of different nonzero values stay separate
//! components but share the foreground tag.
//!
//! Each tag's components are kept in a `BTreeSet` ordered by pixel count,
//! ties broken by the member list.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use morphkit_core::raster::{step, FOUR_NEIGHBORS};
use morphkit_core::{Algorithm, Error, Raster, Result};
use tracing::debug;

/// Tag of components seeded on a zero pixel
pub const BACKGROUND_TAG: u8 = 0;

/// Tag of components seeded on a nonzero pixel
pub const FOREGROUND_TAG: u8 = 1;

/// A maximal 4-connected region of equal-valued pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    /// 0 for background, 1 for foreground
    pub tag: u8,
    /// Number of member pixels
    pub size: usize,
    /// Member `(row, col)` coordinates in traversal order
    pub pixels: Vec<(usize, usize)>,
}

impl Component {
    fn new(tag: u8, pixels: Vec<(usize, usize)>) -> Self {
        Self {
            tag,
            size: pixels.len(),
            pixels,
        }
    }

    /// Inclusive `(min_row, min_col, max_row, max_col)` of the member pixels
    pub fn bounding_box(&self) -> Option<(usize, usize, usize, usize)> {
        let &(r0, c0) = self.pixels.first()?;
        Some(self.pixels.iter().fold(
            (r0, c0, r0, c0),
            |(min_r, min_c, max_r, max_c), &(r, c)| {
                (min_r.min(r), min_c.min(c), max_r.max(r), max_c.max(c))
            },
        ))
    }

    /// Whether `(row, col)` belongs to this component
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.pixels.contains(&(row, col))
    }
}

impl Ord for Component {
    fn cmp(&self, other: &Self) -> Ordering {
        self.size
            .cmp(&other.size)
            .then_with(|| self.pixels.cmp(&other.pixels))
            .then_with(|| self.tag.cmp(&other.tag))
    }
}

impl PartialOrd for Component {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Result of [`label`]: components split by tag, each set in ascending order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabeledComponents {
    /// Components seeded on zero pixels
    pub background: BTreeSet<Component>,
    /// Components seeded on nonzero pixels
    pub foreground: BTreeSet<Component>,
}

impl LabeledComponents {
    /// Components carrying `tag`; any nonzero tag selects the foreground set
    pub fn by_tag(&self, tag: u8) -> &BTreeSet<Component> {
        if tag == BACKGROUND_TAG {
            &self.background
        } else {
            &self.foreground
        }
    }

    /// Total number of components over both tags
    pub fn len(&self) -> usize {
        self.background.len() + self.foreground.len()
    }

    pub fn is_empty(&self) -> bool {
        self.background.is_empty() && self.foreground.is_empty()
    }

    /// Sum of component sizes; equals `rows * cols` of the labeled raster
    pub fn total_pixels(&self) -> usize {
        self.iter().map(|c| c.size).sum()
    }

    /// All components, background set first
    pub fn iter(&self) -> impl Iterator<Item = &Component> {
        self.background.iter().chain(self.foreground.iter())
    }

    /// The greatest component of a tag under the set ordering
    pub fn largest(&self, tag: u8) -> Option<&Component> {
        self.by_tag(tag).iter().next_back()
    }

    fn insert(&mut self, component: Component) {
        if component.tag == BACKGROUND_TAG {
            self.background.insert(component);
        } else {
            self.foreground.insert(component);
        }
    }
}

/// Connected-component labeling algorithm
#[derive(Debug, Clone, Default)]
pub struct Label;

impl Algorithm for Label {
    type Input = Raster<u8>;
    type Output = LabeledComponents;
    type Params = ();
    type Error = Error;

    fn name(&self) -> &'static str {
        "Label"
    }

    fn description(&self) -> &'static str {
        "4-connected equal-value region labeling"
    }

    fn execute(&self, input: Self::Input, _params: Self::Params) -> Result<Self::Output> {
        label(&input)
    }
}

/// Label every 4-connected equal-value region of `raster`
///
/// Pixels are scanned in row-major order; each unvisited pixel seeds a
/// depth-first traversal that tries neighbors up, right, down, left. The
/// traversal keeps its own frame stack, so region size is bounded by memory
/// rather than the call stack.
pub fn label(raster: &Raster<u8>) -> Result<LabeledComponents> {
    let (rows, cols) = raster.shape();
    let mut visited = vec![false; rows * cols];
    let mut components = LabeledComponents::default();

    for row in 0..rows {
        for col in 0..cols {
            if visited[row * cols + col] {
                continue;
            }
            let seed = unsafe { raster.get_unchecked(row, col) };
            let tag = if seed == 0 { BACKGROUND_TAG } else { FOREGROUND_TAG };
            let pixels = collect_region(raster, &mut visited, (row, col));
            components.insert(Component::new(tag, pixels));
        }
    }

    debug!(
        rows,
        cols,
        background = components.background.len(),
        foreground = components.foreground.len(),
        "labeled components"
    );
    Ok(components)
}

/// Per-pixel component ids
///
/// Ids start at 1 and follow discovery order of the row-major scan, so the
/// region containing `(0, 0)` is always 1.
pub fn label_map(raster: &Raster<u8>) -> Result<Raster<u32>> {
    let (rows, cols) = raster.shape();
    let mut visited = vec![false; rows * cols];
    let mut ids: Raster<u32> = Raster::new(rows, cols);
    let mut next_id: u32 = 0;

    for row in 0..rows {
        for col in 0..cols {
            if visited[row * cols + col] {
                continue;
            }
            next_id = next_id.checked_add(1).ok_or_else(|| {
                Error::Other("component count exceeds u32 range".to_string())
            })?;
            for (r, c) in collect_region(raster, &mut visited, (row, col)) {
                unsafe { ids.set_unchecked(r, c, next_id) };
            }
        }
    }

    debug!(rows, cols, components = next_id, "built label map");
    Ok(ids)
}

/// Depth-first collection of the equal-value region around `seed`
///
/// Each frame remembers which of the four directions it tries next, which
/// reproduces the preorder of a recursive traversal exactly.
fn collect_region(
    raster: &Raster<u8>,
    visited: &mut [bool],
    seed: (usize, usize),
) -> Vec<(usize, usize)> {
    let (rows, cols) = raster.shape();
    let value = unsafe { raster.get_unchecked(seed.0, seed.1) };

    let mut pixels = vec![seed];
    visited[seed.0 * cols + seed.1] = true;
    let mut frames: Vec<(usize, usize, usize)> = vec![(seed.0, seed.1, 0)];

    while let Some(frame) = frames.last_mut() {
        let (r, c, dir) = *frame;
        if dir == FOUR_NEIGHBORS.len() {
            frames.pop();
            continue;
        }
        frame.2 += 1;

        let Some((nr, nc)) = step(r, c, FOUR_NEIGHBORS[dir], rows, cols) else {
            continue;
        };
        let idx = nr * cols + nc;
        if visited[idx] || unsafe { raster.get_unchecked(nr, nc) } != value {
            continue;
        }
        visited[idx] = true;
        pixels.push((nr, nc));
        frames.push((nr, nc, 0));
    }

    pixels
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_raster(rows: usize, cols: usize, data: &[u8]) -> Raster<u8> {
        Raster::from_vec(data.to_vec(), rows, cols).unwrap()
    }

    #[test]
    fn test_uniform_raster_is_one_component() {
        let raster = Raster::filled(4, 5, 0u8);
        let result = label(&raster).unwrap();
        assert_eq!(result.background.len(), 1);
        assert!(result.foreground.is_empty());
        assert_eq!(result.total_pixels(), 20);
    }

    #[test]
    fn test_diagonal_pixels_are_separate() {
        #[rustfmt::skip]
        let raster = make_raster(2, 2, &[
            255, 0,
            0, 255,
        ]);
        let result = label(&raster).unwrap();
        assert_eq!(result.foreground.len(), 2, "diagonals are not 4-connected");
        assert_eq!(result.background.len(), 2);
        assert!(result.iter().all(|c| c.size == 1));
    }

    #[test]
    fn test_distinct_nonzero_values_split_but_share_tag() {
        let raster = make_raster(1, 4, &[10, 10, 20, 20]);
        let result = label(&raster).unwrap();
        assert_eq!(result.foreground.len(), 2);
        assert!(result.foreground.iter().all(|c| c.tag == FOREGROUND_TAG));
        assert!(result.background.is_empty());
    }

    #[test]
    fn test_preorder_follows_up_right_down_left() {
        // U-shaped foreground; the traversal from (0,0) runs down the left
        // arm, along the bottom and up the right arm.
        #[rustfmt::skip]
        let raster = make_raster(3, 3, &[
            1, 0, 1,
            1, 0, 1,
            1, 1, 1,
        ]);
        let result = label(&raster).unwrap();
        let fg = result.largest(FOREGROUND_TAG).unwrap();
        assert_eq!(
            fg.pixels,
            vec![(0, 0), (1, 0), (2, 0), (2, 1), (2, 2), (1, 2), (0, 2)]
        );
        // Right is tried before down
        let raster = make_raster(2, 2, &[1, 1, 1, 1]);
        let result = label(&raster).unwrap();
        let fg = result.largest(FOREGROUND_TAG).unwrap();
        assert_eq!(fg.pixels, vec![(0, 0), (0, 1), (1, 1), (1, 0)]);
    }

    #[test]
    fn test_ordering_by_size_then_pixels() {
        #[rustfmt::skip]
        let raster = make_raster(3, 4, &[
            1, 0, 1, 1,
            0, 0, 0, 0,
            1, 0, 0, 1,
        ]);
        let result = label(&raster).unwrap();
        let sizes: Vec<usize> = result.foreground.iter().map(|c| c.size).collect();
        assert_eq!(sizes, vec![1, 1, 1, 2]);
        let firsts: Vec<(usize, usize)> = result
            .foreground
            .iter()
            .take(3)
            .map(|c| c.pixels[0])
            .collect();
        assert_eq!(firsts, vec![(0, 0), (2, 0), (2, 3)]);
    }

    #[test]
    fn test_component_helpers() {
        let raster = make_raster(3, 3, &[0, 5, 0, 5, 5, 5, 0, 5, 0]);
        let result = label(&raster).unwrap();
        let plus = result.largest(FOREGROUND_TAG).unwrap();
        assert_eq!(plus.size, 5);
        assert_eq!(plus.bounding_box(), Some((0, 0, 2, 2)));
        assert!(plus.contains(1, 1));
        assert!(!plus.contains(0, 0));
        assert_eq!(result.by_tag(BACKGROUND_TAG).len(), 4);
        assert_eq!(result.len(), 5);
    }

    #[test]
    fn test_long_snake_does_not_overflow() {
        // A single-pixel-wide serpentine path across a large grid
        let rows = 401;
        let cols = 400;
        let mut raster: Raster<u8> = Raster::new(rows, cols);
        for r in (0..rows).step_by(2) {
            for c in 0..cols {
                raster.set(r, c, 255).unwrap();
            }
            if r + 1 < rows {
                let link = if (r / 2) % 2 == 0 { cols - 1 } else { 0 };
                raster.set(r + 1, link, 255).unwrap();
            }
        }
        let result = label(&raster).unwrap();
        assert_eq!(result.foreground.len(), 1);
        assert_eq!(result.total_pixels(), rows * cols);
    }

    #[test]
    fn test_empty_raster() {
        let raster: Raster<u8> = Raster::new(0, 0);
        let result = label(&raster).unwrap();
        assert!(result.is_empty());
        assert_eq!(Label.execute_default(raster).unwrap(), result);
    }

    #[test]
    fn test_label_map_ids() {
        #[rustfmt::skip]
        let raster = make_raster(2, 3, &[
            0, 7, 7,
            0, 0, 9,
        ]);
        let ids = label_map(&raster).unwrap();
        assert_eq!(
            ids.iter().copied().collect::<Vec<_>>(),
            vec![1, 2, 2, 1, 1, 3]
        );
    }
}
