//! Hole filling
//!
//! Every external contour found by a [`ContourTracer`] is rasterized as a
//! filled polygon in the foreground value on a copy of the input. Background
//! enclosed by a foreground region is therefore switched on, while open
//! concavities that reach the outside stay as they are.

use morphkit_core::{in_bounds, Algorithm, Error, Raster, Result};
use tracing::debug;

use crate::contours::{BorderFollower, Contour, ContourTracer};

/// Value written into filled regions
pub const FILL_VALUE: u8 = 255;

/// Hole-filling algorithm using the built-in [`BorderFollower`]
#[derive(Debug, Clone, Default)]
pub struct FillHoles;

impl Algorithm for FillHoles {
    type Input = Raster<u8>;
    type Output = Raster<u8>;
    type Params = ();
    type Error = Error;

    fn name(&self) -> &'static str {
        "FillHoles"
    }

    fn description(&self) -> &'static str {
        "Fill the interior of every external foreground contour"
    }

    fn execute(&self, input: Self::Input, _params: Self::Params) -> Result<Self::Output> {
        fill_holes(&input)
    }
}

/// Fill enclosed holes in the foreground of `raster`
pub fn fill_holes(raster: &Raster<u8>) -> Result<Raster<u8>> {
    fill_holes_with(raster, &BorderFollower::default())
}

/// Fill enclosed holes using contours supplied by `tracer`
pub fn fill_holes_with<C: ContourTracer + ?Sized>(
    raster: &Raster<u8>,
    tracer: &C,
) -> Result<Raster<u8>> {
    let contours = tracer.external_contours(raster);
    let mut filled = raster.clone();
    for contour in &contours {
        fill_polygon(&mut filled, contour, FILL_VALUE);
    }

    debug!(
        rows = raster.rows(),
        cols = raster.cols(),
        contours = contours.len(),
        "filled external contours"
    );
    Ok(filled)
}

/// Rasterize `contour` as a filled polygon
///
/// The interior is scan-converted row by row with half-open edges (an edge
/// spans rows `[min_y, max_y)`), then every edge is drawn so the boundary
/// itself is always set. Vertices outside the raster are clipped.
pub fn fill_polygon(raster: &mut Raster<u8>, contour: &Contour, value: u8) {
    if contour.is_empty() || raster.is_empty() {
        return;
    }
    let (rows, cols) = raster.shape();
    let (min_y, max_y) = contour
        .points
        .iter()
        .fold((usize::MAX, 0), |(lo, hi), &(r, _)| (lo.min(r), hi.max(r)));

    let mut crossings: Vec<f64> = Vec::new();
    for y in min_y..=max_y.min(rows - 1) {
        crossings.clear();
        for ((y0, x0), (y1, x1)) in contour.edges() {
            if y0 == y1 || y < y0.min(y1) || y >= y0.max(y1) {
                continue;
            }
            let (y, y0, y1) = (y as f64, y0 as f64, y1 as f64);
            let (x0, x1) = (x0 as f64, x1 as f64);
            crossings.push(x0 + (y - y0) * (x1 - x0) / (y1 - y0));
        }
        crossings.sort_by(|a, b| a.total_cmp(b));

        for span in crossings.chunks_exact(2) {
            let start = span[0].ceil().max(0.0) as usize;
            let end = span[1].floor();
            if end < 0.0 {
                continue;
            }
            let end = (end as usize).min(cols - 1);
            for x in start..=end {
                unsafe { raster.set_unchecked(y, x, value) };
            }
        }
    }

    for (from, to) in contour.edges() {
        draw_segment(raster, from, to, value);
    }
}

/// Digital line from `from` to `to`, both endpoints included
fn draw_segment(raster: &mut Raster<u8>, from: (usize, usize), to: (usize, usize), value: u8) {
    let (rows, cols) = raster.shape();
    let (r0, c0) = (from.0 as isize, from.1 as isize);
    let dr = to.0 as isize - r0;
    let dc = to.1 as isize - c0;
    let steps = dr.abs().max(dc.abs());

    for t in 0..=steps {
        let (r, c) = if steps == 0 {
            (r0, c0)
        } else {
            (
                r0 + (dr as f64 * t as f64 / steps as f64).round() as isize,
                c0 + (dc as f64 * t as f64 / steps as f64).round() as isize,
            )
        };
        if in_bounds(r, c, rows, cols) {
            unsafe { raster.set_unchecked(r as usize, c as usize, value) };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contours::ChainApproximation;

    fn parse(rows: &[&str]) -> Raster<u8> {
        let cols = rows[0].len();
        let data = rows
            .iter()
            .flat_map(|row| row.chars().map(|ch| if ch == '#' { 255 } else { 0 }))
            .collect();
        Raster::from_vec(data, rows.len(), cols).unwrap()
    }

    fn render(raster: &Raster<u8>) -> Vec<String> {
        raster
            .data()
            .rows()
            .into_iter()
            .map(|row| row.iter().map(|&v| if v != 0 { '#' } else { '.' }).collect())
            .collect()
    }

    #[test]
    fn test_ring_is_filled() {
        let raster = parse(&[
            ".......",
            ".#####.",
            ".#...#.",
            ".#...#.",
            ".#...#.",
            ".#####.",
            ".......",
        ]);
        let filled = fill_holes(&raster).unwrap();
        assert_eq!(
            render(&filled),
            vec![
                ".......",
                ".#####.",
                ".#####.",
                ".#####.",
                ".#####.",
                ".#####.",
                ".......",
            ]
        );
    }

    #[test]
    fn test_nested_dot_is_absorbed() {
        let raster = parse(&[
            ".........",
            ".#######.",
            ".#.....#.",
            ".#.###.#.",
            ".#.#.#.#.",
            ".#.###.#.",
            ".#.....#.",
            ".#######.",
            ".........",
        ]);
        let filled = fill_holes(&raster).unwrap();
        let stats = filled.statistics();
        assert_eq!(stats.nonzero_count, 49, "the whole 7x7 block is set");
        assert_eq!(filled.get(0, 0).unwrap(), 0);
    }

    #[test]
    fn test_open_shapes_untouched() {
        let c_shape = parse(&["####", "#...", "#...", "#...", "####"]);
        assert_eq!(fill_holes(&c_shape).unwrap(), c_shape);

        let notch = parse(&[".#...", "#.#..", ".#...", "....."]);
        let filled = fill_holes(&notch).unwrap();
        assert_eq!(filled.get(1, 1).unwrap(), 255, "diamond center is enclosed");
    }

    #[test]
    fn test_side_by_side_shapes() {
        let raster = parse(&[
            "..........",
            ".###..###.",
            ".#.#..#...",
            ".###..###.",
            "..........",
        ]);
        let filled = fill_holes(&raster).unwrap();
        assert_eq!(
            render(&filled),
            vec![
                "..........",
                ".###..###.",
                ".###..#...",
                ".###..###.",
                "..........",
            ]
        );
    }

    #[test]
    fn test_single_pixel_unchanged_and_input_untouched() {
        let raster = parse(&[".....", "..#..", "....."]);
        let copy = raster.clone();
        let filled = FillHoles.execute_default(raster.clone()).unwrap();
        assert_eq!(filled, copy);
        assert_eq!(raster, copy);
    }

    #[test]
    fn test_fill_with_uncompressed_tracer() {
        let raster = parse(&["######", "#....#", "#.##.#", "#....#", "######"]);
        let tracer = BorderFollower::new(ChainApproximation::None);
        let filled = fill_holes_with(&raster, &tracer).unwrap();
        assert!(filled.iter().all(|&v| v == 255));
    }

    #[test]
    fn test_fill_polygon_clips_to_raster() {
        let mut raster: Raster<u8> = Raster::new(3, 3);
        let triangle = Contour::new(vec![(0, 0), (2, 0), (2, 5)]);
        fill_polygon(&mut raster, &triangle, 7);
        assert_eq!(raster.get(2, 2).unwrap(), 7);
        assert_eq!(raster.get(0, 2).unwrap(), 0);
    }

    struct FixedTracer(Vec<Contour>);

    impl ContourTracer for FixedTracer {
        fn external_contours(&self, _raster: &Raster<u8>) -> Vec<Contour> {
            self.0.clone()
        }
    }

    #[test]
    fn test_custom_tracer_is_used() {
        let raster: Raster<u8> = Raster::new(4, 4);
        let tracer = FixedTracer(vec![Contour::new(vec![(1, 1), (1, 2), (2, 2), (2, 1)])]);
        let filled = fill_holes_with(&raster, &tracer).unwrap();
        assert_eq!(filled.statistics().nonzero_count, 4);
    }
}
