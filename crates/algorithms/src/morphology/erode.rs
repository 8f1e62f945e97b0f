//! Morphological erosion (minimum filter)
//!
//! Replaces each pixel with the minimum value over the active cells of the
//! structuring element. Shrinks bright regions and enlarges dark regions.

use morphkit_core::{Algorithm, Error, Raster, RasterElement, Result};

use super::element::StructuringElement;
use crate::parallel::map_rows;

/// Parameters for morphological erosion
#[derive(Debug, Clone, Default)]
pub struct ErodeParams {
    /// Structuring element shape
    pub element: StructuringElement,
    /// Value substituted for neighbors outside the grid
    pub background: u8,
}

/// Erosion algorithm
#[derive(Debug, Clone, Default)]
pub struct Erode;

impl Algorithm for Erode {
    type Input = Raster<u8>;
    type Output = Raster<u8>;
    type Params = ErodeParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Erode"
    }

    fn description(&self) -> &'static str {
        "Morphological erosion (minimum filter over structuring element)"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        erode(&input, &params.element, params.background)
    }
}

/// Perform morphological erosion on a raster
///
/// Each output pixel is the minimum value over the active offsets of the
/// structuring element. Offsets that fall outside the grid read `background`
/// instead, so the border policy is the caller's choice.
///
/// # Arguments
/// * `raster` - Input raster
/// * `element` - Structuring element defining the neighborhood shape
/// * `background` - Value assumed beyond the grid edge
pub fn erode<T: RasterElement>(
    raster: &Raster<T>,
    element: &StructuringElement,
    background: T,
) -> Result<Raster<T>> {
    element.validate()?;

    let (rows, cols) = raster.shape();
    let offsets = element.offsets();

    map_rows(rows, cols, |row, row_data| {
        let r = row as isize;
        for (col, out) in row_data.iter_mut().enumerate() {
            let c = col as isize;
            let mut min_val = T::max_value();
            for &(dr, dc) in &offsets {
                let v = raster.get_or(r + dr, c + dc, background);
                if v < min_val {
                    min_val = v;
                }
            }
            *out = min_val;
        }
    })
}
