//! Morphological dilation (maximum filter)
//!
//! Replaces each pixel with the maximum value over the active cells of the
//! structuring element. Enlarges bright regions and shrinks dark regions.

use morphkit_core::{Algorithm, Error, Raster, RasterElement, Result};

use super::element::StructuringElement;
use crate::parallel::map_rows;

/// Parameters for morphological dilation
#[derive(Debug, Clone, Default)]
pub struct DilateParams {
    /// Structuring element shape
    pub element: StructuringElement,
    /// Value substituted for neighbors outside the grid
    pub background: u8,
}

/// Dilation algorithm
#[derive(Debug, Clone, Default)]
pub struct Dilate;

impl Algorithm for Dilate {
    type Input = Raster<u8>;
    type Output = Raster<u8>;
    type Params = DilateParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Dilate"
    }

    fn description(&self) -> &'static str {
        "Morphological dilation (maximum filter over structuring element)"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        dilate(&input, &params.element, params.background)
    }
}

/// Perform morphological dilation on a raster
///
/// Each output pixel is the maximum value over the active offsets of the
/// structuring element, reading `background` for offsets outside the grid.
///
/// # Arguments
/// * `raster` - Input raster
/// * `element` - Structuring element defining the neighborhood shape
/// * `background` - Value assumed beyond the grid edge
pub fn dilate<T: RasterElement>(
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
            let mut max_val = T::min_value();
            for &(dr, dc) in &offsets {
                let v = raster.get_or(r + dr, c + dc, background);
                if v > max_val {
                    max_val = v;
                }
            }
            *out = max_val;
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_bright_pixel() -> Raster<u8> {
        let mut raster = Raster::new(5, 5);
        raster.set(2, 2, 255).unwrap();
        raster
    }

    #[test]
    fn test_dilate_square_grows_full_neighborhood() {
        let result = dilate(&single_bright_pixel(), &StructuringElement::Rect(3), 0).unwrap();
        for row in 0..5 {
            for col in 0..5 {
                let expected = if (1..=3).contains(&row) && (1..=3).contains(&col) {
                    255
                } else {
                    0
                };
                assert_eq!(
                    result.get(row, col).unwrap(),
                    expected,
                    "Unexpected value at ({}, {})",
                    row,
                    col
                );
            }
        }
    }

    #[test]
    fn test_dilate_ellipse_grows_plus() {
        let se = StructuringElement::ellipse(3).unwrap();
        let result = dilate(&single_bright_pixel(), &se, 0).unwrap();
        let lit: Vec<(usize, usize)> = (0..5)
            .flat_map(|r| (0..5).map(move |c| (r, c)))
            .filter(|&(r, c)| result.get(r, c).unwrap() == 255)
            .collect();
        assert_eq!(lit, vec![(1, 2), (2, 1), (2, 2), (2, 3), (3, 2)]);
    }

    #[test]
    fn test_dilate_picks_maximum() {
        let mut raster = Raster::filled(7, 7, 10u8);
        raster.set(3, 4, 200).unwrap();
        let result = dilate(&raster, &StructuringElement::Rect(3), 0).unwrap();
        assert_eq!(result.get(3, 3).unwrap(), 200);
        assert_eq!(result.get(1, 1).unwrap(), 10);
    }

    #[test]
    fn test_dilate_bright_background_floods_border() {
        let raster: Raster<u8> = Raster::new(5, 5);
        let result = dilate(&raster, &StructuringElement::Rect(3), 255).unwrap();
        assert_eq!(result.get(0, 0).unwrap(), 255);
        assert_eq!(result.get(4, 2).unwrap(), 255);
        assert_eq!(result.get(2, 2).unwrap(), 0);
    }

    #[test]
    fn test_dilate_single_cell_element_is_identity() {
        let mut raster: Raster<u8> = Raster::new(4, 6);
        raster.set(1, 3, 77).unwrap();
        let result = dilate(&raster, &StructuringElement::Rect(1), 0).unwrap();
        assert_eq!(result, raster);
    }

    #[test]
    fn test_dilate_wider_types() {
        let mut raster: Raster<u16> = Raster::new(3, 3);
        raster.set(0, 0, 1000).unwrap();
        let result = dilate(&raster, &StructuringElement::Rect(3), 0).unwrap();
        assert_eq!(result.get(1, 1).unwrap(), 1000);
        assert_eq!(result.get(2, 2).unwrap(), 0);
    }
}
