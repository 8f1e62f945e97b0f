//! Morphological opening (erosion followed by dilation)
//!
//! Removes small bright features (noise, spikes) while preserving
//! the overall shape and size of larger bright regions.

use morphkit_core::{Algorithm, Error, Raster, RasterElement, Result};

use super::dilate::dilate;
use super::element::StructuringElement;
use super::erode::erode;

/// Parameters for morphological opening
#[derive(Debug, Clone, Default)]
pub struct OpeningParams {
    /// Structuring element shape
    pub element: StructuringElement,
}

/// Opening algorithm
#[derive(Debug, Clone, Default)]
pub struct Opening;

impl Algorithm for Opening {
    type Input = Raster<u8>;
    type Output = Raster<u8>;
    type Params = OpeningParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Opening"
    }

    fn description(&self) -> &'static str {
        "Morphological opening (erosion then dilation) to remove small bright features"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        opening(&input, &params.element)
    }
}

/// Perform morphological opening on a raster
///
/// Opening = erode then dilate, both stages padding the grid with the darkest
/// value so that bright features never grow in from the border.
///
/// # Arguments
/// * `raster` - Input raster
/// * `element` - Structuring element defining the neighborhood shape
pub fn opening<T: RasterElement>(
    raster: &Raster<T>,
    element: &StructuringElement,
) -> Result<Raster<T>> {
    let eroded = erode(raster, element, T::zero())?;
    dilate(&eroded, element, T::zero())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_removes_bright_spot() {
        let mut raster = Raster::filled(11, 11, 5u8);
        raster.set(5, 5, 100).unwrap();

        let result = opening(&raster, &StructuringElement::Rect(3)).unwrap();
        assert_eq!(result.get(5, 5).unwrap(), 5);
    }

    #[test]
    fn test_opening_preserves_large_bright_region() {
        let mut raster = Raster::filled(11, 11, 5u8);
        for r in 4..7 {
            for c in 4..7 {
                raster.set(r, c, 100).unwrap();
            }
        }

        let result = opening(&raster, &StructuringElement::Rect(3)).unwrap();
        for r in 4..7 {
            for c in 4..7 {
                assert_eq!(result.get(r, c).unwrap(), 100, "at ({}, {})", r, c);
            }
        }
        assert_eq!(result.get(5, 8).unwrap(), 5);
    }

    #[test]
    fn test_opening_dark_border() {
        // A band hugging the top edge is thinner than the element once the
        // outside is treated as dark, so opening removes it entirely.
        let mut raster: Raster<u8> = Raster::new(7, 7);
        for r in 0..2 {
            for c in 0..7 {
                raster.set(r, c, 200).unwrap();
            }
        }
        let result = opening(&raster, &StructuringElement::Rect(3)).unwrap();
        assert!(result.iter().all(|&v| v == 0));
    }

    #[test]
    fn test_opening_uniform_field_untouched() {
        let raster = Raster::filled(7, 7, 200u8);
        let result = opening(&raster, &StructuringElement::Rect(3)).unwrap();
        assert_eq!(result, raster);
    }

    #[test]
    fn test_opening_is_anti_extensive() {
        let mut raster: Raster<u8> = Raster::new(9, 9);
        for r in 0..9 {
            for c in 0..9 {
                raster.set(r, c, ((r * 31 + c * 17) % 256) as u8).unwrap();
            }
        }
        let result = opening(&raster, &StructuringElement::ellipse(3).unwrap()).unwrap();
        for (o, i) in result.iter().zip(raster.iter()) {
            assert!(o <= i);
        }
    }
}
