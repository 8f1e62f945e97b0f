//! Morphological closing (dilation followed by erosion)
//!
//! Fills small dark gaps and holes while preserving the overall
//! shape and size of larger dark regions.

use morphkit_core::{Algorithm, Error, Raster, RasterElement, Result};

use super::dilate::dilate;
use super::element::StructuringElement;
use super::erode::erode;

/// Parameters for morphological closing
#[derive(Debug, Clone, Default)]
pub struct ClosingParams {
    /// Structuring element shape
    pub element: StructuringElement,
}

/// Closing algorithm
#[derive(Debug, Clone, Default)]
pub struct Closing;

impl Algorithm for Closing {
    type Input = Raster<u8>;
    type Output = Raster<u8>;
    type Params = ClosingParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Closing"
    }

    fn description(&self) -> &'static str {
        "Morphological closing (dilation then erosion) to fill small dark gaps"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        closing(&input, &params.element)
    }
}

/// Perform morphological closing on a raster
///
/// Closing = dilate then erode. The dilation pads with the darkest value, the
/// erosion with the brightest, so dark features never grow in from the border.
///
/// # Arguments
/// * `raster` - Input raster
/// * `element` - Structuring element defining the neighborhood shape
pub fn closing<T: RasterElement>(
    raster: &Raster<T>,
    element: &StructuringElement,
) -> Result<Raster<T>> {
    let dilated = dilate(raster, element, T::zero())?;
    erode(&dilated, element, T::max_value())
}
