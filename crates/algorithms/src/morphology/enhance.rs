//! Contrast enhancement from top-hat and bottom-hat responses
//!
//! `enhanced = clamp(original + 2 * top_hat - 3 * bottom_hat, 0, 255)`
//!
//! Bright details are boosted and dark details deepened in one pass. The
//! weighted sum is evaluated in wide integers and clamped once, so the
//! result does not depend on evaluation order.

use morphkit_core::{Algorithm, Error, Raster, Result};
use tracing::debug;

use super::arithmetic::weighted_sum;
use super::element::StructuringElement;
use super::tophat::{bottom_hat, top_hat};

/// Weight applied to the top-hat response
pub const TOP_HAT_WEIGHT: i32 = 2;

/// Weight subtracted for the bottom-hat response
pub const BOTTOM_HAT_WEIGHT: i32 = 3;

/// Parameters for contrast enhancement
#[derive(Debug, Clone)]
pub struct EnhanceParams {
    /// Structuring element used for both the top-hat and the bottom-hat
    pub element: StructuringElement,
}

impl Default for EnhanceParams {
    fn default() -> Self {
        Self {
            element: StructuringElement::top_hat_preset(),
        }
    }
}

/// Top-hat/bottom-hat contrast enhancement
#[derive(Debug, Clone, Default)]
pub struct Enhance;

impl Algorithm for Enhance {
    type Input = Raster<u8>;
    type Output = Raster<u8>;
    type Params = EnhanceParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Enhance"
    }

    fn description(&self) -> &'static str {
        "Contrast enhancement: original + 2 * top-hat - 3 * bottom-hat"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        enhance(&input, &params.element)
    }
}

/// Enhance contrast using the top-hat and bottom-hat of `raster` under `element`
pub fn enhance(raster: &Raster<u8>, element: &StructuringElement) -> Result<Raster<u8>> {
    let top = top_hat(raster, element)?;
    let bottom = bottom_hat(raster, element)?;
    debug!(
        rows = raster.rows(),
        cols = raster.cols(),
        size = element.size(),
        "combining top-hat and bottom-hat"
    );
    combine(raster, &top, &bottom)
}

/// Combine precomputed responses: `clamp(original + 2 * top - 3 * bottom)`
///
/// All three rasters must share a shape.
pub fn combine(
    original: &Raster<u8>,
    top_hat: &Raster<u8>,
    bottom_hat: &Raster<u8>,
) -> Result<Raster<u8>> {
    weighted_sum(&[
        (original, 1),
        (top_hat, TOP_HAT_WEIGHT),
        (bottom_hat, -BOTTOM_HAT_WEIGHT),
    ])
}
