//! Top-hat and bottom-hat morphological transforms
//!
//! - **Top-hat** (white top-hat): original - opening. Extracts small bright
//!   features on a dark background.
//! - **Bottom-hat** (black-hat): closing - original. Extracts small dark
//!   features on a bright background.
//!
//! Differences saturate at zero.

use morphkit_core::{Algorithm, Error, Raster, Result};

use super::arithmetic::saturating_sub;
use super::closing::closing;
use super::element::StructuringElement;
use super::opening::opening;

/// Parameters for top-hat transform
#[derive(Debug, Clone)]
pub struct TopHatParams {
    /// Structuring element shape
    pub element: StructuringElement,
}

impl Default for TopHatParams {
    fn default() -> Self {
        Self {
            element: StructuringElement::top_hat_preset(),
        }
    }
}

/// Top-hat (white top-hat) algorithm
#[derive(Debug, Clone, Default)]
pub struct TopHat;

impl Algorithm for TopHat {
    type Input = Raster<u8>;
    type Output = Raster<u8>;
    type Params = TopHatParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "TopHat"
    }

    fn description(&self) -> &'static str {
        "Top-hat transform (original minus opening) to extract bright features"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        top_hat(&input, &params.element)
    }
}

/// Parameters for bottom-hat transform
#[derive(Debug, Clone, Default)]
pub struct BottomHatParams {
    /// Structuring element shape
    pub element: StructuringElement,
}

/// Bottom-hat algorithm
#[derive(Debug, Clone, Default)]
pub struct BottomHat;

impl Algorithm for BottomHat {
    type Input = Raster<u8>;
    type Output = Raster<u8>;
    type Params = BottomHatParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "BottomHat"
    }

    fn description(&self) -> &'static str {
        "Bottom-hat transform (closing minus original) to extract dark features"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        bottom_hat(&input, &params.element)
    }
}

/// Compute the top-hat (white top-hat) transform
///
/// Top-hat = original - opening, using exactly the element given. Callers
/// wanting the historical fixed 15x15 ellipse pass
/// [`StructuringElement::top_hat_preset`].
///
/// # Arguments
/// * `raster` - Input raster
/// * `element` - Structuring element defining the neighborhood shape
pub fn top_hat(raster: &Raster<u8>, element: &StructuringElement) -> Result<Raster<u8>> {
    let opened = opening(raster, element)?;
    saturating_sub(raster, &opened)
}

/// Compute the bottom-hat transform
///
/// Bottom-hat = closing - original.
///
/// # Arguments
/// * `raster` - Input raster
/// * `element` - Structuring element defining the neighborhood shape
pub fn bottom_hat(raster: &Raster<u8>, element: &StructuringElement) -> Result<Raster<u8>> {
    let closed = closing(raster, element)?;
    saturating_sub(&closed, raster)
}
