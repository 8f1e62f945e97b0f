//! Threshold binarization
//!
//! Polarity is inverted: pixels at or above the threshold become background
//! (0) and darker pixels become foreground (255). Downstream operations treat
//! nonzero as foreground, so dark ink on a bright page comes out as the
//! foreground after binarization.

use morphkit_core::{Algorithm, Error, Raster, Result};

use crate::parallel::map_rows;

/// Threshold used when none is given
pub const DEFAULT_THRESHOLD: u8 = 128;

/// Foreground intensity produced by binarization
pub const FOREGROUND: u8 = 255;

/// Parameters for binarization
#[derive(Debug, Clone)]
pub struct ThresholdParams {
    /// Inputs `>= threshold` map to 0, the rest to 255
    pub threshold: u8,
}

impl Default for ThresholdParams {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// Binarization algorithm
#[derive(Debug, Clone, Default)]
pub struct Binarize;

impl Algorithm for Binarize {
    type Input = Raster<u8>;
    type Output = Raster<u8>;
    type Params = ThresholdParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Binarize"
    }

    fn description(&self) -> &'static str {
        "Inverted threshold: bright pixels become 0, dark pixels 255"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        binarize(&input, params.threshold)
    }
}

/// Binarize a raster against `threshold`
///
/// Output is 0 where `input >= threshold` and 255 elsewhere. A threshold of 0
/// therefore yields an all-zero raster.
pub fn binarize(raster: &Raster<u8>, threshold: u8) -> Result<Raster<u8>> {
    let (rows, cols) = raster.shape();
    map_rows(rows, cols, |row, row_data| {
        for (col, out) in row_data.iter_mut().enumerate() {
            let v = unsafe { raster.get_unchecked(row, col) };
            *out = if v >= threshold { 0 } else { FOREGROUND };
        }
    })
}
