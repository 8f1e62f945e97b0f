//! Majority-vote denoising filter
//!
//! A pixel turns on (255) when at least [`MAJORITY_THRESHOLD`] of its eight
//! neighbors are nonzero; otherwise it is 0. The pixel's own value does not
//! vote.

use morphkit_core::raster::EIGHT_NEIGHBORS;
use morphkit_core::{Algorithm, Error, Raster, Result};

use crate::parallel::map_rows;

/// Minimum number of nonzero neighbors (out of 8) that turns a pixel on
pub const MAJORITY_THRESHOLD: usize = 5;

/// Parameters for the majority filter
#[derive(Debug, Clone, Default)]
pub struct MajorityParams {
    /// Value substituted for neighbors outside the grid
    pub background: u8,
}

/// Majority filter algorithm
#[derive(Debug, Clone, Default)]
pub struct Majority;

impl Algorithm for Majority {
    type Input = Raster<u8>;
    type Output = Raster<u8>;
    type Params = MajorityParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Majority"
    }

    fn description(&self) -> &'static str {
        "Majority filter: on when at least 5 of 8 neighbors are nonzero"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        majority(&input, params.background)
    }
}

/// Apply the majority filter
///
/// # Arguments
/// * `raster` - Input raster; any nonzero value counts as "on"
/// * `background` - Value assumed beyond the grid edge
pub fn majority(raster: &Raster<u8>, background: u8) -> Result<Raster<u8>> {
    let (rows, cols) = raster.shape();
    map_rows(rows, cols, |row, row_data| {
        let r = row as isize;
        for (col, out) in row_data.iter_mut().enumerate() {
            let c = col as isize;
            let on = EIGHT_NEIGHBORS
                .iter()
                .filter(|&&(dr, dc)| raster.get_or(r + dr, c + dc, background) != 0)
                .count();
            if on >= MAJORITY_THRESHOLD {
                *out = 255;
            }
        }
    })
}
