//! Saturating pixel arithmetic between rasters
//!
//! Sums are accumulated in `i32` and clamped to `[0, 255]` once per pixel,
//! so intermediate terms may exceed the 8-bit range without wrapping.

use morphkit_core::{Error, Raster, Result};

use crate::parallel::map_rows;

/// Per-pixel `clamp(sum(weight * raster), 0, 255)`
///
/// All rasters must share one shape; otherwise the call fails with
/// [`Error::DimensionMismatch`].
pub fn weighted_sum(terms: &[(&Raster<u8>, i32)]) -> Result<Raster<u8>> {
    let Some(&(first, _)) = terms.first() else {
        return Err(Error::InvalidParameter {
            name: "terms",
            value: "[]".to_string(),
            reason: "at least one raster is required".to_string(),
        });
    };
    for &(raster, _) in &terms[1..] {
        first.ensure_same_shape(raster)?;
    }

    let (rows, cols) = first.shape();
    map_rows(rows, cols, |row, row_data| {
        for (col, out) in row_data.iter_mut().enumerate() {
            let mut acc: i32 = 0;
            for &(raster, weight) in terms {
                // Shapes were checked above, so (row, col) is in range
                let v = unsafe { raster.get_unchecked(row, col) };
                acc += weight * i32::from(v);
            }
            *out = acc.clamp(0, 255) as u8;
        }
    })
}

/// Per-pixel `max(a - b, 0)`
pub fn saturating_sub(a: &Raster<u8>, b: &Raster<u8>) -> Result<Raster<u8>> {
    weighted_sum(&[(a, 1), (b, -1)])
}
