//! Row-parallel raster construction.
//!
//! With the `parallel` feature, rows are distributed over rayon's thread pool.
//! Without it (e.g. for embedded or single-threaded builds), a sequential
//! stand-in provides the same `into_par_iter()` surface, so callers compile
//! unchanged either way.

use morphkit_core::{Raster, RasterElement, Result};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[cfg(not(feature = "parallel"))]
use sequential::*;

#[cfg(not(feature = "parallel"))]
mod sequential {
    /// Sequential stand-in for `rayon::prelude::IntoParallelIterator`.
    pub trait IntoParallelIterator {
        type Iter;
        fn into_par_iter(self) -> Self::Iter;
    }

    impl<I: IntoIterator> IntoParallelIterator for I {
        type Iter = I::IntoIter;
        fn into_par_iter(self) -> Self::Iter {
            self.into_iter()
        }
    }
}

/// Build a `rows x cols` raster by filling each row independently.
///
/// `fill_row` receives the row index and a zero-initialised output row. Rows
/// never see each other's output, so no synchronisation is needed beyond the
/// final collect.
pub(crate) fn map_rows<T, F>(rows: usize, cols: usize, fill_row: F) -> Result<Raster<T>>
where
    T: RasterElement,
    F: Fn(usize, &mut [T]) + Sync + Send,
{
    let data: Vec<T> = (0..rows)
        .into_par_iter()
        .flat_map(|row| {
            let mut row_data = vec![T::zero(); cols];
            fill_row(row, &mut row_data);
            row_data
        })
        .collect();

    Raster::from_vec(data, rows, cols)
}
