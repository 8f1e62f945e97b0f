//! Raster data structures and operations

mod element;
mod grid;
mod neighborhood;

pub use element::RasterElement;
pub use grid::{in_bounds, Raster, RasterStatistics};
pub use neighborhood::{
    step, Connectivity, CLOCKWISE_NEIGHBORS, EIGHT_NEIGHBORS, FOUR_NEIGHBORS,
};
