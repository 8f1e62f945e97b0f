//! # morphkit core
//!
//! Core types, traits and I/O for the morphkit grayscale morphology engine.
//!
//! This crate provides:
//! - `Raster<T>`: row-major 2D grid with a bounds-checked accessor
//! - Shared 4- and 8-neighbor offset tables
//! - The `Algorithm` trait every operation implements
//! - Image file I/O (decode to / encode from 8-bit intensity rasters)

pub mod error;
pub mod io;
pub mod raster;

pub use error::{Error, Result};
pub use raster::{in_bounds, Connectivity, Raster, RasterElement};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::raster::{in_bounds, Connectivity, Raster, RasterElement};
    pub use crate::Algorithm;
}

/// Core trait for all algorithms in morphkit.
///
/// Algorithms are pure functions that transform input data according to parameters.
pub trait Algorithm {
    /// Input type for the algorithm
    type Input;
    /// Output type for the algorithm
    type Output;
    /// Parameters controlling algorithm behavior
    type Params: Default;
    /// Error type for algorithm execution
    type Error: std::error::Error;

    /// Returns the algorithm name
    fn name(&self) -> &'static str;

    /// Returns a description of what the algorithm does
    fn description(&self) -> &'static str;

    /// Execute the algorithm
    fn execute(
        &self,
        input: Self::Input,
        params: Self::Params,
    ) -> std::result::Result<Self::Output, Self::Error>;

    /// Execute with default parameters
    fn execute_default(&self, input: Self::Input) -> std::result::Result<Self::Output, Self::Error> {
        self.execute(input, Self::Params::default())
    }
}
