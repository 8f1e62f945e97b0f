//! # morphkit algorithms
//!
//! Pixel-grid algorithms over 8-bit intensity rasters.
//!
//! ## Available Algorithm Categories
//!
//! - **threshold**: Inverted-polarity binarization
//! - **morphology**: Structuring elements, erosion, dilation, opening, closing,
//!   top-hat, bottom-hat, contrast enhancement
//! - **labeling**: 4-connected equal-value region labeling
//! - **contours**: External border following
//! - **fill**: Contour-based hole filling
//! - **majority**: 5-of-8 majority denoiser
//!
//! Grid-to-grid operations process rows in parallel when the `parallel`
//! feature (on by default) is enabled.

pub mod contours;
pub mod fill;
pub mod labeling;
pub mod majority;
pub mod morphology;
pub mod threshold;

mod parallel;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::contours::{BorderFollower, ChainApproximation, Contour, ContourTracer};
    pub use crate::fill::{fill_holes, fill_holes_with, fill_polygon, FillHoles};
    pub use crate::labeling::{label, label_map, Component, Label, LabeledComponents};
    pub use crate::majority::{majority, Majority, MajorityParams};
    pub use crate::morphology::{
        bottom_hat, closing, dilate, enhance, erode, opening, top_hat, BottomHat, Closing,
        Dilate, Enhance, Erode, Opening, StructuringElement, TopHat,
    };
    pub use crate::threshold::{binarize, Binarize, ThresholdParams, DEFAULT_THRESHOLD};
    pub use morphkit_core::prelude::*;
}
