//! Mathematical morphology on 8-bit intensity rasters
//!
//! - **Erosion**: minimum filter (shrinks bright regions)
//! - **Dilation**: maximum filter (expands bright regions)
//! - **Opening**: erosion then dilation (removes small bright features)
//! - **Closing**: dilation then erosion (fills small dark gaps)
//! - **Top-hat**: original minus opening (bright feature extraction)
//! - **Bottom-hat**: closing minus original (dark feature extraction)
//! - **Enhance**: original + 2 * top-hat - 3 * bottom-hat

mod arithmetic;
mod closing;
mod dilate;
mod element;
mod enhance;
mod erode;
mod opening;
mod tophat;

pub use arithmetic::{saturating_sub, weighted_sum};
pub use closing::{closing, Closing, ClosingParams};
pub use dilate::{dilate, Dilate, DilateParams};
pub use element::{StructuringElement, TOP_HAT_PRESET_SIZE};
pub use enhance::{combine, enhance, Enhance, EnhanceParams, BOTTOM_HAT_WEIGHT, TOP_HAT_WEIGHT};
pub use erode::{erode, Erode, ErodeParams};
pub use opening::{opening, Opening, OpeningParams};
pub use tophat::{bottom_hat, top_hat, BottomHat, BottomHatParams, TopHat, TopHatParams};
