//! Raster element trait for generic cell values

use num_traits::{NumCast, Zero};
use std::fmt::Debug;

/// Trait for types that can be stored in a raster cell.
///
/// The morphology engine itself works on `u8` intensities; wider types are
/// used for label maps and intermediate arithmetic.
pub trait RasterElement:
    Copy + Clone + Debug + PartialOrd + PartialEq + NumCast + Zero + Send + Sync + 'static
{
    /// Minimum value representable by this type
    fn min_value() -> Self;

    /// Maximum value representable by this type
    fn max_value() -> Self;
}

macro_rules! impl_raster_element {
    ($($t:ty),*) => {
        $(
            impl RasterElement for $t {
                fn min_value() -> Self {
                    <$t>::MIN
                }

                fn max_value() -> Self {
                    <$t>::MAX
                }
            }
        )*
    };
}

impl_raster_element!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
