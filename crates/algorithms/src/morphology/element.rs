//! Structuring element definitions for morphological operations
//!
//! A structuring element is a flat (boolean) square mask of odd side length.
//! Only its shape matters: active cells take part in the min/max of erosion
//! and dilation, inactive cells are skipped.

use morphkit_core::{Error, Result};

/// Side length of the element the top-hat preset uses
pub const TOP_HAT_PRESET_SIZE: usize = 15;

/// Shape of a structuring element for morphological operations
#[derive(Debug, Clone, PartialEq)]
pub enum StructuringElement {
    /// Disk approximation inscribed in a `size x size` square
    Ellipse(usize),
    /// Full `size x size` square
    Rect(usize),
    /// Plus-shaped element spanning the full width and height
    Cross(usize),
    /// User-provided boolean mask (must be odd-sized and square)
    Custom(Vec<Vec<bool>>),
}

impl Default for StructuringElement {
    fn default() -> Self {
        StructuringElement::Ellipse(3)
    }
}

impl StructuringElement {
    /// Build the elliptical (disk-approximating) element of the given side length
    ///
    /// Fails with [`Error::InvalidKernelSize`] for zero or even sizes.
    pub fn ellipse(size: usize) -> Result<Self> {
        let element = StructuringElement::Ellipse(size);
        element.validate()?;
        Ok(element)
    }

    /// The fixed-size ellipse historically used for top-hat extraction
    pub fn top_hat_preset() -> Self {
        StructuringElement::Ellipse(TOP_HAT_PRESET_SIZE)
    }

    /// Validate the structuring element, returning an error for invalid configurations
    pub fn validate(&self) -> Result<()> {
        match self {
            StructuringElement::Ellipse(size)
            | StructuringElement::Rect(size)
            | StructuringElement::Cross(size) => check_size(*size),
            StructuringElement::Custom(mask) => {
                let size = mask.len();
                check_size(size)?;
                for row in mask {
                    if row.len() != size {
                        return Err(Error::InvalidParameter {
                            name: "custom_mask",
                            value: format!("row length {}", row.len()),
                            reason: format!("custom mask must be square (expected {})", size),
                        });
                    }
                }
                if !mask.iter().flatten().any(|&active| active) {
                    return Err(Error::InvalidParameter {
                        name: "custom_mask",
                        value: format!("{}x{}", size, size),
                        reason: "custom mask needs at least one active cell".to_string(),
                    });
                }
                Ok(())
            }
        }
    }

    /// Side length of the element
    pub fn size(&self) -> usize {
        match self {
            StructuringElement::Ellipse(size)
            | StructuringElement::Rect(size)
            | StructuringElement::Cross(size) => *size,
            StructuringElement::Custom(mask) => mask.len(),
        }
    }

    /// Distance from the centre cell to the mask edge (`size / 2`)
    pub fn padding(&self) -> usize {
        self.size() / 2
    }

    /// Whether the mask cell at `(row, col)` is active
    pub fn contains(&self, row: usize, col: usize) -> bool {
        let size = self.size();
        if row >= size || col >= size {
            return false;
        }
        let center = size / 2;
        match self {
            StructuringElement::Ellipse(_) => ellipse_span(size, row).contains(&col),
            StructuringElement::Rect(_) => true,
            StructuringElement::Cross(_) => row == center || col == center,
            StructuringElement::Custom(mask) => {
                mask.get(row).and_then(|r| r.get(col)).copied().unwrap_or(false)
            }
        }
    }

    /// The full boolean mask, row by row
    pub fn mask(&self) -> Vec<Vec<bool>> {
        let size = self.size();
        (0..size)
            .map(|row| (0..size).map(|col| self.contains(row, col)).collect())
            .collect()
    }

    /// Compute (dr, dc) offsets relative to center for all active cells, in row-major order
    pub fn offsets(&self) -> Vec<(isize, isize)> {
        let size = self.size();
        let center = (size / 2) as isize;
        let mut offsets = Vec::new();
        for row in 0..size {
            for col in 0..size {
                if self.contains(row, col) {
                    offsets.push((row as isize - center, col as isize - center));
                }
            }
        }
        offsets
    }
}

fn check_size(size: usize) -> Result<()> {
    if size == 0 || size % 2 == 0 {
        return Err(Error::InvalidKernelSize { size });
    }
    Ok(())
}

/// Active column range of row `row` in a `size x size` ellipse.
///
/// Each row spans `c ± round(c * sqrt((r² - dy²) / r²))` around the centre
/// column, clipped to the mask.
fn ellipse_span(size: usize, row: usize) -> std::ops::Range<usize> {
    let r = (size / 2) as isize;
    let dy = row as isize - r;
    if dy.abs() > r {
        return 0..0;
    }
    let inv_r2 = if r > 0 { 1.0 / (r * r) as f64 } else { 0.0 };
    let dx = (r as f64 * (((r * r - dy * dy) as f64) * inv_r2).sqrt()).round() as isize;
    let start = (r - dx).max(0) as usize;
    let end = ((r + dx + 1) as usize).min(size);
    start..end
}
