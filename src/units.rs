use serde::{Deserialize, Serialize};

use crate::error::{FramedeckError, FramedeckResult};

/// English Metric Units per inch, the integer unit presentation files use.
pub const EMU_PER_INCH: f64 = 914_400.0;

/// Convert a physical value in inches to EMU, rounded to the nearest unit.
pub fn inches_to_emu(inches: f64) -> i64 {
    (inches * EMU_PER_INCH).round() as i64
}

/// Map a pixel value into physical slide units.
///
/// Scale-only, origin-preserving per axis: `px / canvas_extent * slide_extent`.
/// Callers guarantee positive extents (`Canvas::validate` upstream).
pub fn to_physical(px: f64, canvas_extent: f64, slide_extent: f64) -> f64 {
    px / canvas_extent * slide_extent
}

/// Fixed physical slide dimensions in inches, shared by every page of a deck.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SlideSize {
    pub width_in: f64,
    pub height_in: f64,
}

impl SlideSize {
    /// The stock 4:3 deck: 10in x 7.5in.
    pub const DEFAULT: Self = Self {
        width_in: 10.0,
        height_in: 7.5,
    };

    /// Create a validated slide size.
    pub fn new(width_in: f64, height_in: f64) -> FramedeckResult<Self> {
        let size = Self {
            width_in,
            height_in,
        };
        size.validate()?;
        Ok(size)
    }

    pub fn validate(&self) -> FramedeckResult<()> {
        if !(self.width_in.is_finite() && self.height_in.is_finite())
            || self.width_in <= 0.0
            || self.height_in <= 0.0
        {
            return Err(FramedeckError::validation(
                "slide width/height must be finite and > 0",
            ));
        }
        Ok(())
    }

    pub fn as_size(self) -> kurbo::Size {
        kurbo::Size::new(self.width_in, self.height_in)
    }
}

impl Default for SlideSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}
