//! Mapping from the working grid back to source pixels.
//!
//! Scale factors use integer (truncating) division, `orig / working`, and a
//! grid cell maps to its top-left source pixel. The returned point is
//! therefore quantized to multiples of the scale factor: the error is bounded
//! by `orig_w / size_x` pixels horizontally and `orig_h / size_y` vertically.
//! This is the accuracy limit of the method at a given working resolution.
use crate::types::{Point, WorkingSize};
use serde::Serialize;

/// Integer per-axis factors between the working grid and the source image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridScale {
    pub scale_x: usize,
    pub scale_y: usize,
}

impl GridScale {
    /// Factors for a `orig_w × orig_h` source sampled at `working`.
    ///
    /// A zero working dimension yields a zero factor on that axis.
    pub fn from_dimensions(orig_w: usize, orig_h: usize, working: WorkingSize) -> Self {
        Self {
            scale_x: orig_w.checked_div(working.width).unwrap_or(0),
            scale_y: orig_h.checked_div(working.height).unwrap_or(0),
        }
    }

    /// Map a working-grid cell to source pixel coordinates.
    #[inline]
    pub fn to_original(&self, p: Point) -> Point {
        Point::new(p.x * self.scale_x, p.y * self.scale_y)
    }
}
