#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod locator;
pub mod types;

// Pipeline stages – public for tooling and tests, considered internals.
pub mod blur;
pub mod cancel;
pub mod center;
pub mod edges;
pub mod resize;
pub mod scaling;

// --- High-level re-exports -------------------------------------------------

// Main entry points.
pub use crate::locator::{
    estimate_eye_center, estimate_eye_center_with, EyeCenterLocator, EyeCenterParams,
};
pub use crate::types::{Point, WorkingSize};

pub use crate::cancel::CancelToken;
pub use crate::diagnostics::EyeCenterReport;
pub use crate::error::EyeCenterError;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use eye_centers::prelude::*;
///
/// # fn main() {
/// let (w, h) = (160usize, 96usize);
/// let gray = vec![200u8; w * h];
/// let img = ImageU8 { w, h, stride: w, data: &gray };
///
/// let locator = EyeCenterLocator::new(EyeCenterParams {
///     working_size: WorkingSize::square(32),
///     ..Default::default()
/// });
/// let report = locator.locate_with_report(&img).unwrap();
/// println!("center={:?} low_confidence={}", report.center, report.low_confidence);
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{ImageU8, PixelSource};
    pub use crate::{EyeCenterLocator, EyeCenterParams, Point, WorkingSize};
}
