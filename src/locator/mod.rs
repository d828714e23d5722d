//! Eye-center locator orchestrating the gradient-alignment pipeline.
//!
//! Overview
//! - Reduces the input to 8-bit intensities and resamples it to the working
//!   resolution with a cached bilinear resizer.
//! - Blurs the resampled field; `255 − blurred` is the darkness weight of a
//!   candidate.
//! - Extracts thresholded Sobel gradients from the unblurred field.
//! - Scores every working cell as a candidate center
//!   ([`crate::center::objective`]), takes the arg-max and rescales it to
//!   source pixels.
//!
//! Modules
//! - [`params`] – configuration with serde defaults and validation.
//! - `pipeline` – the [`EyeCenterLocator`] implementation.
//!
//! The locator keeps no per-call state. Its only shared resource is the
//! resize cache, so one locator can serve concurrent callers.

pub mod params;
mod pipeline;

pub use params::{EyeCenterParams, ParamsError, MIN_WORKING_SIDE};
pub use pipeline::EyeCenterLocator;

use crate::error::EyeCenterError;
use crate::image::PixelSource;
use crate::types::Point;

/// Estimate the eye center of a tightly cropped eye image with default
/// parameters.
///
/// ```
/// use eye_centers::{estimate_eye_center, image::ImageU8};
///
/// let (w, h) = (128usize, 128usize);
/// let gray: Vec<u8> = (0..w * h)
///     .map(|i| {
///         let (x, y) = ((i % w) as f64, (i / w) as f64);
///         if (x - 64.0).hypot(y - 64.0) < 20.0 { 20 } else { 230 }
///     })
///     .collect();
/// let center = estimate_eye_center(&ImageU8::packed(w, h, &gray)).unwrap();
/// assert!(center.x.abs_diff(64) <= 2 && center.y.abs_diff(64) <= 2);
/// ```
pub fn estimate_eye_center<S: PixelSource + ?Sized>(image: &S) -> Result<Point, EyeCenterError> {
    estimate_eye_center_with(image, &EyeCenterParams::default())
}

/// Like [`estimate_eye_center`] with explicit parameters.
pub fn estimate_eye_center_with<S: PixelSource + ?Sized>(
    image: &S,
    params: &EyeCenterParams,
) -> Result<Point, EyeCenterError> {
    EyeCenterLocator::new(*params).locate(image)
}
