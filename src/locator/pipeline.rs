//! Locator pipeline.
//!
//! Typical usage:
//! ```no_run
//! use eye_centers::{EyeCenterLocator, EyeCenterParams};
//!
//! # fn example(eye: image::DynamicImage) {
//! let locator = EyeCenterLocator::new(EyeCenterParams::default());
//! let report = locator.locate_with_report(&eye).unwrap();
//! if !report.low_confidence {
//!     println!("center: {:?}", report.center);
//! }
//! # }
//! ```

use super::params::EyeCenterParams;
use crate::blur::gaussian_blur;
use crate::cancel::CancelToken;
use crate::center::{argmax, evaluate_objective};
use crate::diagnostics::{EyeCenterReport, TimingBreakdown};
use crate::edges::sobel_gradients;
use crate::error::EyeCenterError;
use crate::image::{to_intensity_grid, PixelSource};
use crate::resize::ResizeCache;
use crate::scaling::GridScale;
use crate::types::Point;
use log::{debug, warn};
use std::time::Instant;

/// Gradient-based eye-center locator.
///
/// Holds its parameters and a cache of resamplers keyed by
/// `(source size, working size)`; everything else is allocated per call.
#[derive(Debug, Default)]
pub struct EyeCenterLocator {
    params: EyeCenterParams,
    resizers: ResizeCache,
}

impl EyeCenterLocator {
    /// Create a locator with the supplied parameters.
    pub fn new(params: EyeCenterParams) -> Self {
        Self {
            params,
            resizers: ResizeCache::new(),
        }
    }

    pub fn params(&self) -> &EyeCenterParams {
        &self.params
    }

    /// Replace the parameters. Cached resizers for the old working size
    /// stay until the cache evicts them.
    pub fn set_params(&mut self, params: EyeCenterParams) {
        self.params = params;
    }

    /// Estimate the eye center in source pixel coordinates.
    pub fn locate<S: PixelSource + ?Sized>(&self, image: &S) -> Result<Point, EyeCenterError> {
        self.run(image, None).map(|report| report.center)
    }

    /// Like [`Self::locate`], stopping early once `cancel` is triggered.
    pub fn locate_cancellable<S: PixelSource + ?Sized>(
        &self,
        image: &S,
        cancel: &CancelToken,
    ) -> Result<Point, EyeCenterError> {
        self.run(image, Some(cancel)).map(|report| report.center)
    }

    /// Run the pipeline and keep the intermediate diagnostics.
    pub fn locate_with_report<S: PixelSource + ?Sized>(
        &self,
        image: &S,
    ) -> Result<EyeCenterReport, EyeCenterError> {
        self.run(image, None)
    }

    fn run<S: PixelSource + ?Sized>(
        &self,
        image: &S,
        cancel: Option<&CancelToken>,
    ) -> Result<EyeCenterReport, EyeCenterError> {
        self.params.validate()?;
        let (width, height) = (image.width(), image.height());
        if width == 0 || height == 0 {
            return Err(EyeCenterError::InvalidInput { width, height });
        }
        let working = self.params.working_size;
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();

        let stage = Instant::now();
        let gray = to_intensity_grid(image);
        let resizer = self
            .resizers
            .get_or_build((width, height), (working.width, working.height))?;
        let resized = resizer.resize(&gray.as_view())?;
        timings.push("downsample", elapsed_ms(stage));

        let stage = Instant::now();
        let blurred = gaussian_blur(&resized, self.params.blur_sigma);
        timings.push("blur", elapsed_ms(stage));

        let stage = Instant::now();
        let gradients = sobel_gradients(&resized, self.params.gradient_threshold());
        let gradient_cells = gradients.nonzero_count();
        timings.push("gradients", elapsed_ms(stage));

        let stage = Instant::now();
        let objective = evaluate_objective(&blurred, &gradients, cancel)?;
        let objective_ms = elapsed_ms(stage);
        timings.push("objective", objective_ms);

        let grid_center = argmax(&objective).unwrap_or_default();
        let scale = GridScale::from_dimensions(width, height, working);
        let center = scale.to_original(grid_center);
        timings.total_ms = elapsed_ms(total_start);

        debug!(
            "EyeCenterLocator::locate {}x{} -> {}x{} gradient_cells={} grid=({}, {}) center=({}, {}) objective_ms={:.3} total_ms={:.3}",
            width,
            height,
            working.width,
            working.height,
            gradient_cells,
            grid_center.x,
            grid_center.y,
            center.x,
            center.y,
            objective_ms,
            timings.total_ms
        );
        let low_confidence = gradient_cells == 0;
        if low_confidence {
            warn!(
                "EyeCenterLocator::locate no gradient above threshold {:.1} in {}x{} input; returning tie-break cell",
                self.params.gradient_threshold(),
                width,
                height
            );
        }

        Ok(EyeCenterReport {
            center,
            grid_center,
            scale,
            source_size: (width, height),
            working_size: working,
            gradient_cells,
            low_confidence,
            timings,
            objective,
        })
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
