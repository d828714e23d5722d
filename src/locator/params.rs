//! Parameters of the eye-center locator.
//!
//! All three knobs trade accuracy against cost or robustness and were tuned
//! empirically; none is hard-coded in the pipeline.
//!
//! - `working_size`: resolution the crop is resampled to. Cost grows with the
//!   fourth power of the side; the returned point is quantized to
//!   `source / working` pixels.
//! - `blur_sigma`: Gaussian sigma (in working-grid cells) of the field the
//!   darkness weight is read from.
//! - `gradient_threshold_fraction`: fraction of the 8-bit range (255) below
//!   which a Sobel component is discarded.
use crate::types::WorkingSize;
use serde::{Deserialize, Serialize};

/// Locator configuration. Deserializes with per-field defaults.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EyeCenterParams {
    pub working_size: WorkingSize,
    pub blur_sigma: f64,
    pub gradient_threshold_fraction: f64,
}

impl Default for EyeCenterParams {
    fn default() -> Self {
        Self {
            working_size: WorkingSize::square(64),
            blur_sigma: 3.5,
            gradient_threshold_fraction: 0.9,
        }
    }
}

impl EyeCenterParams {
    pub fn with_working_size(mut self, working_size: WorkingSize) -> Self {
        self.working_size = working_size;
        self
    }

    pub fn with_blur_sigma(mut self, blur_sigma: f64) -> Self {
        self.blur_sigma = blur_sigma;
        self
    }

    pub fn with_gradient_threshold_fraction(mut self, fraction: f64) -> Self {
        self.gradient_threshold_fraction = fraction;
        self
    }

    /// Absolute Sobel threshold on the 0..255 intensity scale.
    pub fn gradient_threshold(&self) -> f64 {
        self.gradient_threshold_fraction * 255.0
    }

    /// Reject values the pipeline cannot run with.
    pub fn validate(&self) -> Result<(), ParamsError> {
        let WorkingSize { width, height } = self.working_size;
        if width < MIN_WORKING_SIDE || height < MIN_WORKING_SIDE {
            return Err(ParamsError::WorkingSizeTooSmall { width, height });
        }
        if !self.blur_sigma.is_finite() || self.blur_sigma < 0.0 {
            return Err(ParamsError::InvalidBlurSigma(self.blur_sigma));
        }
        if !self.gradient_threshold_fraction.is_finite() || self.gradient_threshold_fraction < 0.0
        {
            return Err(ParamsError::InvalidGradientThreshold(
                self.gradient_threshold_fraction,
            ));
        }
        Ok(())
    }
}

/// Smallest working side with a Sobel interior.
pub const MIN_WORKING_SIDE: usize = 3;

/// Why a parameter set was rejected.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamsError {
    WorkingSizeTooSmall { width: usize, height: usize },
    InvalidBlurSigma(f64),
    InvalidGradientThreshold(f64),
}

impl std::fmt::Display for ParamsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamsError::WorkingSizeTooSmall { width, height } => write!(
                f,
                "working size {width}x{height} is below the {MIN_WORKING_SIDE}x{MIN_WORKING_SIDE} minimum"
            ),
            ParamsError::InvalidBlurSigma(sigma) => {
                write!(f, "blur sigma must be finite and non-negative, got {sigma}")
            }
            ParamsError::InvalidGradientThreshold(fraction) => write!(
                f,
                "gradient threshold fraction must be finite and non-negative, got {fraction}"
            ),
        }
    }
}

impl std::error::Error for ParamsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let p = EyeCenterParams::default();
        assert_eq!(p.working_size, WorkingSize::square(64));
        assert_eq!(p.gradient_threshold(), 229.5);
        assert_eq!(p.validate(), Ok(()));
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let p = EyeCenterParams::default();
        assert!(matches!(
            p.with_working_size(WorkingSize::new(2, 64)).validate(),
            Err(ParamsError::WorkingSizeTooSmall { width: 2, .. })
        ));
        assert!(p.with_blur_sigma(f64::INFINITY).validate().is_err());
        assert!(p.with_blur_sigma(-1.0).validate().is_err());
        assert!(p.with_gradient_threshold_fraction(f64::NAN).validate().is_err());
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let p: EyeCenterParams =
            serde_json::from_str(r#"{ "working_size": { "width": 32, "height": 32 } }"#).unwrap();
        assert_eq!(p.working_size, WorkingSize::square(32));
        assert_eq!(p.blur_sigma, 3.5);
        assert_eq!(p.gradient_threshold_fraction, 0.9);
    }
}
