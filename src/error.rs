//! Error types returned by the locator.
use crate::locator::ParamsError;
use crate::resize::ResizeError;

/// Failure of a single eye-center estimate.
///
/// All variants are deterministic: repeating the call with the same input
/// and parameters fails the same way.
#[derive(Clone, Debug, PartialEq)]
pub enum EyeCenterError {
    /// The source image has no pixels.
    InvalidInput { width: usize, height: usize },
    /// The resampler rejected the source/working dimension pair.
    Resize(ResizeError),
    /// The locator parameters are out of range.
    InvalidParams(ParamsError),
    /// The evaluation observed a cancelled [`crate::CancelToken`].
    Cancelled,
    /// Weight field and gradients passed to the objective differ in size.
    FieldMismatch {
        weight: (usize, usize),
        gradients: (usize, usize),
    },
}

impl std::fmt::Display for EyeCenterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EyeCenterError::InvalidInput { width, height } => {
                write!(f, "invalid input image dimensions {width}x{height}")
            }
            EyeCenterError::Resize(err) => write!(f, "resize failed: {err}"),
            EyeCenterError::InvalidParams(err) => write!(f, "invalid parameters: {err}"),
            EyeCenterError::Cancelled => write!(f, "eye center estimation cancelled"),
            EyeCenterError::FieldMismatch { weight, gradients } => write!(
                f,
                "weight field {}x{} does not match gradients {}x{}",
                weight.0, weight.1, gradients.0, gradients.1
            ),
        }
    }
}

impl std::error::Error for EyeCenterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EyeCenterError::Resize(err) => Some(err),
            EyeCenterError::InvalidParams(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ResizeError> for EyeCenterError {
    fn from(err: ResizeError) -> Self {
        EyeCenterError::Resize(err)
    }
}

impl From<ParamsError> for EyeCenterError {
    fn from(err: ParamsError) -> Self {
        EyeCenterError::InvalidParams(err)
    }
}
