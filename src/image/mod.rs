//! Image containers shared by the pipeline stages.
//!
//! - [`ImageU8`]: borrowed 8-bit grayscale view with stride.
//! - [`IntensityGrid`]: owned 8-bit grayscale grid produced by the grayscale
//!   reducer.
//! - [`ImageF64`]: owned `f64` scalar field at the working resolution.
//! - [`PixelSource`]: anything the locator can read intensities from.
pub mod f64;
pub mod gray;
pub mod io;
pub mod traits;
pub mod u8;

pub use self::f64::ImageF64;
pub use self::gray::{luma_from_rgb, to_intensity_grid, IntensityGrid, PixelSource};
pub use self::traits::{ImageView, ImageViewMut, Rows};
pub use self::u8::ImageU8;
