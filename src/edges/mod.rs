//! Intensity gradients over the working grid.
//!
//! - Thresholded 3×3 Sobel responses returning `gx`, `gy`.
//! - The one-pixel border is never evaluated and stays zero.
//! - Each component is kept only when its absolute response reaches the
//!   threshold; weaker responses are zeroed so flat-region noise does not
//!   reach the objective.

pub mod grad;

pub use grad::{sobel_gradients, Gradients, SOBEL_KERNEL_X, SOBEL_KERNEL_Y};
