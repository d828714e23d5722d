//! Bilinear downsampling to the fixed working resolution.
//!
//! Design
//! - Separable triangle filter: per axis, output sample `i` is centered at
//!   `(i + 0.5) · scale − 0.5` in source coordinates, with support
//!   `max(scale, 1)`. Downsampling therefore averages every covered source
//!   pixel; upsampling reduces to plain linear interpolation.
//! - Taps are computed once per `(source, target)` pair and kept in a
//!   [`BilinearResizer`]. A [`ResizeCache`] shares built resizers between
//!   calls and threads.
//! - Borders clamp to the source extents.
//!
//! Complexity: O(dst_w · src_h · taps_x + dst_w · dst_h · taps_y).
mod bilinear;
mod cache;

pub use bilinear::{BilinearResizer, ResizeError};
pub use cache::{ResizeCache, ResizeKey};
