//! Thresholded Sobel gradients.
//!
//! Kernels are indexed `[row][col]` with rows along `y`:
//!
//! ```text
//! Gx = [-1 0 1; -2 0 2; -1 0 1]      Gy = [-1 -2 -1; 0 0 0; 1 2 1]
//! ```
//!
//! Both point from dark to bright. Interior pixels only; a grid narrower
//! than 3 cells on either axis has no interior and yields all-zero fields.
//!
//! Complexity: O(W·H).
use crate::image::{ImageF64, ImageView, ImageViewMut};

type Kernel3 = [[f64; 3]; 3];

pub const SOBEL_KERNEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
pub const SOBEL_KERNEL_Y: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Per-pixel gradient components at the working resolution.
#[derive(Clone, Debug, PartialEq)]
pub struct Gradients {
    /// Horizontal derivative (convolution with kernel X)
    pub gx: ImageF64,
    /// Vertical derivative (convolution with kernel Y)
    pub gy: ImageF64,
}

impl Gradients {
    pub fn width(&self) -> usize {
        self.gx.w
    }

    pub fn height(&self) -> usize {
        self.gx.h
    }

    /// Euclidean magnitude at `(x, y)`.
    #[inline]
    pub fn magnitude(&self, x: usize, y: usize) -> f64 {
        self.gx.get(x, y).hypot(self.gy.get(x, y))
    }

    /// Number of cells with at least one non-zero component.
    pub fn nonzero_count(&self) -> usize {
        self.gx
            .data
            .iter()
            .zip(&self.gy.data)
            .filter(|(gx, gy)| **gx != 0.0 || **gy != 0.0)
            .count()
    }
}

/// Sobel gradients of `l`, zeroing components with `|response| < threshold`.
pub fn sobel_gradients(l: &ImageF64, threshold: f64) -> Gradients {
    let w = l.w;
    let h = l.h;
    let mut gx = ImageF64::new(w, h);
    let mut gy = ImageF64::new(w, h);
    if w < 3 || h < 3 {
        return Gradients { gx, gy };
    }

    for y in 1..h - 1 {
        let rows = [l.row(y - 1), l.row(y), l.row(y + 1)];
        let out_gx = gx.row_mut(y);
        let out_gy = gy.row_mut(y);
        for x in 1..w - 1 {
            let mut sum_x = 0.0;
            let mut sum_y = 0.0;
            for (ky, row) in rows.iter().enumerate() {
                let kx_row = &SOBEL_KERNEL_X[ky];
                let ky_row = &SOBEL_KERNEL_Y[ky];
                sum_x += row[x - 1] * kx_row[0] + row[x] * kx_row[1] + row[x + 1] * kx_row[2];
                sum_y += row[x - 1] * ky_row[0] + row[x] * ky_row[1] + row[x + 1] * ky_row[2];
            }
            if sum_x.abs() >= threshold {
                out_gx[x] = sum_x;
            }
            if sum_y.abs() >= threshold {
                out_gy[x] = sum_y;
            }
        }
    }

    Gradients { gx, gy }
}
