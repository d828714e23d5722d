//! Separable Gaussian blur used to derive the per-candidate darkness weight.
//!
//! The kernel radius is `ceil(3σ)` and taps are `exp(−i² / 2σ²)` normalized
//! to sum 1. Both passes clamp sample indices to the field extents
//! (replicate border), so a constant field is preserved exactly.

use crate::image::{ImageF64, ImageView, ImageViewMut};

/// Trait implemented by separable 1D filters.
pub trait SeparableFilter {
    /// Return the 1D taps (in left-to-right order). The kernel is assumed to
    /// be centred on the middle tap.
    fn taps(&self) -> &[f64];
}

/// Normalized Gaussian kernel for a given sigma.
#[derive(Clone, Debug, PartialEq)]
pub struct GaussianFilter {
    sigma: f64,
    taps: Vec<f64>,
}

impl GaussianFilter {
    /// Build the kernel; `sigma <= 0` (or non-finite) gives the identity tap.
    pub fn new(sigma: f64) -> Self {
        if !(sigma.is_finite() && sigma > 0.0) {
            return Self {
                sigma: 0.0,
                taps: vec![1.0],
            };
        }
        let radius = (sigma * 3.0).ceil() as isize;
        let denom = 2.0 * sigma * sigma;
        let mut taps: Vec<f64> = (-radius..=radius)
            .map(|i| (-((i * i) as f64) / denom).exp())
            .collect();
        let sum: f64 = taps.iter().sum();
        for t in &mut taps {
            *t /= sum;
        }
        Self { sigma, taps }
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    pub fn radius(&self) -> usize {
        self.taps.len() / 2
    }
}

impl SeparableFilter for GaussianFilter {
    #[inline]
    fn taps(&self) -> &[f64] {
        &self.taps
    }
}

/// Convolve `src` with `filter` horizontally, then vertically.
pub fn apply_separable<F: SeparableFilter + ?Sized>(filter: &F, src: &ImageF64) -> ImageF64 {
    let (w, h) = (src.w, src.h);
    let mut out = ImageF64::new(w, h);
    if w == 0 || h == 0 {
        return out;
    }
    let taps = filter.taps();
    let radius = (taps.len() / 2) as isize;

    let mut tmp = ImageF64::new(w, h);
    for y in 0..h {
        let src_row = src.row(y);
        let dst_row = tmp.row_mut(y);
        for (x, dst_px) in dst_row.iter_mut().enumerate() {
            let base = src_row[x];
            let mut acc = 0.0;
            for (k, &tap) in taps.iter().enumerate() {
                let sx = clamp_index(x as isize + k as isize - radius, w);
                acc += tap * (src_row[sx] - base);
            }
            *dst_px = base + acc;
        }
    }

    for y in 0..h {
        let dst_row = out.row_mut(y);
        for (x, dst_px) in dst_row.iter_mut().enumerate() {
            let base = tmp.get(x, y);
            let mut acc = 0.0;
            for (k, &tap) in taps.iter().enumerate() {
                let sy = clamp_index(y as isize + k as isize - radius, h);
                acc += tap * (tmp.get(x, sy) - base);
            }
            *dst_px = base + acc;
        }
    }
    out
}

/// Gaussian blur with the given sigma.
pub fn gaussian_blur(src: &ImageF64, sigma: f64) -> ImageF64 {
    apply_separable(&GaussianFilter::new(sigma), src)
}

fn clamp_index(idx: isize, upper: usize) -> usize {
    if idx < 0 {
        0
    } else if (idx as usize) >= upper {
        upper - 1
    } else {
        idx as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kernel_is_normalized_and_symmetric() {
        let g = GaussianFilter::new(3.5);
        assert_eq!(g.radius(), 11);
        let taps = g.taps();
        assert!((taps.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        for i in 0..taps.len() / 2 {
            assert_eq!(taps[i], taps[taps.len() - 1 - i]);
        }
        assert!(taps[11] > taps[10]);
    }

    #[test]
    fn non_positive_sigma_is_identity() {
        let field = ImageF64::from_fn(5, 4, |x, y| (x * 3 + y) as f64);
        assert_eq!(gaussian_blur(&field, 0.0), field);
        assert_eq!(GaussianFilter::new(f64::NAN).taps(), &[1.0]);
    }

    #[test]
    fn constant_field_is_preserved() {
        let field = ImageF64::from_fn(9, 7, |_, _| 42.0);
        let out = gaussian_blur(&field, 3.5);
        assert!(out.data.iter().all(|&v| v == 42.0));
    }

    #[test]
    fn single_dark_pixel_is_spread_out() {
        let mut field = ImageF64::from_fn(31, 31, |_, _| 255.0);
        field.set(15, 15, 0.0);
        let out = gaussian_blur(&field, 3.5);
        let centre = out.get(15, 15);
        assert!(centre > 240.0, "outlier dominated the blur: {centre}");
        assert!(centre < out.get(10, 15));
    }
}
