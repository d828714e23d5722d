use crate::image::{ImageF64, ImageView, ImageViewMut};

/// Reasons a resampler cannot be built or applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResizeError {
    /// Source has zero width or height.
    EmptySource { width: usize, height: usize },
    /// Target has zero width or height.
    EmptyTarget { width: usize, height: usize },
    /// Source is smaller than the target on at least one axis, which would
    /// make the integer rescale factor back to source pixels zero.
    SourceSmallerThanTarget {
        source: (usize, usize),
        target: (usize, usize),
    },
    /// Input dimensions differ from the ones the resizer was built for.
    DimensionMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },
}

impl std::fmt::Display for ResizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResizeError::EmptySource { width, height } => {
                write!(f, "source image {width}x{height} is empty")
            }
            ResizeError::EmptyTarget { width, height } => {
                write!(f, "target size {width}x{height} is empty")
            }
            ResizeError::SourceSmallerThanTarget { source, target } => write!(
                f,
                "source {}x{} is smaller than target {}x{}",
                source.0, source.1, target.0, target.1
            ),
            ResizeError::DimensionMismatch { expected, actual } => write!(
                f,
                "resizer built for {}x{} got {}x{}",
                expected.0, expected.1, actual.0, actual.1
            ),
        }
    }
}

impl std::error::Error for ResizeError {}

/// Normalized taps contributing to one output sample along an axis.
#[derive(Clone, Debug)]
struct AxisTaps {
    taps: Vec<(usize, f64)>,
}

impl AxisTaps {
    /// Weighted mean of `line` over the taps, accumulated as offsets from the
    /// first tapped sample so a constant line maps to that exact value.
    #[inline]
    fn apply(&self, line: impl Fn(usize) -> f64) -> f64 {
        let Some(&(first, _)) = self.taps.first() else {
            return 0.0;
        };
        let base = line(first);
        base + self
            .taps
            .iter()
            .map(|&(i, w)| w * (line(i) - base))
            .sum::<f64>()
    }
}

/// Immutable separable bilinear resampler for one dimension pair.
#[derive(Clone, Debug)]
pub struct BilinearResizer {
    src: (usize, usize),
    dst: (usize, usize),
    x_taps: Vec<AxisTaps>,
    y_taps: Vec<AxisTaps>,
}

impl BilinearResizer {
    /// Precompute taps for resampling `src_w × src_h` to `dst_w × dst_h`.
    pub fn new(src_w: usize, src_h: usize, dst_w: usize, dst_h: usize) -> Result<Self, ResizeError> {
        if src_w == 0 || src_h == 0 {
            return Err(ResizeError::EmptySource {
                width: src_w,
                height: src_h,
            });
        }
        if dst_w == 0 || dst_h == 0 {
            return Err(ResizeError::EmptyTarget {
                width: dst_w,
                height: dst_h,
            });
        }
        if src_w < dst_w || src_h < dst_h {
            return Err(ResizeError::SourceSmallerThanTarget {
                source: (src_w, src_h),
                target: (dst_w, dst_h),
            });
        }
        Ok(Self {
            src: (src_w, src_h),
            dst: (dst_w, dst_h),
            x_taps: axis_taps(src_w, dst_w),
            y_taps: axis_taps(src_h, dst_h),
        })
    }

    pub fn source_size(&self) -> (usize, usize) {
        self.src
    }

    pub fn target_size(&self) -> (usize, usize) {
        self.dst
    }

    /// Resample `src` into a new field at the target size.
    pub fn resize<I>(&self, src: &I) -> Result<ImageF64, ResizeError>
    where
        I: ImageView,
        I::Pixel: Into<f64>,
    {
        let actual = (src.width(), src.height());
        if actual != self.src {
            return Err(ResizeError::DimensionMismatch {
                expected: self.src,
                actual,
            });
        }
        let (dst_w, dst_h) = self.dst;

        // horizontal: src_h rows of dst_w samples
        let mut tmp = ImageF64::new(dst_w, self.src.1);
        for y in 0..self.src.1 {
            let src_row = src.row(y);
            let out = tmp.row_mut(y);
            for (dst_px, taps) in out.iter_mut().zip(&self.x_taps) {
                *dst_px = taps.apply(|i| src_row[i].into());
            }
        }

        // vertical
        let mut out = ImageF64::new(dst_w, dst_h);
        for (y, taps) in self.y_taps.iter().enumerate() {
            let dst_row = out.row_mut(y);
            for (x, dst_px) in dst_row.iter_mut().enumerate() {
                *dst_px = taps.apply(|i| tmp.get(x, i));
            }
        }
        Ok(out)
    }
}

fn axis_taps(src_len: usize, dst_len: usize) -> Vec<AxisTaps> {
    let scale = src_len as f64 / dst_len as f64;
    let support = scale.max(1.0);
    let max_idx = src_len as isize - 1;
    (0..dst_len)
        .map(|i| {
            let center = (i as f64 + 0.5) * scale - 0.5;
            let lo = (center - support).ceil() as isize;
            let hi = (center + support).floor() as isize;
            let mut taps: Vec<(usize, f64)> = Vec::with_capacity((hi - lo + 1).max(1) as usize);
            for j in lo..=hi {
                let w = 1.0 - (j as f64 - center).abs() / support;
                if w <= 0.0 {
                    continue;
                }
                let idx = j.clamp(0, max_idx) as usize;
                match taps.last_mut() {
                    Some(last) if last.0 == idx => last.1 += w,
                    _ => taps.push((idx, w)),
                }
            }
            let sum: f64 = taps.iter().map(|t| t.1).sum();
            if sum > 0.0 {
                for t in &mut taps {
                    t.1 /= sum;
                }
            } else {
                let idx = (center.round() as isize).clamp(0, max_idx) as usize;
                taps.push((idx, 1.0));
            }
            AxisTaps { taps }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageU8;

    #[test]
    fn rejects_degenerate_dimensions() {
        assert_eq!(
            BilinearResizer::new(0, 10, 4, 4).unwrap_err(),
            ResizeError::EmptySource {
                width: 0,
                height: 10
            }
        );
        assert!(matches!(
            BilinearResizer::new(10, 10, 4, 0),
            Err(ResizeError::EmptyTarget { .. })
        ));
        assert!(matches!(
            BilinearResizer::new(10, 3, 4, 4),
            Err(ResizeError::SourceSmallerThanTarget { .. })
        ));
    }

    #[test]
    fn constant_image_stays_constant() {
        let data = vec![173u8; 37 * 23];
        let img = ImageU8::packed(37, 23, &data);
        let resizer = BilinearResizer::new(37, 23, 8, 6).unwrap();
        let out = resizer.resize(&img).unwrap();
        assert_eq!((out.w, out.h), (8, 6));
        assert!(out.data.iter().all(|&v| v == 173.0));
    }

    #[test]
    fn constant_image_is_exact_for_fractional_scale() {
        // 100 → 64 leaves taps whose normalized weights do not sum to one
        // exactly; the output must still carry no rounding residue.
        let data = vec![77u8; 100 * 100];
        let img = ImageU8::packed(100, 100, &data);
        let out = BilinearResizer::new(100, 100, 64, 64)
            .unwrap()
            .resize(&img)
            .unwrap();
        assert!(out.data.iter().all(|&v| v == 77.0));
    }

    #[test]
    fn integer_factor_averages_blocks_symmetrically() {
        // 4 → 2 per axis: each output covers a 2×2 block plus its triangle
        // neighbours, so a left/right split maps to a symmetric pair.
        let mut data = vec![0u8; 4 * 4];
        for y in 0..4 {
            for x in 2..4 {
                data[y * 4 + x] = 200;
            }
        }
        let img = ImageU8::packed(4, 4, &data);
        let out = BilinearResizer::new(4, 4, 2, 2).unwrap().resize(&img).unwrap();
        let left = out.get(0, 0);
        let right = out.get(1, 0);
        assert!((left + right - 200.0).abs() < 1e-9);
        assert!(left < 100.0 && right > 100.0);
        assert!((out.get(0, 1) - left).abs() < 1e-9);
    }

    #[test]
    fn identity_size_is_a_copy() {
        let data: Vec<u8> = (0..30).map(|v| (v * 7) as u8).collect();
        let img = ImageU8::packed(6, 5, &data);
        let out = BilinearResizer::new(6, 5, 6, 5).unwrap().resize(&img).unwrap();
        for (a, b) in out.data.iter().zip(&data) {
            assert!((a - *b as f64).abs() < 1e-9);
        }
    }

    #[test]
    fn mismatched_input_is_rejected() {
        let data = vec![0u8; 9];
        let img = ImageU8::packed(3, 3, &data);
        let resizer = BilinearResizer::new(4, 4, 2, 2).unwrap();
        assert_eq!(
            resizer.resize(&img).unwrap_err(),
            ResizeError::DimensionMismatch {
                expected: (4, 4),
                actual: (3, 3)
            }
        );
    }
}
