//! Grayscale reduction: arbitrary pixel sources to an owned 8-bit grid.
//!
//! Color sources go through a fixed-point luma transform with the usual
//! Rec. 601 weights (`0.299 R + 0.587 G + 0.114 B`, scaled by 2^16). Alpha is
//! ignored. The reduction is total over the source's declared bounds.
use super::{ImageU8, ImageView};

/// Read-only access to a pixel-addressable image.
///
/// Implementors report their bounds and an 8-bit intensity for every
/// in-bounds pixel. Color images convert with [`luma_from_rgb`].
pub trait PixelSource {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    /// Intensity at `(x, y)`; callers stay within `width × height`.
    fn intensity(&self, x: usize, y: usize) -> u8;
}

/// Fixed-point luma of an 8-bit RGB triple.
#[inline]
pub fn luma_from_rgb(r: u8, g: u8, b: u8) -> u8 {
    let y = 19595 * r as u32 + 38470 * g as u32 + 7471 * b as u32 + (1 << 15);
    (y >> 16) as u8
}

/// Owned 8-bit grayscale grid (row-major, `stride == width`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntensityGrid {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl IntensityGrid {
    /// Wrap raw row-major bytes.
    ///
    /// # Panics
    /// If `data.len() != width * height`; see [`IntensityGrid::from_raw`].
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        assert_eq!(
            data.len(),
            width * height,
            "intensity grid buffer does not match {width}x{height}"
        );
        Self {
            width,
            height,
            data,
        }
    }

    /// Wrap raw row-major bytes, or `None` when the buffer length is not
    /// `width * height`.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Option<Self> {
        if width.checked_mul(height) != Some(data.len()) {
            return None;
        }
        Some(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Borrow as a read-only `ImageU8` view
    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8::packed(self.width, self.height, &self.data)
    }
}

/// Reduce any pixel source to an intensity grid with the same bounds.
pub fn to_intensity_grid<S: PixelSource + ?Sized>(source: &S) -> IntensityGrid {
    let (w, h) = (source.width(), source.height());
    let mut data = Vec::with_capacity(w * h);
    for y in 0..h {
        for x in 0..w {
            data.push(source.intensity(x, y));
        }
    }
    IntensityGrid::new(w, h, data)
}

impl PixelSource for ImageU8<'_> {
    fn width(&self) -> usize {
        self.w
    }
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn intensity(&self, x: usize, y: usize) -> u8 {
        self.row(y)[x]
    }
}

impl PixelSource for IntensityGrid {
    fn width(&self) -> usize {
        self.width
    }
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn intensity(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }
}

impl PixelSource for ::image::GrayImage {
    fn width(&self) -> usize {
        ::image::GrayImage::width(self) as usize
    }
    fn height(&self) -> usize {
        ::image::GrayImage::height(self) as usize
    }
    #[inline]
    fn intensity(&self, x: usize, y: usize) -> u8 {
        self.get_pixel(x as u32, y as u32).0[0]
    }
}

impl PixelSource for ::image::RgbImage {
    fn width(&self) -> usize {
        ::image::RgbImage::width(self) as usize
    }
    fn height(&self) -> usize {
        ::image::RgbImage::height(self) as usize
    }
    #[inline]
    fn intensity(&self, x: usize, y: usize) -> u8 {
        let [r, g, b] = self.get_pixel(x as u32, y as u32).0;
        luma_from_rgb(r, g, b)
    }
}

impl PixelSource for ::image::RgbaImage {
    fn width(&self) -> usize {
        ::image::RgbaImage::width(self) as usize
    }
    fn height(&self) -> usize {
        ::image::RgbaImage::height(self) as usize
    }
    #[inline]
    fn intensity(&self, x: usize, y: usize) -> u8 {
        let [r, g, b, _] = self.get_pixel(x as u32, y as u32).0;
        luma_from_rgb(r, g, b)
    }
}

impl PixelSource for ::image::DynamicImage {
    fn width(&self) -> usize {
        ::image::DynamicImage::width(self) as usize
    }
    fn height(&self) -> usize {
        ::image::DynamicImage::height(self) as usize
    }
    #[inline]
    fn intensity(&self, x: usize, y: usize) -> u8 {
        use ::image::GenericImageView;
        let [r, g, b, _] = self.get_pixel(x as u32, y as u32).0;
        luma_from_rgb(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_checks_buffer_length() {
        let grid = IntensityGrid::from_raw(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(grid.intensity(2, 1), 6);
        assert!(IntensityGrid::from_raw(3, 2, vec![0; 5]).is_none());
        assert!(IntensityGrid::from_raw(usize::MAX, 2, Vec::new()).is_none());
    }

    #[test]
    fn luma_keeps_gray_levels_and_weights_green_highest() {
        for v in [0u8, 1, 17, 128, 254, 255] {
            assert_eq!(luma_from_rgb(v, v, v), v);
        }
        let red = luma_from_rgb(255, 0, 0);
        let green = luma_from_rgb(0, 255, 0);
        let blue = luma_from_rgb(0, 0, 255);
        assert_eq!((red, green, blue), (76, 150, 29));
    }

    #[test]
    fn reduction_matches_source_bounds() {
        let rgb = ::image::RgbImage::from_fn(5, 3, |x, y| {
            let v = (x * 40 + y * 10) as u8;
            ::image::Rgb([v, v, v])
        });
        let grid = to_intensity_grid(&rgb);
        assert_eq!((grid.width(), grid.height()), (5, 3));
        assert_eq!(grid.intensity(4, 2), 180);
        assert_eq!(grid.as_view().get(1, 1), 50);
    }

    #[test]
    fn strided_view_reads_only_visible_columns() {
        let data = [1u8, 2, 99, 3, 4, 99];
        let view = ImageU8 {
            w: 2,
            h: 2,
            stride: 3,
            data: &data,
        };
        let grid = to_intensity_grid(&view);
        assert_eq!(grid.data(), &[1, 2, 3, 4]);
    }
}
