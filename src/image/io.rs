//! I/O helpers for eye crops, heatmaps and JSON.
//!
//! - `load_image`: decode a PNG/JPEG from disk.
//! - `save_grayscale_u8`: write an intensity grid (e.g. an objective heatmap).
//! - `save_marked_image`: copy an image with a red square drawn at a point.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::IntensityGrid;
use crate::types::Point;
use image::{DynamicImage, GrayImage, Rgb, RgbImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk, keeping its color type.
pub fn load_image(path: &Path) -> Result<DynamicImage, String> {
    image::open(path).map_err(|e| format!("Failed to open {}: {e}", path.display()))
}

/// Save an 8-bit grayscale grid to disk; the format follows the extension.
pub fn save_grayscale_u8(grid: &IntensityGrid, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let out = GrayImage::from_raw(
        grid.width() as u32,
        grid.height() as u32,
        grid.data().to_vec(),
    )
    .ok_or_else(|| "Failed to create image buffer".to_string())?;
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Copy `image` to RGB and paint every pixel within Chebyshev distance
/// `radius` of `center` pure red.
pub fn draw_center_marker(image: &DynamicImage, center: Point, radius: usize) -> RgbImage {
    let mut out = image.to_rgb8();
    let (w, h) = (out.width() as usize, out.height() as usize);
    let x0 = center.x.saturating_sub(radius);
    let y0 = center.y.saturating_sub(radius);
    let x1 = center.x.saturating_add(radius).min(w.saturating_sub(1));
    let y1 = center.y.saturating_add(radius).min(h.saturating_sub(1));
    if w == 0 || h == 0 || x0 > x1 || y0 > y1 {
        return out;
    }
    for y in y0..=y1 {
        for x in x0..=x1 {
            out.put_pixel(x as u32, y as u32, Rgb([255, 0, 0]));
        }
    }
    out
}

/// Draw the center marker and save the result to `path`.
pub fn save_marked_image(
    image: &DynamicImage,
    center: Point,
    radius: usize,
    path: &Path,
) -> Result<(), String> {
    ensure_parent_dir(path)?;
    draw_center_marker(image, center, radius)
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_is_clipped_at_the_image_corner() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(8, 6, Rgb([10, 10, 10])));
        let marked = draw_center_marker(&img, Point::new(0, 5), 2);
        assert_eq!(marked.get_pixel(0, 5).0, [255, 0, 0]);
        assert_eq!(marked.get_pixel(2, 3).0, [255, 0, 0]);
        assert_eq!(marked.get_pixel(3, 5).0, [10, 10, 10]);
        assert_eq!(marked.get_pixel(0, 2).0, [10, 10, 10]);
    }
}
