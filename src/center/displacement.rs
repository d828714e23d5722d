use crate::edges::Gradients;
use crate::image::ImageF64;

/// Unit vector from `from` to `to`; `(0, 0)` when the points coincide.
#[inline]
pub fn unit_displacement(from: (usize, usize), to: (usize, usize)) -> (f64, f64) {
    let dx = to.0 as f64 - from.0 as f64;
    let dy = to.1 as f64 - from.1 as f64;
    let mag = (dx * dx + dy * dy).sqrt();
    if mag == 0.0 {
        (0.0, 0.0)
    } else {
        (dx / mag, dy / mag)
    }
}

/// Pair of fields holding one unit vector per cell.
///
/// Cells without a defined direction (the anchor itself, or a zero
/// gradient) hold `(0, 0)`.
#[derive(Clone, Debug, PartialEq)]
pub struct UnitVectorField {
    pub dx: ImageF64,
    pub dy: ImageF64,
}

impl UnitVectorField {
    /// Directions from `(from_x, from_y)` to every cell of a `w × h` grid.
    pub fn anchored_at(from_x: usize, from_y: usize, w: usize, h: usize) -> Self {
        let mut dx = ImageF64::new(w, h);
        let mut dy = ImageF64::new(w, h);
        for y in 0..h {
            for x in 0..w {
                let (ux, uy) = unit_displacement((from_x, from_y), (x, y));
                dx.set(x, y, ux);
                dy.set(x, y, uy);
            }
        }
        Self { dx, dy }
    }

    /// Normalized gradient directions; zero where both components are zero.
    pub fn from_gradients(gradients: &Gradients) -> Self {
        let (w, h) = (gradients.width(), gradients.height());
        let mut dx = ImageF64::new(w, h);
        let mut dy = ImageF64::new(w, h);
        for y in 0..h {
            for x in 0..w {
                let gx = gradients.gx.get(x, y);
                let gy = gradients.gy.get(x, y);
                if gx == 0.0 && gy == 0.0 {
                    continue;
                }
                let mag = (gx * gx + gy * gy).sqrt();
                dx.set(x, y, gx / mag);
                dy.set(x, y, gy / mag);
            }
        }
        Self { dx, dy }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> (f64, f64) {
        (self.dx.get(x, y), self.dy.get(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edges::sobel_gradients;

    #[test]
    fn anchor_cell_is_zero_and_others_are_unit() {
        let field = UnitVectorField::anchored_at(2, 1, 5, 4);
        assert_eq!(field.get(2, 1), (0.0, 0.0));
        for y in 0..4 {
            for x in 0..5 {
                if (x, y) == (2, 1) {
                    continue;
                }
                let (ux, uy) = field.get(x, y);
                assert!(((ux * ux + uy * uy) - 1.0).abs() < 1e-12, "({x},{y})");
            }
        }
        // same row and same column as the anchor are still defined
        assert_eq!(field.get(4, 1), (1.0, 0.0));
        assert_eq!(field.get(2, 3), (0.0, 1.0));
        assert_eq!(field.get(0, 1), (-1.0, 0.0));
    }

    #[test]
    fn diagonal_points_away_from_anchor() {
        let (ux, uy) = unit_displacement((1, 1), (4, 5));
        assert!((ux - 0.6).abs() < 1e-12 && (uy - 0.8).abs() < 1e-12);
    }

    #[test]
    fn gradient_field_is_normalized_where_defined() {
        let img = ImageF64::from_fn(8, 8, |x, y| if x + y < 8 { 0.0 } else { 255.0 });
        let grads = sobel_gradients(&img, 1.0);
        let unit = UnitVectorField::from_gradients(&grads);
        for y in 0..8 {
            for x in 0..8 {
                let (ux, uy) = unit.get(x, y);
                if grads.gx.get(x, y) == 0.0 && grads.gy.get(x, y) == 0.0 {
                    assert_eq!((ux, uy), (0.0, 0.0));
                } else {
                    assert!(((ux * ux + uy * uy) - 1.0).abs() < 1e-12);
                    assert!(ux >= 0.0 && uy >= 0.0, "dark-to-bright is +x/+y here");
                }
            }
        }
    }
}
