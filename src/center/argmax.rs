//! Arg-max over a scalar field with a fixed scan order.
//!
//! Scan order is row-major: `y` outer, `x` inner. A later cell replaces the
//! running maximum only when strictly greater, so ties resolve to the first
//! cell in scan order. A field with no usable score anywhere (all zero, as
//! produced by a gradient-free input) therefore resolves to `(0, 0)`.
//! NaN cells never win.
use crate::image::{ImageF64, ImageView};
use crate::types::Point;

/// Location of the maximum of `field`, or `None` for an empty field.
pub fn argmax(field: &ImageF64) -> Option<Point> {
    if field.w == 0 || field.h == 0 {
        return None;
    }
    let mut best: Option<(Point, f64)> = None;
    for (y, row) in field.rows().enumerate() {
        for (x, &v) in row.iter().enumerate() {
            if v.is_nan() {
                continue;
            }
            match best {
                Some((_, max)) if v <= max => {}
                _ => best = Some((Point::new(x, y), v)),
            }
        }
    }
    Some(best.map_or(Point::new(0, 0), |(p, _)| p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_unique_maximum() {
        let mut f = ImageF64::new(5, 4);
        f.set(3, 2, 7.5);
        f.set(1, 1, 2.0);
        assert_eq!(argmax(&f), Some(Point::new(3, 2)));
    }

    #[test]
    fn ties_resolve_to_first_in_row_major_order() {
        let mut f = ImageF64::new(5, 4);
        f.set(4, 0, 3.0);
        f.set(0, 1, 3.0);
        f.set(2, 3, 3.0);
        assert_eq!(argmax(&f), Some(Point::new(4, 0)));
    }

    #[test]
    fn flat_field_resolves_to_origin() {
        assert_eq!(argmax(&ImageF64::new(6, 6)), Some(Point::new(0, 0)));
    }

    #[test]
    fn nan_is_ignored_and_empty_is_none() {
        let mut f = ImageF64::new(3, 1);
        f.set(0, 0, f64::NAN);
        f.set(2, 0, 1.0);
        assert_eq!(argmax(&f), Some(Point::new(2, 0)));
        assert_eq!(argmax(&ImageF64::new(0, 3)), None);
    }
}
