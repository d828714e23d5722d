/// Bright background with a dark filled disc centred at `(cx, cy)`.
pub fn dark_disc_u8(
    width: usize,
    height: usize,
    cx: f64,
    cy: f64,
    radius: f64,
    disc: u8,
    background: u8,
) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(radius > 0.0, "radius must be positive");

    let mut img = vec![background; width * height];
    for y in 0..height {
        for x in 0..width {
            let d = (x as f64 - cx).hypot(y as f64 - cy);
            if d <= radius {
                img[y * width + x] = disc;
            }
        }
    }
    img
}

/// Deterministic high-frequency texture with values over the full 8-bit range.
pub fn texture_u8(width: usize, height: usize) -> Vec<u8> {
    let mut img = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            img[y * width + x] = ((x * 37 + y * 91 + x * y * 13) % 256) as u8;
        }
    }
    img
}
