//! Displacement-field objective over all candidate centers.
//!
//! For candidate `c` with weight `w(c) = 255 − blurred(c)`:
//!
//! ```text
//! objective(c) = Σ_p [ d(c→p) · g(p) ]² · w(c)  /  (W · H)
//! ```
//!
//! where `d(c→p)` is the unit displacement from the candidate to pixel `p`,
//! `g(p)` the unit gradient at `p`, and the sum runs over pixels with a
//! non-zero gradient in row-major order.
//!
//! With the `parallel` feature the candidate rows are distributed over the
//! rayon pool; every output cell is written by exactly one task and the
//! per-candidate sum is sequential, so both paths produce identical fields.
use super::displacement::{unit_displacement, UnitVectorField};
use crate::cancel::CancelToken;
use crate::edges::Gradients;
use crate::error::EyeCenterError;
use crate::image::{ImageF64, ImageViewMut};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Cell with a usable gradient and its unit direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientSample {
    pub x: usize,
    pub y: usize,
    pub ux: f64,
    pub uy: f64,
}

/// Collect the non-zero cells of a unit gradient field in row-major order.
pub fn gradient_samples(unit: &UnitVectorField) -> Vec<GradientSample> {
    let (w, h) = (unit.dx.w, unit.dx.h);
    let mut samples = Vec::new();
    for y in 0..h {
        for x in 0..w {
            let (ux, uy) = unit.get(x, y);
            if ux == 0.0 && uy == 0.0 {
                continue;
            }
            samples.push(GradientSample { x, y, ux, uy });
        }
    }
    samples
}

/// Darkness weight of a candidate, clamped to `[0, 255]`.
#[inline]
pub fn darkness_weight(blurred: f64) -> f64 {
    (255.0 - blurred).clamp(0.0, 255.0)
}

#[inline]
fn candidate_score(
    cx: usize,
    cy: usize,
    weight: f64,
    samples: &[GradientSample],
    cells: f64,
) -> f64 {
    let mut sum = 0.0;
    for s in samples {
        let (dx, dy) = unit_displacement((cx, cy), (s.x, s.y));
        let alignment = dx * s.ux + dy * s.uy;
        sum += alignment * alignment * weight;
    }
    sum / cells
}

fn fill_row(cy: usize, row: &mut [f64], blurred: &ImageF64, samples: &[GradientSample], cells: f64) {
    for (cx, out) in row.iter_mut().enumerate() {
        let weight = darkness_weight(blurred.get(cx, cy));
        *out = candidate_score(cx, cy, weight, samples, cells);
    }
}

fn prepare(
    blurred: &ImageF64,
    gradients: &Gradients,
) -> Result<(Vec<GradientSample>, f64), EyeCenterError> {
    let weight = (blurred.w, blurred.h);
    let grad = (gradients.width(), gradients.height());
    if weight != grad {
        return Err(EyeCenterError::FieldMismatch {
            weight,
            gradients: grad,
        });
    }
    let unit = UnitVectorField::from_gradients(gradients);
    let cells = (blurred.w * blurred.h) as f64;
    Ok((gradient_samples(&unit), cells))
}

fn check_cancel(cancel: Option<&CancelToken>) -> Result<(), EyeCenterError> {
    match cancel {
        Some(token) if token.is_cancelled() => Err(EyeCenterError::Cancelled),
        _ => Ok(()),
    }
}

/// Evaluate the objective one candidate row at a time on the calling thread.
pub fn evaluate_objective_sequential(
    blurred: &ImageF64,
    gradients: &Gradients,
    cancel: Option<&CancelToken>,
) -> Result<ImageF64, EyeCenterError> {
    let (samples, cells) = prepare(blurred, gradients)?;
    let mut out = ImageF64::new(blurred.w, blurred.h);
    for cy in 0..blurred.h {
        check_cancel(cancel)?;
        fill_row(cy, out.row_mut(cy), blurred, &samples, cells);
    }
    Ok(out)
}

/// Evaluate the objective, distributing candidate rows over the rayon pool
/// when the `parallel` feature is enabled.
#[cfg(feature = "parallel")]
pub fn evaluate_objective(
    blurred: &ImageF64,
    gradients: &Gradients,
    cancel: Option<&CancelToken>,
) -> Result<ImageF64, EyeCenterError> {
    let (samples, cells) = prepare(blurred, gradients)?;
    let mut out = ImageF64::new(blurred.w, blurred.h);
    if out.w == 0 || out.h == 0 {
        return Ok(out);
    }
    let w = out.w;
    out.data.par_chunks_mut(w).enumerate().for_each(|(cy, row)| {
        if cancel.is_some_and(CancelToken::is_cancelled) {
            return;
        }
        fill_row(cy, row, blurred, &samples, cells);
    });
    check_cancel(cancel)?;
    Ok(out)
}

/// Sequential fallback when rayon is not compiled in.
#[cfg(not(feature = "parallel"))]
pub fn evaluate_objective(
    blurred: &ImageF64,
    gradients: &Gradients,
    cancel: Option<&CancelToken>,
) -> Result<ImageF64, EyeCenterError> {
    evaluate_objective_sequential(blurred, gradients, cancel)
}
