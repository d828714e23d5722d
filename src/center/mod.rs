//! Gradient-alignment objective and its arg-max.
//!
//! Overview
//! - [`displacement`] builds unit vector fields: from a candidate anchor to
//!   every cell, and the unit gradient field.
//! - [`objective`] scores every cell as a candidate center by the mean
//!   squared dot product between "direction away from the candidate" and the
//!   local unit gradient, scaled by the candidate's darkness weight.
//! - [`argmax`] picks the best candidate with a fixed, documented tie-break.
//!
//! Key ideas
//! - Around a dark pupil the gradients point radially outward, so at the true
//!   center every usable gradient is parallel to its displacement vector.
//! - Components pair same axis to same axis: `dx·ugx + dy·ugy`.
//! - Cost is O(N²) candidates × O(N²) pixels; only cells with a surviving
//!   gradient contribute, so the inner loop runs over a sparse sample list.

pub mod argmax;
pub mod displacement;
pub mod objective;

pub use argmax::argmax;
pub use displacement::{unit_displacement, UnitVectorField};
pub use objective::{
    darkness_weight, evaluate_objective, evaluate_objective_sequential, gradient_samples,
    GradientSample,
};
