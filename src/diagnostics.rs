//! Per-call diagnostics: stage timings, the objective field and a heatmap.
use crate::image::{ImageF64, IntensityGrid};
use crate::scaling::GridScale;
use crate::types::{Point, WorkingSize};
use serde::{Deserialize, Serialize};

/// Timing entry describing a single stage of the pipeline.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

impl StageTiming {
    pub fn new(label: impl Into<String>, elapsed_ms: f64) -> Self {
        Self {
            label: label.into(),
            elapsed_ms,
        }
    }
}

/// Aggregated timing trace for one estimate.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.stages.push(StageTiming::new(label, elapsed_ms));
    }
}

/// Everything the locator knows about one estimate.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EyeCenterReport {
    /// Estimated center in source pixels.
    pub center: Point,
    /// Arg-max cell in the working grid.
    pub grid_center: Point,
    pub scale: GridScale,
    pub source_size: (usize, usize),
    pub working_size: WorkingSize,
    /// Working-grid cells that kept a gradient after thresholding.
    pub gradient_cells: usize,
    /// `true` when no gradient survived and the center is the tie-break cell.
    pub low_confidence: bool,
    pub timings: TimingBreakdown,
    /// Objective field at the working resolution.
    #[serde(skip)]
    pub objective: ImageF64,
}

impl EyeCenterReport {
    pub fn heatmap(&self) -> IntensityGrid {
        objective_heatmap(&self.objective)
    }
}

/// Scale the objective so its maximum maps to 255 (truncating). A field with
/// no positive maximum maps to all zeros.
pub fn objective_heatmap(objective: &ImageF64) -> IntensityGrid {
    let max = objective.max_value().unwrap_or(0.0);
    let data = objective
        .data
        .iter()
        .map(|&v| {
            if max > 0.0 && v.is_finite() {
                (v * (255.0 / max)).clamp(0.0, 255.0) as u8
            } else {
                0
            }
        })
        .collect();
    IntensityGrid::new(objective.w, objective.h, data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heatmap_peaks_at_255() {
        let f = ImageF64::from_fn(4, 2, |x, y| (x + y * 4) as f64);
        let hm = objective_heatmap(&f);
        assert_eq!(hm.data()[7], 255);
        assert_eq!(hm.data()[0], 0);
        assert_eq!(hm.data()[1], 36);
    }

    #[test]
    fn flat_objective_gives_black_heatmap() {
        let hm = objective_heatmap(&ImageF64::new(3, 3));
        assert!(hm.data().iter().all(|&v| v == 0));
    }
}
