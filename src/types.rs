use serde::{Deserialize, Serialize};

/// Integer pixel coordinate; `x` is the column, `y` the row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Fixed working resolution the input is resampled to before scoring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkingSize {
    pub width: usize,
    pub height: usize,
}

impl WorkingSize {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub const fn square(side: usize) -> Self {
        Self::new(side, side)
    }

    /// Number of cells in the working grid.
    pub fn cells(&self) -> usize {
        self.width * self.height
    }
}

impl Default for WorkingSize {
    fn default() -> Self {
        Self::square(64)
    }
}
