use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Lower and upper deviation around a central value.
///
/// Both fields are magnitudes, not absolute bounds, and are expected to be
/// non-negative. Nothing enforces this; plotting code downstream assumes it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn symmetric(err: f64) -> Self {
        Self { min: err, max: err }
    }

    fn scale(&mut self, factor: f64) {
        let factor = factor.abs();
        self.min *= factor;
        self.max *= factor;
    }
}

impl Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{Min:{} Max:{}}}", self.min, self.max)
    }
}

/// A single (x, y) datum with independent asymmetric errors on each axis.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
    pub err_x: Range,
    pub err_y: Range,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            ..Default::default()
        }
    }

    pub fn with_errors(x: f64, y: f64, err_x: Range, err_y: Range) -> Self {
        Self {
            x,
            y,
            err_x,
            err_y,
        }
    }

    pub fn x_min(&self) -> f64 {
        self.x - self.err_x.min
    }

    pub fn x_max(&self) -> f64 {
        self.x + self.err_x.max
    }

    pub fn y_min(&self) -> f64 {
        self.y - self.err_y.min
    }

    pub fn y_max(&self) -> f64 {
        self.y + self.err_y.max
    }

    // Errors are scaled by |factor| so they stay magnitudes.
    pub fn scale_x(&mut self, factor: f64) {
        self.x *= factor;
        self.err_x.scale(factor);
    }

    pub fn scale_y(&mut self, factor: f64) {
        self.y *= factor;
        self.err_y.scale(factor);
    }
}

impl Display for Point2D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{X:{} Y:{} ErrX:{} ErrY:{}}}",
            self.x, self.y, self.err_x, self.err_y
        )
    }
}
