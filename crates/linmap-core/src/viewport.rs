//! Axis limits for plotting a frame.

use serde::Serialize;

use crate::grid::PointSeries;

/// Half-width of the plot window when nothing asks for more room
pub const DEFAULT_AXIS_LIMIT: f64 = 3.5;

/// Margin applied when the axes grow to fit far-away points
pub const RESCALE_MARGIN: f64 = 1.2;

/// Bounding box accumulator over the plotted outlines.
#[derive(Debug, Clone, Copy)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new()
    }
}

impl Bounds {
    pub fn new() -> Self {
        Self {
            min_x: f64::MAX,
            max_x: f64::MIN,
            min_y: f64::MAX,
            max_y: f64::MIN,
        }
    }

    pub fn update(&mut self, x: f64, y: f64) {
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
        self.min_y = self.min_y.min(y);
        self.max_y = self.max_y.max(y);
    }

    pub fn include(&mut self, series: &PointSeries) {
        for p in series.points() {
            self.update(p.x, p.y);
        }
    }

    pub fn is_valid(&self) -> bool {
        self.min_x.is_finite()
            && self.max_x.is_finite()
            && self.min_y.is_finite()
            && self.max_y.is_finite()
            && self.min_x <= self.max_x
            && self.min_y <= self.max_y
    }

    /// Largest absolute coordinate seen, or `None` before any update
    pub fn max_abs(&self) -> Option<f64> {
        if !self.is_valid() {
            return None;
        }
        Some(
            self.min_x
                .abs()
                .max(self.max_x.abs())
                .max(self.min_y.abs())
                .max(self.max_y.abs()),
        )
    }
}

/// How the square, origin-centred plot window is sized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlotLimits {
    /// Half-width used when not rescaling, and the minimum when rescaling
    pub base_limit: f64,
    /// Grow the window to keep every plotted point visible
    pub rescale: bool,
}

impl Default for PlotLimits {
    fn default() -> Self {
        Self {
            base_limit: DEFAULT_AXIS_LIMIT,
            rescale: false,
        }
    }
}

impl PlotLimits {
    pub fn new(base_limit: f64, rescale: bool) -> Self {
        Self { base_limit, rescale }
    }

    /// Half-width of the window needed for `series`
    pub fn axis_limit<'a>(&self, series: impl IntoIterator<Item = &'a PointSeries>) -> f64 {
        if !self.rescale {
            return self.base_limit;
        }
        let mut bounds = Bounds::new();
        for s in series {
            bounds.include(s);
        }
        match bounds.max_abs() {
            Some(max) if max.is_finite() => (max * RESCALE_MARGIN).max(self.base_limit),
            _ => self.base_limit,
        }
    }
}
