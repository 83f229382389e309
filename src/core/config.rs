//! Run-time plot configuration + fluent builder.

use crate::core::{
    constants::{
        DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, MIN_CANVAS_HEIGHT, MIN_CANVAS_WIDTH,
    },
    error::ConfigError,
};

/// Immutable parameters shared read-only by every figure in a batch.
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Canvas width in character cells.
    pub width: usize,
    /// Canvas height in character cells.
    pub height: usize,
    /// Explicit x-axis window; `None` resolves from the data.
    pub x_limits: Option<(f64, f64)>,
    /// Explicit y-axis window; `None` resolves from the data.
    pub y_limits: Option<(f64, f64)>,
    /// Draw points only instead of connecting lines.
    pub scatter: bool,
    /// Cycle each series through the color palette.
    pub color: bool,
    /// Emit per-series legend entries under the figure.
    pub legend: bool,
}

impl PlotConfig {
    #[inline]
    #[must_use]
    pub fn builder() -> PlotConfigBuilder {
        PlotConfigBuilder::new()
    }
}

/// Fluent builder with validation at `build`.
#[derive(Debug)]
pub struct PlotConfigBuilder {
    width: usize,
    height: usize,
    x_limits: Option<(f64, f64)>,
    y_limits: Option<(f64, f64)>,
    scatter: bool,
    color: bool,
    legend: bool,
}

impl PlotConfigBuilder {
    pub(crate) fn new() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
            x_limits: None,
            y_limits: None,
            scatter: false,
            color: false,
            // Legend shown unless explicitly disabled.
            legend: true,
        }
    }

    #[inline]
    pub fn size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }
    #[inline]
    pub fn x_limits(mut self, lo: f64, hi: f64) -> Self {
        self.x_limits = Some((lo, hi));
        self
    }
    #[inline]
    pub fn x_limits_opt(mut self, limits: Option<(f64, f64)>) -> Self {
        self.x_limits = limits;
        self
    }
    #[inline]
    pub fn y_limits(mut self, lo: f64, hi: f64) -> Self {
        self.y_limits = Some((lo, hi));
        self
    }
    #[inline]
    pub fn y_limits_opt(mut self, limits: Option<(f64, f64)>) -> Self {
        self.y_limits = limits;
        self
    }
    #[inline]
    pub fn scatter(mut self, on: bool) -> Self {
        self.scatter = on;
        self
    }
    #[inline]
    pub fn color(mut self, on: bool) -> Self {
        self.color = on;
        self
    }
    #[inline]
    pub fn legend(mut self, on: bool) -> Self {
        self.legend = on;
        self
    }

    pub fn build(self) -> Result<PlotConfig, ConfigError> {
        if self.width < MIN_CANVAS_WIDTH || self.height < MIN_CANVAS_HEIGHT {
            return Err(ConfigError::CanvasTooSmall {
                want_w: MIN_CANVAS_WIDTH,
                want_h: MIN_CANVAS_HEIGHT,
                got_w: self.width,
                got_h: self.height,
            });
        }
        Ok(PlotConfig {
            width: self.width,
            height: self.height,
            x_limits: self.x_limits,
            y_limits: self.y_limits,
            scatter: self.scatter,
            color: self.color,
            legend: self.legend,
        })
    }
}

/// Ergonomic `?` on a builder chain.
impl From<PlotConfigBuilder> for Result<PlotConfig, ConfigError> {
    fn from(b: PlotConfigBuilder) -> Self {
        b.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_contract() {
        let cfg = PlotConfig::builder().build().unwrap();
        assert_eq!((cfg.width, cfg.height), (60, 40));
        assert!(!cfg.scatter);
        assert!(!cfg.color);
        assert!(cfg.legend);
        assert!(cfg.x_limits.is_none());
        assert!(cfg.y_limits.is_none());
    }

    #[test]
    fn undersized_canvas_is_rejected() {
        let err = PlotConfig::builder().size(5, 3).build().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::CanvasTooSmall {
                got_w: 5,
                got_h: 3,
                ..
            }
        ));
    }

    #[test]
    fn limits_pass_through_unchanged() {
        let cfg = PlotConfig::builder()
            .x_limits(-1.0, 1.0)
            .y_limits_opt(Some((0.0, 3.0)))
            .build()
            .unwrap();
        assert_eq!(cfg.x_limits, Some((-1.0, 1.0)));
        assert_eq!(cfg.y_limits, Some((0.0, 3.0)));
    }
}
