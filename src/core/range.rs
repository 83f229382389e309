//! Geometry helpers: axis-range resolution + terminal size plumbing.

use terminal_size::{Height, Width, terminal_size};

use crate::core::{
    constants::{BORDER_WIDTH, LABEL_GUTTER, MIN_CANVAS_HEIGHT, MIN_CANVAS_WIDTH},
    table::Table,
};

/// Inclusive (min, max) bound used to scale one axis of a figure.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    #[inline]
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[inline]
    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }
}

/// Which axis we’re resolving.
#[derive(Clone, Copy, Debug)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Resolve the range the renderer scales this axis with.
    ///
    /// * An explicit `limits` pair is used verbatim; an inverted or empty
    ///   override is the caller’s responsibility.
    /// * Otherwise x spans column 0 and y spans **all** dependent columns
    ///   jointly, so every series of a multi-column table fits one shared
    ///   window.
    /// * A y block that cannot be reduced to a usable range (no finite
    ///   values, or one repeated value) falls back to a window centred on
    ///   the arithmetic mean: `(mean - 0.1*mean, mean + 0.1*mean)`.
    ///   Known edge case: the window collapses to zero width when the mean
    ///   is 0, and inverts when the mean is negative.
    #[must_use]
    pub fn resolve(self, table: &Table, limits: Option<(f64, f64)>) -> AxisRange {
        if let Some((lo, hi)) = limits {
            return AxisRange::new(lo, hi);
        }

        let (mut low, mut high) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut sum, mut count) = (0.0_f64, 0usize);

        let mut scan = |v: f64| {
            if v.is_finite() {
                low = low.min(v);
                high = high.max(v);
                sum += v;
                count += 1;
            }
        };
        match self {
            Self::X => table.column(0).for_each(&mut scan),
            Self::Y => table.y_values().for_each(&mut scan),
        }

        match self {
            // All points were non-finite or there were none at all.
            Self::X if count == 0 => AxisRange::new(0.0, 1.0),
            Self::X => AxisRange::new(low, high),
            Self::Y => {
                if count > 0 && low < high {
                    AxisRange::new(low, high)
                } else {
                    // Not reducible to a scalar range: synthesize a window
                    // around the mean instead of failing the whole plot.
                    let mean = if count == 0 { 0.0 } else { sum / count as f64 };
                    AxisRange::new(mean - 0.1 * mean, mean + 0.1 * mean)
                }
            }
        }
    }
}

/// Current terminal geometry (80×30 fallback).
#[inline]
#[must_use]
pub fn terminal_geometry() -> (Width, Height) {
    terminal_size().unwrap_or((Width(80), Height(30)))
}

/// Space reserved for y-axis labels when sizing from the terminal; the
/// label width is only known after the data is loaded.
const FIT_LABEL_ALLOWANCE: usize = 8;

/// Canvas char grid filling the given terminal, leaving space for borders,
/// labels and the legend line.
#[inline]
#[must_use]
pub fn fit_dims((w, h): (Width, Height)) -> (usize, usize) {
    let x_chars = (w.0 as usize)
        .saturating_sub(BORDER_WIDTH + LABEL_GUTTER + FIT_LABEL_ALLOWANCE)
        .max(MIN_CANVAS_WIDTH);
    let y_chars = (h.0 as usize).saturating_sub(5).max(MIN_CANVAS_HEIGHT);
    (x_chars, y_chars)
}
