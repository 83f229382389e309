//! Aggregates the “business logic” layer.

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod range;
pub mod series;
pub mod table;

// re-export frequently-used items for convenience
pub use color::{AnsiCode, colorize};
pub use config::{PlotConfig, PlotConfigBuilder};
pub use constants::{
    BORDER_WIDTH, BRAILLE_HORIZONTAL_RESOLUTION, BRAILLE_VERTICAL_RESOLUTION, DECIMAL_PRECISION,
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, LABEL_GUTTER, MIN_CANVAS_HEIGHT, MIN_CANVAS_WIDTH,
};
pub use error::{ConfigError, PlotError};
pub use range::{Axis, AxisRange};
pub use series::{Series, expand};
pub use table::{LoadError, LoadOptions, Table};
