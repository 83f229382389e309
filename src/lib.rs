//! Public-facing crate root – re-exports.

pub mod cli;
pub mod core;
pub mod render;

pub use crate::core::{
    color::{AnsiCode, colorize},
    config::{PlotConfig, PlotConfigBuilder},
    error::{ConfigError, PlotError},
    range::{Axis, AxisRange},
    series::{Series, expand},
    table::{LoadError, LoadOptions, Table, load_table, load_table_from_path},
};

pub use crate::render::{canvas::Canvas, figure::render_figure};
