//! A collection of constants.

/// The left and right border characters
pub const BORDER_WIDTH: usize = 2;
/// One character of space between the y-axis labels and the plotted data
pub const LABEL_GUTTER: usize = 1;

/// Canvas must be at least 7 characters tall
pub const MIN_CANVAS_HEIGHT: usize = 7;
/// Canvas must be at least 14 characters wide
pub const MIN_CANVAS_WIDTH: usize = 14;

/// Canvas width in character cells when neither `--size` nor `--fit` is given
pub const DEFAULT_CANVAS_WIDTH: usize = 60;
/// Canvas height in character cells when neither `--size` nor `--fit` is given
pub const DEFAULT_CANVAS_HEIGHT: usize = 40;

/// Braille has 2 horizontal dots and four vertical dots that can be either off or on
pub const BRAILLE_HORIZONTAL_RESOLUTION: usize = 2;
/// Braille has 2 horizontal dots and four vertical dots that can be either off or on
pub const BRAILLE_VERTICAL_RESOLUTION: usize = 4;

/// Axis labels are rounded to two decimal places.
///
/// 14.832 becomes 14.83
pub const DECIMAL_PRECISION: usize = 2;
