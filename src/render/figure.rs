//! Figure assembly: frame chrome, canvas payload, axis labels, legend.
//!
//! One call per input file.  The output is a plain text block (no cursor
//! addressing) so a batch of figures scrolls naturally in the terminal.

use crate::{
    core::{
        color::{AnsiCode, colorize},
        config::PlotConfig,
        constants::{BORDER_WIDTH, DECIMAL_PRECISION, LABEL_GUTTER},
        error::PlotError,
        range::{Axis, AxisRange},
        series::{self, Series},
        table::Table,
    },
    render::canvas::Canvas,
};

/// Two spaces in front, one space behind
const TITLE_PADDING: usize = 3;

// Box-drawing glyphs
const TL: &str = "┌";
const TR: &str = "┐";
const BL: &str = "└";
const BR: &str = "┘";
const H: &str = "─";
const V: &str = "│";

/// Legend swatch, two cells of braille mid-line.
const LEGEND_MARKER: &str = "⠤⠤";

// --- Helpers ---

/// Write centred text between horizontal rules.
fn push_centered(buf: &mut String, text: &str, width: usize) {
    let inner = width.saturating_sub(TITLE_PADDING);
    let len = text.chars().count();
    if len == 0 || len > inner {
        buf.push_str(&H.repeat(width));
        return;
    }
    let pad_left = (inner - len) / 2;
    let pad_right = inner - len - pad_left;

    buf.push_str(&H.repeat(pad_left));
    buf.push_str("  "); // 2-char left padding
    buf.push_str(text);
    buf.push(' '); // 1-char right padding
    buf.push_str(&H.repeat(pad_right));
}

fn axis_label(v: f64) -> String {
    format!("{:.*}", DECIMAL_PRECISION, v)
}

/// How wide the y-axis label field is for this range.
fn y_label_width(range: AxisRange) -> usize {
    axis_label(range.min).len().max(axis_label(range.max).len())
}

/// Fraction of `r` covered up to `v`, or `None` when the value falls
/// outside the window (clipped, not clamped).
fn ratio(v: f64, r: AxisRange) -> Option<f64> {
    if !v.is_finite() {
        return None;
    }
    let span = r.span();
    if span <= 0.0 {
        // Zero-width window (degenerate fallback at mean 0, or a single
        // repeated x): centre the values sitting exactly on it.
        return (v == r.min).then_some(0.5);
    }
    let t = (v - r.min) / span;
    (0.0..=1.0).contains(&t).then_some(t)
}

/// Data point to pixel, origin top-left.
fn project(
    p: (f64, f64),
    x_range: AxisRange,
    y_range: AxisRange,
    w_px: usize,
    h_px: usize,
) -> Option<(usize, usize)> {
    let fx = ratio(p.0, x_range)?;
    let fy = ratio(p.1, y_range)?;
    let px = (fx * (w_px - 1) as f64).round() as usize;
    let py = (h_px - 1) - (fy * (h_px - 1) as f64).round() as usize;
    Some((px, py))
}

fn draw_series(
    canvas: &mut Canvas,
    s: &Series<'_>,
    index: usize,
    x_range: AxisRange,
    y_range: AxisRange,
    scatter: bool,
) {
    let (w_px, h_px) = (canvas.width_px(), canvas.height_px());
    let mut prev = None;
    for p in s.points() {
        let cur = project(p, x_range, y_range, w_px, h_px);
        if scatter {
            if let Some((px, py)) = cur {
                canvas.set(px, py, index);
            }
        } else {
            // Consecutive in-window points connect; a clipped point breaks
            // the polyline and the next in-window point starts a fresh run.
            match (prev, cur) {
                (Some(a), Some(b)) => canvas.line(a, b, index),
                (None, Some((px, py))) => canvas.set(px, py, index),
                _ => {}
            }
        }
        prev = cur;
    }
}

fn compose(
    canvas: &Canvas,
    label: &str,
    x_range: AxisRange,
    y_range: AxisRange,
    all: &[Series<'_>],
    cfg: &PlotConfig,
) -> String {
    let label_width = y_label_width(y_range);
    let line_len = label_width + LABEL_GUTTER + cfg.width + BORDER_WIDTH;

    let mut out = String::new();

    // --- top rule with the file label ---
    out.push_str(TL);
    push_centered(&mut out, label, line_len - BORDER_WIDTH);
    out.push_str(TR);
    out.push('\n');

    // --- canvas rows, y labels on the first and last ---
    let high_label = axis_label(y_range.max);
    let low_label = axis_label(y_range.min);
    for row in 0..cfg.height {
        out.push_str(V);
        let y_label = if row == 0 {
            high_label.as_str()
        } else if row == cfg.height - 1 {
            low_label.as_str()
        } else {
            ""
        };
        for _ in 0..label_width - y_label.len() {
            out.push(' ');
        }
        out.push_str(y_label);
        for _ in 0..LABEL_GUTTER {
            out.push(' ');
        }
        canvas.emit_row(row, cfg.color, &mut out);
        out.push_str(V);
        out.push('\n');
    }

    // --- bottom rule ---
    out.push_str(BL);
    out.push_str(&H.repeat(line_len - BORDER_WIDTH));
    out.push_str(BR);
    out.push('\n');

    // --- x labels, aligned under the canvas edges ---
    let x_low = axis_label(x_range.min);
    let x_high = axis_label(x_range.max);
    for _ in 0..1 + label_width + LABEL_GUTTER {
        out.push(' ');
    }
    out.push_str(&x_low);
    let pad = cfg
        .width
        .saturating_sub(x_low.len() + x_high.len())
        .max(1);
    for _ in 0..pad {
        out.push(' ');
    }
    out.push_str(&x_high);
    out.push('\n');

    // --- legend, one entry per series ---
    if cfg.legend {
        for (index, s) in all.iter().enumerate() {
            out.push_str("  ");
            if cfg.color {
                out.push_str(&colorize(&AnsiCode::series(index), LEGEND_MARKER));
            } else {
                out.push_str(LEGEND_MARKER);
            }
            out.push(' ');
            out.push_str(s.label());
            out.push('\n');
        }
    }

    out
}

/// Build one renderer-ready figure for `table` loaded from `label`.
///
/// A table without y-columns cannot yield a series and fails with
/// [`PlotError::CorruptedData`]; everything else renders.
pub fn render_figure(table: &Table, label: &str, cfg: &PlotConfig) -> Result<String, PlotError> {
    if table.cols() < 2 {
        return Err(PlotError::CorruptedData {
            label: label.to_owned(),
        });
    }

    let x_range = Axis::X.resolve(table, cfg.x_limits);
    let y_range = Axis::Y.resolve(table, cfg.y_limits);
    let all = series::expand(table, label);

    let mut canvas = Canvas::new(cfg.width, cfg.height);
    for (index, s) in all.iter().enumerate() {
        draw_series(&mut canvas, s, index, x_range, y_range, cfg.scatter);
    }

    Ok(compose(&canvas, label, x_range, y_range, &all, cfg))
}
