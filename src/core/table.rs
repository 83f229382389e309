//! Delimited numeric table loader with zero-allocation float parsing.

use std::{
    error::Error,
    fmt::{self, Display},
    io::{BufRead, BufReader, Read},
};

// --- Parse Configuration ---

/// How a file is tokenized before the numeric parse.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Marker that starts a comment; the rest of the line is discarded.
    pub comments: Option<String>,
    /// Field delimiter.  `None` means any run of ASCII whitespace.
    pub delimiter: Option<String>,
    /// Rows discarded from the start of the file.
    pub skip_header: usize,
    /// Rows discarded from the end of the file.
    pub skip_footer: usize,
    /// Column subset, in the given order.  `None` loads every column.
    pub usecols: Option<Vec<usize>>,
}

// --- Table ---

/// Row-major numeric matrix.
///
/// Column 0 is the independent variable; columns 1.. are the dependent
/// series.  Every row has the same width (ragged input fails the load).
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    values: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Table {
    /// Build a table from in-memory rows.
    ///
    /// # Panics
    /// Panics when `rows` is empty or the rows have unequal widths; loaded
    /// tables are validated instead (`LoadError`).
    #[must_use]
    pub fn from_rows(rows: &[&[f64]]) -> Self {
        assert!(!rows.is_empty(), "table must have at least one row");
        let cols = rows[0].len();
        assert!(cols > 0, "table rows must have at least one column");
        let mut values = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            assert!(row.len() == cols, "table rows must have equal widths");
            values.extend_from_slice(row);
        }
        Self {
            values,
            rows: rows.len(),
            cols,
        }
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.cols + col]
    }

    /// Values of one column, top to bottom.
    pub fn column(&self, col: usize) -> impl Iterator<Item = f64> + '_ {
        self.values[col..].iter().step_by(self.cols).copied()
    }

    /// Values of every dependent column (1..N), in row-major order.
    pub fn y_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.values
            .chunks_exact(self.cols)
            .flat_map(|row| row[1..].iter().copied())
    }
}

// --- Error Handling ---

#[derive(Debug)]
pub struct LoadError {
    pub line: usize,
    pub kind: LoadErrorKind,
}

#[derive(Debug)]
pub enum LoadErrorKind {
    Io(std::io::Error),
    BadFloat { text: String },
    RaggedRow { expected: usize, got: usize },
    ColumnOutOfRange { index: usize, cols: usize },
    Empty,
}

impl Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            LoadErrorKind::Io(e) => write!(f, "I/O error on line {}: {}", self.line, e),
            LoadErrorKind::BadFloat { text } => {
                write!(f, "line {}: invalid numeric value '{}'", self.line, text)
            }
            LoadErrorKind::RaggedRow { expected, got } => {
                write!(
                    f,
                    "line {}: expected {} columns, got {}",
                    self.line, expected, got
                )
            }
            LoadErrorKind::ColumnOutOfRange { index, cols } => {
                write!(
                    f,
                    "line {}: column index {} out of range for {} columns",
                    self.line, index, cols
                )
            }
            LoadErrorKind::Empty => write!(f, "no data rows"),
        }
    }
}
impl Error for LoadError {}

// --- Helpers ---

#[inline]
fn trim(mut b: &[u8]) -> &[u8] {
    while !b.is_empty() && b[0].is_ascii_whitespace() {
        b = &b[1..];
    }
    while !b.is_empty() && b[b.len() - 1].is_ascii_whitespace() {
        b = &b[..b.len() - 1];
    }
    b
}

/// Rewrite U+2212 (minus sign) to ASCII '-' in place.
#[inline]
pub fn normalize_unicode_minus(buf: &mut Vec<u8>) {
    let (mut r, mut w) = (0, 0);
    while r < buf.len() {
        if r + 2 < buf.len() && buf[r] == 0xE2 && buf[r + 1] == 0x88 && buf[r + 2] == 0x92 {
            buf[w] = b'-';
            r += 3;
            w += 1;
        } else {
            if r != w {
                buf[w] = buf[r];
            }
            r += 1;
            w += 1;
        }
    }
    buf.truncate(w);
}

#[inline]
fn parse_f64(bytes: &[u8], line: usize) -> Result<f64, LoadError> {
    let val = lexical_core::parse::<f64>(bytes).map_err(|_| LoadError {
        line,
        kind: LoadErrorKind::BadFloat {
            text: String::from_utf8_lossy(bytes).into_owned(),
        },
    })?;
    if val.is_finite() {
        Ok(val)
    } else {
        Err(LoadError {
            line,
            kind: LoadErrorKind::BadFloat {
                text: String::from_utf8_lossy(bytes).into_owned(),
            },
        })
    }
}

/// Split one line into trimmed fields.
///
/// With no delimiter any run of ASCII whitespace separates fields; an
/// explicit delimiter splits on each occurrence (empty fields survive and
/// fail the numeric parse with their line number).
fn split_fields<'l>(line: &'l [u8], delimiter: Option<&[u8]>) -> Vec<&'l [u8]> {
    match delimiter {
        None | Some(b"") => line
            .split(|b| b.is_ascii_whitespace())
            .filter(|f| !f.is_empty())
            .collect(),
        Some(delim) => {
            let mut fields = Vec::new();
            let mut start = 0;
            let mut pos = 0;
            while pos + delim.len() <= line.len() {
                if &line[pos..pos + delim.len()] == delim {
                    fields.push(trim(&line[start..pos]));
                    pos += delim.len();
                    start = pos;
                } else {
                    pos += 1;
                }
            }
            fields.push(trim(&line[start..]));
            fields
        }
    }
}

// --- Fast delimited ingest ---
const BUF_CAP: usize = 1 << 20; // 1 MiB

pub fn load_table<R: Read>(src: R, opts: &LoadOptions) -> Result<Table, LoadError> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut lines = Vec::<Vec<u8>>::new();
    let mut buf = Vec::<u8>::with_capacity(256);

    loop {
        buf.clear();
        let n = rdr.read_until(b'\n', &mut buf).map_err(|e| LoadError {
            line: lines.len() + 1,
            kind: LoadErrorKind::Io(e),
        })?;
        if n == 0 {
            break;
        }
        if buf.ends_with(b"\n") {
            buf.pop();
        }
        if buf.ends_with(b"\r") {
            buf.pop();
        }
        lines.push(buf.clone());
    }

    // Header/footer rows are dropped before any tokenizing, by raw line
    // position (the skipped rows never see the comment or delimiter rules).
    let body_end = lines.len().saturating_sub(opts.skip_footer);
    let body_start = opts.skip_header.min(body_end);

    let delimiter = opts.delimiter.as_deref().map(str::as_bytes);
    let comments = opts.comments.as_deref().map(str::as_bytes);

    let mut values = Vec::<f64>::new();
    let mut rows = 0usize;
    let mut cols = 0usize;

    for (offset, raw) in lines[body_start..body_end].iter().enumerate() {
        let line_no = body_start + offset + 1;
        let mut line = raw.clone();
        normalize_unicode_minus(&mut line);

        if let Some(marker) = comments {
            if !marker.is_empty() {
                if let Some(at) = line
                    .windows(marker.len())
                    .position(|window| window == marker)
                {
                    line.truncate(at);
                }
            }
        }
        let line = trim(&line);
        if line.is_empty() {
            continue;
        }

        let fields = split_fields(line, delimiter);
        let selected: Vec<&[u8]> = match &opts.usecols {
            None => fields,
            Some(indices) => {
                let mut picked = Vec::with_capacity(indices.len());
                for &index in indices {
                    let field = fields.get(index).ok_or(LoadError {
                        line: line_no,
                        kind: LoadErrorKind::ColumnOutOfRange {
                            index,
                            cols: fields.len(),
                        },
                    })?;
                    picked.push(*field);
                }
                picked
            }
        };

        if rows == 0 {
            cols = selected.len();
        } else if selected.len() != cols {
            return Err(LoadError {
                line: line_no,
                kind: LoadErrorKind::RaggedRow {
                    expected: cols,
                    got: selected.len(),
                },
            });
        }

        for field in selected {
            values.push(parse_f64(field, line_no)?);
        }
        rows += 1;
    }

    if rows == 0 {
        return Err(LoadError {
            line: 0,
            kind: LoadErrorKind::Empty,
        });
    }
    Ok(Table { values, rows, cols })
}

pub fn load_table_from_path(path: &str, opts: &LoadOptions) -> Result<Table, LoadError> {
    use std::fs::File;
    load_table(
        File::open(path).map_err(|e| LoadError {
            line: 0,
            kind: LoadErrorKind::Io(e),
        })?,
        opts,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(text: &str, opts: &LoadOptions) -> Result<Table, LoadError> {
        load_table(text.as_bytes(), opts)
    }

    #[test]
    fn whitespace_delimited_by_default() {
        let t = load("0 1 2\n3\t4  5\n", &LoadOptions::default()).unwrap();
        assert_eq!(t.rows(), 2);
        assert_eq!(t.cols(), 3);
        assert_eq!(t.get(1, 1), 4.0);
    }

    #[test]
    fn explicit_delimiter_splits_each_occurrence() {
        let opts = LoadOptions {
            delimiter: Some(",".into()),
            ..LoadOptions::default()
        };
        let t = load("0,1\n2,3\n", &opts).unwrap();
        assert_eq!(t.cols(), 2);
        assert_eq!(t.get(1, 0), 2.0);
    }

    #[test]
    fn comment_marker_discards_rest_of_line() {
        let opts = LoadOptions {
            comments: Some("#".into()),
            ..LoadOptions::default()
        };
        let t = load("# full comment line\n0 1 # trailing\n2 3\n", &opts).unwrap();
        assert_eq!(t.rows(), 2);
        assert_eq!(t.get(0, 1), 1.0);
    }

    #[test]
    fn no_comment_handling_unless_configured() {
        // A '#' field is data without a marker and must fail the parse.
        let err = load("0 #\n", &LoadOptions::default()).unwrap_err();
        assert!(matches!(err.kind, LoadErrorKind::BadFloat { .. }));
    }

    #[test]
    fn header_and_footer_rows_are_dropped() {
        let opts = LoadOptions {
            skip_header: 1,
            skip_footer: 1,
            ..LoadOptions::default()
        };
        let t = load("x y\n0 1\n1 2\ntrailer\n", &opts).unwrap();
        assert_eq!(t.rows(), 2);
        assert_eq!(t.get(0, 0), 0.0);
        assert_eq!(t.get(1, 1), 2.0);
    }

    #[test]
    fn usecols_selects_in_given_order() {
        let opts = LoadOptions {
            usecols: Some(vec![2, 0]),
            ..LoadOptions::default()
        };
        let t = load("0 1 2\n3 4 5\n", &opts).unwrap();
        assert_eq!(t.cols(), 2);
        assert_eq!(t.get(0, 0), 2.0);
        assert_eq!(t.get(1, 1), 3.0);
    }

    #[test]
    fn usecols_out_of_range_is_reported_with_line() {
        let opts = LoadOptions {
            usecols: Some(vec![0, 5]),
            ..LoadOptions::default()
        };
        let err = load("0 1\n", &opts).unwrap_err();
        assert_eq!(err.line, 1);
        assert!(matches!(
            err.kind,
            LoadErrorKind::ColumnOutOfRange { index: 5, cols: 2 }
        ));
    }

    #[test]
    fn ragged_rows_fail() {
        let err = load("0 1\n2 3 4\n", &LoadOptions::default()).unwrap_err();
        assert_eq!(err.line, 2);
        assert!(matches!(
            err.kind,
            LoadErrorKind::RaggedRow {
                expected: 2,
                got: 3
            }
        ));
    }

    #[test]
    fn unicode_minus_is_normalized() {
        let t = load("−1.5 2\n", &LoadOptions::default()).unwrap();
        assert_eq!(t.get(0, 0), -1.5);
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let err = load("0 inf\n", &LoadOptions::default()).unwrap_err();
        assert!(matches!(err.kind, LoadErrorKind::BadFloat { .. }));
    }

    #[test]
    fn blank_input_is_empty() {
        let err = load("\n\n", &LoadOptions::default()).unwrap_err();
        assert!(matches!(err.kind, LoadErrorKind::Empty));
    }

    #[test]
    fn column_iterators_walk_the_stride() {
        let t = Table::from_rows(&[&[0.0, 1.0, 10.0], &[1.0, 2.0, 20.0]]);
        assert_eq!(t.column(0).collect::<Vec<_>>(), vec![0.0, 1.0]);
        assert_eq!(t.column(2).collect::<Vec<_>>(), vec![10.0, 20.0]);
        assert_eq!(t.y_values().collect::<Vec<_>>(), vec![1.0, 10.0, 2.0, 20.0]);
    }
}
