//! Series expansion: one read-only (x, y) view per dependent column.

use crate::core::table::Table;

/// One plottable pairing of the shared x-column with a single y-column.
///
/// Borrowed projection; the [`Table`] exclusively owns the values.
#[derive(Clone, Copy)]
pub struct Series<'t> {
    label: &'t str,
    table: &'t Table,
    col: usize,
}

impl<'t> Series<'t> {
    /// Display label, the originating file name.  Every series of one
    /// table carries the same label.
    #[inline]
    #[must_use]
    pub fn label(&self) -> &'t str {
        self.label
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.rows()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.rows() == 0
    }

    /// (x, y) pairs in row order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + 't {
        let table = self.table;
        let col = self.col;
        (0..table.rows()).map(move |row| (table.get(row, 0), table.get(row, col)))
    }
}

/// One `Series` per y-column, preserving column order left-to-right.
///
/// A single pass over the column index range; a two-column table yields
/// exactly one series, a table with no y-columns yields none.
#[must_use]
pub fn expand<'t>(table: &'t Table, label: &'t str) -> Vec<Series<'t>> {
    (1..table.cols())
        .map(|col| Series { label, table, col })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_series_per_y_column_in_order() {
        let t = Table::from_rows(&[&[0.0, 1.0, 10.0, 100.0], &[1.0, 2.0, 20.0, 200.0]]);
        let all = expand(&t, "data.txt");
        assert_eq!(all.len(), 3);
        let firsts: Vec<f64> = all.iter().map(|s| s.points().next().unwrap().1).collect();
        assert_eq!(firsts, vec![1.0, 10.0, 100.0]);
    }

    #[test]
    fn single_y_column_yields_exactly_one_series() {
        let t = Table::from_rows(&[&[0.0, 5.0], &[1.0, 6.0]]);
        let all = expand(&t, "data.txt");
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].len(), 2);
        assert_eq!(
            all[0].points().collect::<Vec<_>>(),
            vec![(0.0, 5.0), (1.0, 6.0)]
        );
    }

    #[test]
    fn x_only_table_yields_no_series() {
        let t = Table::from_rows(&[&[0.0], &[1.0]]);
        assert!(expand(&t, "data.txt").is_empty());
    }

    #[test]
    fn every_series_shares_the_file_label() {
        let t = Table::from_rows(&[&[0.0, 1.0, 2.0]]);
        for s in expand(&t, "shared.dat") {
            assert_eq!(s.label(), "shared.dat");
        }
    }
}
