use std::io::Write;

use crate::{
    core::{
        config::PlotConfig,
        error::PlotError,
        table::{LoadOptions, load_table_from_path},
    },
    render::figure::render_figure,
};

/// Plot every file in order into `out`.
///
/// Each file is processed to completion (load, resolve, expand, render,
/// write) before the next begins; the first failure aborts the whole batch
/// and the remaining files are never read.
pub fn plot_files<W: Write>(
    files: &[String],
    opts: &LoadOptions,
    cfg: &PlotConfig,
    out: &mut W,
) -> Result<(), PlotError> {
    for path in files {
        let table = load_table_from_path(path, opts).map_err(|err| PlotError::Load {
            label: path.clone(),
            err,
        })?;
        let figure = render_figure(&table, path, cfg)?;
        out.write_all(figure.as_bytes())?;
    }
    Ok(())
}
