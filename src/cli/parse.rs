use clap::Parser;

use crate::core::{
    config::{PlotConfig, PlotConfigBuilder},
    error::ConfigError,
    range::{fit_dims, terminal_geometry},
    table::LoadOptions,
};

/// Top-level CLI structure.
#[derive(Parser, Debug)]
#[command(
    name = "termplot",
    about = "Instant data plotting from the terminal into the terminal",
    disable_version_flag = true
)]
pub struct Cli {
    /// Data file(s) to plot, as delimited ASCII
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,

    /// Marker that starts a comment; the rest of the line is ignored
    #[arg(long, value_name = "MARKER")]
    pub comments: Option<String>,

    /// Field delimiter; default is any run of whitespace
    #[arg(short, long, value_name = "DELIM")]
    pub delimiter: Option<String>,

    /// Rows to discard from the start of each file
    #[arg(long, default_value_t = 0, value_name = "N")]
    pub skip_header: usize,

    /// Rows to discard from the end of each file
    #[arg(long, default_value_t = 0, value_name = "N")]
    pub skip_footer: usize,

    /// Comma-separated column indices to load, x first (e.g. 0,1,4);
    /// default is every column
    #[arg(long, value_delimiter = ',', value_name = "COLS")]
    pub usecols: Option<Vec<usize>>,

    /// Canvas width and height in character cells
    #[arg(
        short,
        long,
        num_args = 2,
        default_values_t = [60, 40],
        value_names = ["WIDTH", "HEIGHT"]
    )]
    pub size: Vec<usize>,

    /// Size the canvas from the current terminal instead of --size
    #[arg(long)]
    pub fit: bool,

    /// Explicit x-axis range; default is the data minimum and maximum
    #[arg(
        short,
        long,
        num_args = 2,
        allow_negative_numbers = true,
        value_names = ["MIN", "MAX"]
    )]
    pub x_limits: Option<Vec<f64>>,

    /// Explicit y-axis range; default is resolved from every y-column
    #[arg(
        short,
        long,
        num_args = 2,
        allow_negative_numbers = true,
        value_names = ["MIN", "MAX"]
    )]
    pub y_limits: Option<Vec<f64>>,

    /// Draw points only instead of connecting lines
    #[arg(long)]
    pub scatter: bool,

    /// Colorize each series with its own palette entry
    #[arg(short, long)]
    pub color: bool,

    /// Hide the per-series legend under each figure
    #[arg(long)]
    pub no_legend: bool,

    /// Print the version, then keep plotting any given files
    #[arg(short = 'v', long)]
    pub version: bool,
}

/// Exactly-two-values clap args to an optional pair.
fn pair(values: Option<&Vec<f64>>) -> Option<(f64, f64)> {
    values.map(|v| (v[0], v[1]))
}

impl Cli {
    /// Loader configuration shared by every file of the batch.
    #[must_use]
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            comments: self.comments.clone(),
            delimiter: self.delimiter.clone(),
            skip_header: self.skip_header,
            skip_footer: self.skip_footer,
            usecols: self.usecols.clone(),
        }
    }

    /// Plot configuration shared by every file of the batch.
    pub fn plot_config(&self) -> Result<PlotConfig, ConfigError> {
        let (width, height) = if self.fit {
            fit_dims(terminal_geometry())
        } else {
            (self.size[0], self.size[1])
        };
        PlotConfigBuilder::from(self)
            .size(width, height)
            .build()
    }
}

impl From<&Cli> for PlotConfigBuilder {
    fn from(cli: &Cli) -> Self {
        PlotConfig::builder()
            .x_limits_opt(pair(cli.x_limits.as_ref()))
            .y_limits_opt(pair(cli.y_limits.as_ref()))
            .scatter(cli.scatter)
            .color(cli.color)
            .legend(!cli.no_legend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("termplot").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_follow_the_documented_contract() {
        let cli = parse(&["data.txt"]);
        assert_eq!(cli.files, vec!["data.txt"]);
        assert_eq!(cli.size, vec![60, 40]);
        assert_eq!(cli.skip_header, 0);
        assert_eq!(cli.skip_footer, 0);
        assert!(cli.comments.is_none());
        assert!(cli.delimiter.is_none());
        assert!(cli.usecols.is_none());
        assert!(!cli.scatter);
        assert!(!cli.color);
        assert!(!cli.no_legend);

        let cfg = cli.plot_config().unwrap();
        assert!(cfg.legend);
        assert_eq!((cfg.width, cfg.height), (60, 40));
    }

    #[test]
    fn limits_accept_negative_values() {
        let cli = parse(&["data.txt", "-x", "-6.28", "6.28", "-y", "-1", "1"]);
        let cfg = cli.plot_config().unwrap();
        assert_eq!(cfg.x_limits, Some((-6.28, 6.28)));
        assert_eq!(cfg.y_limits, Some((-1.0, 1.0)));
    }

    #[test]
    fn usecols_is_comma_separated() {
        let cli = parse(&["data.txt", "--usecols", "0,2,5"]);
        assert_eq!(cli.usecols, Some(vec![0, 2, 5]));
        assert_eq!(cli.load_options().usecols, Some(vec![0, 2, 5]));
    }

    #[test]
    fn no_legend_inverts_the_default() {
        let cli = parse(&["data.txt", "--no-legend"]);
        assert!(!cli.plot_config().unwrap().legend);
    }

    #[test]
    fn multiple_files_keep_their_order() {
        let cli = parse(&["b.txt", "a.txt", "c.txt"]);
        assert_eq!(cli.files, vec!["b.txt", "a.txt", "c.txt"]);
    }

    #[test]
    fn version_flag_needs_no_files() {
        let cli = parse(&["--version"]);
        assert!(cli.version);
        assert!(cli.files.is_empty());
    }
}
