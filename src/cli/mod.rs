mod handlers;
pub mod parse;

use clap::Parser;
pub use handlers::plot_files;
pub use parse::Cli;

use crate::core::error::PlotError;

pub fn run() -> Result<(), PlotError> {
    let cli = parse::Cli::parse();

    if cli.version {
        println!("{}", env!("CARGO_PKG_VERSION"));
    }
    if cli.files.is_empty() {
        return Err(PlotError::MissingInput);
    }

    let cfg = cli.plot_config()?;
    let opts = cli.load_options();
    plot_files(&cli.files, &opts, &cfg, &mut std::io::stdout().lock())
}
