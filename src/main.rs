use termplot::core::error::PlotError;

fn main() {
    match termplot::cli::run() {
        Ok(()) => {}
        // No input files aborts gracefully, without a failing status.
        Err(e @ PlotError::MissingInput) => eprintln!("[ERROR] {e}"),
        Err(e) => {
            eprintln!("[ERROR] {e}");
            std::process::exit(1);
        }
    }
}
