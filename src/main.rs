use std::{env, process::ExitCode};
use gridlines_demo::plot_gridlines_demo;

fn main() -> ExitCode {
    let mut save_png = false;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            // Set to auto-save an image, e.g. for a README.
            "--save-png" => save_png = true,
            _ => {
                eprintln!("Usage: gridlines-demo [--save-png]");
                return ExitCode::FAILURE;
            }
        }
    }
    match plot_gridlines_demo(save_png) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("gridlines-demo: {e}");
            ExitCode::FAILURE
        }
    }
}
