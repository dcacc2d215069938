//! shape-area - Prints the area of a circle or rectangle

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = shape_area::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
