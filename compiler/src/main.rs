//! `interp <filepath>`: read, compile and run an `sx` source file.
//!
//! Extra positional arguments are accepted and ignored. Any phase failure
//! is printed to stdout with its phase tag and the process exits
//! non-zero; success exits `0`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

#[derive(Parser)]
#[command(name = "interp", about = "Run an sx S-expression source file")]
struct Cli {
    /// Path to the source file to execute.
    filepath: PathBuf,

    /// Accepted and ignored.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    #[allow(dead_code)]
    extra: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match sxc::run_file(&cli.filepath) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("{err}");
            ExitCode::FAILURE
        }
    }
}
