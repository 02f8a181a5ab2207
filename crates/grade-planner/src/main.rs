use clap::Parser;

use grade_planner::cli::{run, Cli, RunError, EXIT_USAGE};

fn main() {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => {}
        Err(RunError::Usage(msg)) => {
            eprintln!("error: {msg}");
            std::process::exit(EXIT_USAGE);
        }
        Err(RunError::Failure(err)) => {
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    }
}
