//! Inflammation statistics CLI.

use std::io::{self, Write};

use clap::Parser;
use inflammation_cli::cli::Cli;
use inflammation_cli::commands::{is_broken_pipe, run_command};
use inflammation_cli::logging::init_logging;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    if let Err(error) = init_logging(&cli.log_config()) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let mut stdout = io::stdout().lock();
    let result = run_command(&cli.command, cli.format, &mut stdout)
        .and_then(|()| stdout.flush().map_err(anyhow::Error::from));
    let exit_code = match result {
        Ok(()) => 0,
        Err(error) if is_broken_pipe(&error) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}
