mod cli;
mod error;
mod output;
mod prompt;
mod readers;
mod stats;
mod types;

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use cli::Cli;
use prompt::Prompter;
use types::Result;

fn main() -> ExitCode {
    env_logger::init();

    let result = run(Cli::parse());
    let stdout = std::io::stdout();
    ExitCode::from(report(result, &mut stdout.lock()))
}

fn run(cli: Cli) -> Result<()> {
    let stdin = std::io::stdin();
    let request = Prompter::new(stdin.lock(), std::io::stdout()).resolve(cli)?;
    log::debug!("{:?}", request);

    let tallies = readers::tally(&request)?;
    output::write_stdout(&tallies)
}

/// Print the outcome of a run and return the process exit status
fn report<W: Write>(result: Result<()>, out: &mut W) -> u8 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            log::debug!("{:?}", e);
            if let Err(write_err) = writeln!(out, "Error: {}", e) {
                log::error!("cannot print error: {}", write_err);
            }
            1
        }
    }
}
