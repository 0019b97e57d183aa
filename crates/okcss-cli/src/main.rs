use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::Parser;
use okcss_cli::input::Inputs;
use okcss_cli::{run, Cli};
use tracing_subscriber::EnvFilter;

/// Logs go to stderr. `OKCSS_LOG` overrides the level picked by `-v`.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "okcss=debug,okcss_cli=debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("OKCSS_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.global.verbose);

    let inputs = Inputs::real();
    let stdout = io::stdout();
    let is_term = stdout.is_terminal();
    let mut out = stdout.lock();

    match run(cli, &inputs, &mut out, is_term) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", console::style("error:").red().bold().for_stderr(), err);
            ExitCode::FAILURE
        }
    }
}
