use std::process::ExitCode;

use clap::Parser;

use causemap_cli::{run, Cli, Outcome};
use causemap_core::errors::CausemapErrorCode;

fn main() -> ExitCode {
    causemap_core::tracing::init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(Outcome::Printed(text)) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Ok(Outcome::NoPath { from, to }) => {
            eprintln!("no path from {from} to {to}");
            ExitCode::from(1)
        }
        Err(e) => {
            eprintln!("{}", e.tagged_string());
            ExitCode::from(2)
        }
    }
}
