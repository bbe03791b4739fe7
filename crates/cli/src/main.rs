use std::io::{stdout, IsTerminal, Write};
use std::process::ExitCode;

use argsift_cli::cli_args::{Args, Format};
use argsift_cli::render::{self, Options};
use argsift_cli::setup::Provider;
use argsift_core::error::Result;
use clap::Parser;
use log::debug;

fn execute() -> Result<()> {
    let args = Args::parse();
    let parser = args.get_parser()?;

    debug!("Classifying {} token(s)", args.tokens.len());
    let store = parser.parse(&args.tokens);

    let mut stdout = stdout();
    let options = Options {
        format: args.format,
        explain: args.explain,
        styled: args.format == Format::Text && stdout.is_terminal(),
    };

    let output = render::render(&store, &args.queries, options)?;
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
