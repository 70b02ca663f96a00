//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use poi_harvester_cli::{CliError, run};

fn main() {
    match run() {
        Ok(()) => {}
        // Help and version requests are rendered by clap with its own exit code.
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("poi-harvester: {err}");
            std::process::exit(1);
        }
    }
}
