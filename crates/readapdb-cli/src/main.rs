mod cli;
mod commands;
mod config;
mod error;
mod logging;

use crate::cli::Cli;
use crate::error::{CliError, Result};
use clap::Parser;
use std::process::ExitCode;
use tracing::{debug, error, info};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref()) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    let outcome = run_app(&cli);
    report(&outcome);
    ExitCode::from(exit_status(&outcome))
}

fn run_app(cli: &Cli) -> Result<()> {
    info!("readapdb v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", cli);

    let config = config::build_config(cli)?;
    commands::load::run(&config)
}

fn report(outcome: &Result<()>) {
    match outcome {
        Ok(()) => {}
        Err(CliError::Load(e)) => error!(stage = %e.stage(), "{}", e),
        Err(e) => eprintln!("Error: {}", e),
    }
}

/// Maps the outcome of a run to the process exit status.
///
/// Load failures only reach this point under `--strict`; without it they are
/// logged and the run counts as a success.
fn exit_status(outcome: &Result<()>) -> u8 {
    match outcome {
        Ok(()) => 0,
        Err(_) => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn status_for(args: &[&str]) -> u8 {
        let mut argv = vec!["readapdb"];
        argv.extend_from_slice(args);
        let cli = Cli::try_parse_from(argv).unwrap();
        exit_status(&run_app(&cli))
    }

    #[test]
    fn load_failure_exits_zero_without_strict() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.pdb");

        assert_eq!(status_for(&[missing.to_str().unwrap()]), 0);
    }

    #[test]
    fn load_failure_exits_one_under_strict() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.pdb");

        assert_eq!(status_for(&["--strict", missing.to_str().unwrap()]), 1);
    }

    #[test]
    fn bad_set_value_exits_one() {
        assert_eq!(status_for(&["-S", "reader.model=two", "in.pdb"]), 1);
    }

    #[test]
    fn loaded_file_exits_zero_under_strict() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ok.pdb");
        fs::write(
            &path,
            "ATOM      1  N   GLY A   1      -6.778  -1.424   4.200  1.00  0.00           N\n",
        )
        .unwrap();

        assert_eq!(status_for(&["--strict", path.to_str().unwrap()]), 0);
    }
}
