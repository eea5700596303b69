mod args;
mod bracket;
mod commands;
mod config;
mod err;
mod logging;
mod problem;
mod table;
mod testcase;
mod validate;

use crate::{
    args::{Args, Subcommand},
    config::Config,
    err::BracketError,
    validate::Policy,
};

use clap::Parser;
use std::process::ExitCode;

fn load_config(args: &Args) -> Result<Config, BracketError> {
    match &args.config {
        Some(path) => Config::from_path(path),
        None => Config::parse(),
    }
}

fn run(args: Args) -> Result<ExitCode, BracketError> {
    let config = load_config(&args)?;
    let policy = Policy::from_lenient(args.lenient || config.lenient);

    match &args.subcommand {
        Some(Subcommand::Check(check_args)) => {
            if commands::check::execute(check_args, policy)? {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }

        Some(Subcommand::Generate(generate_args)) => {
            commands::generate::execute(generate_args, &config.generate)?;
            Ok(ExitCode::SUCCESS)
        }

        // Both verdicts are a successful run
        None => {
            commands::solve::execute(policy)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            tracing::debug!(error = ?e, "run failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
