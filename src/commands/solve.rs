use crate::err::BracketError;
use crate::problem::Problem;
use crate::validate::{Policy, Verdict};
use std::io::{Read, Write};

/// Reads one problem from `reader` and writes its verdict on its own line.
/// Nothing is written when the input can't be judged.
pub fn run<R: Read, W: Write>(
    mut reader: R,
    mut writer: W,
    policy: Policy,
) -> Result<Verdict, BracketError> {
    let mut input = Vec::new();
    reader.read_to_end(&mut input)?;

    let problem = Problem::read(&input, policy)?;
    tracing::info!(length = problem.length, ?policy, "solving");

    let verdict = problem.solve(policy)?;
    writeln!(writer, "{verdict}")?;

    Ok(verdict)
}

pub fn execute(policy: Policy) -> Result<(), BracketError> {
    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();

    run(stdin, stdout, policy)?;
    Ok(())
}
