use crate::err::BracketError;
use crate::problem::Problem;
use crate::validate::Verdict;
use std::fs;
use std::path::{Path, PathBuf};

/// A numbered case in a test case folder: `<n>.in` and, if present, `<n>.out`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseFiles {
    pub number: u32,
    pub input: PathBuf,
    pub output: Option<PathBuf>,
}

/// Finds every `<n>.in` directly under `dir`, sorted by number.
/// Files that aren't named after a positive integer are ignored.
pub fn discover(dir: &Path) -> Result<Vec<CaseFiles>, BracketError> {
    let mut cases = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        if path.extension().and_then(|e| e.to_str()) != Some("in") {
            continue;
        }

        let Some(number) = path
            .file_stem()
            .and_then(|s| s.to_str())
            .and_then(|s| s.parse::<u32>().ok())
            .filter(|n| *n > 0)
        else {
            tracing::debug!(path = %path.display(), "skipping unnumbered input");
            continue;
        };

        let output = path.with_extension("out");

        cases.push(CaseFiles {
            number,
            output: output.is_file().then_some(output),
            input: path,
        });
    }

    cases.sort_by_key(|c| c.number);
    Ok(cases)
}

/// Writes `<number>.in` and `<number>.out` into `dir`.
pub fn write(dir: &Path, number: u32, problem: &Problem, verdict: Verdict) -> Result<(), BracketError> {
    fs::write(dir.join(format!("{number}.in")), problem.to_input())?;
    fs::write(dir.join(format!("{number}.out")), format!("{verdict}\n"))?;
    Ok(())
}
