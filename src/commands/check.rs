use crate::args::CheckArgs;
use crate::err::BracketError;
use crate::problem::Problem;
use crate::table::Table;
use crate::testcase::{self, CaseFiles};
use crate::validate::{Policy, Verdict};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use serde::Serialize;
use std::fmt::Display;
use std::fs;
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "message")]
pub enum CaseStatus {
    Passed,
    Failed,
    /// No `<n>.out` next to the input
    Missing,
    /// The input couldn't be judged
    Error(String),
}

impl Display for CaseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CaseStatus::Passed => write!(f, "passed"),
            CaseStatus::Failed => write!(f, "FAILED"),
            CaseStatus::Missing => write!(f, "missing"),
            CaseStatus::Error(message) => write!(f, "error: {message}"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CaseResult {
    pub case: u32,
    pub expected: Option<String>,
    pub actual: Option<Verdict>,
    #[serde(flatten)]
    pub status: CaseStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub passed: usize,
    pub total: usize,
    pub cases: Vec<CaseResult>,
}

impl Report {
    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }
}

fn check_case(files: &CaseFiles, policy: Policy) -> Result<CaseResult, BracketError> {
    let expected = match &files.output {
        Some(path) => Some(fs::read_to_string(path)?.trim().to_string()),
        None => None,
    };

    let input = fs::read(&files.input)?;
    let verdict = Problem::read(&input, policy).and_then(|p| p.solve(policy));

    let (actual, status) = match (verdict, &expected) {
        (Err(e), _) => (None, CaseStatus::Error(e.to_string())),
        (Ok(v), None) => (Some(v), CaseStatus::Missing),
        (Ok(v), Some(expected)) if v.as_str() == expected => (Some(v), CaseStatus::Passed),
        (Ok(v), Some(_)) => (Some(v), CaseStatus::Failed),
    };

    Ok(CaseResult {
        case: files.number,
        expected,
        actual,
        status,
    })
}

/// Runs every case in the folder. Cases are solved in parallel
/// but reported in case order.
pub fn check_dir(args: &CheckArgs, policy: Policy) -> Result<Report, BracketError> {
    let files = testcase::discover(&args.dir)?;
    tracing::info!(dir = %args.dir.display(), cases = files.len(), "checking");

    let cases = files
        .par_iter()
        .map(|f| check_case(f, policy))
        .collect::<Result<Vec<_>, _>>()?;

    let passed = cases.iter().filter(|c| c.status == CaseStatus::Passed).count();

    for case in cases.iter().filter(|c| c.status != CaseStatus::Passed) {
        tracing::warn!(case = case.case, status = %case.status, "case did not pass");
    }

    Ok(Report {
        passed,
        total: cases.len(),
        cases,
    })
}

fn render(report: &Report) -> String {
    let mut table: Table<String> = Table::new();
    table.add_row(vec![
        "case".to_string(),
        "expected".to_string(),
        "actual".to_string(),
        "status".to_string(),
    ]);

    for case in &report.cases {
        table.add_row(vec![
            case.case.to_string(),
            case.expected.clone().unwrap_or_else(|| "-".to_string()),
            case.actual.map_or_else(|| "-".to_string(), |v| v.to_string()),
            case.status.to_string(),
        ]);
    }

    format!("{}\npassed: {}/{}\n", table, report.passed, report.total)
}

/// Prints the report and tells whether every case passed.
pub fn execute(args: &CheckArgs, policy: Policy) -> Result<bool, BracketError> {
    let report = check_dir(args, policy)?;
    let mut lock = std::io::stdout().lock();

    if args.json {
        let json = serde_json::to_string_pretty(&report).map_err(std::io::Error::from)?;
        writeln!(lock, "{json}")?;
    } else {
        write!(lock, "{}", render(&report))?;
    }

    Ok(report.all_passed())
}
