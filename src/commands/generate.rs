use crate::args::GenerateArgs;
use crate::bracket::BracketKind;
use crate::config::GenerateConfig;
use crate::err::BracketError;
use crate::problem::Problem;
use crate::testcase;
use crate::validate::{Policy, Verdict};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt::Display;
use std::fs;
use std::time::{Duration, Instant};

/// How a generated case is built. Each type gets its own
/// contiguous range of case numbers, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseType {
    /// Balanced by construction, always `Valid`
    Balanced,
    /// Uniformly random brackets, almost always `Invalid`
    Scrambled,
}

impl Display for CaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CaseType::Balanced => write!(f, "balanced"),
            CaseType::Scrambled => write!(f, "scrambled"),
        }
    }
}

/// The case numbers `first..=last` hold cases of one type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Allocation {
    pub case_type: CaseType,
    pub first: u32,
    pub last: u32,
}

impl Display for Allocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.first == self.last {
            write!(f, "{}: case {}", self.case_type, self.first)
        } else {
            write!(f, "{}: cases {}-{}", self.case_type, self.first, self.last)
        }
    }
}

/// Assigns number ranges starting at 1. Types with no cases get no range.
pub fn layout(counts: &[(CaseType, usize)]) -> Vec<Allocation> {
    let mut next = 1u32;
    let mut allocations = Vec::new();

    for &(case_type, count) in counts {
        if count == 0 {
            continue;
        }

        let count = count as u32;
        allocations.push(Allocation {
            case_type,
            first: next,
            last: next + count - 1,
        });
        next += count;
    }

    allocations
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedCase {
    pub number: u32,
    pub case_type: CaseType,
    pub problem: Problem,
    pub verdict: Verdict,
    pub elapsed: Duration,
}

#[derive(Debug)]
pub struct Generated {
    pub layout: Vec<Allocation>,
    pub cases: Vec<GeneratedCase>,
}

fn random_kind(rng: &mut StdRng) -> BracketKind {
    BracketKind::ALL[rng.gen_range(0..BracketKind::ALL.len())]
}

/// A balanced string of exactly `length` brackets (`length` must be even).
fn balanced(rng: &mut StdRng, length: usize) -> String {
    let mut out = String::with_capacity(length);
    let mut open: Vec<BracketKind> = Vec::new();

    while out.len() < length {
        let remaining = length - out.len();

        // Close when every remaining slot is needed to close, or at random
        let close = match open.last() {
            None => false,
            Some(_) if remaining == open.len() => true,
            Some(_) => rng.gen_bool(0.5),
        };

        if close {
            if let Some(kind) = open.pop() {
                out.push(kind.closed());
            }
        } else {
            let kind = random_kind(rng);
            open.push(kind);
            out.push(kind.open());
        }
    }

    out
}

fn scrambled(rng: &mut StdRng, length: usize) -> String {
    (0..length)
        .map(|_| {
            let kind = random_kind(rng);
            if rng.gen_bool(0.5) { kind.open() } else { kind.closed() }
        })
        .collect()
}

fn make_case(rng: &mut StdRng, case_type: CaseType, max_length: usize) -> Problem {
    let length = rng.gen_range(0..=max_length);

    match case_type {
        CaseType::Balanced => Problem::new(balanced(rng, length - length % 2)),
        CaseType::Scrambled => Problem::new(scrambled(rng, length)),
    }
}

pub fn generate(args: &GenerateArgs, defaults: &GenerateConfig) -> Result<Generated, BracketError> {
    let counts = [
        (CaseType::Balanced, args.balanced.unwrap_or(defaults.balanced)),
        (CaseType::Scrambled, args.scrambled.unwrap_or(defaults.scrambled)),
    ];
    let max_length = args.max_length.unwrap_or(defaults.max_length);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    fs::create_dir_all(&args.dir)?;

    let layout = layout(&counts);
    let mut cases = Vec::new();

    for allocation in &layout {
        tracing::info!(%allocation, max_length, "generating");

        for number in allocation.first..=allocation.last {
            let problem = make_case(&mut rng, allocation.case_type, max_length);

            let t0 = Instant::now();
            let verdict = problem.solve(Policy::Strict)?;
            let elapsed = t0.elapsed();

            testcase::write(&args.dir, number, &problem, verdict)?;
            tracing::info!(number, length = problem.length, %verdict, ?elapsed, "solved");

            cases.push(GeneratedCase {
                number,
                case_type: allocation.case_type,
                problem,
                verdict,
                elapsed,
            });
        }
    }

    Ok(Generated { layout, cases })
}

fn render(generated: &Generated, dir: &std::path::Path) -> String {
    let mut out = format!("Generated {} cases in {}\n", generated.cases.len(), dir.display());

    for allocation in &generated.layout {
        out.push_str(&format!("{allocation}\n"));
    }

    if let Some(slowest) = generated.cases.iter().max_by_key(|c| c.elapsed) {
        out.push_str(&format!(
            "slowest solve: case {} in {:?}\n",
            slowest.number, slowest.elapsed
        ));
    }

    out
}

pub fn execute(args: &GenerateArgs, defaults: &GenerateConfig) -> Result<(), BracketError> {
    let generated = generate(args, defaults)?;
    print!("{}", render(&generated, &args.dir));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::CheckArgs;
    use crate::commands::check;

    fn args(dir: &std::path::Path, balanced: usize, scrambled: usize, seed: u64) -> GenerateArgs {
        GenerateArgs {
            dir: dir.to_path_buf(),
            balanced: Some(balanced),
            scrambled: Some(scrambled),
            max_length: Some(40),
            seed: Some(seed),
        }
    }

    #[test]
    fn test_balanced_is_valid() {
        let mut rng = StdRng::seed_from_u64(1);

        for length in (0..60).step_by(2) {
            let s = balanced(&mut rng, length);
            assert_eq!(s.len(), length);
            assert_eq!(Problem::new(s).solve(Policy::Strict).unwrap(), Verdict::Valid);
        }
    }

    #[test]
    fn test_scrambled_only_brackets() {
        let mut rng = StdRng::seed_from_u64(2);
        let s = scrambled(&mut rng, 100);

        assert_eq!(s.len(), 100);
        assert!(s.chars().all(|c| "{}[]()".contains(c)));
    }

    #[test]
    fn test_layout_ranges() {
        let allocations = layout(&[(CaseType::Balanced, 10), (CaseType::Scrambled, 10)]);
        assert_eq!(
            allocations,
            vec![
                Allocation { case_type: CaseType::Balanced, first: 1, last: 10 },
                Allocation { case_type: CaseType::Scrambled, first: 11, last: 20 },
            ]
        );
        assert_eq!(allocations[0].to_string(), "balanced: cases 1-10");
        assert_eq!(allocations[1].to_string(), "scrambled: cases 11-20");
    }

    #[test]
    fn test_layout_skips_empty_types() {
        let allocations = layout(&[(CaseType::Balanced, 0), (CaseType::Scrambled, 1)]);
        assert_eq!(
            allocations,
            vec![Allocation { case_type: CaseType::Scrambled, first: 1, last: 1 }]
        );
        assert_eq!(allocations[0].to_string(), "scrambled: case 1");

        assert!(layout(&[(CaseType::Balanced, 0), (CaseType::Scrambled, 0)]).is_empty());
    }

    #[test]
    fn test_cases_follow_layout() {
        let dir = tempfile::tempdir().unwrap();
        let generated = generate(&args(dir.path(), 4, 3, 5), &GenerateConfig::default()).unwrap();

        let numbers: Vec<_> = generated.cases.iter().map(|c| c.number).collect();
        assert_eq!(numbers, (1..=7).collect::<Vec<_>>());

        for case in &generated.cases {
            let expected = if case.number <= 4 { CaseType::Balanced } else { CaseType::Scrambled };
            assert_eq!(case.case_type, expected);
        }

        // Balanced cases are always valid
        assert!(generated.cases[..4].iter().all(|c| c.verdict == Verdict::Valid));
    }

    #[test]
    fn test_render_breakdown() {
        let dir = tempfile::tempdir().unwrap();
        let generated = generate(&args(dir.path(), 2, 3, 9), &GenerateConfig::default()).unwrap();
        let text = render(&generated, dir.path());

        assert!(text.starts_with("Generated 5 cases in "));
        assert!(text.contains("\nbalanced: cases 1-2\nscrambled: cases 3-5\n"));
        assert!(text.contains("slowest solve: case "));
    }

    #[test]
    fn test_generated_folder_passes_check() {
        let dir = tempfile::tempdir().unwrap();
        let generated = generate(&args(dir.path(), 6, 6, 42), &GenerateConfig::default()).unwrap();
        assert_eq!(generated.cases.len(), 12);

        let check_args = CheckArgs {
            dir: dir.path().to_path_buf(),
            json: false,
        };
        let report = check::check_dir(&check_args, Policy::Strict).unwrap();
        assert_eq!(report.total, 12);
        assert!(report.all_passed());
    }

    #[test]
    fn test_same_seed_same_cases() {
        let a = tempfile::tempdir().unwrap();
        let b = tempfile::tempdir().unwrap();

        let first = generate(&args(a.path(), 3, 3, 7), &GenerateConfig::default()).unwrap();
        let second = generate(&args(b.path(), 3, 3, 7), &GenerateConfig::default()).unwrap();

        let problems = |g: &Generated| g.cases.iter().map(|c| c.problem.clone()).collect::<Vec<_>>();
        assert_eq!(problems(&first), problems(&second));

        for n in 1..=6 {
            let name = format!("{n}.in");
            assert_eq!(
                fs::read_to_string(a.path().join(&name)).unwrap(),
                fs::read_to_string(b.path().join(&name)).unwrap()
            );
        }
    }

    #[test]
    fn test_defaults_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let args = GenerateArgs {
            dir: dir.path().join("nested"),
            balanced: None,
            scrambled: Some(1),
            max_length: None,
            seed: Some(3),
        };
        let defaults = GenerateConfig {
            balanced: 2,
            scrambled: 5,
            max_length: 4,
        };

        let generated = generate(&args, &defaults).unwrap();
        assert_eq!(generated.cases.len(), 3);
        assert!(generated.cases.iter().all(|c| c.problem.length <= 4));
        assert!(dir.path().join("nested").join("3.out").is_file());
    }
}
