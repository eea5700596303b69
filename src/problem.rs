use crate::err::BracketError;
use crate::validate::{self, Policy, Verdict};
use std::str::FromStr;

/// One instance of the problem: a declared count and the brackets that follow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub length: usize,
    pub brackets: String,
}

impl FromStr for Problem {
    type Err = BracketError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input, Policy::Strict)
    }
}

impl Problem {
    /// Reads two whitespace separated tokens, the count and the brackets.
    /// A missing bracket token reads as an empty string.
    ///
    /// A negative count is an error under `Strict` and scans nothing under `Lenient`.
    pub fn parse(input: &str, policy: Policy) -> Result<Self, BracketError> {
        let mut tokens = input.split_whitespace();

        let token = tokens.next().ok_or(BracketError::MissingLength)?;
        let invalid = || BracketError::InvalidLength(token.to_string());

        let length = match (token.parse::<i64>().map_err(|_| invalid())?, policy) {
            (n, Policy::Lenient) if n < 0 => {
                tracing::warn!(length = n, "negative bracket count, scanning nothing");
                0
            }
            (n, _) => usize::try_from(n).map_err(|_| invalid())?,
        };

        let brackets = tokens.next().unwrap_or_default().to_string();

        Ok(Self { length, brackets })
    }

    /// Like [`Problem::parse`] over raw bytes. Invalid UTF-8 becomes U+FFFD,
    /// which is rejected as a non-bracket under `Strict` and skipped under `Lenient`.
    pub fn read(input: &[u8], policy: Policy) -> Result<Self, BracketError> {
        Self::parse(&String::from_utf8_lossy(input), policy)
    }

    pub fn new(brackets: impl Into<String>) -> Self {
        let brackets = brackets.into();

        Self {
            length: brackets.chars().count(),
            brackets,
        }
    }

    pub fn solve(&self, policy: Policy) -> Result<Verdict, BracketError> {
        let actual = self.brackets.chars().count();

        if actual != self.length {
            match policy {
                Policy::Strict => {
                    return Err(BracketError::LengthMismatch {
                        expected: self.length,
                        actual,
                    });
                }

                Policy::Lenient => {
                    tracing::warn!(
                        expected = self.length,
                        actual,
                        "bracket count does not match, scanning {} characters",
                        self.length.min(actual)
                    );
                }
            }
        }

        validate::validate(self.brackets.chars().take(self.length), policy)
    }

    /// The input file layout: count on the first line, brackets on the second.
    pub fn to_input(&self) -> String {
        format!("{}\n{}\n", self.length, self.brackets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_lines() {
        let problem: Problem = "8\n{[()()]}\n".parse().unwrap();
        assert_eq!(problem.length, 8);
        assert_eq!(problem.brackets, "{[()()]}");
    }

    #[test]
    fn test_parse_single_line() {
        let problem: Problem = "  2 (]  ".parse().unwrap();
        assert_eq!(problem, Problem { length: 2, brackets: "(]".to_string() });
    }

    #[test]
    fn test_parse_zero_without_brackets() {
        let problem: Problem = "0\n".parse().unwrap();
        assert_eq!(problem.brackets, "");
        assert_eq!(problem.solve(Policy::Strict).unwrap(), Verdict::Valid);
    }

    #[test]
    fn test_parse_missing_length() {
        let err = "".parse::<Problem>().unwrap_err();
        assert!(matches!(err, BracketError::MissingLength));

        let err = "   \n ".parse::<Problem>().unwrap_err();
        assert!(matches!(err, BracketError::MissingLength));
    }

    #[test]
    fn test_parse_invalid_length() {
        let err = "abc ()".parse::<Problem>().unwrap_err();
        assert!(matches!(err, BracketError::InvalidLength(ref s) if s == "abc"));

        let err = "-2 ()".parse::<Problem>().unwrap_err();
        assert!(matches!(err, BracketError::InvalidLength(_)));
    }

    #[test]
    fn test_negative_length() {
        let err = Problem::parse("-1 ()", Policy::Strict).unwrap_err();
        assert!(matches!(err, BracketError::InvalidLength(ref s) if s == "-1"));

        let problem = Problem::parse("-1 ()", Policy::Lenient).unwrap();
        assert_eq!(problem.length, 0);
        assert_eq!(problem.solve(Policy::Lenient).unwrap(), Verdict::Valid);
    }

    #[test]
    fn test_read_invalid_utf8() {
        let problem = Problem::read(b"3\n(\xff)\n", Policy::Lenient).unwrap();
        assert_eq!(problem.solve(Policy::Lenient).unwrap(), Verdict::Valid);

        let problem = Problem::read(b"3\n(\xff)\n", Policy::Strict).unwrap();
        let err = problem.solve(Policy::Strict).unwrap_err();
        assert!(matches!(err, BracketError::UnknownCharacter('\u{FFFD}')));
    }

    #[test]
    fn test_solve() {
        assert_eq!(Problem::new("{[()()]}").solve(Policy::Strict).unwrap(), Verdict::Valid);
        assert_eq!(Problem::new("(]").solve(Policy::Strict).unwrap(), Verdict::Invalid);
        assert_eq!(Problem::new("([").solve(Policy::Strict).unwrap(), Verdict::Invalid);
    }

    #[test]
    fn test_strict_length_mismatch() {
        let problem: Problem = "3 ()".parse().unwrap();
        let err = problem.solve(Policy::Strict).unwrap_err();
        assert!(matches!(
            err,
            BracketError::LengthMismatch { expected: 3, actual: 2 }
        ));
    }

    #[test]
    fn test_lenient_scans_declared_prefix() {
        // Only "((" is scanned
        let problem: Problem = "2 (())".parse().unwrap();
        assert_eq!(problem.solve(Policy::Lenient).unwrap(), Verdict::Invalid);

        // Shorter than declared: the whole string is scanned
        let problem: Problem = "10 ()".parse().unwrap();
        assert_eq!(problem.solve(Policy::Lenient).unwrap(), Verdict::Valid);
    }

    #[test]
    fn test_to_input_parses_back() {
        let problem = Problem::new("[{}]");
        assert_eq!(problem.to_input(), "4\n[{}]\n");
        assert_eq!(problem.to_input().parse::<Problem>().unwrap(), problem);
    }
}
