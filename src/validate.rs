use crate::bracket::{Bracket, BracketKind, Role};
use crate::err::BracketError;
use serde::Serialize;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    Valid,
    Invalid,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Valid => "Valid",
            Verdict::Invalid => "Invalid",
        }
    }
}

impl Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What to do with input that isn't strictly a string of brackets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Policy {
    /// Non-bracket characters and length mismatches are errors.
    #[default]
    Strict,
    /// Non-bracket characters are skipped, and only the declared
    /// number of characters is scanned.
    Lenient,
}

impl Policy {
    pub fn from_lenient(lenient: bool) -> Self {
        if lenient { Policy::Lenient } else { Policy::Strict }
    }
}

/// Scans `input` with a stack of open bracket kinds.
///
/// Stops at the first closing bracket that doesn't match the
/// innermost open one. Anything left open at the end makes the
/// string `Invalid`.
pub fn validate<I>(input: I, policy: Policy) -> Result<Verdict, BracketError>
where
    I: IntoIterator<Item = char>,
{
    let mut open: Vec<BracketKind> = Vec::new();

    for ch in input {
        let Some(bracket) = Bracket::classify(ch) else {
            match policy {
                Policy::Strict => return Err(BracketError::UnknownCharacter(ch)),
                Policy::Lenient => {
                    tracing::debug!(?ch, "skipping non-bracket character");
                    continue;
                }
            }
        };

        match bracket.role {
            Role::Open => open.push(bracket.kind),
            Role::Close => {
                if open.last() != Some(&bracket.kind) {
                    tracing::debug!(
                        depth = open.len(),
                        closing = %bracket.kind,
                        "closing bracket does not match"
                    );
                    return Ok(Verdict::Invalid);
                }

                open.pop();
            }
        }
    }

    if open.is_empty() {
        Ok(Verdict::Valid)
    } else {
        tracing::debug!(unclosed = open.len(), "brackets left open");
        Ok(Verdict::Invalid)
    }
}
