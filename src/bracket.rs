use std::fmt::Display;

/// The family a bracket belongs to, independent of whether it opens or closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BracketKind {
    Curly,
    Square,
    Round,
}

impl BracketKind {
    pub const ALL: [BracketKind; 3] = [BracketKind::Curly, BracketKind::Square, BracketKind::Round];

    pub fn open(self) -> char {
        match self {
            BracketKind::Curly => '{',
            BracketKind::Square => '[',
            BracketKind::Round => '(',
        }
    }

    pub fn closed(self) -> char {
        match self {
            BracketKind::Curly => '}',
            BracketKind::Square => ']',
            BracketKind::Round => ')',
        }
    }
}

impl Display for BracketKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind_str = match self {
            BracketKind::Curly => "curly",
            BracketKind::Square => "square",
            BracketKind::Round => "round",
        };

        write!(f, "{}", kind_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Open,
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bracket {
    pub kind: BracketKind,
    pub role: Role,
}

impl Bracket {
    /// Maps one of the six glyphs to its kind and role.
    /// Anything else is not a bracket and yields `None`;
    /// what to do with it is up to the caller's policy.
    pub fn classify(ch: char) -> Option<Self> {
        let (kind, role) = match ch {
            '{' => (BracketKind::Curly, Role::Open),
            '}' => (BracketKind::Curly, Role::Close),
            '[' => (BracketKind::Square, Role::Open),
            ']' => (BracketKind::Square, Role::Close),
            '(' => (BracketKind::Round, Role::Open),
            ')' => (BracketKind::Round, Role::Close),
            _ => return None,
        };

        Some(Self { kind, role })
    }
}
