use std::fmt;

use thiserror::Error;

use super::{Located, ToLocated};

macro_rules! located_error {
    ($arg:expr, $loc:expr) => {
        Err($crate::ToLocated::with_locate($arg, $loc))
    };
}

/// Which operator rejected a zero divisor.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum DivisionOp {
    Divide,
    Modulus,
}

impl fmt::Display for DivisionOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DivisionOp::Divide => write!(f, "Division by zero"),
            DivisionOp::Modulus => write!(f, "Division by zero in modulus"),
        }
    }
}

fn unexpected_message(ch: &Option<char>) -> String {
    match ch {
        Some(ch) => format!("Unexpected character: {}", ch),
        None => "Unexpected end of input".to_string(),
    }
}

#[derive(Error, PartialEq, Debug, Clone)]
pub enum SyntaxErrorKind {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Undefined variable: {0}")]
    UndefinedVariable(String),
    #[error("Unmatched parenthesis")]
    UnmatchedParenthesis,
    #[error("{}", unexpected_message(.0))]
    UnexpectedCharacter(Option<char>),
    #[error("{0}")]
    DivisionByZero(DivisionOp),
    #[error("Invalid assignment")]
    InvalidAssignment,
    #[error("Parentheses nested deeper than {0}")]
    NestingTooDeep(usize),
}

impl ToLocated for SyntaxErrorKind {}

/// The one error `evaluate` reports: what went wrong and where the cursor was.
pub type SyntaxError = Located<SyntaxErrorKind>;

impl Located<SyntaxErrorKind> {
    pub fn kind(&self) -> &SyntaxErrorKind {
        &self.data
    }
}

impl fmt::Display for Located<SyntaxErrorKind> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.location {
            Some(location) => write!(f, "Error at position {}: {}", location, self.data),
            None => write!(f, "Error: {}", self.data),
        }
    }
}

impl std::error::Error for Located<SyntaxErrorKind> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Location;
    use pretty_assertions::assert_eq;

    #[test]
    fn messages() {
        let tests = vec![
            (SyntaxErrorKind::InvalidNumber("1.2.3".to_string()), "Invalid number: 1.2.3"),
            (SyntaxErrorKind::UndefinedVariable("x".to_string()), "Undefined variable: x"),
            (SyntaxErrorKind::UnmatchedParenthesis,               "Unmatched parenthesis"),
            (SyntaxErrorKind::UnexpectedCharacter(Some('@')),     "Unexpected character: @"),
            (SyntaxErrorKind::UnexpectedCharacter(None),          "Unexpected end of input"),
            (SyntaxErrorKind::DivisionByZero(DivisionOp::Divide), "Division by zero"),
            (SyntaxErrorKind::DivisionByZero(DivisionOp::Modulus), "Division by zero in modulus"),
            (SyntaxErrorKind::InvalidAssignment,                  "Invalid assignment"),
            (SyntaxErrorKind::NestingTooDeep(256),                "Parentheses nested deeper than 256"),
        ];

        for (kind, message) in tests {
            assert_eq!(kind.to_string(), message);
        }
    }

    #[test]
    fn position_prefix() {
        let located = SyntaxErrorKind::UnmatchedParenthesis.with_locate(Location::at(4));
        assert_eq!(located.to_string(), "Error at position 4: Unmatched parenthesis");
        assert_eq!(located.position(), Some(4));

        let unlocated = Located { data: SyntaxErrorKind::InvalidAssignment, location: None };
        assert_eq!(unlocated.to_string(), "Error: Invalid assignment");
    }
}
