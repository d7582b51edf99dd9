use tracing::{debug, trace};

use super::{Cursor, DivisionOp, Environment, EvalOutcome, SyntaxError, SyntaxErrorKind};

type Result<T> = std::result::Result<T, SyntaxError>;

/// Deepest `(` nesting accepted before the input is rejected, so recursion
/// stays well inside a default thread stack.
pub const MAX_DEPTH: usize = 256;

/// Recursive-descent evaluator over a single line of input.
///
/// Each grammar level computes its value directly; no tree is built.
///
/// ```text
/// expression := term (('+' | '-') term)*
/// term       := factor (('*' | '/' | '%') factor)*
/// factor     := ('-' | '+')? primary
/// primary    := number | identifier | '(' expression ')'
/// ```
pub struct Evaluator<'env> {
    environment: &'env mut Environment,
    cursor: Cursor,
    depth: usize,
}

impl<'env> Evaluator<'env> {
    pub fn new(environment: &'env mut Environment) -> Self {
        Self {
            environment,
            cursor: Cursor::new(""),
            depth: 0,
        }
    }

    /// Evaluates `text`, binding a variable first if it looks like `name = ...`.
    ///
    /// On error the environment is left exactly as it was.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn evaluate(&mut self, text: &str) -> Result<EvalOutcome> {
        let buffer = strip_whitespace(text);
        self.cursor = Cursor::new(&buffer);
        self.depth = 0;

        let outcome = if is_assignment(&buffer) {
            trace!(%buffer, "assignment mode");
            self.assignment()
        } else {
            trace!(%buffer, "expression mode");
            self.expression().map(EvalOutcome::Value)
        };

        if let Err(e) = &outcome {
            trace!(error = %e, "input rejected");
        }
        outcome
    }

    fn assignment(&mut self) -> Result<EvalOutcome> {
        let name = self.identifier();
        match self.cursor.peek() {
            Some('=') => self.cursor.consume(),
            _ => return located_error!(SyntaxErrorKind::InvalidAssignment, self.cursor.location()),
        };

        let value = self.expression()?;
        self.environment.set(name.as_str(), value);
        debug!(%name, value, "variable bound");

        Ok(EvalOutcome::Assigned { name, value })
    }

    fn expression(&mut self) -> Result<f64> {
        let mut value = self.term()?;
        loop {
            match self.cursor.peek() {
                Some('+') => {self.cursor.consume(); value += self.term()?},
                Some('-') => {self.cursor.consume(); value -= self.term()?},
                _ => return Ok(value),
            }
        }
    }

    fn term(&mut self) -> Result<f64> {
        let mut value = self.factor()?;
        loop {
            match self.cursor.peek() {
                Some('*') => {self.cursor.consume(); value *= self.factor()?},
                Some('/') => {self.cursor.consume(); value /= self.divisor(DivisionOp::Divide)?},
                Some('%') => {self.cursor.consume(); value %= self.divisor(DivisionOp::Modulus)?},
                _ => return Ok(value),
            }
        }
    }

    fn divisor(&mut self, op: DivisionOp) -> Result<f64> {
        let divisor = self.factor()?;
        if divisor == 0.0 {
            return located_error!(SyntaxErrorKind::DivisionByZero(op), self.cursor.location());
        }
        Ok(divisor)
    }

    // only one sign is taken; "--3" fails in primary
    fn factor(&mut self) -> Result<f64> {
        match self.cursor.peek() {
            Some('-') => {self.cursor.consume(); Ok(-self.primary()?)},
            Some('+') => {self.cursor.consume(); self.primary()},
            _ => self.primary(),
        }
    }

    fn primary(&mut self) -> Result<f64> {
        let location = self.cursor.location();
        match self.cursor.peek() {
            Some(ch) if is_number_char(ch) => self.number(),
            Some(ch) if is_identifier_initial(ch) => self.variable(),
            Some('(') => {
                if self.depth == MAX_DEPTH {
                    return located_error!(SyntaxErrorKind::NestingTooDeep(MAX_DEPTH), location);
                }
                self.cursor.consume();
                self.depth += 1;
                let value = self.expression()?;
                match self.cursor.peek() {
                    Some(')') => {self.cursor.consume(); self.depth -= 1; Ok(value)},
                    _ => located_error!(SyntaxErrorKind::UnmatchedParenthesis, self.cursor.location()),
                }
            },
            ch => located_error!(SyntaxErrorKind::UnexpectedCharacter(ch), location),
        }
    }

    fn number(&mut self) -> Result<f64> {
        let literal = self.cursor.eat_while(is_number_char);
        match literal.parse::<f64>() {
            Ok(number) => Ok(number),
            Err(_) => located_error!(SyntaxErrorKind::InvalidNumber(literal), self.cursor.location()),
        }
    }

    fn variable(&mut self) -> Result<f64> {
        let name = self.identifier();
        match self.environment.get(&name) {
            Some(value) => Ok(value),
            None => located_error!(SyntaxErrorKind::UndefinedVariable(name), self.cursor.location()),
        }
    }

    fn identifier(&mut self) -> String {
        self.cursor.eat_while(is_identifier_subsequent)
    }
}

/// Drops every ASCII whitespace character (vertical tab included), even
/// inside a literal: `"1 2"` scans as `12`. Other Unicode spaces are kept
/// and rejected by the grammar like any unknown character.
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|&ch| !is_whitespace(ch)).collect()
}

fn is_whitespace(ch: char) -> bool {
    ch.is_ascii_whitespace() || ch == '\x0b'
}

/// Purely syntactic: a leading letter plus an `=` anywhere in the input.
pub fn is_assignment(buffer: &str) -> bool {
    let leads_with_letter = buffer.chars().next().map_or(false, is_identifier_initial);
    leads_with_letter && buffer.contains('=')
}

fn is_number_char(ch: char) -> bool {
    ch.is_ascii_digit() || ch == '.'
}

fn is_identifier_initial(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

fn is_identifier_subsequent(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}
