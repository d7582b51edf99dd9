use super::{Environment, EvalOutcome, Evaluator, SyntaxError};

/// One evaluation session: the variables bound here live as long as it does.
#[derive(Debug, Default)]
pub struct Interpreter {
    environment: Environment,
}

impl Interpreter {
    pub fn new() -> Self {
        Self {
            environment: Environment::new(),
        }
    }

    pub fn evaluate(&mut self, text: &str) -> Result<EvalOutcome, SyntaxError> {
        Evaluator::new(&mut self.environment).evaluate(text)
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }
}
