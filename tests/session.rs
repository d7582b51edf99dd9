use arith::{DivisionOp, EvalOutcome, Interpreter, SyntaxError, SyntaxErrorKind};
use pretty_assertions::assert_eq;

type Result<T> = std::result::Result<T, SyntaxError>;

fn eval(interpreter: &mut Interpreter, text: &str) -> Result<f64> {
    interpreter.evaluate(text).map(|outcome| outcome.value())
}

fn kind_of(interpreter: &mut Interpreter, text: &str) -> SyntaxErrorKind {
    match interpreter.evaluate(text) {
        Ok(outcome) => panic!("{:?} unexpectedly evaluated to {}", text, outcome),
        Err(e) => e.extract(),
    }
}

#[test]
fn precedence_and_associativity() -> Result<()> {
    let mut interpreter = Interpreter::new();
    assert_eq!(eval(&mut interpreter, "2+3*4")?, 14.0);
    assert_eq!(eval(&mut interpreter, "(2+3)*4")?, 20.0);
    assert_eq!(eval(&mut interpreter, "10-2-3")?, 5.0);
    assert_eq!(eval(&mut interpreter, "20/2/2")?, 5.0);
    assert_eq!(eval(&mut interpreter, "-3+5")?, 2.0);
    assert_eq!(eval(&mut interpreter, "3*-2")?, -6.0);
    assert_eq!(eval(&mut interpreter, "10%3")?, 1.0);
    Ok(())
}

#[test]
fn rejected_input() {
    let mut interpreter = Interpreter::new();
    assert_eq!(kind_of(&mut interpreter, "5/0"), SyntaxErrorKind::DivisionByZero(DivisionOp::Divide));
    assert_eq!(kind_of(&mut interpreter, "5%0"), SyntaxErrorKind::DivisionByZero(DivisionOp::Modulus));
    assert_eq!(kind_of(&mut interpreter, "x+1"), SyntaxErrorKind::UndefinedVariable("x".to_string()));
    assert_eq!(kind_of(&mut interpreter, "(1+2"), SyntaxErrorKind::UnmatchedParenthesis);
    assert_eq!(kind_of(&mut interpreter, "1+@"), SyntaxErrorKind::UnexpectedCharacter(Some('@')));
    assert_eq!(kind_of(&mut interpreter, "x-1=2"), SyntaxErrorKind::InvalidAssignment);
    assert!(interpreter.environment().is_empty());
}

#[test]
fn assignment_then_use() -> Result<()> {
    let mut interpreter = Interpreter::new();
    assert_eq!(
        interpreter.evaluate("x=5")?,
        EvalOutcome::Assigned { name: "x".to_string(), value: 5.0 }
    );
    assert_eq!(eval(&mut interpreter, "x+2")?, 7.0);
    Ok(())
}

#[test]
fn reassignment_overwrites() -> Result<()> {
    let mut interpreter = Interpreter::new();
    interpreter.evaluate("x=5")?;
    interpreter.evaluate("x=10")?;
    assert_eq!(interpreter.evaluate("x")?, EvalOutcome::Value(10.0));
    Ok(())
}

#[test]
fn whitespace_does_not_matter() -> Result<()> {
    let mut interpreter = Interpreter::new();
    assert_eq!(eval(&mut interpreter, "1 + 2")?, eval(&mut interpreter, "1+2")?);
    assert_eq!(eval(&mut interpreter, "1 + 2")?, 3.0);
    Ok(())
}

#[test]
fn pure_evaluation_is_idempotent() -> Result<()> {
    let mut interpreter = Interpreter::new();
    interpreter.evaluate("y = 1.5")?;
    let before = interpreter.environment().clone();

    let first = interpreter.evaluate("y * (4 - y) % 2")?;
    let second = interpreter.evaluate("y * (4 - y) % 2")?;

    assert_eq!(first, second);
    assert_eq!(interpreter.environment(), &before);
    Ok(())
}

#[test]
fn error_reports_position() {
    let mut interpreter = Interpreter::new();
    let err = match interpreter.evaluate("( 1 + 2") {
        Ok(outcome) => panic!("unexpectedly evaluated to {}", outcome),
        Err(e) => e,
    };
    assert_eq!(err.to_string(), "Error at position 4: Unmatched parenthesis");
}
