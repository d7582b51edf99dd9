use std::io::{self, BufRead, Write};

const TITLE: &str = "=== Arithmetic Expression Evaluator ===";
const TERMINAL_WIDTH: usize = 80;

/// Enable with `RUST_LOG=arith=debug` or `RUST_LOG=arith=trace`.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(io::stderr))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn main() {
    init_tracing();

    let mut interpreter = arith::Interpreter::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    print_menu();
    loop {
        let choice = match prompt(&mut lines, "\nEnter your choice (1-3): ") {
            Some(line) => line.trim().chars().next(),
            None => {
                println!("exit");
                break;
            }
        };

        match choice {
            Some('1') => {
                if let Some(line) = prompt(&mut lines, "Enter expression: ") {
                    match interpreter.evaluate(&line) {
                        Ok(outcome @ arith::EvalOutcome::Assigned { .. }) => println!("{}", outcome),
                        Ok(outcome) => println!("Result: {}", outcome),
                        Err(err) => eprintln!("{}", err),
                    }
                }
            },
            Some('2') => {
                if let Some(line) = prompt(&mut lines, "Enter assignment (e.g., x=10): ") {
                    match interpreter.evaluate(&line) {
                        Ok(outcome) if outcome.is_assignment() => println!("{}", outcome),
                        Ok(_) => (),
                        Err(err) => eprintln!("{}", err),
                    }
                }
            },
            Some('3') => {
                println!("Exiting...");
                break;
            },
            _ => println!("Invalid choice! Please try again."),
        }
    }
}

fn print_menu() {
    let padding = (TERMINAL_WIDTH - TITLE.len()) / 2;
    println!("{}{}", " ".repeat(padding), TITLE);
    println!();
    println!("1. Evaluate an expression (e.g., 3+5*2)");
    println!("2. Assign a variable (e.g., x=10)");
    println!("3. Exit");
}

fn prompt<B: BufRead>(lines: &mut io::Lines<B>, text: &str) -> Option<String> {
    print!("{}", text);
    io::stdout().flush().ok()?;

    match lines.next() {
        Some(Ok(line)) => Some(line),
        Some(Err(err)) => {
            eprintln!("failed to read: {}", err);
            None
        },
        None => None,
    }
}
