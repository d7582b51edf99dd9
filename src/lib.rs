#[macro_use]
mod model;
pub use model::*;

mod environment;
pub use environment::Environment;

mod cursor;
pub use cursor::Cursor;

mod evaluator;
pub use evaluator::{is_assignment, strip_whitespace, Evaluator, MAX_DEPTH};

mod interpreter;
pub use interpreter::Interpreter;
