mod located;
pub use located::*;

#[macro_use]
mod error;
pub use error::*;

mod outcome;
pub use outcome::*;
