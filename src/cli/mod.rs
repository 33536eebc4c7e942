pub mod console;
pub mod error;
pub mod prompt;
pub mod render;

pub use console::{MenuChoice, run};
