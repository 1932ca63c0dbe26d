pub mod assistant;
pub mod commands;
pub mod handlers;

pub use assistant::{Assistant, Reply};
pub use commands::{parse_input, Command};
