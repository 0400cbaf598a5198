pub mod args;
pub mod commands;

pub use args::{Cli, Commands, DatasetArgs};
pub use commands::run;
