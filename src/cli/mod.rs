//! Command-line interface.

mod args;
mod export;
mod generate;
mod restyle;

pub use args::{Cli, Commands, ExportArgs, GenerateArgs, RestyleArgs};
pub use export::run_export;
pub use generate::run_generate;
pub use restyle::run_restyle;
