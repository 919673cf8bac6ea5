pub mod commands;

pub use commands::{Cli, execute, render_report, run};
