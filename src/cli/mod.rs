//! CLI argument parsing for inkmood.

mod args;

pub use args::{parse_args, CliConfig, VERSION};
