pub(crate) mod args;
pub(crate) mod commands;

pub(crate) use args::{Cli, GuardMode};
pub(crate) use commands::{Commands, parse_command};
