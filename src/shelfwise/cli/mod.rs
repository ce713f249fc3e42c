//! Terminal client: argument parsing, output and the stdin/`$EDITOR` prompt.

pub mod args;
pub mod print;
pub mod prompt;
pub mod styles;
