//! LSP protocol feature implementations.
//!
//! This module provides the `workspace/executeCommand` plumbing for the two
//! cycling commands: argument decoding, command-to-direction mapping, and
//! the detect -> mutate -> `TextEdit` glue.

mod commands;

pub use commands::{
    all_commands, cycle_at_position, decode_arguments, direction_for_command, DECREMENT_COMMAND,
    INCREMENT_COMMAND,
};
