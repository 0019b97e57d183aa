//! Command-line front end for [`okcss`].
//!
//! The binary is a thin wrapper: it parses [`cli::Cli`], sets up logging and
//! hands over to [`commands::run`] with the real stdin, clipboard and stdout.
//! Tests drive the same entry point with mock inputs and an in-memory writer.

pub mod cli;
pub mod commands;
pub mod config;
pub mod input;
pub mod style;

pub use cli::Cli;
pub use commands::run;
