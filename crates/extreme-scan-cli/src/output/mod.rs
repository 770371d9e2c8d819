//! Output formatting for CLI.

mod console;

pub use console::ConsoleReporter;
