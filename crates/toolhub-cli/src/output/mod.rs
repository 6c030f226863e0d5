//! Terminal output helpers shared by the commands.

pub mod diagnostic;
pub mod table;

use std::fmt::Display;

use owo_colors::OwoColorize;
use owo_colors::Stream::{Stderr, Stdout};

pub use diagnostic::{exit_code, CliError};

/// Print a non-fatal problem to stderr.
pub fn warn(message: impl Display) {
    eprintln!(
        "{} {message}",
        "warning:".if_supports_color(Stderr, |text| text.yellow())
    );
}

/// Print a success line to stdout.
pub fn success(message: impl Display) {
    println!("{}", message.if_supports_color(Stdout, |text| text.green()));
}

/// Print a section heading to stdout.
pub fn heading(message: impl Display) {
    println!("{}", message.if_supports_color(Stdout, |text| text.bold()));
}
