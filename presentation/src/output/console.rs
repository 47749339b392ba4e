//! Console output for generation results

use colored::Colorize;

/// Writes results and failures to the terminal.
///
/// Generated text is the sole stdout payload; everything else goes to
/// stderr so the output stays pipeable.
pub struct Console;

impl Console {
    /// Print the generated text.
    pub fn print_text(text: &str) {
        println!("{text}");
    }

    /// Report a failure without touching stdout.
    pub fn print_error(message: impl std::fmt::Display) {
        eprintln!("{} {}", "error:".red().bold(), message);
    }
}
