//! Wait spinner for the in-flight remote call

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner shown on stderr while the completion call blocks.
///
/// Cleared (not finished in place) so it never contaminates the output.
pub struct GenerationSpinner {
    bar: ProgressBar,
}

impl GenerationSpinner {
    pub fn start(model: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        bar.set_message(format!("Generating with {model}..."));
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar }
    }

    /// Stop and erase the spinner.
    pub fn finish(self) {
        self.bar.finish_and_clear();
    }
}
