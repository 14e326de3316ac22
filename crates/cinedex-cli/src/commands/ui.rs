use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::time::Duration;

fn is_interactive() -> bool {
    std::io::stdout().is_terminal() && std::env::var("CI").is_err()
}

/// Spinner shown while a foreground fetch is in flight. Hidden in quiet
/// mode and whenever stdout is not a terminal, so piped output stays clean.
pub fn fetch_spinner(msg: impl Into<String>, suppressed: bool) -> ProgressBar {
    if suppressed || !is_interactive() {
        return ProgressBar::hidden();
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    spinner.set_message(msg.into());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}
