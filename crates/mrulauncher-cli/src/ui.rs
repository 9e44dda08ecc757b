//! Console output for the non-interactive commands.
//!
//! Plain, line-oriented text that stays readable when piped; styling only
//! shows up on a terminal.

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Palette
pub mod colors {
    use console::Color;

    pub const CYAN: Color = Color::Color256(51);
    pub const MAGENTA: Color = Color::Color256(201);
    pub const NEON_GREEN: Color = Color::Color256(82);
    pub const DIM: Color = Color::Color256(240);
}

/// Print a section heading.
pub fn heading(title: &str) {
    println!("{}", style(title).fg(colors::CYAN).bold());
}

/// Print the dashed line closing a section, as wide as its heading.
pub fn rule(title: &str) {
    println!("{}", style(rule_line(title)).fg(colors::DIM));
}

fn rule_line(title: &str) -> String {
    "-".repeat(title.chars().count())
}

/// Print a plain line.
pub fn line(msg: &str) {
    println!("{}", msg);
}

/// Print one statistic such as `+ 12`.
pub fn stat(sign: char, count: usize) {
    let color = match sign {
        '+' => colors::NEON_GREEN,
        '-' => colors::MAGENTA,
        _ => colors::CYAN,
    };
    println!("{} {}", style(sign).fg(color).bold(), count);
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{}", style(msg).fg(colors::MAGENTA));
}

/// Create a spinner on stderr, hidden unless stderr is a terminal.
pub fn spinner(msg: &str) -> ProgressBar {
    spinner_on(msg, console::Term::stderr().is_term())
}

fn spinner_on(msg: &str, is_term: bool) -> ProgressBar {
    if !is_term {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("\u{25CE}\u{25C9}\u{25CE}\u{25C9} ")
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(150));
    pb
}
