//! Terminal setup and teardown.
//!
//! The bar takes over the terminal in raw mode on the alternate screen and
//! draws itself on the top row. Every exit path has to call [`restore`],
//! including the launch path before the process is replaced.

use std::io::{self, Stdout};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for the bar.
pub fn init() -> io::Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    release_on_err(execute!(stdout, EnterAlternateScreen), || {
        let _ = disable_raw_mode();
    })?;
    let backend = CrosstermBackend::new(stdout);
    release_on_err(Terminal::new(backend), || {
        let _ = restore();
    })
}

/// Runs `release` when a setup step fails, passing the result through.
fn release_on_err<T>(result: io::Result<T>, release: impl FnOnce()) -> io::Result<T> {
    result.inspect_err(|_| release())
}

/// Restore the terminal to normal mode.
pub fn restore() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Setup panic hook to restore terminal on panic.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore();
        original_hook(panic_info);
    }));
}
