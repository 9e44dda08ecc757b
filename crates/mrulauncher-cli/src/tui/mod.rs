//! Interactive launcher bar.
//!
//! Reads key events from the terminal, feeds them to the session and redraws
//! the bar after each one. Events are handled one at a time, to completion.

pub mod keymap;
pub mod terminal;
pub mod view;

use crossterm::event::{Event, EventStream};
use futures::StreamExt;

use mru_engine::{LaunchPlan, Outcome, Session};

use crate::tui::terminal::Tui;
use crate::tui::view::{draw_bar, BarTheme};

/// How the bar was closed.
enum Exit {
    Quit,
    Launch(LaunchPlan),
}

/// Run the bar until the user cancels or launches a command.
///
/// On launch the terminal is restored first and the process is replaced; this
/// only returns from that path if the replacement failed.
pub async fn run(mut session: Session) -> miette::Result<()> {
    terminal::install_panic_hook();

    let mut tui = terminal::init().map_err(|e| miette::miette!("failed to initialize terminal: {}", e))?;

    let result = run_bar(&mut session, &mut tui).await;

    terminal::restore().map_err(|e| miette::miette!("failed to restore terminal: {}", e))?;

    match result? {
        Exit::Quit => Ok(()),
        Exit::Launch(plan) => Err(plan.exec().into()),
    }
}

/// Main event loop.
async fn run_bar(session: &mut Session, tui: &mut Tui) -> miette::Result<Exit> {
    let theme = BarTheme::default();
    let mut events = EventStream::new();

    loop {
        tui.draw(|f| {
            let area = f.area();
            draw_bar(f, session.bar(), &theme, area);
        })
        .map_err(|e| miette::miette!("render error: {}", e))?;

        let event = match events.next().await {
            Some(Ok(event)) => event,
            Some(Err(e)) => return Err(miette::miette!("terminal event error: {}", e)),
            None => return Ok(Exit::Quit),
        };

        // Resizes fall through to the redraw at the top of the loop.
        let Event::Key(key) = event else {
            continue;
        };
        let Some(key) = keymap::translate(key) else {
            continue;
        };

        match session.handle_key(key) {
            Outcome::Redraw => {}
            Outcome::Quit => return Ok(Exit::Quit),
            Outcome::Launch(plan) => return Ok(Exit::Launch(plan)),
        }
    }
}
