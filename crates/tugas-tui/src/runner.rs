//! Main event loop: draw, poll, update.

use ratatui::DefaultTerminal;

use tugas_app::{update, AppPhase, AppState};
use tugas_core::prelude::*;

use crate::event;
use crate::render;
use crate::terminal::install_panic_hook;

/// Run the TUI until the user quits. Restores the terminal on the way out,
/// including on error.
pub fn run(mut state: AppState) -> Result<()> {
    install_panic_hook();
    let mut terminal =
        ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;

    let result = event_loop(&mut terminal, &mut state);
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, state: &mut AppState) -> Result<()> {
    loop {
        terminal
            .draw(|frame| render::view(frame, state))
            .map_err(|e| Error::terminal(format!("draw failed: {e}")))?;

        if let Some(message) = event::poll()? {
            // Dispatch the message and any follow-ups to completion; each
            // handler runs atomically before the next event is read.
            let mut next = Some(message);
            while let Some(msg) = next {
                next = update(state, msg).message;
            }
        }

        if state.phase == AppPhase::Quitting {
            info!("Quitting");
            return Ok(());
        }
    }
}
