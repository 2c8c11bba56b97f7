//! signup-tui - home, registration and login forms in the terminal
//!
//! Entry point: loads the config, sets up logging and the terminal, then runs
//! the event loop. Uses the Component Architecture pattern from ratatui.

mod action;
mod app;
mod component;
mod components;
mod config;
mod logging;
mod model;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::tui::{TermEvent, Tui};
use anyhow::Result;
use tracing::{error, info};

fn main() -> Result<()> {
    // Config and logging come first so a bad config never touches the terminal
    let config = Config::load()?;
    logging::init(&config)?;

    let mut tui = Tui::new(config.tick_rate())?;
    tui.enter()?;

    let mut app = App::new(&config);

    let result = app.init().and_then(|()| run_app(&mut tui, &mut app));

    tui.exit()?;

    if let Err(err) = result {
        error!(error = ?err, "Exiting with error");
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    info!("Exited");
    Ok(())
}

/// Draw, wait for input, apply the resulting action chain; until quit
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        let mut draw_result = Ok(());
        tui.draw(|frame| draw_result = app.draw(frame, frame.area()))?;
        draw_result?;

        let mut pending = match tui.next_event()? {
            TermEvent::Key(key) => app.handle_key_event(key)?,
            TermEvent::Resize(width, height) => Some(Action::Resize(width, height)),
            TermEvent::Tick => Some(Action::Tick),
        };
        // Submit yields Submitted, Activate yields Navigate, and so on
        while let Some(action) = pending {
            pending = app.update(action)?;
        }
    }

    Ok(())
}
