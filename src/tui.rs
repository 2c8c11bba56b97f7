//! Terminal session
//!
//! Owns the crossterm-backed terminal: raw mode and the alternate screen while
//! the app runs, and the input source the main loop reads from.

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, Event, KeyEvent, KeyEventKind},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use std::{
    io::{self, Stdout},
    time::Duration,
};

/// Input the main loop reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermEvent {
    /// A key press; repeats and releases are dropped
    Key(KeyEvent),
    Resize(u16, u16),
    /// The tick rate elapsed, or the terminal sent something the forms ignore
    Tick,
}

impl From<Event> for TermEvent {
    fn from(event: Event) -> Self {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => TermEvent::Key(key),
            Event::Resize(width, height) => TermEvent::Resize(width, height),
            _ => TermEvent::Tick,
        }
    }
}

pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    tick_rate: Duration,
    /// Raw mode and the alternate screen are on
    active: bool,
}

impl Tui {
    pub fn new(tick_rate: Duration) -> Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))
            .context("Failed to open the terminal")?;
        Ok(Self {
            terminal,
            tick_rate,
            active: false,
        })
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("Failed to enable raw mode")?;
        self.active = true;
        crossterm::execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;
        self.terminal.clear()?;
        Ok(())
    }

    /// Give the terminal back to the shell; safe to call twice
    pub fn exit(&mut self) -> Result<()> {
        if !std::mem::replace(&mut self.active, false) {
            return Ok(());
        }
        terminal::disable_raw_mode()?;
        crossterm::execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)?;
        Ok(())
    }

    /// Wait up to one tick for input
    pub fn next_event(&self) -> Result<TermEvent> {
        if event::poll(self.tick_rate)? {
            Ok(event::read()?.into())
        } else {
            Ok(TermEvent::Tick)
        }
    }

    pub fn draw(&mut self, render: impl FnOnce(&mut Frame)) -> Result<()> {
        self.terminal.draw(render)?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}
