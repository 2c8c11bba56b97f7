//! Shared interface of screens and dialogs
//!
//! The main loop turns a key into an `Action` through the component that has
//! focus (the top modal, otherwise the mounted screen), then feeds that action
//! back through `update` until no follow-up is left.

use crate::action::Action;
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

pub trait Component {
    /// Runs once, before the first frame
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    /// Map a key to an action; state changes wait for `update`
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let _ = key;
        Ok(None)
    }

    /// Apply an action, optionally yielding the next one
    ///
    /// A form that passes validation answers `Submit` with `Submitted`, the
    /// home screen answers `Activate` with `Navigate`.
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let _ = action;
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;
}
