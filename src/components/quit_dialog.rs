//! Quit confirmation, opened from the home screen

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::{centered_popup, key_hint};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

const WIDTH: u16 = 36;
const HEIGHT: u16 = 6;

/// Asks before leaving the app; holds no state of its own
#[derive(Default)]
pub struct QuitDialog;

impl Component for QuitDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('y' | 'Y') | KeyCode::Enter => Some(Action::ConfirmModal),
            KeyCode::Char('n' | 'N') | KeyCode::Esc => Some(Action::CloseModal),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup = centered_popup(area, WIDTH, HEIGHT);
        frame.render_widget(Clear, popup);

        let body = Paragraph::new(vec![
            Line::from(""),
            Line::styled("Leave signup-tui?", Style::default().add_modifier(Modifier::BOLD)),
            Line::from(""),
            Line::from(
                [
                    key_hint("y", "Quit", Color::Red),
                    key_hint("n", "Stay", Color::Green),
                ]
                .concat(),
            ),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Yellow)),
        );
        frame.render_widget(body, popup);
        Ok(())
    }
}
