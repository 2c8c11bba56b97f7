//! Submission result dialog
//!
//! Shows the payload of a successful submission as pretty-printed JSON.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::{centered_popup, key_hint};
use crate::model::Submission;
use anyhow::Result;
use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

#[derive(Default)]
pub struct SubmittedDialog {
    /// When the shown submission happened
    pub submitted_at: Option<DateTime<Local>>,
}

impl SubmittedDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, at: DateTime<Local>) {
        self.submitted_at = Some(at);
    }

    pub fn draw_with_submission(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        submission: &Submission,
    ) -> Result<()> {
        let json = submission.to_pretty_json()?;

        let mut content = vec![Line::from("")];
        content.extend(json.lines().map(|line| {
            Line::from(Span::styled(line.to_string(), Style::default().fg(Color::White)))
        }));
        content.push(Line::from(""));
        if let Some(at) = self.submitted_at {
            content.push(Line::from(Span::styled(
                format!("Submitted at {}", at.format("%H:%M:%S")),
                Style::default().fg(Color::DarkGray),
            )));
        }
        content.push(Line::from(key_hint("Enter/Esc", "OK", Color::Green)));

        let popup_area = centered_popup(area, 50, content.len() as u16 + 2);
        frame.render_widget(Clear, popup_area);

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Green))
                    .title(format!(" {} ", submission.title()))
                    .title_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            )
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: false });

        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}

impl Component for SubmittedDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') => Some(Action::CloseModal),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Needs the submission, drawn through draw_with_submission
        Ok(())
    }
}
