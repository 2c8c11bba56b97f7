//! Home screen component
//!
//! Landing screen with the two entry points: login and sign up.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::{calculate_screen_layout, help_bar, key_hint};
use crate::model::Screen;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Buttons in display order with the screen each one opens
const BUTTONS: [(&str, Screen); 2] = [("Login", Screen::Login), ("Sign up", Screen::Register)];

/// Home screen component
#[derive(Default)]
pub struct HomeComponent {
    /// Index into `BUTTONS`
    pub selected: usize,
}

impl HomeComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Screen opened by the focused button
    pub fn selected_target(&self) -> Screen {
        BUTTONS[self.selected].1
    }

    fn next(&mut self) {
        self.selected = (self.selected + 1) % BUTTONS.len();
    }

    fn previous(&mut self) {
        self.selected = (self.selected + BUTTONS.len() - 1) % BUTTONS.len();
    }
}

impl Component for HomeComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Down | KeyCode::Tab | KeyCode::Char('j') => Some(Action::FocusNext),
            KeyCode::Up | KeyCode::BackTab | KeyCode::Char('k') => Some(Action::FocusPrev),
            KeyCode::Enter => Some(Action::Activate),
            KeyCode::Char('l') => Some(Action::Navigate(Screen::Login)),
            KeyCode::Char('r') => Some(Action::Navigate(Screen::Register)),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::OpenQuitDialog),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::FocusNext => self.next(),
            Action::FocusPrev => self.previous(),
            Action::Activate => return Ok(Some(Action::Navigate(self.selected_target()))),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let accent = Color::Rgb(255, 99, 71);

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Learn or share your favorite dishes.",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Fast, easy and no queues!",
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
        ];

        for (idx, (label, _)) in BUTTONS.iter().enumerate() {
            let style = if idx == self.selected {
                Style::default()
                    .fg(Color::White)
                    .bg(accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(accent)
            };
            lines.push(Line::from(Span::styled(format!("  {:^20}  ", label), style)));
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled(
            "Login with Google",
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "[illustration: user with food]",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )));

        let layout = calculate_screen_layout(area, lines.len() as u16 + 2);
        frame.render_widget(Clear, layout.card);

        let card = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Gray)),
            );
        frame.render_widget(card, layout.card);

        frame.render_widget(
            help_bar(vec![
                key_hint("↑/↓", "Move", Color::Cyan),
                key_hint("Enter", "Open", Color::Green),
                key_hint("l/r", "Login/Sign up", Color::Cyan),
                key_hint("q", "Quit", Color::Yellow),
            ]),
            layout.help,
        );

        Ok(())
    }
}
