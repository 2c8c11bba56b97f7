//! Form screen component
//!
//! One generic component renders and edits any `FormData` payload. It owns
//! the mounted form state: current values, focus, and the validation errors
//! shown inline under each field.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::{
    calculate_screen_layout, help_bar, key_hint, visible_tail, CARD_WIDTH, HELP_BAR_HEIGHT,
};
use crate::model::validation::Schema;
use crate::model::{
    FieldKind, FieldSpec, FieldValue, FormData, FormValues, Screen, ValidationErrors,
    ValidationMode,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use std::marker::PhantomData;
use tracing::debug;

/// Static text of a form screen
#[derive(Debug, Clone, Copy)]
pub struct FormScreen {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub submit_label: &'static str,
    /// Non-interactive link text shown above the submit button
    pub link: Option<&'static str>,
}

pub const REGISTER_SCREEN: FormScreen = FormScreen {
    title: "Sign up",
    subtitle: "create your account to start using the app",
    submit_label: "Sign up",
    link: None,
};

pub const LOGIN_SCREEN: FormScreen = FormScreen {
    title: "Login",
    subtitle: "sign in to your account",
    submit_label: "Login",
    link: Some("Forgot my password"),
};

/// Focusable element of a form screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Back,
    Field(usize),
    Submit,
}

impl Focus {
    fn next(self, field_count: usize) -> Focus {
        match self {
            Focus::Back if field_count > 0 => Focus::Field(0),
            Focus::Back => Focus::Submit,
            Focus::Field(i) if i + 1 < field_count => Focus::Field(i + 1),
            Focus::Field(_) => Focus::Submit,
            Focus::Submit => Focus::Back,
        }
    }

    fn prev(self, field_count: usize) -> Focus {
        match self {
            Focus::Back => Focus::Submit,
            Focus::Field(0) => Focus::Back,
            Focus::Field(i) => Focus::Field(i - 1),
            Focus::Submit if field_count > 0 => Focus::Field(field_count - 1),
            Focus::Submit => Focus::Back,
        }
    }
}

/// Mounted form for payload type `F`
pub struct FormComponent<F: FormData> {
    pub screen: FormScreen,
    pub values: FormValues,
    pub errors: ValidationErrors,
    pub focus: Focus,
    pub mode: ValidationMode,
    /// Set by the first submit; enables re-validation on change in `OnSubmit` mode
    pub submit_attempted: bool,
    schema: Schema,
    _payload: PhantomData<F>,
}

impl<F: FormData> FormComponent<F> {
    pub fn new(screen: FormScreen, mode: ValidationMode) -> Self {
        Self {
            screen,
            values: F::empty_values(),
            errors: ValidationErrors::new(),
            focus: Focus::Field(0),
            mode,
            submit_attempted: false,
            schema: F::schema(),
            _payload: PhantomData,
        }
    }

    /// Discard all state, as if the form was mounted again
    pub fn reset(&mut self) {
        self.values = F::empty_values();
        self.errors.clear();
        self.focus = Focus::Field(0);
        self.submit_attempted = false;
    }

    fn focused_field(&self) -> Option<&'static FieldSpec> {
        match self.focus {
            Focus::Field(i) => F::fields().get(i),
            _ => None,
        }
    }

    fn edit_text(&mut self, edit: impl FnOnce(&mut String)) {
        let Some(spec) = self.focused_field() else {
            return;
        };
        if let Some(FieldValue::Text(text)) = self.values.get_mut(spec.name) {
            edit(text);
            self.on_change(spec.name);
        }
    }

    fn toggle_checkbox(&mut self) {
        let Some(spec) = self.focused_field() else {
            return;
        };
        if let Some(FieldValue::Flag(checked)) = self.values.get_mut(spec.name) {
            *checked = !*checked;
            self.on_change(spec.name);
        }
    }

    fn on_change(&mut self, field: &'static str) {
        if self.mode == ValidationMode::Live || self.submit_attempted {
            let result = self.schema.validate_field(field, &self.values);
            self.errors.apply(field, result);
        }
    }

    /// Validate every field; yields the typed payload only when nothing failed
    pub fn submit(&mut self) -> Option<F> {
        self.submit_attempted = true;
        self.errors = self.schema.validate(&self.values);

        if self.errors.is_empty() {
            Some(F::from_values(&self.values))
        } else {
            debug!(
                form = self.screen.title,
                fields = ?self.errors.fields().collect::<Vec<_>>(),
                "Validation failed"
            );
            None
        }
    }

    fn field_lines(&self, spec: &FieldSpec, focused: bool, inner_width: usize) -> Vec<Line<'static>> {
        let label_style = if focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        let mut lines = Vec::new();
        match (spec.kind, self.values.get(spec.name)) {
            (FieldKind::Checkbox, value) => {
                let checked = value.and_then(FieldValue::as_flag).unwrap_or(false);
                let mark = if checked { "[x]" } else { "[ ]" };
                lines.push(Line::from(vec![
                    Span::styled(format!("{} ", mark), label_style),
                    Span::styled(spec.label, label_style),
                ]));
            }
            (kind, value) => {
                let text = value.and_then(FieldValue::as_text).unwrap_or_default();
                let shown = if kind == FieldKind::Password {
                    "*".repeat(text.chars().count())
                } else {
                    text.to_string()
                };
                // Room for the prompt and the cursor
                let shown = visible_tail(&shown, inner_width.saturating_sub(3)).to_string();
                let cursor = if focused { "_" } else { "" };

                lines.push(Line::from(Span::styled(spec.label, label_style)));
                lines.push(Line::from(vec![
                    Span::styled("> ", Style::default().fg(Color::Cyan)),
                    Span::styled(
                        format!("{}{}", shown, cursor),
                        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                    ),
                ]));
            }
        }

        if let Some(message) = self.errors.message(spec.name) {
            lines.push(Line::from(Span::styled(
                message.to_string(),
                Style::default().fg(Color::Red),
            )));
        }
        lines
    }
}

impl<F: FormData> Component for FormComponent<F> {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let kind = self.focused_field().map(|spec| spec.kind);

        let action = match key.code {
            KeyCode::Esc => Some(Action::Navigate(Screen::Home)),
            KeyCode::Tab | KeyCode::Down => Some(Action::FocusNext),
            KeyCode::BackTab | KeyCode::Up => Some(Action::FocusPrev),
            KeyCode::Enter => match (self.focus, kind) {
                (Focus::Back, _) => Some(Action::Navigate(Screen::Home)),
                (Focus::Submit, _) => Some(Action::Submit),
                (_, Some(FieldKind::Checkbox)) => Some(Action::ToggleCheckbox),
                _ => Some(Action::FocusNext),
            },
            // Control and Alt chords are shortcuts, never text
            KeyCode::Char(_)
                if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                None
            }
            KeyCode::Char(' ') if kind == Some(FieldKind::Checkbox) => {
                Some(Action::ToggleCheckbox)
            }
            KeyCode::Char(c) if matches!(kind, Some(FieldKind::Text | FieldKind::Password)) => {
                Some(Action::Input(c))
            }
            KeyCode::Backspace if matches!(kind, Some(FieldKind::Text | FieldKind::Password)) => {
                Some(Action::Backspace)
            }
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let field_count = F::fields().len();
        match action {
            Action::FocusNext => self.focus = self.focus.next(field_count),
            Action::FocusPrev => self.focus = self.focus.prev(field_count),
            Action::Input(c) => self.edit_text(|text| text.push(c)),
            Action::Backspace => self.edit_text(|text| {
                text.pop();
            }),
            Action::ToggleCheckbox => self.toggle_checkbox(),
            Action::Submit => {
                return Ok(self.submit().map(|data| Action::Submitted(data.into_submission())));
            }
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        // Card rows left once the help bar and the card borders are taken
        let room = area.height.saturating_sub(HELP_BAR_HEIGHT + 2) as usize;

        let (mut lines, mut focus_line) = self.card_lines(false);
        if lines.len() > room {
            (lines, focus_line) = self.card_lines(true);
        }
        let scroll = (focus_line + 1).saturating_sub(room);

        let layout = calculate_screen_layout(area, lines.len() as u16 + 2);
        frame.render_widget(Clear, layout.card);

        let card = Paragraph::new(lines).scroll((scroll as u16, 0)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Gray)),
        );
        frame.render_widget(card, layout.card);

        frame.render_widget(
            help_bar(vec![
                key_hint("Tab/↑↓", "Move", Color::Cyan),
                key_hint("Space", "Toggle", Color::Cyan),
                key_hint("Enter", "Next/Submit", Color::Green),
                key_hint("Esc", "Back", Color::Yellow),
            ]),
            layout.help,
        );

        Ok(())
    }
}

impl<F: FormData> FormComponent<F> {
    /// Card content plus the row of the focused element
    ///
    /// `compact` drops the blank spacer rows so short terminals still fit
    /// every field and the submit button.
    fn card_lines(&self, compact: bool) -> (Vec<Line<'static>>, usize) {
        let accent = Color::Rgb(255, 99, 71);
        let inner_width = CARD_WIDTH.saturating_sub(4) as usize;
        let button_style = |focused: bool| {
            if focused {
                Style::default().fg(Color::White).bg(accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(accent)
            }
        };

        let mut lines = vec![Line::from(Span::styled(
            "< Back",
            button_style(self.focus == Focus::Back),
        ))];
        if !compact {
            lines.push(Line::from(""));
        }
        lines.push(
            Line::from(Span::styled(
                self.screen.title,
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
        );
        lines.push(
            Line::from(Span::styled(
                self.screen.subtitle,
                Style::default().fg(Color::Gray),
            ))
            .alignment(Alignment::Center),
        );

        let mut focus_line = 0;
        for (idx, spec) in F::fields().iter().enumerate() {
            if !compact {
                lines.push(Line::from(""));
            }
            let focused = self.focus == Focus::Field(idx);
            let field_lines = self.field_lines(spec, focused, inner_width);
            if focused {
                // Keep the input row (below the label) on screen
                focus_line = lines.len() + field_lines.len().min(2) - 1;
            }
            lines.extend(field_lines);
        }

        lines.push(Line::from(""));
        if let Some(link) = self.screen.link {
            lines.push(Line::from(Span::styled(
                link,
                Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
            )));
            if !compact {
                lines.push(Line::from(""));
            }
        }

        if self.focus == Focus::Submit {
            focus_line = lines.len();
        }
        lines.push(
            Line::from(Span::styled(
                format!("  {:^20}  ", self.screen.submit_label),
                button_style(self.focus == Focus::Submit),
            ))
            .alignment(Alignment::Center),
        );

        (lines, focus_line)
    }
}
