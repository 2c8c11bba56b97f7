//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that owns the navigation controller and the modal stack, and delegates
//! event handling and rendering to the active screen.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    FormComponent, HomeComponent, QuitDialog, SubmittedDialog, LOGIN_SCREEN, REGISTER_SCREEN,
};
use crate::config::Config;
use crate::model::{
    LoginFormData, Modal, ModalStack, Navigator, RegisterFormData, Screen, Submission,
};
use anyhow::Result;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use tracing::{debug, info};

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// Which screen is mounted
    pub navigator: Navigator,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub home: HomeComponent,
    pub register: FormComponent<RegisterFormData>,
    pub login: FormComponent<LoginFormData>,
    pub quit_dialog: QuitDialog,
    pub submitted_dialog: SubmittedDialog,
}

impl Default for App {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    pub fn new(config: &Config) -> App {
        App {
            navigator: Navigator::new(),
            modals: ModalStack::new(),
            should_quit: false,
            home: HomeComponent::new(),
            register: FormComponent::new(REGISTER_SCREEN, config.validation_mode),
            login: FormComponent::new(LOGIN_SCREEN, config.validation_mode),
            quit_dialog: QuitDialog,
            submitted_dialog: SubmittedDialog::new(),
        }
    }

    pub fn screen(&self) -> Screen {
        self.navigator.current()
    }

    fn navigate(&mut self, target: Screen) {
        let previous = self.navigator.current();
        if self.navigator.navigate(target) {
            self.unmount(previous);
            debug!(from = %previous, to = %target, "Navigated");
        }
    }

    /// Drop the state of a screen that is no longer shown
    fn unmount(&mut self, screen: Screen) {
        match screen {
            Screen::Home => {}
            Screen::Register => self.register.reset(),
            Screen::Login => self.login.reset(),
        }
    }

    /// Terminal action for a validated payload
    fn handle_submission(&mut self, submission: Submission) {
        info!(form = submission.form_name(), "Form submitted");
        self.submitted_dialog.open(Local::now());
        self.modals.push(Modal::Submitted(submission));
    }

    fn active_component(&mut self) -> &mut dyn Component {
        match self.navigator.current() {
            Screen::Home => &mut self.home,
            Screen::Register => &mut self.register,
            Screen::Login => &mut self.login,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn init(&mut self) -> Result<()> {
        info!(screen = %self.screen(), "App started");
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::ForceQuit));
        }

        match self.modals.top() {
            Some(Modal::QuitConfirm) => self.quit_dialog.handle_key_event(key),
            Some(Modal::Submitted(_)) => self.submitted_dialog.handle_key_event(key),
            None => self.active_component().handle_key_event(key),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick | Action::Resize(_, _) => {}
            Action::ForceQuit => {
                self.should_quit = true;
            }

            // ─────────────────────────────────────────────────────────────────
            // Navigation
            // ─────────────────────────────────────────────────────────────────
            Action::Navigate(target) => self.navigate(target),

            // ─────────────────────────────────────────────────────────────────
            // Screen input (delegate to the mounted screen)
            // ─────────────────────────────────────────────────────────────────
            Action::FocusNext
            | Action::FocusPrev
            | Action::Activate
            | Action::Input(_)
            | Action::Backspace
            | Action::ToggleCheckbox
            | Action::Submit => {
                return self.active_component().update(action);
            }
            Action::Submitted(submission) => self.handle_submission(submission),

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                self.modals.push(Modal::QuitConfirm);
            }
            Action::CloseModal => {
                self.modals.pop();
            }
            Action::ConfirmModal => match self.modals.top() {
                Some(Modal::QuitConfirm) => self.should_quit = true,
                Some(Modal::Submitted(_)) => {
                    self.modals.pop();
                }
                None => {}
            },
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        self.active_component().draw(frame, area)?;

        if let Some(modal) = self.modals.top().cloned() {
            match modal {
                Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
                Modal::Submitted(submission) => {
                    self.submitted_dialog
                        .draw_with_submission(frame, area, &submission)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FieldValue, ValidationMode};
    use ratatui::{backend::TestBackend, Terminal};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    /// Feed a key through the same event → action → update chain as the main loop
    fn press(app: &mut App, code: KeyCode) {
        let mut action = app.handle_key_event(key(code)).unwrap();
        while let Some(a) = action {
            action = app.update(a).unwrap();
        }
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn rendered_text(app: &mut App) -> String {
        rendered_text_sized(app, 80, 40)
    }

    fn rendered_text_sized(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| {
                app.draw(frame, frame.area()).unwrap();
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn submitted_count(app: &App) -> usize {
        app.modals
            .iter()
            .filter(|m| matches!(m, Modal::Submitted(_)))
            .count()
    }

    #[test]
    fn test_starts_on_home() {
        let app = App::default();
        assert_eq!(app.screen(), Screen::Home);
        assert!(app.modals.is_empty());
    }

    #[test]
    fn test_home_buttons_navigate() {
        let mut app = App::default();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen(), Screen::Login);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen(), Screen::Home);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen(), Screen::Register);
    }

    #[test]
    fn test_valid_registration_submits_exactly_once() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.screen(), Screen::Register);

        type_text(&mut app, "Ana");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "ana@x.com");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "secret1");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);

        assert!(app.register.errors.is_empty());
        assert_eq!(submitted_count(&app), 1);
        assert_eq!(
            app.modals.top(),
            Some(&Modal::Submitted(Submission::Register(RegisterFormData {
                name: "Ana".to_string(),
                email: "ana@x.com".to_string(),
                password: "secret1".to_string(),
                accept_terms: true,
            })))
        );
        assert!(app.submitted_dialog.submitted_at.is_some());

        press(&mut app, KeyCode::Enter);
        assert!(app.modals.is_empty());
        assert_eq!(app.screen(), Screen::Register);
    }

    #[test]
    fn test_invalid_registration_has_no_side_effect() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('r'));

        // name left empty
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "ana@x.com");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "secret1");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);

        assert_eq!(submitted_count(&app), 0);
        assert_eq!(app.register.errors.message("name"), Some("Name is required"));
        assert_eq!(app.register.errors.len(), 1);
    }

    #[test]
    fn test_login_requires_identifier() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('l'));

        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "secret1");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);

        assert_eq!(submitted_count(&app), 0);
        assert_eq!(
            app.login.errors.message("identifier"),
            Some("Enter your email or phone")
        );
    }

    #[test]
    fn test_valid_login_submits() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('l'));
        type_text(&mut app, "11999990000");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "x");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);

        assert_eq!(submitted_count(&app), 1);
    }

    #[test]
    fn test_leaving_a_form_discards_its_state() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('r'));
        type_text(&mut app, "Ana");
        app.update(Action::Submit).unwrap();
        assert!(!app.register.errors.is_empty());

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen(), Screen::Home);
        press(&mut app, KeyCode::Char('r'));

        assert!(app.register.errors.is_empty());
        assert_eq!(
            app.register.values.get("name"),
            Some(&FieldValue::Text(String::new()))
        );
    }

    #[test]
    fn test_navigate_to_current_screen_keeps_state() {
        let mut app = App::default();
        app.update(Action::Navigate(Screen::Login)).unwrap();
        type_text(&mut app, "ana");
        app.update(Action::Navigate(Screen::Login)).unwrap();
        assert_eq!(app.login.values.text("identifier"), "ana");
    }

    #[test]
    fn test_config_mode_reaches_forms() {
        let config = Config {
            validation_mode: ValidationMode::OnSubmit,
            ..Config::default()
        };
        let app = App::new(&config);
        assert_eq!(app.register.mode, ValidationMode::OnSubmit);
        assert_eq!(app.login.mode, ValidationMode::OnSubmit);
    }

    #[test]
    fn test_quit_dialog_flow() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.modals.top(), Some(&Modal::QuitConfirm));

        // Input goes to the dialog, not the screen underneath
        press(&mut app, KeyCode::Char('n'));
        assert!(app.modals.is_empty());
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_from_form() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('r'));
        let action = app
            .handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .unwrap();
        assert_eq!(action, Some(Action::ForceQuit));
    }

    #[test]
    fn test_home_screen_renders() {
        let mut app = App::default();
        let text = rendered_text(&mut app);
        assert!(text.contains("Learn or share your favorite dishes."));
        assert!(text.contains("Login with Google"));
        assert!(text.contains("Sign up"));
    }

    #[test]
    fn test_inline_errors_render_and_password_is_masked() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('r'));
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "abc");
        app.update(Action::Submit).unwrap();

        let text = rendered_text(&mut app);
        assert!(text.contains("Name is required"));
        assert!(text.contains("Password must be at least 6 characters"));
        assert!(text.contains("You must accept the terms"));
        assert!(text.contains("***"));
        assert!(!text.contains("abc"));
    }

    #[test]
    fn test_submit_button_stays_visible_after_failed_submit() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('r'));
        app.update(Action::Submit).unwrap();
        assert!(!app.register.errors.is_empty());

        let text = rendered_text_sized(&mut app, 80, 24);
        assert!(text.contains("You must accept the terms"));
        // Title plus the button
        assert_eq!(text.matches("Sign up").count(), 2);
    }

    #[test]
    fn test_submission_dialog_renders_payload() {
        let mut app = App::default();
        app.update(Action::Submitted(Submission::Login(LoginFormData {
            identifier: "ana@x.com".to_string(),
            password: "x".to_string(),
        })))
        .unwrap();

        let text = rendered_text(&mut app);
        assert!(text.contains("Logged in"));
        assert!(text.contains("\"identifier\": \"ana@x.com\""));
    }
}
