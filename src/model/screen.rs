//! Screen identity and the navigation controller

use std::fmt;

/// The three mutually exclusive views of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Register,
    Login,
}

impl Screen {
    pub fn name(&self) -> &str {
        match self {
            Screen::Home => "home",
            Screen::Register => "register",
            Screen::Login => "login",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Holds the active screen. There is no history stack: every transition is an
/// explicit `navigate` call.
#[derive(Debug, Default)]
pub struct Navigator {
    current: Screen,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    /// Replace the current screen, returning `true` if it changed
    pub fn navigate(&mut self, target: Screen) -> bool {
        if self.current == target {
            return false;
        }
        self.current = target;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigator_starts_at_home() {
        let nav = Navigator::new();
        assert_eq!(nav.current(), Screen::Home);
    }

    #[test]
    fn test_navigate_replaces_screen() {
        let mut nav = Navigator::new();
        assert!(nav.navigate(Screen::Register));
        assert_eq!(nav.current(), Screen::Register);

        assert!(nav.navigate(Screen::Login));
        assert_eq!(nav.current(), Screen::Login);

        assert!(nav.navigate(Screen::Home));
        assert_eq!(nav.current(), Screen::Home);
    }

    #[test]
    fn test_navigate_to_current_is_noop() {
        let mut nav = Navigator::new();
        nav.navigate(Screen::Login);
        assert!(!nav.navigate(Screen::Login));
        assert_eq!(nav.current(), Screen::Login);
    }
}
