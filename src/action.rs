//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use crate::model::{Screen, Submission};
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick when no event arrived
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Force quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Switch the active screen
    Navigate(Screen),
    /// Move focus to the next input or button
    FocusNext,
    /// Move focus to the previous input or button
    FocusPrev,
    /// Activate the focused button
    Activate,

    // ─────────────────────────────────────────────────────────────────────────
    // Form Input
    // ─────────────────────────────────────────────────────────────────────────
    /// Append a character to the focused text input
    Input(char),
    /// Remove the last character of the focused text input
    Backspace,
    /// Flip the focused checkbox
    ToggleCheckbox,
    /// Validate the whole form and submit if it has no errors
    Submit,
    /// A form passed validation
    Submitted(Submission),

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Close the current modal
    CloseModal,
    /// Confirm the current modal action
    ConfirmModal,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::Navigate(screen) => write!(f, "Navigate({})", screen),
            Action::FocusNext => write!(f, "FocusNext"),
            Action::FocusPrev => write!(f, "FocusPrev"),
            Action::Activate => write!(f, "Activate"),
            // Never echo typed characters, they may be part of a password
            Action::Input(_) => write!(f, "Input"),
            Action::Backspace => write!(f, "Backspace"),
            Action::ToggleCheckbox => write!(f, "ToggleCheckbox"),
            Action::Submit => write!(f, "Submit"),
            Action::Submitted(submission) => write!(f, "Submitted({})", submission.form_name()),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::ConfirmModal => write!(f, "ConfirmModal"),
        }
    }
}
