//! Modal stack for managing overlays
//!
//! Only the top modal receives input; modals are drawn bottom to top.

use super::form::Submission;

/// Represents a modal overlay that can be displayed on top of the active screen
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    /// Quit confirmation dialog
    QuitConfirm,
    /// Result of a successful form submission
    Submitted(Submission),
}

/// A stack of modal overlays
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    /// Get a reference to the top modal without removing it
    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

}

#[cfg(test)]
impl ModalStack {
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Modal> {
        self.stack.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::form::LoginFormData;

    #[test]
    fn test_modal_stack_push_pop() {
        let mut stack = ModalStack::new();
        assert!(stack.top().is_none());

        let submitted = Modal::Submitted(Submission::Login(LoginFormData::default()));
        stack.push(submitted.clone());
        stack.push(Modal::QuitConfirm);

        assert_eq!(stack.pop(), Some(Modal::QuitConfirm));
        assert_eq!(stack.top(), Some(&submitted));
        assert_eq!(stack.pop(), Some(submitted));
        assert!(stack.is_empty());
    }
}
