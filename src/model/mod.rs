//! Model layer - state and rules independent of rendering
//!
//! - `Screen` / `Navigator` - which view is active
//! - `Schema` and friends - declarative field validation
//! - `RegisterFormData` / `LoginFormData` - typed form payloads
//! - `ModalStack` - modal overlay management

pub mod form;
pub mod modal;
pub mod screen;
pub mod validation;

pub use form::{FieldKind, FieldSpec, FormData, LoginFormData, RegisterFormData, Submission};
pub use modal::{Modal, ModalStack};
pub use screen::{Navigator, Screen};
pub use validation::{FieldValue, FormValues, ValidationErrors, ValidationMode};
