//! Screens and dialogs
//!
//! The home screen, one generic form screen shared by registration and login,
//! and the two modal dialogs. Layout helpers live in `layout`.

pub mod form;
pub mod home;
pub mod layout;
pub mod quit_dialog;
pub mod submitted_dialog;

pub use form::{FormComponent, LOGIN_SCREEN, REGISTER_SCREEN};
pub use home::HomeComponent;
pub use quit_dialog::QuitDialog;
pub use submitted_dialog::SubmittedDialog;
