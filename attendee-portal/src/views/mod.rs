//! State machines behind the portal's three screens. Each view owns its form fields and at most
//! one inline error message, and only ever replaces its data with what the backend returned.

pub mod attendees;
pub mod login;
pub mod register;
pub mod validation;

pub use attendees::{AttendeeForm, AttendeesView, Confirm, Outcome, Phase, DELETE_PROMPT};
pub use login::{LoginForm, LoginView};
pub use register::{RegisterForm, RegisterView};

/// Message shown when a failure has no more specific explanation for the organizer
pub const SOMETHING_WENT_WRONG: &str = "Something went wrong";
