mod attendees;
mod base;
mod error;
mod login;
mod nav;
mod register;

pub use attendees::{AttendeeEditor, AttendeesError, AttendeesList, AttendeesPage};
pub use base::BasePage;
pub use error::FormError;
pub use login::{LoginPage, LOGIN_ERROR_ID};
pub use register::{RegisterPage, REGISTER_ERROR_ID};
