use attendee_portal_common::{
    Attendee, AttendeeId, AttendeesBody, CreateAttendeeRequest, UserSession,
};
use serde::Deserialize;

use super::validation::{self, ValidationError};
use crate::backend::{AttendeesBackend, Error};

/// Prompt the organizer must accept before an attendee is deleted
pub const DELETE_PROMPT: &str = "Do you really want to delete this attendee?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Initial fetch of the attendees has not completed yet. Pages are rendered after the fetch
    /// so this is the state of a view before its first render.
    Loading,
    Ready,
}

/// Result of a mutating operation on the view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The attendee sequence was replaced with the backend's answer
    Updated,
    /// Validation or the backend call failed, the error message is set
    Failed,
    /// The organizer declined the confirmation, nothing was sent
    Skipped,
}

/// Fields of the new attendee form as posted by the browser
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AttendeeForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub surname: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

impl AttendeeForm {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::required("Name", &self.name)?;
        validation::required("Surname", &self.surname)?;
        validation::email("Email", &self.email)?;
        validation::required("Phone", &self.phone)
    }
}

/// Interactive yes/no question asked before a destructive operation
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Attendees of the logged in organizer. The held sequence is only ever replaced by a sequence
/// the backend returned.
#[derive(Debug, Clone)]
pub struct AttendeesView {
    user: UserSession,
    phase: Phase,
    attendees: Vec<Attendee>,
    form: AttendeeForm,
    error: Option<String>,
}

impl AttendeesView {
    pub fn new(user: UserSession) -> Self {
        Self {
            user,
            phase: Phase::Loading,
            attendees: Vec::new(),
            form: AttendeeForm::default(),
            error: None,
        }
    }

    pub const fn user(&self) -> &UserSession {
        &self.user
    }

    pub const fn phase(&self) -> Phase {
        self.phase
    }

    pub fn attendees(&self) -> &[Attendee] {
        &self.attendees
    }

    pub const fn form(&self) -> &AttendeeForm {
        &self.form
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Fetch the organizer's attendees. Error shaped or unreadable bodies leave the sequence as
    /// is without a message, only a failure to reach the backend is shown. The view is ready
    /// afterwards in every case.
    pub async fn load<A>(&mut self, api: &A)
    where
        A: AttendeesBackend + ?Sized,
    {
        match api.attendees(&self.user.id).await {
            Ok(AttendeesBody::Attendees(attendees)) => self.attendees = attendees,
            Ok(AttendeesBody::Error { error }) => {
                log::warn!("Attendees of {} not available. {error}", self.user.id);
            }
            Err(Error::Fetch(error)) => {
                log::error!("Could not fetch attendees of {}. {error}", self.user.id);
                self.error = Some(error.to_string());
            }
            Err(error) => {
                log::warn!("Attendees of {} not readable. {error}", self.user.id);
            }
        }
        self.phase = Phase::Ready;
    }

    /// Create a new attendee from `form`. The submitted values are kept when the attendee could
    /// not be created and cleared otherwise.
    pub async fn add<A>(&mut self, api: &A, form: AttendeeForm) -> Outcome
    where
        A: AttendeesBackend + ?Sized,
    {
        self.form = form;
        self.phase = Phase::Ready;
        if let Err(error) = self.form.validate() {
            self.error = Some(error.to_string());
            return Outcome::Failed;
        }
        let request = CreateAttendeeRequest {
            name: self.form.name.clone(),
            surname: self.form.surname.clone(),
            email: self.form.email.clone(),
            phone: self.form.phone.clone(),
            user_id: self.user.id.clone(),
        };
        match api.create_attendee(&request).await {
            Ok(attendees) => {
                log::info!("Organizer {} added attendee {}", self.user.id, request.email);
                self.attendees = attendees;
                self.form = AttendeeForm::default();
                self.error = None;
                Outcome::Updated
            }
            Err(error) => {
                log::warn!("Could not add attendee for {}. {error}", self.user.id);
                self.error = Some(error.to_string());
                Outcome::Failed
            }
        }
    }

    /// Delete the attendee `id` once `confirm` accepted [DELETE_PROMPT]
    pub async fn delete<A, C>(&mut self, api: &A, id: &AttendeeId, confirm: &C) -> Outcome
    where
        A: AttendeesBackend + ?Sized,
        C: Confirm + ?Sized,
    {
        if !confirm.confirm(DELETE_PROMPT) {
            return Outcome::Skipped;
        }
        self.phase = Phase::Ready;
        match api.delete_attendee(id).await {
            Ok(attendees) => {
                log::info!("Organizer {} deleted attendee {id}", self.user.id);
                self.attendees = attendees;
                self.error = None;
                Outcome::Updated
            }
            Err(error) => {
                log::warn!("Could not delete attendee {id}. {error}");
                self.error = Some(error.to_string());
                Outcome::Failed
            }
        }
    }
}
