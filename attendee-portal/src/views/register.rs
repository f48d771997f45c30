use attendee_portal_common::RegisterRequest;
use serde::Deserialize;

use super::validation::{self, ValidationError};
use crate::{backend::AuthBackend, Page};

/// Fields of the registration form as posted by the browser
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub surname: String,
    #[serde(default)]
    pub password: String,
}

impl RegisterForm {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::email("Email", &self.email)?;
        validation::required("Name", &self.name)?;
        validation::required("Surname", &self.surname)?;
        validation::required("Password", &self.password)
    }

    fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            email: self.email.clone(),
            name: self.name.clone(),
            surname: self.surname.clone(),
            password: self.password.clone(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RegisterView {
    form: RegisterForm,
    error: Option<String>,
}

impl RegisterView {
    pub fn new(form: RegisterForm) -> Self {
        Self { form, error: None }
    }

    pub const fn form(&self) -> &RegisterForm {
        &self.form
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Create the organizer account described by the form. Returns the login page when the
    /// backend accepted the account.
    pub async fn submit<A>(&mut self, api: &A) -> Option<Page>
    where
        A: AuthBackend + ?Sized,
    {
        if let Err(error) = self.form.validate() {
            self.error = Some(error.to_string());
            return None;
        }
        let request = self.form.to_request();
        if let Err(error) = api.register(&request).await {
            log::warn!("Registration failed for {}. {error}", request.email);
            self.error = Some(error.to_string());
            return None;
        }
        log::info!("Registered organizer {}", request.email);
        self.error = None;
        Some(Page::Login)
    }
}
