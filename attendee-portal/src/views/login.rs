use attendee_portal_common::Credentials;
use serde::Deserialize;

use super::{validation, SOMETHING_WENT_WRONG};
use crate::{backend::AuthBackend, session::SessionStorage, Page};

/// Fields of the login form as posted by the browser
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl LoginForm {
    fn validate(&self) -> Result<(), validation::ValidationError> {
        validation::required("Email", &self.email)?;
        validation::required("Password", &self.password)
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoginView {
    form: LoginForm,
    error: Option<String>,
}

impl LoginView {
    pub fn new(form: LoginForm) -> Self {
        Self { form, error: None }
    }

    pub const fn form(&self) -> &LoginForm {
        &self.form
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Exchange the form's credentials for a session. On success the token and identity are
    /// written to `storage` and the page to navigate to is returned. On failure the form is kept,
    /// the error message is set and `storage` is left untouched.
    pub async fn submit<A, S>(&mut self, api: &A, storage: &S) -> Option<Page>
    where
        A: AuthBackend + ?Sized,
        S: SessionStorage + ?Sized,
    {
        if let Err(error) = self.form.validate() {
            self.error = Some(error.to_string());
            return None;
        }
        let credentials = Credentials {
            email: self.form.email.clone(),
            password: self.form.password.clone(),
        };
        let response = match api.login(&credentials).await {
            Ok(inner) => inner,
            Err(error) => {
                log::warn!("Login failed for {}. {error}", credentials.email);
                self.error = Some(error.to_string());
                return None;
            }
        };
        let (user, token) = response.into_parts();
        let stored = storage
            .write_token(&token)
            .and_then(|_| storage.publish_user(&user));
        if let Err(error) = stored {
            log::error!("{error}");
            storage.clear();
            self.error = Some(SOMETHING_WENT_WRONG.to_owned());
            return None;
        }
        log::info!("Organizer {} logged in as {}", user.id, user.email);
        self.error = None;
        Some(Page::Home)
    }
}
