//! Client side storage of the organizer's identity and bearer token. The portal keeps both in
//! the private session cookie of the browser, the views only see the [SessionStorage] capability
//! they are handed.

use actix_session::Session;
use attendee_portal_common::UserSession;

use crate::PortalError;

/// Key holding the bearer token returned by the backend at login
pub const TOKEN_SESSION_KEY: &str = "am_token";
/// Key holding the [UserSession] of the logged in organizer
pub const USER_SESSION_KEY: &str = "am_user";

pub trait SessionStorage {
    fn write_token(&self, token: &str) -> Result<(), PortalError>;
    fn token(&self) -> Result<Option<String>, PortalError>;
    fn publish_user(&self, user: &UserSession) -> Result<(), PortalError>;
    fn user(&self) -> Result<Option<UserSession>, PortalError>;
    /// Forget the identity and the token
    fn clear(&self);
}

impl SessionStorage for Session {
    fn write_token(&self, token: &str) -> Result<(), PortalError> {
        self.insert(TOKEN_SESSION_KEY, token)
            .map_err(|e| PortalError::Session(format!("Could not store token. {e}")))
    }

    fn token(&self) -> Result<Option<String>, PortalError> {
        self.get(TOKEN_SESSION_KEY)
            .map_err(|e| PortalError::Session(format!("Could not read token. {e}")))
    }

    fn publish_user(&self, user: &UserSession) -> Result<(), PortalError> {
        self.insert(USER_SESSION_KEY, user)
            .map_err(|e| PortalError::Session(format!("Could not store user. {e}")))
    }

    fn user(&self) -> Result<Option<UserSession>, PortalError> {
        self.get(USER_SESSION_KEY)
            .map_err(|e| PortalError::Session(format!("Could not read user. {e}")))
    }

    fn clear(&self) {
        self.purge();
    }
}

/// Extract the logged in organizer and their bearer token from `storage`.
/// # Errors
/// Returns [PortalError::InvalidUser] if either the identity or the token is missing
pub fn extract_session<S>(storage: &S) -> Result<(UserSession, String), PortalError>
where
    S: SessionStorage + ?Sized,
{
    match (storage.user()?, storage.token()?) {
        (Some(user), Some(token)) => Ok((user, token)),
        _ => Err(PortalError::InvalidUser),
    }
}

#[cfg(test)]
pub(crate) mod test {
    use std::cell::RefCell;

    use attendee_portal_common::{UserId, UserSession};

    use super::{extract_session, SessionStorage};
    use crate::PortalError;

    /// In memory [SessionStorage] standing in for the browser cookie
    #[derive(Default)]
    pub(crate) struct MemoryStorage {
        pub(crate) token: RefCell<Option<String>>,
        pub(crate) user: RefCell<Option<UserSession>>,
    }

    impl MemoryStorage {
        pub(crate) fn logged_in(user: UserSession, token: &str) -> Self {
            Self {
                token: RefCell::new(Some(token.to_owned())),
                user: RefCell::new(Some(user)),
            }
        }
    }

    impl SessionStorage for MemoryStorage {
        fn write_token(&self, token: &str) -> Result<(), PortalError> {
            *self.token.borrow_mut() = Some(token.to_owned());
            Ok(())
        }

        fn token(&self) -> Result<Option<String>, PortalError> {
            Ok(self.token.borrow().clone())
        }

        fn publish_user(&self, user: &UserSession) -> Result<(), PortalError> {
            *self.user.borrow_mut() = Some(user.clone());
            Ok(())
        }

        fn user(&self) -> Result<Option<UserSession>, PortalError> {
            Ok(self.user.borrow().clone())
        }

        fn clear(&self) {
            self.token.borrow_mut().take();
            self.user.borrow_mut().take();
        }
    }

    fn organizer() -> UserSession {
        UserSession {
            id: UserId::from("u1"),
            email: "a@b.com".to_owned(),
        }
    }

    #[test]
    fn extract_session_should_return_user_and_token() {
        let storage = MemoryStorage::logged_in(organizer(), "T");

        let (user, token) = extract_session(&storage).unwrap();

        assert_eq!(user, organizer());
        assert_eq!(token, "T");
    }

    #[test]
    fn extract_session_should_fail_without_token() {
        let storage = MemoryStorage::default();
        storage.publish_user(&organizer()).unwrap();

        let result = extract_session(&storage);

        assert!(matches!(result, Err(PortalError::InvalidUser)));
    }

    #[test]
    fn clear_should_remove_identity() {
        let storage = MemoryStorage::logged_in(organizer(), "T");

        storage.clear();

        assert!(matches!(extract_session(&storage), Err(PortalError::InvalidUser)));
    }
}
