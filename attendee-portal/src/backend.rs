//! Client of the attendees backend REST API. Calls that do not need a user session go through
//! [UnauthorizedApi], calls on behalf of a logged in organizer go through [AuthorizedApi] which
//! attaches the organizer's bearer token to every request.

use async_trait::async_trait;
use attendee_portal_common::{
    Attendee, AttendeeId, AttendeesBody, CreateAttendeeRequest, Credentials, LoginResponse,
    RegisterRequest, UserId,
};
use reqwest::{header::AUTHORIZATION, Client, RequestBuilder, Response, StatusCode, Url};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures of a backend call. The [Display][std::fmt::Display] text of each variant is the
/// message shown to the organizer.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Incorrect email or password")]
    Unauthorized,
    #[error("User already exists")]
    AlreadyExists,
    #[error("Something went wrong")]
    Status(StatusCode),
    #[error("{0}")]
    Fetch(reqwest::Error),
    #[error("{0}")]
    Body(reqwest::Error),
    #[error("Invalid backend URL. {0}")]
    Url(String),
}

/// Backend endpoints that assign a meaning to specific non-success status codes
#[derive(Debug, Clone, Copy)]
enum Endpoint {
    Login,
    Register,
    CreateAttendee,
    DeleteAttendee,
}

impl Endpoint {
    fn status_error(self, status: StatusCode) -> Error {
        match (self, status) {
            (Self::Login, StatusCode::UNAUTHORIZED) => Error::Unauthorized,
            (Self::Register | Self::CreateAttendee, StatusCode::BAD_REQUEST) => {
                Error::AlreadyExists
            }
            _ => Error::Status(status),
        }
    }
}

/// Append `segments` to the path of `base`, percent-encoding each segment so that ids cannot
/// escape into the query or fragment of the URL
fn endpoint_url(base: &str, segments: &[&str]) -> Result<Url> {
    let mut url = Url::parse(base).map_err(|error| Error::Url(format!("{base}. {error}")))?;
    url.path_segments_mut()
        .map_err(|_| Error::Url(format!("{base} cannot be a base")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

fn check_status(response: Response, endpoint: Endpoint) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    log::warn!("{endpoint:?} request to {} failed with {status}", response.url());
    Err(endpoint.status_error(status))
}

/// Operations available without a session
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Exchange the `credentials` for the organizer's identity and bearer token
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse>;
    /// Create a new organizer account. The response body is ignored.
    async fn register(&self, request: &RegisterRequest) -> Result<()>;
}

/// Operations on the attendees of the logged in organizer
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AttendeesBackend: Send + Sync {
    /// Fetch the attendees of `user_id`. The status code of the response is not consulted, only
    /// the shape of the body.
    async fn attendees(&self, user_id: &UserId) -> Result<AttendeesBody>;
    /// Create an attendee, returning the organizer's updated attendee sequence
    async fn create_attendee(&self, request: &CreateAttendeeRequest) -> Result<Vec<Attendee>>;
    /// Delete the attendee `id`, returning the organizer's updated attendee sequence
    async fn delete_attendee(&self, id: &AttendeeId) -> Result<Vec<Attendee>>;
}

#[derive(Clone)]
pub struct UnauthorizedApi {
    client: Client,
    url: String,
}

impl UnauthorizedApi {
    pub fn new<S: Into<String>>(client: Client, url: S) -> Self {
        let mut url = url.into();
        while url.ends_with('/') {
            url.pop();
        }
        Self { client, url }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Create a client that performs requests on behalf of the owner of `token`
    pub fn authorize(&self, token: String) -> AuthorizedApi {
        AuthorizedApi {
            client: self.client.clone(),
            url: self.url.clone(),
            token,
        }
    }
}

#[async_trait]
impl AuthBackend for UnauthorizedApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse> {
        let url = endpoint_url(&self.url, &["login"])?;
        let response = self
            .client
            .post(url)
            .json(credentials)
            .send()
            .await
            .map_err(Error::Fetch)?;
        let response = check_status(response, Endpoint::Login)?;
        response.json().await.map_err(Error::Body)
    }

    async fn register(&self, request: &RegisterRequest) -> Result<()> {
        let url = endpoint_url(&self.url, &["register"])?;
        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(Error::Fetch)?;
        check_status(response, Endpoint::Register)?;
        Ok(())
    }
}

#[derive(Clone)]
pub struct AuthorizedApi {
    client: Client,
    url: String,
    token: String,
}

impl AuthorizedApi {
    fn auth_header_value(&self) -> String {
        format!("Bearer {}", self.token)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        request
            .header(AUTHORIZATION, self.auth_header_value())
            .send()
            .await
            .map_err(Error::Fetch)
    }
}

#[async_trait]
impl AttendeesBackend for AuthorizedApi {
    async fn attendees(&self, user_id: &UserId) -> Result<AttendeesBody> {
        let url = endpoint_url(&self.url, &["attendees"])?;
        let request = self
            .client
            .get(url)
            .query(&[("userId", user_id.to_string())]);
        let response = self.send(request).await?;
        log::debug!("Attendees of {user_id} answered with {}", response.status());
        response.json().await.map_err(Error::Body)
    }

    async fn create_attendee(&self, request: &CreateAttendeeRequest) -> Result<Vec<Attendee>> {
        let url = endpoint_url(&self.url, &["attendees"])?;
        let response = self.send(self.client.post(url).json(request)).await?;
        let response = check_status(response, Endpoint::CreateAttendee)?;
        response.json().await.map_err(Error::Body)
    }

    async fn delete_attendee(&self, id: &AttendeeId) -> Result<Vec<Attendee>> {
        let segment = id.to_string();
        let url = endpoint_url(&self.url, &["attendees", segment.as_str()])?;
        let response = self.send(self.client.delete(url)).await?;
        let response = check_status(response, Endpoint::DeleteAttendee)?;
        response.json().await.map_err(Error::Body)
    }
}
