#![warn(clippy::cloned_instead_of_copied)]
#![warn(clippy::expect_used)]
#![warn(clippy::manual_let_else)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::needless_pass_by_value)]
#![warn(clippy::uninlined_format_args)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::use_self)]

//! Server rendered portal for event organizers to log in, register and manage their attendees.
//! Pages are rendered with leptos, interactions are sent through htmx to the fragment endpoints
//! under `/api` and every piece of data is fetched from the attendees backend API.

pub mod api;
pub mod backend;
pub mod components;
pub mod config;
pub mod pages;
pub mod session;
pub mod submissions;
pub mod views;

mod utils;

use actix_web::HttpResponse;
use thiserror::Error;

use crate::{backend::UnauthorizedApi, submissions::Submissions};

/// Application data shared by every worker of the portal
#[derive(Clone)]
pub struct PortalState {
    /// Backend client used for all unauthenticated calls. Authenticated clients are derived from
    /// it per request using the token found in the session.
    pub api: UnauthorizedApi,
    /// Registry of submissions that currently have a backend request in flight
    pub submissions: Submissions,
}

impl PortalState {
    pub fn new(api: UnauthorizedApi) -> Self {
        Self {
            api,
            submissions: Submissions::default(),
        }
    }
}

/// Navigable pages of the portal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Login,
    Register,
}

impl Page {
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Register => "/register",
        }
    }
}

/// Request level failures of the portal
#[derive(Debug, Error)]
pub enum PortalError {
    #[error("User is not authenticated")]
    InvalidUser,
    #[error("Session storage error. {0}")]
    Session(String),
}

impl PortalError {
    /// Convert the error into a response for a full page request
    pub fn to_response(&self) -> HttpResponse {
        match self {
            Self::InvalidUser => utils::redirect!(Page::Login.path()),
            Self::Session(_) => {
                log::error!("{self}");
                utils::internal_server_error!()
            }
        }
    }

    /// Convert the error into a response for an htmx fragment request
    pub fn to_htmx_response(&self) -> HttpResponse {
        match self {
            Self::InvalidUser => utils::redirect_htmx!(Page::Login.path()),
            Self::Session(_) => {
                log::error!("{self}");
                utils::internal_server_error!()
            }
        }
    }
}
