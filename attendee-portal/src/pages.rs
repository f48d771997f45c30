use actix_session::Session;
use actix_web::{web, HttpResponse};
use leptos::*;

use crate::{
    components::{AttendeesPage, LoginPage, RegisterPage},
    session::{extract_session, SessionStorage},
    utils,
    views::AttendeesView,
    Page, PortalState,
};

async fn index(state: web::Data<PortalState>, session: Session) -> HttpResponse {
    let (user, token) = match extract_session(&session) {
        Ok(inner) => inner,
        Err(error) => return error.to_response(),
    };
    let api = state.api.authorize(token);
    let mut attendees = AttendeesView::new(user);
    attendees.load(&api).await;
    let mut html = leptos::ssr::render_to_string(move |cx| {
        view! { cx, <AttendeesPage state=attendees/> }
    });
    utils::html!(html)
}

async fn login(session: Session) -> HttpResponse {
    if extract_session(&session).is_ok() {
        return utils::redirect!(Page::Home.path());
    }
    let mut html = leptos::ssr::render_to_string(|cx| view! { cx, <LoginPage/> });
    utils::html!(html)
}

async fn register() -> HttpResponse {
    let mut html = leptos::ssr::render_to_string(|cx| view! { cx, <RegisterPage/> });
    utils::html!(html)
}

async fn logout_user(session: Option<Session>) -> HttpResponse {
    if let Some(session) = session {
        SessionStorage::clear(&session);
    }
    utils::redirect!(Page::Login.path())
}

async fn redirect_home() -> HttpResponse {
    utils::redirect!(Page::Home.path())
}

pub trait Pages {
    fn add_pages(self) -> Self;
}

impl<T> Pages for actix_web::App<T>
where
    T: actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Error = actix_web::error::Error,
        InitError = (),
    >,
{
    fn add_pages(self) -> Self {
        self.route(Page::Home.path(), web::get().to(index))
            .route("/index", web::get().to(redirect_home))
            .route(Page::Login.path(), web::get().to(login))
            .route(Page::Register.path(), web::get().to(register))
            .route("/logout", web::get().to(logout_user))
    }
}
