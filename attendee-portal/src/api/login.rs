use actix_session::Session;
use actix_web::{web, HttpResponse};
use leptos::*;

use super::{submission_in_flight, HtmxResponseBuilder};
use crate::{
    components::FormError,
    submissions::Operation,
    views::{LoginForm, LoginView},
    PortalState,
};

pub fn service() -> actix_web::Resource {
    web::resource("/login").route(web::post().to(login))
}

async fn login(
    state: web::Data<PortalState>,
    session: Session,
    form: web::Form<LoginForm>,
) -> HttpResponse {
    let form = form.into_inner();
    let Some(_submission) = state.submissions.begin(Operation::Login, form.email.trim()) else {
        return submission_in_flight();
    };
    let mut view = LoginView::new(form);
    if let Some(page) = view.submit(&state.api, &session).await {
        return HtmxResponseBuilder::new().redirect(page.path()).finish();
    }
    let message = view.error().map(str::to_owned);
    HtmxResponseBuilder::new().html_chunk(move |cx| view! { cx, <FormError message=message/> })
}
