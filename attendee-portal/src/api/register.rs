use actix_web::{web, HttpResponse};
use leptos::*;

use super::{submission_in_flight, HtmxResponseBuilder};
use crate::{
    components::FormError,
    submissions::Operation,
    views::{RegisterForm, RegisterView},
    PortalState,
};

pub fn service() -> actix_web::Resource {
    web::resource("/register").route(web::post().to(register))
}

async fn register(state: web::Data<PortalState>, form: web::Form<RegisterForm>) -> HttpResponse {
    let form = form.into_inner();
    let Some(_submission) = state
        .submissions
        .begin(Operation::Register, form.email.trim())
    else {
        return submission_in_flight();
    };
    let mut view = RegisterView::new(form);
    if let Some(page) = view.submit(&state.api).await {
        return HtmxResponseBuilder::new().redirect(page.path()).finish();
    }
    let message = view.error().map(str::to_owned);
    HtmxResponseBuilder::new().html_chunk(move |cx| view! { cx, <FormError message=message/> })
}
