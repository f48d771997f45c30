//! htmx fragment endpoints. Each handler performs at most one backend call and answers with the
//! HTML fragment, or the htmx headers, the browser needs to update the current page.

mod attendees;
mod login;
mod register;

use actix_web::{web, HttpResponse, HttpResponseBuilder};

struct HtmxResponseBuilder {
    response: HttpResponseBuilder,
}

impl HtmxResponseBuilder {
    fn new() -> Self {
        let mut response = HttpResponse::Ok();
        response.content_type(actix_web::http::header::ContentType::html());
        Self { response }
    }

    fn redirect<S>(&mut self, location: S) -> &mut Self
    where
        S: AsRef<str>,
    {
        self.response
            .insert_header(("HX-Redirect", location.as_ref()));
        self
    }

    fn target<S>(&mut self, target: S) -> &mut Self
    where
        S: AsRef<str>,
    {
        self.response
            .insert_header(("HX-Retarget", target.as_ref()));
        self
    }

    fn swap<S>(&mut self, swap: S) -> &mut Self
    where
        S: AsRef<str>,
    {
        self.response.insert_header(("HX-Reswap", swap.as_ref()));
        self
    }

    fn finish(&mut self) -> HttpResponse {
        self.response.finish()
    }

    fn html_chunk<F, IV>(&mut self, html: F) -> HttpResponse
    where
        F: FnOnce(leptos::Scope) -> IV + 'static,
        IV: leptos::IntoView,
    {
        let html = leptos::ssr::render_to_string(html);
        self.response.body(html)
    }
}

/// Response to a submission that is already waiting on the backend. htmx does not swap error
/// statuses so the page is left as is.
fn submission_in_flight() -> HttpResponse {
    HttpResponse::Conflict().finish()
}

pub fn service() -> actix_web::Scope {
    web::scope("/api")
        .service(login::service())
        .service(register::service())
        .service(attendees::service())
}
