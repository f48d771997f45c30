use actix_session::Session;
use actix_web::{web, HttpResponse};
use attendee_portal_common::AttendeeId;
use leptos::*;

use super::{submission_in_flight, HtmxResponseBuilder};
use crate::{
    components::{AttendeeEditor, AttendeesError, AttendeesList},
    session::extract_session,
    submissions::Operation,
    views::{AttendeeForm, AttendeesView, Outcome},
    PortalState,
};

pub fn service() -> actix_web::Scope {
    web::scope("/attendees")
        .route("", web::post().to(add_attendee))
        .route("/{id}", web::delete().to(delete_attendee))
}

async fn add_attendee(
    state: web::Data<PortalState>,
    session: Session,
    form: web::Form<AttendeeForm>,
) -> HttpResponse {
    let (user, token) = match extract_session(&session) {
        Ok(inner) => inner,
        Err(error) => return error.to_htmx_response(),
    };
    let Some(_submission) = state.submissions.begin(Operation::AddAttendee, &user.id) else {
        return submission_in_flight();
    };
    let api = state.api.authorize(token);
    let mut view = AttendeesView::new(user);
    let outcome = view.add(&api, form.into_inner()).await;

    let form = view.form().clone();
    let message = view.error().map(str::to_owned);
    match outcome {
        Outcome::Updated => {
            let attendees = view.attendees().to_vec();
            HtmxResponseBuilder::new().html_chunk(move |cx| {
                view! { cx,
                    <AttendeeEditor form=form/>
                    <AttendeesError message=None oob=true/>
                    <AttendeesList attendees=attendees oob=true/>
                }
            })
        }
        Outcome::Failed | Outcome::Skipped => HtmxResponseBuilder::new().html_chunk(move |cx| {
            view! { cx,
                <AttendeeEditor form=form/>
                <AttendeesError message=message oob=true/>
            }
        }),
    }
}

async fn delete_attendee(
    state: web::Data<PortalState>,
    session: Session,
    id: web::Path<String>,
) -> HttpResponse {
    let id = AttendeeId::from(id.as_str());
    let (user, token) = match extract_session(&session) {
        Ok(inner) => inner,
        Err(error) => return error.to_htmx_response(),
    };
    let subject = format!("{}/{id}", user.id);
    let Some(_submission) = state.submissions.begin(Operation::DeleteAttendee, subject) else {
        return submission_in_flight();
    };
    let api = state.api.authorize(token);
    let mut view = AttendeesView::new(user);
    // the browser asks the organizer before the request is sent
    let confirmed = |_: &str| true;
    let outcome = view.delete(&api, &id, &confirmed).await;

    match outcome {
        Outcome::Updated => {
            let attendees = view.attendees().to_vec();
            HtmxResponseBuilder::new().html_chunk(move |cx| {
                view! { cx,
                    <AttendeesList attendees=attendees oob=false/>
                    <AttendeesError message=None oob=true/>
                }
            })
        }
        Outcome::Failed => {
            let message = view.error().map(str::to_owned);
            HtmxResponseBuilder::new()
                .target("#attendeesError")
                .swap("outerHTML")
                .html_chunk(move |cx| {
                    view! { cx, <AttendeesError message=message oob=false/> }
                })
        }
        Outcome::Skipped => HttpResponse::NoContent().finish(),
    }
}
