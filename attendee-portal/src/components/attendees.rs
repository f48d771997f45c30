use attendee_portal_common::Attendee;
use leptos::*;

use super::{BasePage, FormError};
use crate::views::{AttendeeForm, AttendeesView, Phase, DELETE_PROMPT};

/// Form to add a new attendee. It replaces itself with the response of each submission.
#[component]
pub fn AttendeeEditor(cx: Scope, form: AttendeeForm) -> impl IntoView {
    view! { cx,
        <form id="attendeeForm" class="attendee-form" hx-post="/api/attendees" hx-target="this"
            hx-swap="outerHTML" hx-sync="this:drop" hx-disabled-elt="find button">
            <div class="form-group mb-2">
                <input class="form-control" type="text" name="name" placeholder="Name"
                    value=form.name required />
            </div>
            <div class="form-group mb-2">
                <input class="form-control" type="text" name="surname" placeholder="Surname"
                    value=form.surname required />
            </div>
            <div class="form-group mb-2">
                <input class="form-control" type="email" name="email" placeholder="Email"
                    value=form.email required />
            </div>
            <div class="form-group mb-2">
                <input class="form-control" type="text" name="phone" placeholder="Phone"
                    value=form.phone required />
            </div>
            <button class="btn btn-primary" type="submit">"Add"</button>
        </form>
    }
}

/// Error region of the attendees page. When `oob` is set the fragment is swapped out of band
/// next to the main response.
#[component]
pub fn AttendeesError(cx: Scope, message: Option<String>, oob: bool) -> impl IntoView {
    view! { cx,
        <div id="attendeesError" hx-swap-oob=oob.then_some("true")>
            <FormError message=message/>
        </div>
    }
}

#[component]
fn AttendeeItem(cx: Scope, attendee: Attendee) -> impl IntoView {
    let delete_url = format!(
        "/api/attendees/{}",
        urlencoding::encode(&attendee.id.to_string())
    );
    view! { cx,
        <li class="attendee-row">
            <span class="attendee-field">{format!("Name: {}", attendee.name)}</span>
            <span class="attendee-field">{format!("Surname: {}", attendee.surname)}</span>
            <span class="attendee-field">{format!("Email: {}", attendee.email)}</span>
            <span class="attendee-field">{format!("Phone: {}", attendee.phone)}</span>
            <button type="button" class="btn btn-outline-danger attendee-delete"
                hx-delete=delete_url hx-confirm=DELETE_PROMPT hx-target="#attendeesList"
                hx-swap="outerHTML" hx-sync="this:drop" hx-disabled-elt="this">
                "DELETE"
            </button>
        </li>
    }
}

#[component]
pub fn AttendeesList(cx: Scope, attendees: Vec<Attendee>, oob: bool) -> impl IntoView {
    let rows = if attendees.is_empty() {
        view! { cx, <li class="attendees-empty">"No attendees yet"</li> }.into_view(cx)
    } else {
        attendees
            .into_iter()
            .map(|attendee| view! { cx, <AttendeeItem attendee=attendee/> })
            .collect::<Vec<_>>()
            .into_view(cx)
    };
    view! { cx,
        <div id="attendeesList" hx-swap-oob=oob.then_some("true")>
            <h2>"Attendees list:"</h2>
            <ul class="attendees-list">
                {rows}
            </ul>
        </div>
    }
}

#[component]
pub fn AttendeesPage(cx: Scope, state: AttendeesView) -> impl IntoView {
    let content = match state.phase() {
        Phase::Loading => view! { cx, <div>"Loading..."</div> }.into_view(cx),
        Phase::Ready => view! { cx,
            <div class="attendees-container">
                <AttendeeEditor form=state.form().clone()/>
                <AttendeesError message=state.error().map(str::to_owned) oob=false/>
                <AttendeesList attendees=state.attendees().to_vec() oob=false/>
            </div>
        }
        .into_view(cx),
    };
    view! { cx,
        <BasePage title="Attendees" user=state.user().clone()>
            {content}
        </BasePage>
    }
}

#[cfg(test)]
mod test {
    use attendee_portal_common::{Attendee, AttendeeId};
    use leptos::*;

    use attendee_portal_common::{UserId, UserSession};

    use super::{AttendeeEditor, AttendeesList, AttendeesPage};
    use crate::views::{AttendeeForm, AttendeesView};

    fn attendee_with_id(id: AttendeeId) -> Attendee {
        Attendee {
            id,
            name: "Jane".to_owned(),
            surname: "Doe".to_owned(),
            email: "jane@doe.com".to_owned(),
            phone: "+37060000000".to_owned(),
        }
    }

    #[test]
    fn attendees_list_should_render_one_row_per_attendee() {
        let attendees = vec![Attendee {
            id: AttendeeId::from(1),
            name: "Jane".to_owned(),
            surname: "Doe".to_owned(),
            email: "jane@doe.com".to_owned(),
            phone: "+37060000000".to_owned(),
        }];

        let html = leptos::ssr::render_to_string(move |cx| {
            view! { cx, <AttendeesList attendees=attendees oob=false/> }
        });

        assert_eq!(html.matches("attendee-row").count(), 1);
        assert!(html.contains("Name: Jane"));
        assert!(html.contains("Surname: Doe"));
        assert!(html.contains("Email: jane@doe.com"));
        assert!(html.contains("Phone: +37060000000"));
        assert!(html.contains("/api/attendees/1"));
        assert!(html.contains("Do you really want to delete this attendee?"));
        assert!(!html.contains("hx-swap-oob"));
    }

    #[test]
    fn attendees_list_should_encode_delete_path() {
        let attendees = vec![attendee_with_id(AttendeeId::from("1#x?y/z"))];

        let html = leptos::ssr::render_to_string(move |cx| {
            view! { cx, <AttendeesList attendees=attendees oob=false/> }
        });

        assert!(html.contains("/api/attendees/1%23x%3Fy%2Fz"));
        assert!(!html.contains("/api/attendees/1#x"));
    }

    #[test]
    fn attendees_page_should_show_loading_before_first_load() {
        let state = AttendeesView::new(UserSession {
            id: UserId::from("u1"),
            email: "a@b.com".to_owned(),
        });

        let html = leptos::ssr::render_to_string(move |cx| {
            view! { cx, <AttendeesPage state=state/> }
        });

        assert!(html.contains("Loading..."));
        assert!(!html.contains("attendeeForm"));
    }

    #[test]
    fn attendees_list_should_render_placeholder_when_empty() {
        let html = leptos::ssr::render_to_string(|cx| {
            view! { cx, <AttendeesList attendees=Vec::new() oob=true/> }
        });

        assert!(!html.contains("attendee-row"));
        assert!(html.contains("attendees-empty"));
        assert!(html.contains("hx-swap-oob"));
    }

    #[test]
    fn attendee_editor_should_keep_submitted_values() {
        let form = AttendeeForm {
            name: "Jane".to_owned(),
            surname: "Doe".to_owned(),
            email: "jane@doe.com".to_owned(),
            phone: "+1".to_owned(),
        };

        let html = leptos::ssr::render_to_string(move |cx| {
            view! { cx, <AttendeeEditor form=form/> }
        });

        assert!(html.contains("value=\"Jane\""));
        assert!(html.contains("value=\"jane@doe.com\""));
    }
}
