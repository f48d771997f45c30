use attendee_portal_common::UserSession;
use leptos::*;

use super::nav::Nav;

#[component]
pub fn BasePage(
    cx: Scope,
    title: &'static str,
    #[prop(optional)] user: Option<UserSession>,
    children: Children,
) -> impl IntoView {
    let email = user.map(|user| user.email).unwrap_or_default();
    view! { cx,
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="theme-color" content="#000000" />
                <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.min.css"
                    integrity="sha384-9ndCyUaIbzAi2FUVXJi0CjmCapSmO7SnpJef0486qhLnuZ2cdeRhO02iuK6FUUVM" crossorigin="anonymous" />
                <link rel="stylesheet" href="/assets/style.css" />
                <script src="https://unpkg.com/htmx.org@1.9.12"></script>
                <title>"AttendeeManager - "{title}</title>
            </head>
            <body class="p-3 m-0 border-0">
                <div class="container-fluid">
                    <Nav email=email/>
                    {children(cx)}
                </div>
            </body>
        </html>
    }
}
