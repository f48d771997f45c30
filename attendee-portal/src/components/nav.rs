use leptos::*;

#[component]
fn user_context(cx: Scope, email: String) -> impl IntoView {
    if email.is_empty() {
        return view! { cx,
            <li class="nav-item">
                <a class="nav-link" href="/login">"Login"</a>
            </li>
        };
    }
    view! { cx,
        <li class="nav-item d-flex align-items-center">
            <span class="navbar-text me-3">{email}</span>
            <a class="nav-link" href="/logout">"Logout"</a>
        </li>
    }
}

/// Top bar of every page. An empty `email` means nobody is logged in.
#[component]
pub fn nav(cx: Scope, email: String) -> impl IntoView {
    view! { cx,
        <nav class="navbar navbar-expand-lg bg-body-tertiary mb-3" id="mainNavBar">
            <div class="container-fluid">
                <a class="navbar-brand" href="/">"AttendeeManager"</a>
                <ul class="navbar-nav ms-auto my-2 my-lg-0">
                    <UserContext email=email/>
                </ul>
            </div>
        </nav>
    }
}
