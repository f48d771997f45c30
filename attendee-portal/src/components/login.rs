use leptos::*;

use super::BasePage;

/// Id of the element receiving the login error fragment
pub const LOGIN_ERROR_ID: &str = "loginError";

#[component]
pub fn LoginPage(cx: Scope) -> impl IntoView {
    view! { cx,
        <BasePage title="Login">
            <div class="auth-container mx-auto">
                <form id="loginForm" class="auth-form" hx-post="/api/login"
                    hx-target="#loginError" hx-swap="innerHTML" hx-sync="this:drop"
                    hx-disabled-elt="find button">
                    <h1>"Organizers login"</h1>
                    <div class="form-group mb-2">
                        <input class="form-control" type="text" id="email" name="email"
                            placeholder="Email" required />
                    </div>
                    <div class="form-group mb-2">
                        <input class="form-control" type="password" id="password" name="password"
                            placeholder="Password" required />
                    </div>
                    <div id=LOGIN_ERROR_ID></div>
                    <button class="btn btn-primary" type="submit">"Login"</button>
                    <a class="auth-link" href="/register">"Register"</a>
                </form>
            </div>
        </BasePage>
    }
}
