use leptos::*;

use super::BasePage;

/// Id of the element receiving the registration error fragment
pub const REGISTER_ERROR_ID: &str = "registerError";

#[component]
pub fn RegisterPage(cx: Scope) -> impl IntoView {
    view! { cx,
        <BasePage title="Register">
            <div class="auth-container mx-auto">
                <form id="registerForm" class="auth-form" hx-post="/api/register"
                    hx-target="#registerError" hx-swap="innerHTML" hx-sync="this:drop"
                    hx-disabled-elt="find button">
                    <h1>"Organizers registration"</h1>
                    <div class="form-group mb-2">
                        <input class="form-control" type="email" id="email" name="email"
                            placeholder="Email" required />
                    </div>
                    <div class="form-group mb-2">
                        <input class="form-control" type="text" id="name" name="name"
                            placeholder="Name" required />
                    </div>
                    <div class="form-group mb-2">
                        <input class="form-control" type="text" id="surname" name="surname"
                            placeholder="Surname" required />
                    </div>
                    <div class="form-group mb-2">
                        <input class="form-control" type="password" id="password" name="password"
                            placeholder="Password" required />
                    </div>
                    <div id=REGISTER_ERROR_ID></div>
                    <button class="btn btn-primary" type="submit">"Register"</button>
                    <a class="auth-link" href="/login">"Login"</a>
                </form>
            </div>
        </BasePage>
    }
}
