use leptos::*;

/// Inline error message of a form, renders nothing without a message
#[component]
pub fn FormError(cx: Scope, message: Option<String>) -> impl IntoView {
    message.map(|message| {
        view! { cx,
            <div class="form-error text-danger text-center" role="alert">{message}</div>
        }
    })
}
