//! Account registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::net::types::RegisterRequest;
use crate::state::auth::AuthState;
use crate::util::form::{MIN_PASSWORD_LEN, is_plausible_email, non_blank};

/// Check the registration form and build the request payload.
///
/// # Errors
///
/// Returns the first problem found, in field order.
pub fn validate_registration(name: &str, email: &str, password: &str, confirm: &str) -> Result<RegisterRequest, String> {
    let Some(name) = non_blank(name) else {
        return Err("Enter your name.".to_owned());
    };
    let email = email.trim();
    if !is_plausible_email(email) {
        return Err("Enter a valid email address.".to_owned());
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!("Password must be at least {MIN_PASSWORD_LEN} characters."));
    }
    if password != confirm {
        return Err("Passwords do not match.".to_owned());
    }
    Ok(RegisterRequest { name, email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_registration(&name.get(), &email.get(), &password.get(), &confirm.get()) {
            Ok(request) => request,
            Err(e) => {
                info.set(e);
                return;
            }
        };
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::register(&request).await {
                Ok(user) => {
                    auth.update(|a| a.resolve(Some(user)));
                    crate::util::nav::hard_redirect("/");
                }
                Err(e) => {
                    info.set(e);
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (request, auth);
    };

    let field = move |label: &'static str, kind: &'static str, autocomplete: &'static str, value: RwSignal<String>| {
        view! {
            <label class="login-label">
                <span>{label}</span>
                <input
                    class="login-input"
                    type=kind
                    autocomplete=autocomplete
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Create your account"</h1>
                <form class="login-form" on:submit=on_submit>
                    {field("Name", "text", "name", name)}
                    {field("Email", "email", "email", email)}
                    {field("Password", "password", "new-password", password)}
                    {field("Confirm password", "password", "new-password", confirm)}
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Create account"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "Already registered? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
